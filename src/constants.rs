//! Application-wide constants and configuration values
//!
//! This module centralizes magic values so the column-detection heuristics
//! and default paths live in one place.

/// Default output file name, used when no explicit output path is given and
/// as the file name for permission-fallback locations.
pub const DEFAULT_OUTPUT_FILENAME: &str = "usernames.list";

/// Default log file name
pub const DEFAULT_LOG_FILENAME: &str = "usermint.log";

/// Column headers recognized during name-column auto-detection.
/// Matched case-insensitively against trimmed header cells.
pub const NAME_COLUMN_CANDIDATES: &[&str] =
    &["name", "full name", "fullname", "full_name", "employee", "user"];

/// Environment variable names for configuration overrides
pub mod env_vars {
    /// Override the default output directory
    pub const OUTPUT_DIR: &str = "USERMINT_OUTPUT_DIR";

    /// Override the log file path
    pub const LOG_FILE: &str = "USERMINT_LOG_FILE";
}
