use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Determines if the invocation only operates on configuration.
/// Config operations do not need an input file:
/// - --list-config prints the current settings
/// - --set-log-file / --clear-log-file update the stored log location
pub fn is_config_operation(args: &Args) -> bool {
    args.list_config || args.new_log_file_path.is_some() || args.clear_log_file_path
}

/// Username candidate generator for authorized security testing
///
/// Reads full names from a CSV export (one column holds the names), expands
/// each name into the username formats commonly seen in organizational
/// account-naming schemes, and writes the deduplicated list to a file.
///
/// Only use against targets you are authorized to test.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Input CSV file containing full names (one row per person).
    /// Required unless a configuration operation is requested.
    #[arg(short, long)]
    pub target: Option<String>,

    /// Output file path. Defaults to usernames.list in the current directory
    /// (or in the configured default output directory).
    #[arg(short, long, help_heading = "Output")]
    pub output: Option<String>,

    /// Header of the column containing the names. Auto-detected when not
    /// specified; falls back to the first column.
    #[arg(short, long)]
    pub column: Option<String>,

    /// Print each processed name with its candidate count.
    #[arg(short, long)]
    pub verbose: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// Specify a custom log file path for this run only.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
