use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Input file not found: {path}")]
    InputNotFound { path: String },

    #[error("Failed to parse input file: {0}")]
    CsvParse(#[from] csv::Error),

    #[error("Column '{column}' not found. Available columns: {available}")]
    ColumnNotFound { column: String, available: String },

    #[error("Input file has no header row: {path}")]
    EmptyInput { path: String },

    #[error("Input has no columns to select a name from")]
    NoColumns,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create an input-not-found error
    pub fn input_not_found(path: impl Into<String>) -> Self {
        Self::InputNotFound { path: path.into() }
    }

    /// Create a column-not-found error listing the headers that were present
    pub fn column_not_found(column: impl Into<String>, headers: &[String]) -> Self {
        Self::ColumnNotFound {
            column: column.into(),
            available: headers.join(", "),
        }
    }

    /// Create an empty-input error
    pub fn empty_input(path: impl Into<String>) -> Self {
        Self::EmptyInput { path: path.into() }
    }
}
