use crate::constants::env_vars;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    /// Directory used for the output file when no explicit path is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_output_dir: Option<String>,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

impl Config {
    /// Loads configuration from the default config file location.
    /// A missing config file is not an error; everything here is optional,
    /// so defaults apply. Environment variables override file values.
    ///
    /// # Environment Variables
    /// - `USERMINT_OUTPUT_DIR` - Override default output directory
    /// - `USERMINT_LOG_FILE` - Override log file path
    pub async fn load() -> Result<Self, AppError> {
        let config_path = Self::get_config_path();

        let mut config: Config = if Path::new(&config_path).exists() {
            let content = fs::read_to_string(&config_path).await?;
            toml::from_str(&content)?
        } else {
            Config::default()
        };

        if let Ok(output_dir) = std::env::var(env_vars::OUTPUT_DIR) {
            config.default_output_dir = Some(output_dir);
        }
        if let Ok(log_file) = std::env::var(env_vars::LOG_FILE) {
            config.log_file_path = Some(log_file);
        }

        Ok(config)
    }

    /// Saves the configuration to the default config file location,
    /// creating the config directory if it doesn't exist.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = Self::get_config_path();
        let config_dir = Path::new(&config_path)
            .parent()
            .ok_or_else(|| AppError::config_error("Invalid config path"))?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(&config_path).await?;
        file.write_all(content.as_bytes()).await?;

        Ok(())
    }

    /// Returns the platform-specific path for the config file.
    ///
    /// Uses the platform config directory (e.g., ~/.config on Linux) and
    /// falls back to the current directory if it is unavailable.
    pub fn get_config_path() -> String {
        dirs::config_dir()
            .unwrap_or_else(|| Path::new(".").to_path_buf())
            .join("usermint")
            .join("config.toml")
            .to_string_lossy()
            .to_string()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        dirs::config_dir()
            .unwrap_or_else(|| Path::new(".").to_path_buf())
            .join("usermint")
            .join("logs")
            .to_string_lossy()
            .to_string()
    }

    /// Prints the current configuration settings.
    pub async fn display() -> Result<(), AppError> {
        let config_path = Self::get_config_path();

        if Path::new(&config_path).exists() {
            let config = Config::load().await?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("Default Output Directory:");
            println!(
                "{}",
                config
                    .default_output_dir
                    .as_deref()
                    .unwrap_or("(not set, current directory)")
            );
            println!("Log File Path:");
            println!(
                "{}",
                config.log_file_path.as_deref().unwrap_or("(default)")
            );
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
            println!("Defaults apply: output to the current directory, logs to the default location.");
        }

        Ok(())
    }
}
