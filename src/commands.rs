use crate::aggregator;
use crate::cli::{Args, is_config_operation};
use crate::config::Config;
use crate::constants::DEFAULT_OUTPUT_FILENAME;
use crate::error::AppError;
use crate::input;
use crate::output;
use std::path::{Path, PathBuf};
use tracing::info;

/// Validates command line argument combinations.
///
/// Returns an error if incompatible arguments are used together or if a
/// generation run is missing its input file.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.target.is_none() && !is_config_operation(args) {
        return Err(AppError::config_error(
            "An input file is required: pass -t/--target <FILE> (or use a configuration flag)",
        ));
    }
    Ok(())
}

/// Handles the --list-config command.
///
/// Displays current configuration settings.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--set-log-file, --clear-log-file).
///
/// Updates configuration based on the provided arguments and saves changes.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load().await.unwrap_or_default();

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Resolves the output path from the arguments and configuration.
///
/// Precedence: explicit -o/--output, then the configured default output
/// directory, then usernames.list in the current directory.
fn resolve_output_path(args: &Args, config: &Config) -> PathBuf {
    match &args.output {
        Some(output) => PathBuf::from(output),
        None => match &config.default_output_dir {
            Some(dir) => Path::new(dir).join(DEFAULT_OUTPUT_FILENAME),
            None => PathBuf::from(DEFAULT_OUTPUT_FILENAME),
        },
    }
}

/// Runs the generation pipeline: read names, expand, write the list.
pub async fn handle_generate_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let target = args
        .target
        .as_deref()
        .ok_or_else(|| AppError::config_error("No input file given"))?;

    let roster = input::read_names(Path::new(target), args.column.as_deref())?;
    println!(
        "[+] Read {} rows from {target} (column: '{}')",
        roster.rows_read, roster.column
    );

    let (usernames, counts) = aggregator::aggregate(&roster.names);
    if args.verbose {
        for count in &counts {
            println!("    {} -> {} candidates", count.name, count.candidates);
        }
    }
    let skipped = roster.rows_read - counts.len();
    if skipped > 0 {
        println!("[!] Skipped {skipped} rows with no recoverable name content");
    }

    let output_path = resolve_output_path(args, config);
    let written = output::write_username_list(&output_path, &usernames).await?;
    info!(
        names = counts.len(),
        unique = usernames.len(),
        output = %written.display(),
        "generation run complete"
    );

    println!("[+] Total unique usernames: {}", usernames.len());
    println!("[+] Saved to: {}", written.display());

    Ok(())
}
