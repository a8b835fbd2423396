// src/main.rs
use clap::Parser;
use usermint::cli::Args;
use usermint::commands;
use usermint::config::Config;
use usermint::error::AppError;
use usermint::logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();
    commands::validate_args(&args)?;

    let config = Config::load().await.unwrap_or_default();

    // The guard must outlive the run so buffered log lines get flushed
    let (log_file_path, _guard) = logging::setup_logging(&args, &config)?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.list_config {
        return commands::handle_list_config_command().await;
    }

    if args.new_log_file_path.is_some() || args.clear_log_file_path {
        return commands::handle_config_update_command(&args).await;
    }

    commands::handle_generate_command(&args, &config).await
}
