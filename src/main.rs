// src/main.rs
use clap::Parser;
use soccer_cli::cli::Args;
use soccer_cli::commands;
use soccer_cli::config::Config;
use soccer_cli::error::AppError;
use soccer_cli::logging::setup_logging;
use std::io::stdout;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let config = Config::load().await?;
    let (log_file_path, guard) = setup_logging(&args, &config).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    match commands::run(&args, &config).await {
        Ok(_) => Ok(()),
        Err(e) if e.is_usage_error() => {
            tracing::warn!("Usage error: {e}");
            commands::report_error(&mut stdout(), &e)?;
            // Flush logs before exiting
            drop(guard);
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!("Fatal error: {e}");
            Err(e)
        }
    }
}
