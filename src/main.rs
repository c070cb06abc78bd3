mod app;
mod cli;
mod config;
mod constants;
mod data_fetcher;
mod error;
mod logging;

use clap::Parser;
use tracing::info;

use app::App;
use cli::{Args, Command};
use config::Config;
use error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let config = Config::load().await?;

    // The guard must be kept alive until exit so buffered logs are flushed
    let (log_file_path, _guard) =
        logging::setup_logging(&args, config.log_file_path.as_ref()).await?;
    info!("Logging to {log_file_path}");

    if args.list_config {
        println!("Config file: {}", Config::config_path_display());
        println!("Primary domain: {}", config.primary_domain);
        println!("External domain: {}", config.external_domain);
        println!("HTTP timeout: {}s", config.http_timeout_seconds);
        println!(
            "Log file: {}",
            config.log_file_path.as_deref().unwrap_or("(default)")
        );
        return Ok(());
    }

    let app = App::new(&config)?;

    match args.command() {
        Command::Matches => app.show_upcoming_matches().await,
        Command::Ranking => app.show_ranking().await,
        Command::Calendar => app.show_calendar().await,
        Command::Tour => app.show_current_tour().await,
    }
}
