use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(
    name = "homework-bot",
    version,
    about = "Polls the Yandex Practicum homework status API and sends review updates to Telegram"
)]
struct Args {
    /// Path to a JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seconds between polls, overriding the configured value
    #[arg(short, long)]
    interval: Option<u64>,

    /// Log level for the subscriber
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> homework_bot::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    let mut config = match &args.config {
        Some(path) => homework_bot::load_config(path)?,
        None => homework_bot::Config::default(),
    };
    if let Some(interval) = args.interval {
        config.poll_interval_seconds = interval;
    }
    tracing::debug!("Using configuration: {:?}", config);

    let credentials = homework_bot::Credentials::from_env()?;

    homework_bot::run(config, credentials).await
}
