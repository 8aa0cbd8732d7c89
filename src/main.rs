use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use kicau::infrastructure::config;

/// Read tweets from a CSV file, score each row's sentiment, and load the
/// results into a PostgreSQL table.
#[derive(Parser)]
#[command(name = "kicau", version, about)]
struct Cli {
    /// Path to the input CSV file (must contain a 'text' or 'tweet' column)
    #[arg(default_value = "tweets.csv")]
    csv_path: PathBuf,

    /// Path to a TOML config file (default: kicau.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose output (debug logging)
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // .env files are honored for KICAU_* variables
    let _ = dotenvy::dotenv();

    let default_filter = if cli.verbose { "kicau=debug,info" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let outcome = match config::load(cli.config.as_deref()) {
        Ok(config) => kicau::run(&config, &cli.csv_path).await,
        Err(err) => Err(err),
    };

    match outcome {
        Ok(count) => {
            info!("successfully processed and inserted {} rows", count);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
