//! Terminal client entry point.
mod commands;
mod config;
mod report;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use commands::{Costs, Outcomes, Prices, Profile, ResetPrices, Session, SetPrice};
use config::CliConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Special Pharmacy calculator
#[derive(Parser)]
#[command(name = "pharmacy")]
#[command(about = "Special Pharmacy outcome and production cost calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// Packaged data directory (overrides PHARMACY_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Per-user directory for profile and prices (overrides PHARMACY_USER_DIR)
    #[arg(long, global = true)]
    user_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Tier probabilities and expected potions per item
    Outcomes(Outcomes),

    /// Production cost of every final item
    Costs(Costs),

    /// Material prices
    Prices(Prices),

    /// Set one material price in the user prices file
    SetPrice(SetPrice),

    /// Restore packaged default prices
    ResetPrices(ResetPrices),

    /// Character profile
    Profile(Profile),
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = CliConfig::from_env().with_overrides(cli.data_dir, cli.user_dir);

    let _guard = setup_logging(config.log_dir.as_deref())?;
    tracing::debug!(?config, "configuration resolved");

    let session = Session::new(&config);
    match cli.command {
        Command::Outcomes(cmd) => cmd.execute(&session),
        Command::Costs(cmd) => cmd.execute(&session),
        Command::Prices(cmd) => cmd.execute(&session),
        Command::SetPrice(cmd) => cmd.execute(&session),
        Command::ResetPrices(cmd) => cmd.execute(&session),
        Command::Profile(cmd) => cmd.execute(&session),
    }
}

/// Setup logging to stderr and, when `log_dir` is set, to `pharmacy.log`.
///
/// The returned guard flushes the file writer on drop and must outlive `main`'s
/// work.
fn setup_logging(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file_appender = tracing_appender::rolling::never(dir, "pharmacy.log");
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    if let Some(dir) = log_dir {
        tracing::info!("Log file: {}/pharmacy.log", dir.display());
    }

    Ok(guard)
}
