//! Kyuko CLI
//!
//! Run once per schedule tick (cron, systemd timer, CI schedule).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use kyuko::{
    error::Result,
    models::Config,
    pipeline::{self, PipelineOptions},
    services::{LineNotifier, PortalFetcher, parse_selector},
    storage::{LocalStorage, SnapshotStorage},
};

/// Kyuko - cancelled-class notifier
#[derive(Parser, Debug)]
#[command(
    name = "kyuko",
    version,
    about = "Checks the school portal for cancelled classes"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "kyuko.toml", global = true)]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the portal, save the snapshot and send the notification
    Run {
        /// Print the message instead of sending it
        #[arg(long)]
        dry_run: bool,

        /// Snapshot file (default: storage.snapshot_path from config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// LINE Notify access token
        #[arg(long, env = "LINE_NOTIFY_TOKEN", hide_env_values = true)]
        token: Option<String>,
    },

    /// Parse a saved page or text file and print the message
    Preview {
        /// Input file
        #[arg(short, long)]
        input: PathBuf,

        /// Treat the input as an HTML page and extract the announcement block
        #[arg(long)]
        html: bool,
    },

    /// Validate configuration file
    Validate,

    /// Show current snapshot info
    Info,
}

/// Initialize logging based on verbosity.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match Config::load_or_default(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Config load failed from {}: {}", cli.config.display(), e);
            return Err(e);
        }
    };

    match cli.command {
        Command::Run {
            dry_run,
            output,
            token,
        } => {
            config.validate()?;

            let source = PortalFetcher::new(&config.portal)?;
            let storage =
                LocalStorage::new(output.unwrap_or_else(|| config.storage.snapshot_path.clone()));
            let notifier = LineNotifier::from_config(&config, token)?;
            let options = PipelineOptions { dry_run };

            log::info!("Checking {}", source.url());
            let report = pipeline::run_pipeline(&source, &storage, &notifier, &options).await?;

            if !report.outcome.is_success() {
                log::error!("Run failed: {:?}", report.outcome);
            }
            Ok(report.outcome.into())
        }

        Command::Preview { input, html } => {
            let content = std::fs::read_to_string(&input)?;
            let selector = if html {
                Some(parse_selector(&config.portal.selector)?)
            } else {
                None
            };

            let preview = pipeline::run_preview(&content, selector.as_ref());
            log::info!(
                "Parsed {} dates, {} lines from {}",
                preview.grouped.len(),
                preview.grouped.line_count(),
                input.display()
            );
            println!("{}", preview.message);
            Ok(ExitCode::SUCCESS)
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK");
            Ok(ExitCode::SUCCESS)
        }

        Command::Info => {
            let storage = LocalStorage::new(&config.storage.snapshot_path);
            log::info!("Snapshot file: {}", storage.path().display());

            match storage.load().await? {
                Some(snapshot) => {
                    log::info!("Last updated: {}", snapshot.updated_at);
                    if snapshot.data.is_empty() {
                        log::info!("No cancellations recorded.");
                    }
                    for (date_key, lines) in snapshot.data.iter() {
                        log::info!("  {}: {} lines", date_key, lines.len());
                    }
                }
                None => log::info!("No snapshot found yet."),
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
