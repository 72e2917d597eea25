//! OEIS Tracker CLI
//!
//! Intended to be triggered once a week (manually or by an external
//! scheduler); the program itself has no scheduling logic.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use oeis_tracker::{
    error::Result,
    models::Config,
    pipeline::{RunOptions, run_tracker},
    storage::SeenSet,
};

/// OEIS Tracker - weekly digest of newly added sequences
#[derive(Parser, Debug)]
#[command(
    name = "oeis-tracker",
    version,
    about = "Posts a weekly digest of newly added OEIS sequences"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch, diff, and publish this week's digest
    Run {
        /// Print the digest instead of posting it
        #[arg(long)]
        dry_run: bool,

        /// Post to the test subreddit instead of the production one
        #[arg(long)]
        test: bool,

        /// Skip writing the updated checkpoint
        #[arg(long)]
        no_update: bool,

        /// Prepend the introductory paragraph (first-ever digest)
        #[arg(long)]
        first_run: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Show checkpoint state
    Info,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    log::info!("OEIS tracker starting...");

    let config = Config::load_or_default(&cli.config);

    match cli.command {
        Command::Run {
            dry_run,
            test,
            no_update,
            first_run,
        } => {
            let options = RunOptions {
                dry_run,
                use_test_subreddit: test,
                update_checkpoint: !no_update,
                first_run,
            };
            run_tracker(&config, &options).await?;
        }

        Command::Validate => {
            log::info!("Validating configuration...");
            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("Config OK");
        }

        Command::Info => {
            let path = PathBuf::from(&config.paths.checkpoint);
            log::info!("Checkpoint file: {}", path.display());

            if path.exists() {
                let seen = SeenSet::load(&path).await?;
                log::info!("Previously announced ids: {}", seen.len());
            } else {
                log::info!("No checkpoint found yet.");
            }
        }
    }

    log::info!("Done!");

    Ok(())
}
