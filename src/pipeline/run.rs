// src/pipeline/run.rs

//! Full tracker run.
//!
//! One linear pass: load checkpoint → fetch → diff → render → publish →
//! persist. The first unhandled error aborts the run; nothing is retried
//! and no intermediate state is persisted.

use chrono::Local;

use crate::error::Result;
use crate::models::Config;
use crate::pipeline::{digest, partition};
use crate::services::{ConsolePublisher, OeisClient, Publisher};
use crate::services::{RedditClient, RedditCredentials, RedditPublisher};
use crate::storage::SeenSet;

/// Invocation modes for one run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Print the digest instead of posting it
    pub dry_run: bool,
    /// Post to the scratch subreddit instead of the production one
    pub use_test_subreddit: bool,
    /// Persist the updated seen-set at the end of the run
    pub update_checkpoint: bool,
    /// Prepend the introductory paragraph (first-ever run)
    pub first_run: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            use_test_subreddit: false,
            update_checkpoint: true,
            first_run: false,
        }
    }
}

/// Run the tracker pipeline once.
pub async fn run_tracker(config: &Config, options: &RunOptions) -> Result<()> {
    log::info!("Loading previous new sequences...");
    let seen = SeenSet::load(&config.paths.checkpoint).await?;
    log::info!("Loaded {} previously seen ids", seen.len());

    // Build the publisher up front so missing credentials abort the run
    // before any fetch.
    let publisher = build_publisher(config, options)?;

    log::info!("Retrieving recent new sequences...");
    let oeis = OeisClient::new(&config.api)?;
    let pull = oeis.fetch_all().await?;

    let outcome = partition(&pull, &seen);
    if !outcome.has_new() {
        log::info!("No new sequences to report. Refraining from posting.");
        return Ok(());
    }

    log::info!(
        "Creating post with {} recent new sequences...",
        outcome.new_records.len()
    );
    let body = digest::render(
        &outcome.new_records,
        options.first_run,
        config.digest.preview_terms,
    );
    let title = digest::week_title(Local::now().date_naive());

    publisher.publish(&title, &body).await?;

    if options.update_checkpoint {
        log::info!(
            "Recording {} seen ids in {}...",
            outcome.seen.len(),
            config.paths.checkpoint
        );
        outcome.seen.save(&config.paths.checkpoint).await?;
        log::info!("Saved.");
    } else {
        log::info!("Checkpoint update skipped by request");
    }

    Ok(())
}

/// Pick the digest sink for this run's options.
fn build_publisher(config: &Config, options: &RunOptions) -> Result<Box<dyn Publisher>> {
    if options.dry_run {
        return Ok(Box::new(ConsolePublisher));
    }

    let credentials = RedditCredentials::from_env()?;
    let client = RedditClient::new(credentials, &config.reddit)?;
    let subreddit = if options.use_test_subreddit {
        &config.reddit.test_subreddit
    } else {
        &config.reddit.subreddit
    };

    Ok(Box::new(RedditPublisher::new(client, subreddit.clone())))
}
