//! External service clients.
//!
//! - `oeis`: paginated fetch of recently added sequences
//! - `reddit`: bot-account authentication and post submission

pub mod oeis;
pub mod reddit;

use async_trait::async_trait;

use crate::error::Result;

pub use oeis::OeisClient;
pub use reddit::{RedditClient, RedditCredentials, RedditPublisher};

/// Sink for a rendered digest.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Submit a titled digest to the destination.
    async fn publish(&self, title: &str, body: &str) -> Result<()>;
}

/// Dry-run publisher that prints the digest to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsolePublisher;

#[async_trait]
impl Publisher for ConsolePublisher {
    async fn publish(&self, title: &str, body: &str) -> Result<()> {
        println!();
        println!("{title}");
        println!("{body}");
        println!();
        Ok(())
    }
}
