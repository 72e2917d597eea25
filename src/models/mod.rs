//! Data models for the OEIS tracker.

pub mod config;
pub mod sequence;

pub use config::{ApiConfig, Config, DigestConfig, PathsConfig, RedditConfig};
pub use sequence::{SearchResponse, Sequence};
