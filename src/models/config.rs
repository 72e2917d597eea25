//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// OEIS search API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Reddit publishing settings
    #[serde(default)]
    pub reddit: RedditConfig,

    /// Digest rendering settings
    #[serde(default)]
    pub digest: DigestConfig,

    /// File locations
    #[serde(default)]
    pub paths: PathsConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.api.user_agent.trim().is_empty() {
            return Err(AppError::validation("api.user_agent is empty"));
        }
        if self.api.timeout_secs == 0 {
            return Err(AppError::validation("api.timeout_secs must be > 0"));
        }
        if self.api.query.trim().is_empty() {
            return Err(AppError::validation("api.query is empty"));
        }
        Url::parse(&self.api.search_url)
            .map_err(|e| AppError::validation(format!("api.search_url is invalid: {e}")))?;
        if self.reddit.subreddit.trim().is_empty() {
            return Err(AppError::validation("reddit.subreddit is empty"));
        }
        if self.reddit.test_subreddit.trim().is_empty() {
            return Err(AppError::validation("reddit.test_subreddit is empty"));
        }
        if self.reddit.username.trim().is_empty() {
            return Err(AppError::validation("reddit.username is empty"));
        }
        if self.digest.preview_terms == 0 {
            return Err(AppError::validation("digest.preview_terms must be > 0"));
        }
        if self.paths.checkpoint.trim().is_empty() {
            return Err(AppError::validation("paths.checkpoint is empty"));
        }
        Ok(())
    }
}

/// OEIS search API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base search endpoint
    #[serde(default = "defaults::search_url")]
    pub search_url: String,

    /// Search query selecting recently added sequences
    #[serde(default = "defaults::query")]
    pub query: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            search_url: defaults::search_url(),
            query: defaults::query(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Reddit publishing settings.
///
/// Credentials are deliberately not part of the config file; they are
/// read from environment variables at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditConfig {
    /// Production subreddit
    #[serde(default = "defaults::subreddit")]
    pub subreddit: String,

    /// Scratch subreddit for test posts
    #[serde(default = "defaults::test_subreddit")]
    pub test_subreddit: String,

    /// Bot account username
    #[serde(default = "defaults::username")]
    pub username: String,
}

impl Default for RedditConfig {
    fn default() -> Self {
        Self {
            subreddit: defaults::subreddit(),
            test_subreddit: defaults::test_subreddit(),
            username: defaults::username(),
        }
    }
}

/// Digest rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigestConfig {
    /// Number of leading terms to show per sequence
    #[serde(default = "defaults::preview_terms")]
    pub preview_terms: usize,
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            preview_terms: defaults::preview_terms(),
        }
    }
}

/// File locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Checkpoint file holding previously announced sequence ids
    #[serde(default = "defaults::checkpoint")]
    pub checkpoint: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            checkpoint: defaults::checkpoint(),
        }
    }
}

/// Default values for configuration fields.
mod defaults {
    pub fn search_url() -> String {
        "https://oeis.org/search".to_string()
    }

    pub fn query() -> String {
        "keyword:new".to_string()
    }

    pub fn user_agent() -> String {
        "oeis-tracker/0.1".to_string()
    }

    pub fn timeout() -> u64 {
        30
    }

    pub fn subreddit() -> String {
        "oeis".to_string()
    }

    pub fn test_subreddit() -> String {
        "test".to_string()
    }

    pub fn username() -> String {
        "OEIS-Tracker".to_string()
    }

    pub fn preview_terms() -> usize {
        5
    }

    pub fn checkpoint() -> String {
        "prev.txt".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.api.query, "keyword:new");
        assert_eq!(config.digest.preview_terms, 5);
        assert_eq!(config.paths.checkpoint, "prev.txt");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [reddit]
            subreddit = "math"
            "#,
        )
        .unwrap();
        assert_eq!(config.reddit.subreddit, "math");
        assert_eq!(config.reddit.test_subreddit, "test");
        assert_eq!(config.api.search_url, "https://oeis.org/search");
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.api.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_search_url() {
        let mut config = Config::default();
        config.api.search_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_subreddit() {
        let mut config = Config::default();
        config.reddit.subreddit = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
