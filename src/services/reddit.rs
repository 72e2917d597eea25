// src/services/reddit.rs

//! Reddit bot client.
//!
//! Script-app OAuth flow: a password-grant token request authenticated
//! with the app id and secret, then a self-post submission against the
//! OAuth API host.

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::models::RedditConfig;
use crate::services::Publisher;

const TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";
const SUBMIT_URL: &str = "https://oauth.reddit.com/api/submit";

const ENV_CLIENT_ID: &str = "REDDIT_OEIS_ID";
const ENV_CLIENT_SECRET: &str = "REDDIT_OEIS_SECRET";
const ENV_PASSWORD: &str = "REDDIT_OEIS_PW";

/// Bot-account credentials, supplied via environment variables.
#[derive(Debug, Clone)]
pub struct RedditCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub password: String,
}

impl RedditCredentials {
    /// Read credentials from the environment.
    ///
    /// Any missing variable is fatal; the run aborts before the first
    /// network request.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            client_id: require_env(ENV_CLIENT_ID)?,
            client_secret: require_env(ENV_CLIENT_SECRET)?,
            password: require_env(ENV_PASSWORD)?,
        })
    }
}

fn require_env(name: &str) -> Result<String> {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::credentials(format!("environment variable {name} is not set")))
}

/// User-Agent string in Reddit's recommended `platform:id:version` form.
fn user_agent(client_id: &str, username: &str) -> String {
    format!("rust:{client_id}:0.1 (by /u/{username})")
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Authenticated Reddit API client.
pub struct RedditClient {
    client: Client,
    credentials: RedditCredentials,
    username: String,
}

impl RedditClient {
    /// Create a client for the configured bot account.
    pub fn new(credentials: RedditCredentials, config: &RedditConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent(&credentials.client_id, &config.username))
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            credentials,
            username: config.username.clone(),
        })
    }

    /// Obtain a bearer token via the password grant.
    async fn access_token(&self) -> Result<String> {
        let form = [
            ("grant_type", "password"),
            ("username", self.username.as_str()),
            ("password", self.credentials.password.as_str()),
        ];

        let response = self
            .client
            .post(TOKEN_URL)
            .basic_auth(
                &self.credentials.client_id,
                Some(&self.credentials.client_secret),
            )
            .form(&form)
            .send()
            .await?
            .error_for_status()?;

        let token: TokenResponse = response.json().await.map_err(|e| {
            AppError::api("access_token", format!("unexpected token response: {e}"))
        })?;

        Ok(token.access_token)
    }

    /// Submit a self post to a subreddit.
    pub async fn submit(&self, subreddit: &str, title: &str, body: &str) -> Result<()> {
        let token = self.access_token().await?;

        let form = [
            ("sr", subreddit),
            ("kind", "self"),
            ("title", title),
            ("text", body),
            ("api_type", "json"),
        ];

        let response = self
            .client
            .post(SUBMIT_URL)
            .bearer_auth(&token)
            .form(&form)
            .send()
            .await?
            .error_for_status()?;

        // The submit endpoint reports rejections inside a 200 body.
        let value: serde_json::Value = response.json().await?;
        if let Some(errors) = value
            .get("json")
            .and_then(|j| j.get("errors"))
            .and_then(|e| e.as_array())
        {
            if !errors.is_empty() {
                return Err(AppError::api(
                    format!("submit to r/{subreddit}"),
                    serde_json::to_string(errors)?,
                ));
            }
        }

        Ok(())
    }
}

/// Publisher that submits the digest as a new post to a subreddit.
pub struct RedditPublisher {
    client: RedditClient,
    subreddit: String,
}

impl RedditPublisher {
    pub fn new(client: RedditClient, subreddit: impl Into<String>) -> Self {
        Self {
            client,
            subreddit: subreddit.into(),
        }
    }
}

#[async_trait]
impl Publisher for RedditPublisher {
    async fn publish(&self, title: &str, body: &str) -> Result<()> {
        log::info!("Posting to r/{}...", self.subreddit);
        self.client.submit(&self.subreddit, title, body).await?;
        log::info!("Post complete");
        Ok(())
    }
}
