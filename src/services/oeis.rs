// src/services/oeis.rs

//! OEIS search client.
//!
//! Fetches every result for the configured search query by walking the
//! paginated JSON endpoint one page at a time.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::error::Result;
use crate::models::{ApiConfig, SearchResponse, Sequence};

/// Results per page, fixed by the OEIS search endpoint.
pub const PAGE_SIZE: usize = 10;

/// Client for the OEIS search API.
pub struct OeisClient {
    config: ApiConfig,
    client: Client,
}

impl OeisClient {
    /// Create a new client with the configured user agent and timeout.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            config: config.clone(),
            client,
        })
    }

    /// Build the search URL for a given page offset.
    fn page_url(&self, start: usize) -> Result<Url> {
        let url = Url::parse_with_params(
            &self.config.search_url,
            &[
                ("fmt", "json"),
                ("q", self.config.query.as_str()),
                ("start", start.to_string().as_str()),
            ],
        )?;
        Ok(url)
    }

    /// Fetch one page of search results.
    async fn fetch_page(&self, start: usize) -> Result<SearchResponse> {
        let url = self.page_url(start)?;
        log::debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<SearchResponse>()
            .await?;

        Ok(response)
    }

    /// Fetch all results for the configured query.
    ///
    /// The first request learns the total count and doubles as page zero;
    /// the remaining pages are fetched sequentially at the offsets from
    /// [`page_offsets`]. Any transport or parse failure aborts the run.
    pub async fn fetch_all(&self) -> Result<Vec<Sequence>> {
        let first = self.fetch_page(0).await?;
        let count = first.count;
        log::info!("Count of {count} recent new sequences reported by the API");

        if count == 0 {
            return Ok(Vec::new());
        }

        let mut pull = first.into_results();
        for &offset in page_offsets(count, PAGE_SIZE).iter().skip(1) {
            let page = self.fetch_page(offset).await?;
            pull.extend(page.into_results());
        }

        if pull.len() != count {
            log::warn!(
                "Fetched {} sequences but the API reported {count}",
                pull.len()
            );
        }

        log::info!("Retrieved {} sequences", pull.len());
        Ok(pull)
    }
}

/// Page start offsets covering `count` results: all full pages, then one
/// remainder page when `count` is not a multiple of the page size.
pub fn page_offsets(count: usize, page_size: usize) -> Vec<usize> {
    let full_pages = count / page_size;
    let remainder = count % page_size;

    let mut offsets: Vec<usize> = (0..full_pages).map(|p| p * page_size).collect();
    if remainder > 0 {
        offsets.push(full_pages * page_size);
    }
    offsets
}
