use reqwest::Client;

use crate::error::FeedError;
use crate::models::FeedEntry;
use crate::parsers::parse_feed;

/// Syndication feed fetcher client
pub struct FeedClient {
    client: Client,
}

impl FeedClient {
    /// Create a new FeedClient with a default reqwest Client
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    /// Create a new FeedClient with a custom reqwest Client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Fetch and parse a syndication feed
    ///
    /// # Arguments
    /// * `url` - The feed URL to fetch from
    ///
    /// # Returns
    /// A vector of parsed feed entries, in document order
    pub async fn fetch(&self, url: &str) -> crate::Result<Vec<FeedEntry>> {
        tracing::debug!("Fetching feed from: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(FeedError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response.bytes().await?;
        let entries = parse_feed(&bytes)?;

        tracing::debug!("Parsed {} entries from feed", entries.len());
        Ok(entries)
    }
}

impl Default for FeedClient {
    fn default() -> Self {
        Self::new()
    }
}
