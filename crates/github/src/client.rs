use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Method, RequestBuilder};
use std::sync::Arc;

use crate::error::GithubError;

const DEFAULT_BASE_URL: &str = "https://api.github.com";

pub struct GithubClient {
    client: Client,
    base_url: Arc<str>,
    token: String,
}

impl GithubClient {
    /// Create a new client against the public GitHub API
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(token, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom API base URL (GitHub Enterprise,
    /// or the `GITHUB_API_URL` provided inside Actions runners)
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), token, base_url)
    }

    /// Create a client with a shared reqwest client
    pub fn with_client(
        client: Client,
        token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into();
        let base_url = base_url.trim_end_matches('/');
        Self {
            client,
            base_url: Arc::from(base_url),
            token: token.into(),
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(ACCEPT, "application/vnd.github+json")
            .header(USER_AGENT, "rss-to-issues")
    }

    pub(crate) async fn check_status(
        &self,
        response: reqwest::Response,
    ) -> crate::Result<reqwest::Response> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GithubError::Api {
                status_code: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }
}
