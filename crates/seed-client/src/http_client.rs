//! HTTP implementation of [`SeedSource`]

use crate::client::SeedSource;
use crate::error::SeedClientError;
use crate::types::SeedTodo;
use crate::DEFAULT_ENDPOINT;
use async_trait::async_trait;

/// Seed client backed by reqwest.
///
/// One GET at startup is the entire protocol; there is deliberately no
/// retry and no timeout here (the application renders an empty list until
/// the response arrives, forever if it never does).
pub struct HttpSeedClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpSeedClient {
    /// Client pointed at the fixed public demo endpoint
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_ENDPOINT)
    }

    /// Client pointed at an alternative base URL (tests, local mirrors)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpSeedClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SeedSource for HttpSeedClient {
    async fn fetch_todos(&self, limit: usize) -> Result<Vec<SeedTodo>, SeedClientError> {
        let url = format!("{}/todos?_limit={}", self.base_url, limit);
        log::debug!("Fetching seed todos from {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(SeedClientError::UnexpectedStatus(response.status()));
        }

        let mut todos: Vec<SeedTodo> = response.json().await?;
        // The `_limit` query parameter is advisory; enforce the cap locally.
        todos.truncate(limit);

        log::info!("Fetched {} seed todos", todos.len());
        Ok(todos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_limit_url_against_default_endpoint() {
        let client = HttpSeedClient::new();
        assert_eq!(client.base_url, "https://jsonplaceholder.typicode.com");
    }

    #[test]
    fn custom_base_url_is_kept_verbatim() {
        let client = HttpSeedClient::with_base_url("http://localhost:8080");
        assert_eq!(client.base_url, "http://localhost:8080");
    }
}
