//! Remote lookup transports
//!
//! A [`Lookup`] turns a query into a suggestion list. [`HttpLookup`] issues
//! `GET endpoint?name=<query>` and parses the JSON array reply;
//! [`StaticLookup`] filters an in-memory fixture, optionally slowed down so
//! out-of-order completion can be observed.

use std::time::Duration;

use futures::future::BoxFuture;
use reqwest::header::ACCEPT;
use thiserror::Error;

use super::suggestion::{Suggestion, parse_suggestions};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Lookup endpoint returned HTTP {code}")]
    Status { code: u16 },

    #[error("Malformed lookup response: {0}")]
    Parse(String),

    #[error("Lookup worker is not running")]
    WorkerGone,
}

/// Resolves a query against a lookup endpoint
pub trait Lookup: Send + Sync {
    fn fetch<'a>(
        &'a self,
        endpoint: &'a str,
        query: &'a str,
    ) -> BoxFuture<'a, Result<Vec<Suggestion>, LookupError>>;
}

/// Lookup over HTTP with reqwest
#[derive(Debug, Clone)]
pub struct HttpLookup {
    client: reqwest::Client,
    query_param: String,
}

impl HttpLookup {
    pub fn new(query_param: impl Into<String>) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| LookupError::Network(e.to_string()))?;
        Ok(Self {
            client,
            query_param: query_param.into(),
        })
    }

    async fn get(&self, endpoint: &str, query: &str) -> Result<Vec<Suggestion>, LookupError> {
        let response = self
            .client
            .get(endpoint)
            .query(&[(self.query_param.as_str(), query)])
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status {
                code: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;
        parse_suggestions(&body)
    }
}

impl Lookup for HttpLookup {
    fn fetch<'a>(
        &'a self,
        endpoint: &'a str,
        query: &'a str,
    ) -> BoxFuture<'a, Result<Vec<Suggestion>, LookupError>> {
        Box::pin(self.get(endpoint, query))
    }
}

/// In-memory lookup over a fixed suggestion list
///
/// Matches labels containing the query, case-insensitively. With a latency
/// set, shorter queries take longer to answer than longer ones, so a fast
/// typist sees earlier requests complete after later ones.
#[derive(Debug, Clone, Default)]
pub struct StaticLookup {
    entries: Vec<Suggestion>,
    latency: Option<Duration>,
}

impl StaticLookup {
    pub fn new(entries: Vec<Suggestion>) -> Self {
        Self {
            entries,
            latency: None,
        }
    }

    /// Fixture in lookup payload format
    pub fn from_json(body: &str) -> Result<Self, LookupError> {
        parse_suggestions(body).map(Self::new)
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency).filter(|d| !d.is_zero());
        self
    }

    pub fn entries(&self) -> &[Suggestion] {
        &self.entries
    }

    /// Matching entries, in fixture order
    pub fn matches(&self, query: &str) -> Vec<Suggestion> {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|s| s.label.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    fn delay_for(&self, query: &str) -> Option<Duration> {
        let latency = self.latency?;
        let length = query.chars().count() as u32;
        Some(latency * 6u32.saturating_sub(length).max(1))
    }
}

impl Lookup for StaticLookup {
    fn fetch<'a>(
        &'a self,
        _endpoint: &'a str,
        query: &'a str,
    ) -> BoxFuture<'a, Result<Vec<Suggestion>, LookupError>> {
        Box::pin(async move {
            if let Some(delay) = self.delay_for(query) {
                tokio::time::sleep(delay).await;
            }
            Ok(self.matches(query))
        })
    }
}

#[cfg(test)]
#[path = "lookup_tests.rs"]
mod lookup_tests;
