//! Suggestion fetching with last-request-wins ordering
//!
//! Every query event advances a [`RequestToken`]. A lookup captures the token
//! it was dispatched with, and its response is applied only if that token is
//! still current when it arrives. Nothing is aborted: superseded responses are
//! simply dropped on arrival.

use std::fmt;

use super::lookup::LookupError;
use super::suggestion::{Suggestion, highlight};
use crate::html::Markup;

/// Monotonic request counter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn get(self) -> u64 {
        self.0
    }

    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What to do with a query event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchDecision {
    /// Below the minimum length; show the "continue typing" affordance
    TooShort,
    /// Issue a lookup carrying this token
    Dispatch { token: RequestToken, query: String },
}

/// What an arriving response amounts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseOutcome {
    /// Superseded by a later query event; apply nothing
    Stale,
    /// Current, but the live input has dropped below the minimum length
    InputTooShort,
    /// Empty reply or a swallowed transport error
    NoResults,
    Results(Vec<Suggestion>),
}

#[derive(Debug, Clone)]
pub struct SuggestionFetcher {
    endpoint: String,
    min_query_length: usize,
    current: RequestToken,
    results_found: bool,
}

impl SuggestionFetcher {
    pub fn new(endpoint: impl Into<String>, min_query_length: usize) -> Self {
        Self {
            endpoint: endpoint.into(),
            min_query_length,
            current: RequestToken::default(),
            results_found: false,
        }
    }

    pub fn current_token(&self) -> RequestToken {
        self.current
    }

    /// Set once a non-empty result set has been applied, until [`reset`](Self::reset)
    pub fn results_found(&self) -> bool {
        self.results_found
    }

    pub fn min_query_length(&self) -> usize {
        self.min_query_length
    }

    pub fn meets_min_length(&self, query: &str) -> bool {
        query.chars().count() >= self.min_query_length
    }

    /// Register a query event. The token advances even for short queries so
    /// any lookup still in flight is superseded.
    pub fn on_query(&mut self, query: &str) -> FetchDecision {
        self.current = self.current.next();
        if !self.meets_min_length(query) {
            log::debug!("Query {:?} below minimum length, token {}", query, self.current);
            return FetchDecision::TooShort;
        }
        log::debug!("Dispatching lookup for {:?} with token {}", query, self.current);
        FetchDecision::Dispatch {
            token: self.current,
            query: query.to_string(),
        }
    }

    /// Decide what an arriving response means for the field
    ///
    /// `live_input` is the input's value at arrival, not at dispatch.
    pub fn on_response(
        &mut self,
        token: RequestToken,
        live_input: &str,
        result: Result<Vec<Suggestion>, LookupError>,
    ) -> ResponseOutcome {
        if token != self.current {
            log::debug!("Discarding stale response {} (current {})", token, self.current);
            return ResponseOutcome::Stale;
        }
        if !self.meets_min_length(live_input) {
            return ResponseOutcome::InputTooShort;
        }

        let suggestions = match result {
            Ok(suggestions) => suggestions,
            Err(e) => {
                log::warn!("Error fetching suggestions from {}: {}", self.endpoint, e);
                Vec::new()
            }
        };

        if suggestions.is_empty() {
            ResponseOutcome::NoResults
        } else {
            self.results_found = true;
            ResponseOutcome::Results(suggestions)
        }
    }

    /// Highlighted label, only while results are being shown
    pub fn highlight(&self, label: &str, query: &str) -> Option<Markup> {
        self.results_found.then(|| highlight(label, query))
    }

    pub fn reset(&mut self) {
        self.results_found = false;
    }
}

#[cfg(test)]
#[path = "fetcher_tests.rs"]
mod fetcher_tests;
