//! Suggestions returned by the lookup endpoint and their highlighted rendering

use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::lookup::LookupError;
use crate::html::Markup;

/// One candidate: the text shown in the menu and the canonical value
///
/// Plain string payloads produce suggestions whose label and value are equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub label: String,
    pub value: String,
}

impl Suggestion {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            label: text.clone(),
            value: text,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSuggestion {
    Plain(String),
    Record {
        label: String,
        #[serde(default)]
        value: Option<String>,
    },
}

impl From<RawSuggestion> for Suggestion {
    fn from(raw: RawSuggestion) -> Self {
        match raw {
            RawSuggestion::Plain(text) => Suggestion::plain(text),
            RawSuggestion::Record { label, value } => {
                let value = value.unwrap_or_else(|| label.clone());
                Suggestion { label, value }
            }
        }
    }
}

/// Parse a lookup payload: a JSON array of strings or `{label, value}` records
///
/// `null` is treated as an empty list.
pub fn parse_suggestions(body: &str) -> Result<Vec<Suggestion>, LookupError> {
    let raw: Option<Vec<RawSuggestion>> =
        serde_json::from_str(body).map_err(|e| LookupError::Parse(e.to_string()))?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(Suggestion::from)
        .collect())
}

fn chars_match(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Byte ranges of every non-overlapping, case-insensitive literal
/// occurrence of `query` in `text`, left to right
pub fn match_ranges(text: &str, query: &str) -> Vec<Range<usize>> {
    let needle: Vec<char> = query.chars().collect();
    let haystack: Vec<(usize, char)> = text.char_indices().collect();
    let mut ranges = Vec::new();
    if needle.is_empty() || needle.len() > haystack.len() {
        return ranges;
    }

    let byte_at = |index: usize| haystack.get(index).map_or(text.len(), |(b, _)| *b);
    let mut i = 0;
    while i + needle.len() <= haystack.len() {
        let matched = needle
            .iter()
            .zip(&haystack[i..])
            .all(|(q, (_, c))| chars_match(*c, *q));
        if matched {
            ranges.push(byte_at(i)..byte_at(i + needle.len()));
            i += needle.len();
        } else {
            i += 1;
        }
    }
    ranges
}

/// Escape `text`, wrapping every case-insensitive literal occurrence of
/// `query` in `<strong>` while keeping the original casing
pub fn highlight(text: &str, query: &str) -> Markup {
    let mut out = Markup::new();
    let mut plain_start = 0;
    for range in match_ranges(text, query) {
        out.push_text(&text[plain_start..range.start]);
        out.push_raw("<strong>");
        out.push_text(&text[range.clone()]);
        out.push_raw("</strong>");
        plain_start = range.end;
    }
    out.push_text(&text[plain_start..]);
    out
}

#[cfg(test)]
#[path = "suggestion_tests.rs"]
mod suggestion_tests;
