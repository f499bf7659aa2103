//! Validation-error collection keyed by field name

use std::collections::BTreeMap;

use crate::html::{ClassList, Element, Markup};

/// Caller-supplied replacement for the model's error messages
///
/// Plain text by default; HTML has to be asked for explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationMessage {
    Text(String),
    Html(String),
}

impl ValidationMessage {
    pub fn is_blank(&self) -> bool {
        match self {
            ValidationMessage::Text(s) | ValidationMessage::Html(s) => s.trim().is_empty(),
        }
    }

    pub fn to_markup(&self) -> Markup {
        match self {
            ValidationMessage::Text(s) => Markup::text(s),
            ValidationMessage::Html(s) => Markup::trusted(s.clone()),
        }
    }
}

/// Errors recorded for one field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelStateEntry {
    errors: Vec<String>,
}

impl ModelStateEntry {
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn first_error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }

    /// All non-blank messages, escaped and joined with `<br/>`
    pub fn joined_messages(&self) -> Markup {
        let mut out = Markup::new();
        for message in self.errors.iter().filter(|m| !m.trim().is_empty()) {
            if !out.is_empty() {
                out.push(&Markup::trusted("<br/>"));
            }
            out.push_text(message);
        }
        out
    }

    /// GOV.UK error message span for this entry
    ///
    /// Returns `None` when the entry holds no errors. A non-blank override
    /// replaces the model messages.
    pub fn error_markup(&self, override_message: Option<&ValidationMessage>) -> Option<Markup> {
        if !self.has_errors() {
            return None;
        }
        let content = match override_message.filter(|m| !m.is_blank()) {
            Some(message) => message.to_markup(),
            None => self.joined_messages(),
        };
        if content.is_empty() {
            return None;
        }
        Some(error_span(content))
    }
}

/// `<span class="govuk-error-message">` around already-safe content
pub fn error_span(content: Markup) -> Markup {
    Element::new("span")
        .class(ClassList::new("govuk-error-message"))
        .child(content)
        .render()
}

/// Validation state of a page, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelState {
    entries: BTreeMap<String, ModelStateEntry>,
}

impl ModelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.entries
            .entry(key.into())
            .or_default()
            .errors
            .push(message.into());
    }

    /// Record a field as bound without errors
    pub fn mark_valid(&mut self, key: impl Into<String>) {
        self.entries.entry(key.into()).or_default();
    }

    pub fn entry(&self, key: &str) -> Option<&ModelStateEntry> {
        self.entries.get(key)
    }

    pub fn has_errors(&self, key: &str) -> bool {
        self.entry(key).is_some_and(ModelStateEntry::has_errors)
    }

    pub fn is_valid(&self) -> bool {
        self.entries.values().all(|e| !e.has_errors())
    }

    pub fn error_count(&self) -> usize {
        self.entries.values().map(|e| e.errors.len()).sum()
    }
}
