//! Per-field autocomplete state machine
//!
//! One [`AutocompleteField`] exists per enhanced input. It is owned by the UI
//! loop and driven by three events: the user edits the input, a lookup
//! response arrives, the user confirms a suggestion. Lookups themselves are
//! not performed here; `on_input` hands back the request to dispatch.

use super::binder::SelectionBinder;
use super::binding::FieldBinding;
use super::fetcher::{FetchDecision, RequestToken, ResponseOutcome, SuggestionFetcher};
use super::suggestion::Suggestion;
use super::view::{FieldView, Menu, MenuItem};
use super::worker::{LookupRequest, LookupResponse};
use crate::config::AutocompleteConfig;

/// Where the field is between keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPhase {
    Idle,
    Querying { token: RequestToken },
    Resolved,
    TooShort,
}

/// What applying a response did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Suggestions(usize),
    NoResults,
    /// Superseded response; nothing changed
    StaleDiscarded,
    /// Current response ignored because the input is now too short
    InputTooShort,
}

#[derive(Debug)]
pub struct AutocompleteField<V: FieldView> {
    binding: FieldBinding,
    texts: AutocompleteConfig,
    fetcher: SuggestionFetcher,
    binder: SelectionBinder,
    view: V,
    phase: FieldPhase,
    suggestions: Vec<Suggestion>,
}

impl<V: FieldView> AutocompleteField<V> {
    /// Build the enhanced control on `view` and hide the fallback
    pub fn initialize(binding: FieldBinding, config: &AutocompleteConfig, mut view: V) -> Self {
        let fetcher = SuggestionFetcher::new(binding.endpoint.clone(), config.min_query_length);
        let binder = SelectionBinder::new(binding.submit_value);

        view.set_input_value(&binding.initial_value);
        view.render_menu(Menu::Cleared);
        binder.enhance(&mut view, &binding);
        log::debug!("Autocomplete initialised for #{}", binding.input_id);

        Self {
            binding,
            texts: config.clone(),
            fetcher,
            binder,
            view,
            phase: FieldPhase::Idle,
            suggestions: Vec::new(),
        }
    }

    /// Tear down the enhanced control, reveal the fallback and hand the view back
    pub fn destroy(mut self) -> V {
        self.view.render_menu(Menu::Cleared);
        self.binder.restore(&mut self.view);
        log::debug!("Autocomplete destroyed for #{}", self.binding.input_id);
        self.view
    }

    pub fn binding(&self) -> &FieldBinding {
        &self.binding
    }

    pub fn phase(&self) -> FieldPhase {
        self.phase
    }

    pub fn current_token(&self) -> RequestToken {
        self.fetcher.current_token()
    }

    pub fn results_found(&self) -> bool {
        self.fetcher.results_found()
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// The input now reads `value`. Returns the lookup to dispatch, if any.
    pub fn on_input(&mut self, value: &str) -> Option<LookupRequest> {
        self.view.set_input_value(value);

        if value.is_empty() {
            self.binder.clear(&mut self.view);
            self.view.render_menu(Menu::Cleared);
            self.fetcher.reset();
            self.suggestions.clear();
            self.phase = FieldPhase::Idle;
            return None;
        }

        match self.fetcher.on_query(value) {
            FetchDecision::TooShort => {
                self.suggestions.clear();
                self.view.render_menu(Menu::TypeMore {
                    after: self.texts.after_suggestions_text.clone(),
                });
                self.phase = FieldPhase::TooShort;
                None
            }
            FetchDecision::Dispatch { token, query } => {
                self.phase = FieldPhase::Querying { token };
                Some(LookupRequest {
                    token,
                    endpoint: self.binding.endpoint.clone(),
                    query,
                })
            }
        }
    }

    /// Apply a lookup response, unless it has been superseded
    pub fn on_response(&mut self, response: LookupResponse) -> Resolution {
        let live_input = self.view.input_value();
        match self
            .fetcher
            .on_response(response.token, &live_input, response.result)
        {
            ResponseOutcome::Stale => Resolution::StaleDiscarded,
            ResponseOutcome::InputTooShort => {
                self.phase = FieldPhase::Idle;
                Resolution::InputTooShort
            }
            ResponseOutcome::NoResults => {
                self.suggestions.clear();
                self.binder.clear(&mut self.view);
                self.view.render_menu(Menu::NoResults {
                    message: self.texts.no_results_text.clone(),
                });
                self.phase = FieldPhase::Resolved;
                Resolution::NoResults
            }
            ResponseOutcome::Results(suggestions) => {
                let items = suggestions
                    .iter()
                    .filter_map(|s| {
                        self.fetcher
                            .highlight(&s.label, &live_input)
                            .map(|markup| MenuItem {
                                suggestion: s.clone(),
                                markup,
                            })
                    })
                    .collect();
                self.binder.clear(&mut self.view);
                self.view.render_menu(Menu::Suggestions {
                    before: self.texts.before_suggestions_text.clone(),
                    after: self.texts.after_suggestions_text.clone(),
                    items,
                });
                let count = suggestions.len();
                self.suggestions = suggestions;
                self.phase = FieldPhase::Resolved;
                Resolution::Suggestions(count)
            }
        }
    }

    /// Confirm the suggestion at `index` of the current list; `None` or an
    /// index past the end confirms nothing. Returns the bound value.
    pub fn confirm(&mut self, index: Option<usize>) -> String {
        let suggestion = index.and_then(|i| self.suggestions.get(i)).cloned();
        self.confirm_suggestion(suggestion.as_ref())
    }

    /// Confirm an explicit suggestion (or nothing)
    pub fn confirm_suggestion(&mut self, suggestion: Option<&Suggestion>) -> String {
        let value = self.binder.confirm(&mut self.view, suggestion);
        if let Some(s) = suggestion {
            self.view.set_input_value(&s.label);
        }
        self.view.render_menu(Menu::Cleared);
        value
    }
}

#[cfg(test)]
#[path = "field_tests.rs"]
mod field_tests;
