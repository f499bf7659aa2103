//! Playground state and key handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::selection::SelectionState;
use super::view::TerminalView;
use crate::autocomplete::{
    AutocompleteField, FieldBinding, FieldView, LookupWorker, Resolution,
};
use crate::config::AutocompleteConfig;

const FIELD_ID: &str = "playground";
const ENABLED_MARKER_ID: &str = "playground_enabled";

/// Menu rows drawn; selection never moves past them
pub(super) const MAX_VISIBLE_SUGGESTIONS: usize = 10;

pub struct Playground {
    field: AutocompleteField<TerminalView>,
    worker: LookupWorker,
    selection: SelectionState,
    last_resolution: Option<Resolution>,
    stale_discarded: usize,
    last_error: Option<String>,
    should_quit: bool,
}

impl Playground {
    pub fn new(endpoint: &str, config: &AutocompleteConfig, worker: LookupWorker) -> Self {
        let binding = FieldBinding::for_field(FIELD_ID, endpoint, "")
            .with_enabled_marker(ENABLED_MARKER_ID);
        let field = AutocompleteField::initialize(binding, config, TerminalView::new());
        Self {
            field,
            worker,
            selection: SelectionState::new(),
            last_resolution: None,
            stale_discarded: 0,
            last_error: None,
            should_quit: false,
        }
    }

    pub fn field(&self) -> &AutocompleteField<TerminalView> {
        &self.field
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn last_resolution(&self) -> Option<Resolution> {
        self.last_resolution
    }

    pub fn stale_discarded(&self) -> usize {
        self.stale_discarded
    }

    /// Most recent lookup or dispatch failure, shown on the status line
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        let count = self.field.suggestions().len().min(MAX_VISIBLE_SUGGESTIONS);
        match key.code {
            KeyCode::Down => self.selection.navigate_next(count),
            KeyCode::Up => self.selection.navigate_previous(count),
            KeyCode::Enter | KeyCode::Tab => {
                self.field.confirm(self.selection.get_selected());
                self.selection.clear_selection();
            }
            _ => {
                let before = self.field.view().input_value();
                self.field.view_mut().textarea.input(key);
                let after = self.field.view().input_value();
                if before != after {
                    self.on_text_changed(&after);
                }
            }
        }
    }

    fn on_text_changed(&mut self, value: &str) {
        self.selection.clear_selection();
        let Some(request) = self.field.on_input(value) else {
            return;
        };
        // Nothing may reach stderr while the terminal is in raw mode
        if let Err(e) = self.worker.dispatch(request) {
            self.last_error = Some(e.to_string());
        }
    }

    /// Apply every finished lookup; returns how many arrived
    pub fn poll_responses(&mut self) -> usize {
        let mut arrived = 0;
        while let Some(response) = self.worker.try_recv() {
            arrived += 1;
            let current = response.token == self.field.current_token();
            match (&response.result, current) {
                (Err(e), true) => self.last_error = Some(e.to_string()),
                (Ok(_), true) => self.last_error = None,
                _ => {}
            }
            let resolution = self.field.on_response(response);
            match resolution {
                Resolution::StaleDiscarded => self.stale_discarded += 1,
                _ => {
                    self.selection.clear_selection();
                    self.last_resolution = Some(resolution);
                }
            }
        }
        arrived
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod app_tests;
