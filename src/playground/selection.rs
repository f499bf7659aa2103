//! Menu selection for the playground
//!
//! Tracks the highlighted suggestion while the user moves through the menu
//! with the arrow keys.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected_index: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_selection(&mut self) {
        self.selected_index = None;
    }

    pub fn get_selected(&self) -> Option<usize> {
        self.selected_index
    }

    /// Move down, wrapping to the first suggestion
    pub fn navigate_next(&mut self, suggestion_count: usize) {
        if suggestion_count == 0 {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(current) => (current + 1) % suggestion_count,
            None => 0,
        });
    }

    /// Move up, wrapping to the last suggestion
    pub fn navigate_previous(&mut self, suggestion_count: usize) {
        if suggestion_count == 0 {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(0) | None => suggestion_count - 1,
            Some(current) => current - 1,
        });
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod selection_tests;
