//! Writes confirmed selections into the submission field

use super::binding::FieldBinding;
use super::suggestion::Suggestion;
use super::view::FieldView;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionBinder {
    submit_value: bool,
}

impl SelectionBinder {
    pub fn new(submit_value: bool) -> Self {
        Self { submit_value }
    }

    /// Value the hidden field receives for a confirmation
    pub fn canonical_value(&self, suggestion: Option<&Suggestion>) -> String {
        match suggestion {
            Some(s) if self.submit_value => s.value.clone(),
            Some(s) => s.label.clone(),
            None => String::new(),
        }
    }

    /// Bind a confirmation; confirming nothing clears the field
    pub fn confirm<V: FieldView + ?Sized>(&self, view: &mut V, suggestion: Option<&Suggestion>) -> String {
        let value = self.canonical_value(suggestion);
        view.set_hidden_value(&value);
        value
    }

    pub fn clear<V: FieldView + ?Sized>(&self, view: &mut V) {
        view.set_hidden_value("");
    }

    /// Swap the fallback input for the enhanced control
    pub fn enhance<V: FieldView + ?Sized>(&self, view: &mut V, binding: &FieldBinding) {
        view.set_fallback_visible(false);
        view.set_enhanced_visible(true);
        if let Some(marker) = &binding.enabled_marker_id {
            view.set_marker(marker, "true");
        }
    }

    pub fn restore<V: FieldView + ?Sized>(&self, view: &mut V) {
        view.set_enhanced_visible(false);
        view.set_fallback_visible(true);
    }
}
