//! The surface an autocomplete field draws on

use super::suggestion::Suggestion;
use crate::html::Markup;

/// One rendered menu entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub suggestion: Suggestion,
    /// Escaped label with the query occurrences in `<strong>`
    pub markup: Markup,
}

/// Menu contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Menu {
    Cleared,
    /// Query too short; only the "continue entering" footer
    TypeMore { after: String },
    NoResults { message: String },
    Suggestions {
        before: String,
        after: String,
        items: Vec<MenuItem>,
    },
}

impl Menu {
    pub fn items(&self) -> &[MenuItem] {
        match self {
            Menu::Suggestions { items, .. } => items,
            _ => &[],
        }
    }
}

/// Everything an [`AutocompleteField`](super::AutocompleteField) reads or
/// writes outside itself: a DOM, a terminal, or a recording fake
pub trait FieldView {
    /// Current text of the enhanced input
    fn input_value(&self) -> String;

    fn set_input_value(&mut self, value: &str);

    fn set_hidden_value(&mut self, value: &str);

    fn render_menu(&mut self, menu: Menu);

    fn set_fallback_visible(&mut self, visible: bool);

    fn set_enhanced_visible(&mut self, visible: bool);

    /// Write `value` into the input with id `marker_id`
    fn set_marker(&mut self, _marker_id: &str, _value: &str) {}
}
