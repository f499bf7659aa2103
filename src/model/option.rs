//! Choices offered by select, radio and checkbox controls

use serde::{Deserialize, Serialize};

/// A single option: the submitted value and the text shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GdsOption {
    pub value: String,
    pub label: String,
}

impl GdsOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Companion `<input type="hidden">` posted back with a composite list item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiddenField {
    pub name: String,
    pub value: String,
}

/// Rendering view of one composite list item
///
/// Produced by a caller-supplied mapping from the domain object, so the
/// renderer never inspects the object itself.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemProjection {
    pub label: String,
    pub checked: bool,
    pub hidden_fields: Vec<HiddenField>,
}

impl ItemProjection {
    pub fn new(label: impl Into<String>, checked: bool) -> Self {
        Self {
            label: label.into(),
            checked,
            hidden_fields: Vec::new(),
        }
    }

    pub fn with_hidden(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.hidden_fields.push(HiddenField {
            name: name.into(),
            value: value.into(),
        });
        self
    }
}

/// Project every item with the caller's mapping
pub fn project<T, F>(items: &[T], projection: F) -> Vec<ItemProjection>
where
    F: Fn(&T) -> ItemProjection,
{
    items.iter().map(projection).collect()
}

/// Element id for an option: `{name}_{value}` with spaces turned into `_`
pub fn option_id(name: &str, value: &str) -> String {
    format!("{}_{}", name, value.replace(' ', "_"))
}

/// Whether a model value selects an option (trimmed, case-insensitive)
pub fn is_selected(selected: Option<&str>, value: &str) -> bool {
    match selected {
        Some(selected) => selected.trim().to_lowercase() == value.trim().to_lowercase(),
        None => false,
    }
}
