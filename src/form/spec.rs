//! Page description types

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::components::{
    AutocompleteAttrs, CharacterCountAttrs, CheckboxGroupAttrs, DateInputAttrs, InputAttrs,
    RadioGroupAttrs, SelectAttrs, TextareaAttrs,
};
use crate::model::{GdsOption, ModelState, ModelValue};

/// A page: model values, validation errors and an ordered list of fields
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FormSpec {
    pub model: BTreeMap<String, ModelValue>,
    pub errors: BTreeMap<String, ErrorMessages>,
    #[serde(rename = "field")]
    pub fields: Vec<FieldSpec>,
}

impl FormSpec {
    /// Model value bound to `key`; unknown keys are empty
    pub fn value(&self, key: &str) -> ModelValue {
        self.model.get(key).cloned().unwrap_or_default()
    }

    pub fn model_state(&self) -> ModelState {
        let mut state = ModelState::new();
        for (key, messages) in &self.errors {
            for message in messages.iter() {
                state.add_error(key.as_str(), message.as_str());
            }
        }
        state
    }
}

/// One message or several for the same key
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessages {
    One(String),
    Many(Vec<String>),
}

impl ErrorMessages {
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        match self {
            ErrorMessages::One(message) => std::slice::from_ref(message).iter(),
            ErrorMessages::Many(messages) => messages.iter(),
        }
    }
}

/// Attributes of one field plus the model key it binds to
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Bound<A> {
    #[serde(rename = "for")]
    pub target: Option<String>,
    #[serde(flatten)]
    pub attrs: A,
}

/// Checkbox group as described in a page file: plain options, or a
/// `Records` model value projected through the `item_*` properties
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CheckboxFieldAttrs {
    #[serde(flatten)]
    pub group: CheckboxGroupAttrs,
    pub options: Option<Vec<GdsOption>>,
    pub item_label_property: Option<String>,
    pub item_value_property: Option<String>,
    /// Comma-separated record properties posted back as hidden inputs
    pub item_hidden_properties: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FieldSpec {
    Input(Bound<InputAttrs>),
    Textarea(Bound<TextareaAttrs>),
    CharacterCount(Bound<CharacterCountAttrs>),
    Select(Bound<SelectAttrs>),
    RadioGroup(Bound<RadioGroupAttrs>),
    CheckboxGroup(Bound<CheckboxFieldAttrs>),
    DateInput(Bound<DateInputAttrs>),
    Autocomplete(Bound<AutocompleteAttrs>),
}

impl FieldSpec {
    pub fn kind(&self) -> &'static str {
        match self {
            FieldSpec::Input(_) => "input",
            FieldSpec::Textarea(_) => "textarea",
            FieldSpec::CharacterCount(_) => "character-count",
            FieldSpec::Select(_) => "select",
            FieldSpec::RadioGroup(_) => "radio-group",
            FieldSpec::CheckboxGroup(_) => "checkbox-group",
            FieldSpec::DateInput(_) => "date-input",
            FieldSpec::Autocomplete(_) => "autocomplete",
        }
    }

    pub fn target(&self) -> Option<&str> {
        let target = match self {
            FieldSpec::Input(b) => &b.target,
            FieldSpec::Textarea(b) => &b.target,
            FieldSpec::CharacterCount(b) => &b.target,
            FieldSpec::Select(b) => &b.target,
            FieldSpec::RadioGroup(b) => &b.target,
            FieldSpec::CheckboxGroup(b) => &b.target,
            FieldSpec::DateInput(b) => &b.target,
            FieldSpec::Autocomplete(b) => &b.target,
        };
        target.as_deref().filter(|t| !t.trim().is_empty())
    }
}
