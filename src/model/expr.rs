//! Bind targets: a property name plus the value currently held by the page model

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

/// Scalar stored inside a composite list record
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    /// Truthiness used for checkbox `checked` state
    pub fn is_true(&self) -> bool {
        match self {
            Scalar::Bool(b) => *b,
            Scalar::Text(s) => s.trim().eq_ignore_ascii_case("true"),
            Scalar::Int(_) | Scalar::Float(_) => false,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Float(x) => write!(f, "{}", x),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

/// One item of a composite list (e.g. a row of checkbox options loaded from a file)
pub type Record = BTreeMap<String, Scalar>;

/// Value held by the page model for a bound property
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(untagged)]
pub enum ModelValue {
    #[default]
    #[serde(skip_deserializing)]
    Empty,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<String>),
    Records(Vec<Record>),
}

impl ModelValue {
    /// Text shown in single-value controls; `None` for empty and list values
    pub fn as_text(&self) -> Option<String> {
        match self {
            ModelValue::Empty | ModelValue::List(_) | ModelValue::Records(_) => None,
            ModelValue::Bool(b) => Some(b.to_string()),
            ModelValue::Int(i) => Some(i.to_string()),
            ModelValue::Float(x) => Some(x.to_string()),
            ModelValue::Text(s) => Some(s.clone()),
        }
    }

    /// Values counted as selected by multi-choice controls
    pub fn selected_values(&self) -> Vec<String> {
        match self {
            ModelValue::List(items) => items.clone(),
            ModelValue::Records(_) => Vec::new(),
            other => other.as_text().into_iter().collect(),
        }
    }

    /// Single selected value for radio-like controls: the text, or the first list entry
    pub fn first_selected(&self) -> Option<String> {
        match self {
            ModelValue::List(items) => items.first().cloned(),
            other => other.as_text(),
        }
    }
}

impl From<&str> for ModelValue {
    fn from(value: &str) -> Self {
        ModelValue::Text(value.to_string())
    }
}

impl From<String> for ModelValue {
    fn from(value: String) -> Self {
        ModelValue::Text(value)
    }
}

impl From<bool> for ModelValue {
    fn from(value: bool) -> Self {
        ModelValue::Bool(value)
    }
}

impl From<i64> for ModelValue {
    fn from(value: i64) -> Self {
        ModelValue::Int(value)
    }
}

impl From<Vec<String>> for ModelValue {
    fn from(value: Vec<String>) -> Self {
        ModelValue::List(value)
    }
}

impl From<Vec<&str>> for ModelValue {
    fn from(value: Vec<&str>) -> Self {
        ModelValue::List(value.into_iter().map(str::to_string).collect())
    }
}

impl<T: Into<ModelValue>> From<Option<T>> for ModelValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

/// Property name and current value of a bind target
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModelExpr {
    pub name: String,
    pub value: ModelValue,
}

impl ModelExpr {
    pub fn new(name: impl Into<String>, value: impl Into<ModelValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Bind target with no model value
    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, ModelValue::Empty)
    }

    /// Default element id: the property path with `.` replaced by `_`
    pub fn default_id(&self) -> String {
        self.name.replace('.', "_")
    }
}
