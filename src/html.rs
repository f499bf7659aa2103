//! Escape-by-default markup building
//!
//! Everything that reaches the output goes through [`Markup`]. Plain strings
//! are escaped on the way in; trusted fragments (hint HTML, an explicit HTML
//! validation message) have to be wrapped with [`Markup::trusted`], so an
//! unescaped interpolation is always visible at the call site.

use std::fmt;

use askama::{Html as HtmlEscaper, MarkupDisplay};

/// Escape text for use in element content or a quoted attribute value
pub fn escape(text: &str) -> String {
    MarkupDisplay::new_unsafe(text, HtmlEscaper).to_string()
}

/// A fragment of HTML that is safe to emit as-is
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Markup(String);

impl Markup {
    pub fn new() -> Self {
        Self(String::new())
    }

    /// Escaped text content
    pub fn text(text: &str) -> Self {
        Self(escape(text))
    }

    /// Opt out of escaping for a fragment the caller vouches for
    pub fn trusted(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn push(&mut self, other: &Markup) {
        self.0.push_str(&other.0);
    }

    pub fn push_text(&mut self, text: &str) {
        self.0.push_str(&escape(text));
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn push_raw(&mut self, html: &str) {
        self.0.push_str(html);
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromIterator<Markup> for Markup {
    fn from_iter<I: IntoIterator<Item = Markup>>(iter: I) -> Self {
        let mut out = Markup::new();
        for part in iter {
            out.push(&part);
        }
        out
    }
}

/// Space-separated CSS class list built from conditional parts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(Vec<String>);

impl ClassList {
    pub fn new(base: &str) -> Self {
        Self::default().with(base)
    }

    /// Add a class token; blank tokens are ignored
    pub fn with(mut self, class: &str) -> Self {
        let class = class.trim();
        if !class.is_empty() {
            self.0.push(class.to_string());
        }
        self
    }

    pub fn with_if(self, condition: bool, class: &str) -> Self {
        if condition { self.with(class) } else { self }
    }

    pub fn with_opt(self, class: Option<&str>) -> Self {
        match class {
            Some(class) => self.with(class),
            None => self,
        }
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum AttrValue {
    Text(String),
    Flag,
}

/// Builder for a single HTML element
///
/// Attributes keep insertion order; setting an attribute that is already
/// present replaces its value in place, so output is stable across renders.
#[derive(Debug, Clone)]
pub struct Element {
    name: &'static str,
    void: bool,
    attrs: Vec<(String, AttrValue)>,
    body: Markup,
}

impl Element {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            void: false,
            attrs: Vec::new(),
            body: Markup::new(),
        }
    }

    /// Element without content or closing tag (`<input />`)
    pub fn void(name: &'static str) -> Self {
        Self {
            void: true,
            ..Self::new(name)
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name.into(), AttrValue::Text(value.into()));
        self
    }

    /// Set the attribute only when the value is present and not blank
    pub fn attr_opt(self, name: &str, value: Option<&str>) -> Self {
        match value.filter(|v| !v.trim().is_empty()) {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Boolean attribute (`checked`, `selected`, `disabled`)
    pub fn flag(mut self, name: &str, on: bool) -> Self {
        if on {
            self.set(name.to_string(), AttrValue::Flag);
        }
        self
    }

    pub fn class(self, classes: ClassList) -> Self {
        self.attr("class", classes.to_string())
    }

    /// Extend with caller-supplied attributes, skipping empty values and
    /// names that are not valid attribute names
    pub fn attrs<'a, I>(mut self, attrs: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        for (name, value) in attrs {
            if value.is_empty() {
                continue;
            }
            if !is_attribute_name(name) {
                log::warn!("Dropping attribute with invalid name {:?}", name);
                continue;
            }
            self.set(name.clone(), AttrValue::Text(value.clone()));
        }
        self
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|(n, _)| n == name)
    }

    pub fn child(mut self, markup: Markup) -> Self {
        self.body.push(&markup);
        self
    }

    pub fn children<I: IntoIterator<Item = Markup>>(mut self, parts: I) -> Self {
        for part in parts {
            self.body.push(&part);
        }
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.body.push_text(text);
        self
    }

    pub fn render(&self) -> Markup {
        let mut out = Markup::new();
        out.push_raw("<");
        out.push_raw(self.name);
        for (name, value) in &self.attrs {
            out.push_raw(" ");
            out.push_raw(name);
            if let AttrValue::Text(value) = value {
                out.push_raw("=\"");
                out.push_text(value);
                out.push_raw("\"");
            }
        }
        if self.void {
            out.push_raw(" />");
            return out;
        }
        out.push_raw(">");
        out.push(&self.body);
        out.push_raw("</");
        out.push_raw(self.name);
        out.push_raw(">");
        out
    }

    fn set(&mut self, name: String, value: AttrValue) {
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }
}

fn is_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'))
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod html_tests;
