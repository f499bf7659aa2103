//! Attributes and markup shared by every form component
//!
//! Mirrors the template-author vocabulary: label, hint, validation override,
//! error key, id overrides, conditional display and the parent/question
//! tracking identifiers read by the page's conditional-display script.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::RenderContext;
use crate::html::{ClassList, Element, Markup};
use crate::model::{ModelExpr, ModelStateEntry, ValidationMessage};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FieldAttrs {
    /// Label text; the property name when unset
    pub label_text: Option<String>,
    /// Trusted hint fragment rendered inside `govuk-hint`
    pub hint_html: Option<String>,
    pub hint_id: Option<String>,
    pub label_aria_describedby: Option<String>,
    /// Plain-text replacement for the model's error messages
    pub validation_message: Option<String>,
    /// Trusted HTML replacement for the model's error messages
    pub validation_message_html: Option<String>,
    /// Model-state key to read errors from instead of the property name
    pub error_key: Option<String>,
    pub field_id: Option<String>,
    /// Id of the outer form-group container
    pub id: Option<String>,
    pub conditional: bool,
    pub data_parents: Option<String>,
    pub data_question_id: Option<String>,
    pub readonly: bool,
    pub disabled: bool,
    /// Extra attributes for the control; these win over generated ones
    pub additional_attributes: BTreeMap<String, String>,
}

impl FieldAttrs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, text: impl Into<String>) -> Self {
        self.label_text = Some(text.into());
        self
    }

    pub fn hint_html(mut self, html: impl Into<String>) -> Self {
        self.hint_html = Some(html.into());
        self
    }

    pub fn hint_id(mut self, id: impl Into<String>) -> Self {
        self.hint_id = Some(id.into());
        self
    }

    pub fn described_by(mut self, id: impl Into<String>) -> Self {
        self.label_aria_describedby = Some(id.into());
        self
    }

    pub fn validation_message(mut self, message: impl Into<String>) -> Self {
        self.validation_message = Some(message.into());
        self
    }

    pub fn validation_message_html(mut self, html: impl Into<String>) -> Self {
        self.validation_message_html = Some(html.into());
        self
    }

    pub fn error_key(mut self, key: impl Into<String>) -> Self {
        self.error_key = Some(key.into());
        self
    }

    pub fn field_id(mut self, id: impl Into<String>) -> Self {
        self.field_id = Some(id.into());
        self
    }

    pub fn container_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn conditional(mut self, parents: impl Into<String>, question_id: impl Into<String>) -> Self {
        self.conditional = true;
        self.data_parents = Some(parents.into());
        self.data_question_id = Some(question_id.into());
        self
    }

    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.additional_attributes.insert(name.into(), value.into());
        self
    }
}

/// Per-render view of a component's shared attributes against one bind target
pub(crate) struct FieldScope<'a> {
    pub attrs: &'a FieldAttrs,
    pub expr: &'a ModelExpr,
    pub entry: Option<&'a ModelStateEntry>,
    pub field_id: String,
}

impl<'a> FieldScope<'a> {
    pub fn new(attrs: &'a FieldAttrs, expr: &'a ModelExpr, ctx: &RenderContext<'a>) -> Self {
        let key = attrs.error_key.as_deref().unwrap_or(&expr.name);
        let state = ctx.model_state;
        let field_id = attrs
            .field_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| expr.default_id());
        Self {
            attrs,
            expr,
            entry: state.entry(key),
            field_id,
        }
    }

    pub fn has_error(&self) -> bool {
        self.entry.is_some_and(ModelStateEntry::has_errors)
    }

    pub fn label_text(&self) -> &str {
        self.attrs.label_text.as_deref().unwrap_or(&self.expr.name)
    }

    /// Id the hint is rendered with and that labels/controls point at
    pub fn described_by_id(&self) -> String {
        [&self.attrs.label_aria_describedby, &self.attrs.hint_id]
            .into_iter()
            .flatten()
            .find(|id| !id.is_empty())
            .cloned()
            .unwrap_or_else(|| format!("{}-hint", self.field_id))
    }

    pub fn has_hint(&self) -> bool {
        self.attrs
            .hint_html
            .as_deref()
            .is_some_and(|h| !h.trim().is_empty())
    }

    pub fn hint(&self) -> Markup {
        match self.attrs.hint_html.as_deref().filter(|h| !h.trim().is_empty()) {
            Some(hint) => Element::new("div")
                .attr("id", self.described_by_id())
                .class(ClassList::new("govuk-hint"))
                .child(Markup::trusted(hint))
                .render(),
            None => Markup::new(),
        }
    }

    /// `aria-describedby` target for the control, when a hint is shown
    pub fn control_described_by(&self) -> Option<String> {
        self.has_hint().then(|| self.described_by_id())
    }

    fn validation_override(&self) -> Option<ValidationMessage> {
        let html = self
            .attrs
            .validation_message_html
            .clone()
            .map(ValidationMessage::Html);
        let text = self
            .attrs
            .validation_message
            .clone()
            .map(ValidationMessage::Text);
        html.filter(|m| !m.is_blank()).or(text)
    }

    pub fn error(&self) -> Markup {
        let message = self.validation_override();
        self.entry
            .and_then(|entry| entry.error_markup(message.as_ref()))
            .unwrap_or_default()
    }

    pub fn form_group_classes(&self) -> ClassList {
        ClassList::new("govuk-form-group")
            .with_if(self.attrs.conditional, "conditional-field")
            .with_if(self.has_error(), "govuk-form-group--error")
    }

    /// Outer form-group `<div>` carrying the container id and tracking attributes
    pub fn container(&self, classes: ClassList, default_id: Option<&str>) -> Element {
        let id = self
            .attrs
            .id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .or(default_id);
        Element::new("div")
            .class(classes)
            .attr_opt("id", id)
            .attr_opt("data-parents", self.attrs.data_parents.as_deref())
            .attr_opt("data-questionId", self.attrs.data_question_id.as_deref())
    }

    /// Label pointing at `target`; carries `aria-describedby` only when asked for
    pub fn label(&self, classes: ClassList, target: &str) -> Element {
        Element::new("label")
            .class(classes)
            .attr("for", target)
            .attr_opt(
                "aria-describedby",
                self.attrs.label_aria_describedby.as_deref(),
            )
            .text(self.label_text())
    }

    /// Apply readonly/disabled, caller attributes, then ARIA state
    pub fn finish_control(&self, control: Element) -> Element {
        let control = control
            .flag("readonly", self.attrs.readonly)
            .flag("disabled", self.attrs.disabled)
            .attrs(&self.attrs.additional_attributes);
        let control = match self.control_described_by() {
            Some(id) if !control.has_attr("aria-describedby") => control.attr("aria-describedby", id),
            _ => control,
        };
        if self.has_error() && !control.has_attr("aria-invalid") {
            control.attr("aria-invalid", "true")
        } else {
            control
        }
    }
}
