//! Multi-line text areas, plain and with a character/word count

use serde::Deserialize;

use super::field::{FieldAttrs, FieldScope};
use super::{Component, RenderContext};
use crate::error::FormError;
use crate::html::{ClassList, Element, Markup};
use crate::model::ModelExpr;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TextareaAttrs {
    #[serde(flatten)]
    pub field: FieldAttrs,
    /// Width token; `components.textarea_width` when unset
    pub width_class: Option<String>,
    /// Visible rows; `components.textarea_rows` when unset
    pub rows: Option<u32>,
    pub placeholder: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Textarea {
    pub expr: ModelExpr,
    pub attrs: TextareaAttrs,
}

impl Textarea {
    pub fn new(expr: ModelExpr) -> Self {
        Self {
            expr,
            attrs: TextareaAttrs::default(),
        }
    }

    pub fn with_attrs(mut self, attrs: TextareaAttrs) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn field(mut self, field: FieldAttrs) -> Self {
        self.attrs.field = field;
        self
    }

    pub fn rows(mut self, rows: u32) -> Self {
        self.attrs.rows = Some(rows);
        self
    }
}

fn textarea_element(
    scope: &FieldScope<'_>,
    attrs: &TextareaAttrs,
    ctx: &RenderContext<'_>,
    extra_class: Option<&str>,
) -> Element {
    let width = attrs
        .width_class
        .as_deref()
        .unwrap_or(&ctx.config.components.textarea_width);
    let rows = attrs.rows.unwrap_or(ctx.config.components.textarea_rows);
    let classes = ClassList::new("govuk-textarea")
        .with_opt(extra_class)
        .with(width)
        .with_if(scope.has_error(), "govuk-textarea--error");
    let value = scope.expr.value.as_text().unwrap_or_default();

    let textarea = Element::new("textarea")
        .class(classes)
        .attr("id", scope.field_id.as_str())
        .attr("name", scope.expr.name.as_str())
        .attr("rows", rows.to_string())
        .attr_opt("placeholder", attrs.placeholder.as_deref())
        .text(&value);
    scope.finish_control(textarea)
}

impl Component for Textarea {
    fn render(&self, ctx: &RenderContext<'_>) -> Result<Markup, FormError> {
        let scope = FieldScope::new(&self.attrs.field, &self.expr, ctx);
        let label = scope.label(
            ClassList::new("govuk-label").with("govuk-label--s"),
            &scope.field_id,
        );
        let textarea = textarea_element(&scope, &self.attrs, ctx, None);

        let container = scope
            .container(scope.form_group_classes(), None)
            .child(label.render())
            .child(scope.hint())
            .child(scope.error())
            .child(textarea.render());
        Ok(container.render())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CharacterCountAttrs {
    #[serde(flatten)]
    pub textarea: TextareaAttrs,
    /// Model-state key holding the separate word/character count error
    pub word_count_error_for: Option<String>,
    pub max_words: Option<u32>,
    pub max_length: Option<u32>,
}

/// Textarea wrapped in the GOV.UK character count module
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterCount {
    pub expr: ModelExpr,
    pub attrs: CharacterCountAttrs,
}

impl CharacterCount {
    pub fn new(expr: ModelExpr) -> Self {
        Self {
            expr,
            attrs: CharacterCountAttrs::default(),
        }
    }

    pub fn with_attrs(mut self, attrs: CharacterCountAttrs) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn max_words(mut self, words: u32) -> Self {
        self.attrs.max_words = Some(words);
        self
    }

    pub fn word_count_error_for(mut self, key: impl Into<String>) -> Self {
        self.attrs.word_count_error_for = Some(key.into());
        self
    }
}

impl Component for CharacterCount {
    fn render(&self, ctx: &RenderContext<'_>) -> Result<Markup, FormError> {
        let attrs = &self.attrs;
        let scope = FieldScope::new(&attrs.textarea.field, &self.expr, ctx);

        let classes = ClassList::new("govuk-form-group")
            .with("govuk-character-count")
            .with_if(attrs.textarea.field.conditional, "conditional-field")
            .with_if(scope.has_error(), "govuk-form-group--error");

        let label = Element::new("div")
            .class(ClassList::new("govuk-label-wrapper"))
            .child(
                scope
                    .label(
                        ClassList::new("govuk-label").with("govuk-label--s"),
                        &scope.field_id,
                    )
                    .render(),
            );

        let textarea = textarea_element(
            &scope,
            &attrs.textarea,
            ctx,
            Some("govuk-js-character-count"),
        );

        let word_count_error = attrs
            .word_count_error_for
            .as_deref()
            .and_then(|key| ctx.model_state.entry(key))
            .and_then(|entry| entry.first_error())
            .map(|message| {
                Element::new("div")
                    .class(
                        ClassList::new("govuk-character-count__message").with("govuk-error-message"),
                    )
                    .text(message)
                    .render()
            })
            .unwrap_or_default();

        let container = scope
            .container(classes, None)
            .attr("data-module", "govuk-character-count")
            .attr_opt(
                "data-maxwords",
                attrs.max_words.map(|n| n.to_string()).as_deref(),
            )
            .attr_opt(
                "data-maxlength",
                attrs.max_length.map(|n| n.to_string()).as_deref(),
            )
            .child(label.render())
            .child(scope.hint())
            .child(scope.error())
            .child(textarea.render())
            .child(word_count_error);
        Ok(container.render())
    }
}
