//! Select dropdown

use serde::Deserialize;

use super::field::{FieldAttrs, FieldScope};
use super::{Component, RenderContext};
use crate::error::FormError;
use crate::html::{ClassList, Element, Markup};
use crate::model::{GdsOption, ModelExpr, is_selected, option_id};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SelectAttrs {
    #[serde(flatten)]
    pub field: FieldAttrs,
    pub options: Option<Vec<GdsOption>>,
    /// Leading disabled prompt option; on unless set to false
    pub include_default_option: Option<bool>,
    /// Prompt text; `components.default_option_text` when unset
    pub default_option_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub expr: ModelExpr,
    pub attrs: SelectAttrs,
}

impl Select {
    pub fn new(expr: ModelExpr, options: Vec<GdsOption>) -> Self {
        Self {
            expr,
            attrs: SelectAttrs {
                options: Some(options),
                ..SelectAttrs::default()
            },
        }
    }

    pub fn with_attrs(mut self, attrs: SelectAttrs) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn field(mut self, field: FieldAttrs) -> Self {
        self.attrs.field = field;
        self
    }

    pub fn without_default_option(mut self) -> Self {
        self.attrs.include_default_option = Some(false);
        self
    }

    pub fn default_option_text(mut self, text: impl Into<String>) -> Self {
        self.attrs.default_option_text = Some(text.into());
        self
    }
}

impl Component for Select {
    fn render(&self, ctx: &RenderContext<'_>) -> Result<Markup, FormError> {
        let attrs = &self.attrs;
        let options = attrs
            .options
            .as_ref()
            .ok_or_else(|| FormError::MissingOptions {
                component: "select",
                field: self.expr.name.clone(),
            })?;
        let scope = FieldScope::new(&attrs.field, &self.expr, ctx);
        let selected = self.expr.value.as_text();
        let nothing_selected = selected.as_deref().is_none_or(str::is_empty);

        let mut option_markup = Markup::new();
        if attrs.include_default_option.unwrap_or(true) {
            let text = attrs
                .default_option_text
                .as_deref()
                .unwrap_or(&ctx.config.components.default_option_text);
            let prompt = Element::new("option")
                .attr("value", "")
                .flag("disabled", true)
                .flag("selected", nothing_selected)
                .text(text);
            option_markup.push(&prompt.render());
        }
        for option in options {
            let element = Element::new("option")
                .attr("id", option_id(&scope.field_id, &option.value))
                .attr("value", option.value.as_str())
                .flag("selected", is_selected(selected.as_deref(), &option.value))
                .text(&option.label);
            option_markup.push(&element.render());
        }

        let select = Element::new("select")
            .class(ClassList::new("govuk-select").with_if(scope.has_error(), "govuk-select--error"))
            .attr("id", scope.field_id.as_str())
            .attr("name", self.expr.name.as_str())
            .child(option_markup);
        let select = scope.finish_control(select);

        let label = scope.label(
            ClassList::new("govuk-label").with("govuk-label--s"),
            &scope.field_id,
        );

        let container = scope
            .container(scope.form_group_classes(), None)
            .child(label.render())
            .child(scope.hint())
            .child(scope.error())
            .child(select.render());
        Ok(container.render())
    }
}
