//! Single-line text input

use serde::Deserialize;

use super::field::{FieldAttrs, FieldScope};
use super::{Component, RenderContext};
use crate::error::FormError;
use crate::html::{ClassList, Element, Markup};
use crate::model::ModelExpr;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InputAttrs {
    #[serde(flatten)]
    pub field: FieldAttrs,
    /// Width token; `components.input_width` when unset
    pub width_class: Option<String>,
    /// HTML input type, `text` when unset
    pub input_type: Option<String>,
    pub autocomplete: Option<String>,
    /// Class added to the input and mirrored on the container for the
    /// conditional-display script
    pub conditional_class: Option<String>,
    pub placeholder: Option<String>,
}

/// GOV.UK text input bound to a model value
#[derive(Debug, Clone, PartialEq)]
pub struct Input {
    pub expr: ModelExpr,
    pub attrs: InputAttrs,
}

impl Input {
    pub fn new(expr: ModelExpr) -> Self {
        Self {
            expr,
            attrs: InputAttrs::default(),
        }
    }

    pub fn with_attrs(mut self, attrs: InputAttrs) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn field(mut self, field: FieldAttrs) -> Self {
        self.attrs.field = field;
        self
    }

    pub fn input_type(mut self, input_type: impl Into<String>) -> Self {
        self.attrs.input_type = Some(input_type.into());
        self
    }

    pub fn width_class(mut self, width: impl Into<String>) -> Self {
        self.attrs.width_class = Some(width.into());
        self
    }
}

impl Component for Input {
    fn render(&self, ctx: &RenderContext<'_>) -> Result<Markup, FormError> {
        let attrs = &self.attrs;
        let scope = FieldScope::new(&attrs.field, &self.expr, ctx);
        let has_error = scope.has_error();
        let width = attrs
            .width_class
            .as_deref()
            .unwrap_or(&ctx.config.components.input_width);
        let conditional_class = attrs
            .conditional_class
            .as_deref()
            .filter(|c| !c.trim().is_empty());

        let input_classes = ClassList::new("govuk-input")
            .with(width)
            .with_opt(conditional_class)
            .with_if(has_error, "govuk-input--error");

        let value = self.expr.value.as_text().unwrap_or_default();
        let input = Element::void("input")
            .class(input_classes)
            .attr("id", scope.field_id.as_str())
            .attr("name", self.expr.name.as_str())
            .attr("type", attrs.input_type.as_deref().unwrap_or("text"))
            .attr("value", value)
            .attr_opt("autocomplete", attrs.autocomplete.as_deref())
            .attr_opt("placeholder", attrs.placeholder.as_deref());
        let input = scope.finish_control(input);

        let label = scope.label(ClassList::new("govuk-label"), &scope.field_id);

        let container = scope
            .container(scope.form_group_classes(), None)
            .attr_opt("conditional-class", conditional_class)
            .child(label.render())
            .child(scope.hint())
            .child(scope.error())
            .child(input.render());

        Ok(container.render())
    }
}
