//! Autocomplete text input
//!
//! Renders a working plain input for the submission field plus the hooks the
//! browser script enhances: a second label for the enhanced input, an empty
//! container the control is built into, and the per-field init script.

use serde::Deserialize;

use super::field::{FieldAttrs, FieldScope};
use super::{Component, RenderContext};
use crate::autocomplete::{FieldBinding, init_script};
use crate::error::FormError;
use crate::html::{ClassList, Element, Markup};
use crate::model::ModelExpr;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AutocompleteAttrs {
    #[serde(flatten)]
    pub field: FieldAttrs,
    /// Lookup endpoint; required
    pub api_url: Option<String>,
    /// Width token; `components.autocomplete_width` when unset
    pub width_class: Option<String>,
    /// Hidden input flipped to `true` once the enhancement runs
    pub enabled_marker_id: Option<String>,
    /// Submit suggestion values (ids) rather than labels
    pub submit_value: bool,
    /// Text shown in the enhanced input instead of the bound value
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Autocomplete {
    pub expr: ModelExpr,
    pub attrs: AutocompleteAttrs,
}

impl Autocomplete {
    pub fn new(expr: ModelExpr, api_url: impl Into<String>) -> Self {
        Self {
            expr,
            attrs: AutocompleteAttrs {
                api_url: Some(api_url.into()),
                ..AutocompleteAttrs::default()
            },
        }
    }

    pub fn with_attrs(mut self, attrs: AutocompleteAttrs) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn field(mut self, field: FieldAttrs) -> Self {
        self.attrs.field = field;
        self
    }

    pub fn enabled_marker(mut self, id: impl Into<String>) -> Self {
        self.attrs.enabled_marker_id = Some(id.into());
        self
    }

    /// Post the suggestion value and show `display_name` until the user types
    pub fn submit_value(mut self, display_name: Option<String>) -> Self {
        self.attrs.submit_value = true;
        self.attrs.display_name = display_name;
        self
    }

    /// Binding the init script hands to the browser instance
    pub fn binding(&self, field_id: &str) -> Result<FieldBinding, FormError> {
        let endpoint = self
            .attrs
            .api_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or(FormError::MissingAttribute {
                component: "autocomplete",
                attribute: "api_url",
            })?;
        let value = self.expr.value.as_text().unwrap_or_default();
        let display = self.attrs.display_name.clone().unwrap_or(value);
        let mut binding = FieldBinding::for_field(field_id, endpoint, display)
            .submitting_value(self.attrs.submit_value);
        if let Some(marker) = self.attrs.enabled_marker_id.as_deref() {
            binding = binding.with_enabled_marker(marker);
        }
        Ok(binding)
    }
}

impl Component for Autocomplete {
    fn render(&self, ctx: &RenderContext<'_>) -> Result<Markup, FormError> {
        let attrs = &self.attrs;
        let scope = FieldScope::new(&attrs.field, &self.expr, ctx);
        let binding = self.binding(&scope.field_id)?;
        let width = attrs
            .width_class
            .as_deref()
            .unwrap_or(&ctx.config.components.autocomplete_width);

        let fallback_label = scope.label(
            ClassList::new("govuk-label").with("js-hidden"),
            &binding.hidden_id,
        );
        let enhanced_label = scope
            .label(ClassList::new("govuk-label"), &binding.input_id)
            .flag("hidden", true);

        let value = self.expr.value.as_text().unwrap_or_default();
        let fallback_input = Element::void("input")
            .class(
                ClassList::new("govuk-input")
                    .with(width)
                    .with_if(scope.has_error(), "govuk-input--error"),
            )
            .attr("id", binding.hidden_id.as_str())
            .attr("name", self.expr.name.as_str())
            .attr("type", "text")
            .attr("value", value);
        let fallback_input = scope.finish_control(fallback_input);

        let container_div = Element::new("div").attr("id", binding.container_id.as_str());
        let script = init_script(&binding, &ctx.config.autocomplete, width)?;

        let container = scope
            .container(scope.form_group_classes(), None)
            .child(fallback_label.render())
            .child(enhanced_label.render())
            .child(scope.hint())
            .child(scope.error())
            .child(fallback_input.render())
            .child(container_div.render())
            .child(script);
        Ok(container.render())
    }
}
