//! Radio button group

use serde::Deserialize;

use super::field::{FieldAttrs, FieldScope};
use super::{Component, RenderContext};
use crate::error::FormError;
use crate::html::{ClassList, Element, Markup};
use crate::model::{GdsOption, ModelExpr, is_selected, option_id};

const DEFAULT_LEGEND_CLASS: &str = "govuk-fieldset__legend--m";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RadioGroupAttrs {
    #[serde(flatten)]
    pub field: FieldAttrs,
    pub options: Option<Vec<GdsOption>>,
    /// Legend size modifier, `govuk-fieldset__legend--m` when unset
    pub legend_class: Option<String>,
    /// Render the radios side by side
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadioGroup {
    pub expr: ModelExpr,
    pub attrs: RadioGroupAttrs,
}

impl RadioGroup {
    pub fn new(expr: ModelExpr, options: Vec<GdsOption>) -> Self {
        Self {
            expr,
            attrs: RadioGroupAttrs {
                options: Some(options),
                ..RadioGroupAttrs::default()
            },
        }
    }

    pub fn with_attrs(mut self, attrs: RadioGroupAttrs) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn field(mut self, field: FieldAttrs) -> Self {
        self.attrs.field = field;
        self
    }

    pub fn inline(mut self) -> Self {
        self.attrs.inline = true;
        self
    }
}

impl Component for RadioGroup {
    fn render(&self, ctx: &RenderContext<'_>) -> Result<Markup, FormError> {
        let attrs = &self.attrs;
        let options = attrs
            .options
            .as_ref()
            .ok_or_else(|| FormError::MissingOptions {
                component: "radio group",
                field: self.expr.name.clone(),
            })?;
        let scope = FieldScope::new(&attrs.field, &self.expr, ctx);
        let selected = self.expr.value.first_selected();

        let items: Markup = options
            .iter()
            .map(|option| {
                let input_id = option_id(&scope.field_id, &option.value);
                let input = Element::void("input")
                    .class(ClassList::new("govuk-radios__input"))
                    .attr("id", input_id.as_str())
                    .attr("name", self.expr.name.as_str())
                    .attr("type", "radio")
                    .attr("value", option.value.as_str())
                    .flag("checked", is_selected(selected.as_deref(), &option.value))
                    .flag("disabled", attrs.field.disabled);
                let label = Element::new("label")
                    .class(ClassList::new("govuk-label").with("govuk-radios__label"))
                    .attr("for", input_id)
                    .text(&option.label);
                Element::new("div")
                    .class(ClassList::new("govuk-radios__item"))
                    .child(input.render())
                    .child(label.render())
                    .render()
            })
            .collect();

        let legend = Element::new("legend")
            .class(
                ClassList::new("govuk-fieldset__legend")
                    .with(attrs.legend_class.as_deref().unwrap_or(DEFAULT_LEGEND_CLASS)),
            )
            .text(scope.label_text());

        let radios = Element::new("div")
            .class(ClassList::new("govuk-radios").with_if(attrs.inline, "govuk-radios--inline"))
            .attr("data-module", "govuk-radios")
            .child(items);

        let fieldset = Element::new("fieldset")
            .class(ClassList::new("govuk-fieldset"))
            .attr_opt("aria-describedby", scope.control_described_by().as_deref())
            .child(legend.render())
            .child(scope.hint())
            .child(scope.error())
            .child(radios.render());

        let container = scope
            .container(scope.form_group_classes(), Some(&scope.field_id))
            .child(fieldset.render());
        Ok(container.render())
    }
}
