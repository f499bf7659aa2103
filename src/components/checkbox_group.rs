//! Checkbox group, for plain string choices or composite list items

use serde::Deserialize;

use super::field::{FieldAttrs, FieldScope};
use super::{Component, RenderContext};
use crate::error::FormError;
use crate::html::{ClassList, Element, Markup};
use crate::model::{GdsOption, ItemProjection, ModelExpr, option_id};

const DEFAULT_LEGEND_CLASS: &str = "govuk-fieldset__legend--l";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CheckboxGroupAttrs {
    #[serde(flatten)]
    pub field: FieldAttrs,
    /// Extra class on every checkbox label
    pub label_css_class: Option<String>,
    /// Legend size modifier, `govuk-fieldset__legend--l` when unset
    pub legend_class: Option<String>,
}

/// What the group renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckboxItems {
    /// One checkbox per option, checked when the model's selected values
    /// contain the option value (case-insensitive)
    Simple(Vec<GdsOption>),
    /// One checkbox per projected item, posted back as
    /// `{name}[{index}].{value_property}` with hidden companion fields
    Composite {
        value_property: String,
        items: Vec<ItemProjection>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckboxGroup {
    pub expr: ModelExpr,
    pub attrs: CheckboxGroupAttrs,
    pub items: CheckboxItems,
}

impl CheckboxGroup {
    pub fn simple(expr: ModelExpr, options: Vec<GdsOption>) -> Self {
        Self {
            expr,
            attrs: CheckboxGroupAttrs::default(),
            items: CheckboxItems::Simple(options),
        }
    }

    /// Composite list bound at `name`; the caller projects each domain item
    pub fn composite(
        name: impl Into<String>,
        value_property: impl Into<String>,
        items: Vec<ItemProjection>,
    ) -> Self {
        Self {
            expr: ModelExpr::empty(name),
            attrs: CheckboxGroupAttrs::default(),
            items: CheckboxItems::Composite {
                value_property: value_property.into(),
                items,
            },
        }
    }

    pub fn with_attrs(mut self, attrs: CheckboxGroupAttrs) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn field(mut self, field: FieldAttrs) -> Self {
        self.attrs.field = field;
        self
    }

    fn item_label(&self, target: &str, text: &str) -> Markup {
        Element::new("label")
            .class(
                ClassList::new("govuk-label")
                    .with("govuk-checkboxes__label")
                    .with_opt(self.attrs.label_css_class.as_deref()),
            )
            .attr("for", target)
            .text(text)
            .render()
    }

    fn checkbox(&self, id: &str, name: &str, value: &str, checked: bool) -> Markup {
        Element::void("input")
            .class(ClassList::new("govuk-checkboxes__input"))
            .attr("id", id)
            .attr("name", name)
            .attr("type", "checkbox")
            .attr("value", value)
            .flag("checked", checked)
            .flag("disabled", self.attrs.field.disabled)
            .render()
    }

    fn simple_items(&self, field_id: &str, options: &[GdsOption]) -> Markup {
        let selected: Vec<String> = self
            .expr
            .value
            .selected_values()
            .iter()
            .map(|s| s.to_lowercase())
            .collect();
        options
            .iter()
            .map(|option| {
                let id = option_id(field_id, &option.value);
                let checked = selected.contains(&option.value.to_lowercase());
                item_div(vec![
                    self.checkbox(&id, &self.expr.name, &option.value, checked),
                    self.item_label(&id, &option.label),
                ])
            })
            .collect()
    }

    fn composite_items(&self, field_id: &str, value_property: &str, items: &[ItemProjection]) -> Markup {
        let name = &self.expr.name;
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let mut parts: Vec<Markup> = item
                    .hidden_fields
                    .iter()
                    .map(|hidden| {
                        Element::void("input")
                            .attr("type", "hidden")
                            .attr("name", format!("{}[{}].{}", name, index, hidden.name))
                            .attr("value", hidden.value.as_str())
                            .render()
                    })
                    .collect();
                let id = format!("{}_{}__{}", field_id, index, value_property);
                let checkbox_name = format!("{}[{}].{}", name, index, value_property);
                parts.push(self.checkbox(&id, &checkbox_name, "true", item.checked));
                parts.push(self.item_label(&id, &item.label.replace('_', " ")));
                item_div(parts)
            })
            .collect()
    }
}

fn item_div(parts: Vec<Markup>) -> Markup {
    Element::new("div")
        .class(ClassList::new("govuk-checkboxes__item"))
        .children(parts)
        .render()
}

impl Component for CheckboxGroup {
    fn render(&self, ctx: &RenderContext<'_>) -> Result<Markup, FormError> {
        let scope = FieldScope::new(&self.attrs.field, &self.expr, ctx);

        let items = match &self.items {
            CheckboxItems::Simple(options) => self.simple_items(&scope.field_id, options),
            CheckboxItems::Composite {
                value_property,
                items,
            } => {
                if value_property.trim().is_empty() {
                    return Err(FormError::MissingAttribute {
                        component: "checkbox group",
                        attribute: "item_value_property",
                    });
                }
                self.composite_items(&scope.field_id, value_property, items)
            }
        };

        let legend = Element::new("legend")
            .class(
                ClassList::new("govuk-fieldset__legend").with(
                    self.attrs
                        .legend_class
                        .as_deref()
                        .unwrap_or(DEFAULT_LEGEND_CLASS),
                ),
            )
            .text(scope.label_text());

        let checkboxes = Element::new("div")
            .class(ClassList::new("govuk-checkboxes"))
            .attr("data-module", "govuk-checkboxes")
            .attr("id", format!("{}_checkboxes", scope.field_id))
            .child(items);

        let fieldset = Element::new("fieldset")
            .class(ClassList::new("govuk-fieldset"))
            .attr_opt("aria-describedby", scope.control_described_by().as_deref())
            .child(legend.render())
            .child(scope.hint())
            .child(scope.error())
            .child(checkboxes.render());

        let container = scope
            .container(scope.form_group_classes(), Some(&scope.field_id))
            .child(fieldset.render());
        Ok(container.render())
    }
}
