//! Turning field descriptions into components

use crate::components::{
    Autocomplete, CharacterCount, CheckboxGroup, Component, DateInput, DateInputAttrs, Input,
    RadioGroup, Select, Textarea,
};
use crate::error::FormError;
use crate::model::{ItemProjection, ModelExpr, ModelValue, Record};

use super::spec::{CheckboxFieldAttrs, FieldSpec, FormSpec};

/// Component for one field, bound against the page model
pub fn build_component(spec: &FormSpec, field: &FieldSpec) -> Result<Box<dyn Component>, FormError> {
    let name = field.target().ok_or(FormError::MissingAttribute {
        component: field.kind(),
        attribute: "for",
    })?;
    let expr = ModelExpr::new(name, spec.value(name));

    let component: Box<dyn Component> = match field {
        FieldSpec::Input(b) => Box::new(Input::new(expr).with_attrs(b.attrs.clone())),
        FieldSpec::Textarea(b) => Box::new(Textarea::new(expr).with_attrs(b.attrs.clone())),
        FieldSpec::CharacterCount(b) => Box::new(CharacterCount::new(expr).with_attrs(b.attrs.clone())),
        FieldSpec::Select(b) => Box::new(Select::new(expr, Vec::new()).with_attrs(b.attrs.clone())),
        FieldSpec::RadioGroup(b) => Box::new(RadioGroup::new(expr, Vec::new()).with_attrs(b.attrs.clone())),
        FieldSpec::CheckboxGroup(b) => Box::new(checkbox_group(expr, &b.attrs)?),
        FieldSpec::DateInput(b) => Box::new(date_input(spec, expr, b.attrs.clone())),
        FieldSpec::Autocomplete(b) => Box::new(Autocomplete::new(expr, "").with_attrs(b.attrs.clone())),
    };
    Ok(component)
}

/// Part names default to `{for}.Day` etc.; part values fall back to the
/// model entry under the part name
fn date_input(spec: &FormSpec, expr: ModelExpr, attrs: DateInputAttrs) -> DateInput {
    let defaults = DateInput::new(expr.clone()).attrs;
    let day_name = attrs.day_name.or(defaults.day_name);
    let month_name = attrs.month_name.or(defaults.month_name);
    let year_name = attrs.year_name.or(defaults.year_name);
    let part_value = |explicit: Option<String>, part: &Option<String>| {
        explicit.or_else(|| part.as_deref().and_then(|key| spec.value(key).as_text()))
    };

    let attrs = DateInputAttrs {
        day_value: part_value(attrs.day_value, &day_name),
        month_value: part_value(attrs.month_value, &month_name),
        year_value: part_value(attrs.year_value, &year_name),
        day_name,
        month_name,
        year_name,
        ..attrs
    };
    DateInput::new(expr).with_attrs(attrs)
}

fn is_composite(value: &ModelValue, attrs: &CheckboxFieldAttrs) -> bool {
    matches!(value, ModelValue::Records(_))
        || attrs.item_value_property.is_some()
        || attrs.item_label_property.is_some()
}

fn checkbox_group(expr: ModelExpr, attrs: &CheckboxFieldAttrs) -> Result<CheckboxGroup, FormError> {
    if !is_composite(&expr.value, attrs) {
        let options = attrs.options.clone().ok_or_else(|| FormError::MissingOptions {
            component: "checkbox group",
            field: expr.name.clone(),
        })?;
        return Ok(CheckboxGroup::simple(expr, options).with_attrs(attrs.group.clone()));
    }

    let required = |value: &Option<String>, attribute: &'static str| {
        value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .ok_or(FormError::MissingAttribute {
                component: "checkbox group",
                attribute,
            })
    };
    let label_property = required(&attrs.item_label_property, "item_label_property")?;
    let value_property = required(&attrs.item_value_property, "item_value_property")?;
    let hidden_properties: Vec<&str> = attrs
        .item_hidden_properties
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    let records: &[Record] = match &expr.value {
        ModelValue::Records(records) => records,
        _ => &[],
    };
    let indexed: Vec<(usize, &Record)> = records.iter().enumerate().collect();
    let items = crate::model::project(&indexed, |&(index, record)| {
        project_record(record, index, &label_property, &value_property, &hidden_properties)
    });

    Ok(CheckboxGroup::composite(expr.name, value_property, items).with_attrs(attrs.group.clone()))
}

/// Missing label falls back to `Item {index}`; hidden properties the record
/// lacks are skipped
fn project_record(
    record: &Record,
    index: usize,
    label_property: &str,
    value_property: &str,
    hidden_properties: &[&str],
) -> ItemProjection {
    let label = record
        .get(label_property)
        .map(ToString::to_string)
        .unwrap_or_else(|| format!("Item {}", index));
    let checked = record.get(value_property).is_some_and(|v| v.is_true());
    hidden_properties
        .iter()
        .filter_map(|property| record.get(*property).map(|value| (*property, value.to_string())))
        .fold(ItemProjection::new(label, checked), |item, (property, value)| {
            item.with_hidden(property, value)
        })
}
