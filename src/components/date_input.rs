//! Day / month / year date input

use serde::Deserialize;

use super::field::{FieldAttrs, FieldScope};
use super::{Component, RenderContext};
use crate::error::FormError;
use crate::html::{ClassList, Element, Markup};
use crate::model::ModelExpr;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DateInputAttrs {
    #[serde(flatten)]
    pub field: FieldAttrs,
    pub day_name: Option<String>,
    pub day_value: Option<String>,
    pub month_name: Option<String>,
    pub month_value: Option<String>,
    pub year_name: Option<String>,
    pub year_value: Option<String>,
    /// Month as a `<select>`; on unless set to false
    pub month_as_dropdown: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DateInput {
    pub expr: ModelExpr,
    pub attrs: DateInputAttrs,
}

impl DateInput {
    /// Date input whose parts post back as `{name}.Day`, `{name}.Month`, `{name}.Year`
    pub fn new(expr: ModelExpr) -> Self {
        let name = expr.name.clone();
        Self {
            expr,
            attrs: DateInputAttrs {
                day_name: Some(format!("{}.Day", name)),
                month_name: Some(format!("{}.Month", name)),
                year_name: Some(format!("{}.Year", name)),
                ..DateInputAttrs::default()
            },
        }
    }

    pub fn with_attrs(mut self, attrs: DateInputAttrs) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn field(mut self, field: FieldAttrs) -> Self {
        self.attrs.field = field;
        self
    }

    pub fn values(mut self, day: &str, month: &str, year: &str) -> Self {
        self.attrs.day_value = Some(day.to_string());
        self.attrs.month_value = Some(month.to_string());
        self.attrs.year_value = Some(year.to_string());
        self
    }

    pub fn month_as_text(mut self) -> Self {
        self.attrs.month_as_dropdown = Some(false);
        self
    }
}

/// Month number 1-12 from `"3"`, `"03"` or a month name
pub fn normalize_month(value: &str) -> Option<u32> {
    let value = value.trim();
    if let Ok(month) = value.parse::<u32>() {
        return (1..=12).contains(&month).then_some(month);
    }
    MONTHS
        .iter()
        .position(|name| name.eq_ignore_ascii_case(value))
        .map(|index| index as u32 + 1)
}

fn required<'a>(value: &'a Option<String>, attribute: &'static str) -> Result<&'a str, FormError> {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .ok_or(FormError::MissingAttribute {
            component: "date input",
            attribute,
        })
}

fn date_item(label: &str, control: Element, target: &str) -> Markup {
    let label = Element::new("label")
        .class(ClassList::new("govuk-label").with("govuk-date-input__label"))
        .attr("for", target)
        .text(label);
    let group = Element::new("div")
        .class(ClassList::new("govuk-form-group"))
        .child(label.render())
        .child(control.render());
    Element::new("div")
        .class(ClassList::new("govuk-date-input__item"))
        .child(group.render())
        .render()
}

fn text_part(name: &str, value: Option<&str>, width: &str, has_error: bool) -> Element {
    Element::void("input")
        .class(
            ClassList::new("govuk-input")
                .with("govuk-date-input__input")
                .with(width)
                .with_if(has_error, "govuk-input--error"),
        )
        .attr("id", name)
        .attr("name", name)
        .attr("type", "text")
        .attr("inputmode", "numeric")
        .attr("value", value.unwrap_or_default())
}

fn month_select(name: &str, value: Option<&str>, has_error: bool) -> Element {
    let selected = value.and_then(normalize_month);
    let mut options = Element::new("option").attr("value", "").text("Choose month").render();
    for (index, month) in MONTHS.iter().enumerate() {
        let number = index as u32 + 1;
        let option = Element::new("option")
            .attr("value", number.to_string())
            .flag("selected", selected == Some(number))
            .text(month);
        options.push(&option.render());
    }
    Element::new("select")
        .class(
            ClassList::new("govuk-select")
                .with("govuk-date-input__input")
                .with_if(has_error, "govuk-input--error"),
        )
        .attr("id", name)
        .attr("name", name)
        .child(options)
}

impl Component for DateInput {
    fn render(&self, ctx: &RenderContext<'_>) -> Result<Markup, FormError> {
        let attrs = &self.attrs;
        let day_name = required(&attrs.day_name, "day_name")?;
        let month_name = required(&attrs.month_name, "month_name")?;
        let year_name = required(&attrs.year_name, "year_name")?;

        let scope = FieldScope::new(&attrs.field, &self.expr, ctx);
        let has_error = scope.has_error();

        let day = date_item(
            "Day",
            text_part(day_name, attrs.day_value.as_deref(), "govuk-input--width-2", has_error),
            day_name,
        );
        let month_control = if attrs.month_as_dropdown.unwrap_or(true) {
            month_select(month_name, attrs.month_value.as_deref(), has_error)
        } else {
            text_part(month_name, attrs.month_value.as_deref(), "govuk-input--width-2", has_error)
        };
        let month = date_item("Month", month_control, month_name);
        let year = date_item(
            "Year",
            text_part(year_name, attrs.year_value.as_deref(), "govuk-input--width-4", has_error),
            year_name,
        );

        let date_group = Element::new("div")
            .class(ClassList::new("govuk-date-input"))
            .attr("id", format!("{}_date", scope.field_id))
            .child(day)
            .child(month)
            .child(year);

        let legend = Element::new("legend")
            .class(ClassList::new("govuk-fieldset__legend").with("govuk-fieldset__legend--s"))
            .text(scope.label_text());

        let fieldset = Element::new("fieldset")
            .class(ClassList::new("govuk-fieldset"))
            .attr("role", "group")
            .attr_opt("aria-describedby", scope.control_described_by().as_deref())
            .child(legend.render())
            .child(scope.hint())
            .child(scope.error())
            .child(date_group.render());

        let container = scope
            .container(scope.form_group_classes(), None)
            .child(fieldset.render());
        Ok(container.render())
    }
}
