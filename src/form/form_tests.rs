//! Tests for page descriptions

use super::*;
use crate::model::ModelValue;
use std::io::Write;
use tempfile::NamedTempFile;

const PAGE: &str = r#"
[model]
"Applicant.Name" = "Ada <Lovelace>"
Colour = "red"
Agreed = true
"StartDate.Day" = "5"
"StartDate.Month" = "3"
"StartDate.Year" = "2024"

[[model.Reviewers]]
Id = 7
Name = "Research_Ethics"
IsSelected = true

[[model.Reviewers]]
Id = 9
Name = "Sponsor"
IsSelected = false

[errors]
"Applicant.Email" = "Enter an email address"
Colour = ["Select a colour", "Pick again"]

[[field]]
kind = "input"
for = "Applicant.Name"
label_text = "Full name"

[[field]]
kind = "input"
for = "Applicant.Email"
input_type = "email"
hint_html = "<p>For updates</p>"

[[field]]
kind = "select"
for = "Colour"
options = [
  { value = "red", label = "Red" },
  { value = "blue", label = "Blue" },
]

[[field]]
kind = "checkbox-group"
for = "Reviewers"
item_label_property = "Name"
item_value_property = "IsSelected"
item_hidden_properties = "Id, Name"

[[field]]
kind = "date-input"
for = "StartDate"

[[field]]
kind = "autocomplete"
for = "Sponsor"
api_url = "/api/organisations"
"#;

fn page() -> FormSpec {
    parse_form(PAGE, FormFormat::Toml).unwrap()
}

#[test]
fn test_parse_model_errors_and_fields() {
    let spec = page();
    assert_eq!(spec.fields.len(), 6);
    assert_eq!(spec.value("Agreed"), ModelValue::Bool(true));
    assert_eq!(spec.value("Missing"), ModelValue::Empty);
    assert!(matches!(spec.value("Reviewers"), ModelValue::Records(ref r) if r.len() == 2));

    let kinds: Vec<&str> = spec.fields.iter().map(FieldSpec::kind).collect();
    assert_eq!(
        kinds,
        vec!["input", "input", "select", "checkbox-group", "date-input", "autocomplete"]
    );

    let state = spec.model_state();
    assert_eq!(state.error_count(), 3);
    assert!(state.has_errors("Applicant.Email"));
}

#[test]
fn test_flattened_attributes_reach_components() {
    match &page().fields[1] {
        FieldSpec::Input(bound) => {
            assert_eq!(bound.target.as_deref(), Some("Applicant.Email"));
            assert_eq!(bound.attrs.input_type.as_deref(), Some("email"));
            assert_eq!(bound.attrs.field.hint_html.as_deref(), Some("<p>For updates</p>"));
        }
        other => panic!("expected input, got {:?}", other),
    }
}

#[test]
fn test_render_page() {
    let html = render_form(&page(), &Config::default()).unwrap().into_string();
    assert_eq!(html.lines().count(), 6);
    assert!(html.contains(r#"value="Ada &lt;Lovelace&gt;""#));
    assert!(html.contains("Enter an email address"));
    assert!(html.contains("Select a colour<br/>Pick again"));
    assert!(html.contains(r#"<option id="Colour_red" value="red" selected>Red</option>"#));
    assert!(html.contains(r#"<input type="hidden" name="Reviewers[0].Id" value="7" />"#));
    assert!(html.contains(r#"<input type="hidden" name="Reviewers[0].Name" value="Research_Ethics" />"#));
    assert!(html.contains(r#"id="Reviewers_0__IsSelected" name="Reviewers[0].IsSelected" type="checkbox" value="true" checked />"#));
    assert!(html.contains(r#"name="Reviewers[1].IsSelected" type="checkbox" value="true" />"#));
    assert!(html.contains(r#"id="StartDate.Day" name="StartDate.Day" type="text" inputmode="numeric" value="5""#));
    assert!(html.contains(r#"<option value="3" selected>March</option>"#));
    assert!(html.contains("GovformAutocomplete.create("));
}

#[test]
fn test_missing_for_fails_fast() {
    let spec = parse_form("[[field]]\nkind = \"input\"\nlabel_text = \"Name\"\n", FormFormat::Toml).unwrap();
    let err = render_form(&spec, &Config::default()).unwrap_err();
    assert!(matches!(
        err,
        FormError::MissingAttribute { component: "input", attribute: "for" }
    ));
}

#[test]
fn test_unknown_kind_is_invalid() {
    let err = parse_form("[[field]]\nkind = \"slider\"\nfor = \"x\"\n", FormFormat::Toml).unwrap_err();
    assert!(matches!(err, FormError::InvalidForm(_)));
}

#[test]
fn test_select_without_options_fails() {
    let spec = parse_form("[[field]]\nkind = \"select\"\nfor = \"Colour\"\n", FormFormat::Toml).unwrap();
    assert!(matches!(
        render_form(&spec, &Config::default()),
        Err(FormError::MissingOptions { .. })
    ));
}

#[test]
fn test_records_without_item_properties_fail() {
    let content = r#"
[[model.Reviewers]]
Name = "A"

[[field]]
kind = "checkbox-group"
for = "Reviewers"
"#;
    let spec = parse_form(content, FormFormat::Toml).unwrap();
    assert!(matches!(
        render_form(&spec, &Config::default()),
        Err(FormError::MissingAttribute { attribute: "item_label_property", .. })
    ));
}

#[test]
fn test_simple_checkboxes_from_list() {
    let content = r#"
[model]
Colours = ["blue"]

[[field]]
kind = "checkbox-group"
for = "Colours"
options = [{ value = "red", label = "Red" }, { value = "blue", label = "Blue" }]
"#;
    let spec = parse_form(content, FormFormat::Toml).unwrap();
    let html = render_form(&spec, &Config::default()).unwrap().into_string();
    assert!(html.contains(r#"value="blue" checked"#));
    assert!(!html.contains(r#"value="red" checked"#));
}

#[test]
fn test_json_page() {
    let content = r#"{
        "model": { "Name": "Ada" },
        "errors": { "Name": "Too short" },
        "field": [ { "kind": "textarea", "for": "Name", "rows": 3 } ]
    }"#;
    let spec = parse_form(content, FormFormat::Json).unwrap();
    let html = render_form(&spec, &Config::default()).unwrap().into_string();
    assert!(html.contains(r#"rows="3""#));
    assert!(html.contains(">Ada</textarea>"));
    assert!(html.contains("Too short"));
}

#[test]
fn test_load_form_by_extension() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{"field": [{{"kind": "input", "for": "Name"}}]}}"#).unwrap();
    let spec = load_form(file.path()).unwrap();
    assert_eq!(spec.fields.len(), 1);

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[[field]]\nkind = \"input\"\nfor = \"Name\"").unwrap();
    assert_eq!(load_form(file.path()).unwrap().fields.len(), 1);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let err = load_form(Path::new("/definitely/not/here.toml")).unwrap_err();
    assert!(matches!(err, FormError::Io(_)));
}

#[test]
fn test_empty_page_renders_nothing() {
    let spec = parse_form("", FormFormat::Toml).unwrap();
    assert!(render_form(&spec, &Config::default()).unwrap().is_empty());
}

#[test]
fn test_composite_item_without_label_or_hidden_property() {
    let content = r#"
[[model.Reviewers]]
Id = 7
Name = "Sponsor"
IsSelected = true

[[model.Reviewers]]
IsSelected = false

[[field]]
kind = "checkbox-group"
for = "Reviewers"
item_label_property = "Name"
item_value_property = "IsSelected"
item_hidden_properties = "Id"
"#;
    let spec = parse_form(content, FormFormat::Toml).unwrap();
    let html = render_form(&spec, &Config::default()).unwrap().into_string();

    assert!(html.contains(r#"for="Reviewers_1__IsSelected">Item 1</label>"#));
    assert!(html.contains(r#"<input type="hidden" name="Reviewers[0].Id" value="7" />"#));
    assert!(!html.contains("Reviewers[1].Id"));
}
