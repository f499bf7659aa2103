//! End-to-end tests for the govform binary

use std::fs;
use std::io::Write;

use assert_cmd::Command;
use mockito::Matcher;
use predicates::prelude::*;
use tempfile::{NamedTempFile, TempDir};

const FORM: &str = r#"
[model]
Name = "Ada <Lovelace>"

[errors]
Email = "Enter an email address"

[[field]]
kind = "input"
for = "Name"
label_text = "Full name"

[[field]]
kind = "input"
for = "Email"
input_type = "email"

[[field]]
kind = "autocomplete"
for = "Sponsor"
api_url = "/api/organisations"
"#;

fn govform() -> Command {
    let mut cmd = Command::cargo_bin("govform").unwrap();
    // Keep a real ~/.config/govform/config.toml out of the picture
    cmd.env("HOME", env!("CARGO_TARGET_TMPDIR"));
    cmd
}

fn form_file(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[test]
fn test_render_to_stdout() {
    let form = form_file(FORM);
    govform()
        .arg("render")
        .arg(form.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"value="Ada &lt;Lovelace&gt;""#))
        .stdout(predicate::str::contains("Enter an email address"))
        .stdout(predicate::str::contains("GovformAutocomplete.create("))
        .stdout(predicate::str::contains("GovformAutocomplete = {").not());
}

#[test]
fn test_render_with_script_includes_asset() {
    let form = form_file(FORM);
    govform()
        .args(["render", "--script"])
        .arg(form.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<script>"))
        .stdout(predicate::str::contains("global.GovformAutocomplete = { create: create };"));
}

#[test]
fn test_render_to_output_file() {
    let form = form_file(FORM);
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("page.html");

    govform()
        .arg("render")
        .arg(form.path())
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains(r#"<label class="govuk-label" for="Name">Full name</label>"#));
}

#[test]
fn test_render_missing_for_fails() {
    let form = form_file("[[field]]\nkind = \"input\"\nlabel_text = \"Name\"\n");
    govform()
        .arg("render")
        .arg(form.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required attribute `for`"));
}

#[test]
fn test_render_missing_file_fails() {
    govform()
        .args(["render", "/definitely/not/here.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load"));
}

#[test]
fn test_config_overrides_defaults() {
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "[components]\ninput_width = \"govuk-input--width-10\"").unwrap();
    let form = form_file("[[field]]\nkind = \"input\"\nfor = \"Name\"\n");

    govform()
        .arg("--config")
        .arg(config.path())
        .arg("render")
        .arg(form.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("govuk-input govuk-input--width-10"));
}

#[test]
fn test_malformed_config_fails() {
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "[autocomplete\nmin_query_length = ").unwrap();
    let form = form_file(FORM);

    govform()
        .arg("--config")
        .arg(config.path())
        .arg("render")
        .arg(form.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config"));
}

#[test]
fn test_lookup_short_query_asks_for_more() {
    // Never reaches the network: the endpoint is not even a valid URL
    govform()
        .args(["lookup", "not a url", "jo"])
        .assert()
        .success()
        .stdout("Continue entering to improve suggestions\n");
}

#[test]
fn test_lookup_prints_labels() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/people")
        .match_query(Matcher::UrlEncoded("name".into(), "john".into()))
        .with_header("content-type", "application/json")
        .with_body(r#"["John Smith", {"label": "Johnny Appleseed", "value": "JA1"}]"#)
        .create();

    govform()
        .args(["lookup", &format!("{}/api/people", server.url()), "john"])
        .assert()
        .success()
        .stdout("John Smith\nJohnny Appleseed\n");
    mock.assert();
}

#[test]
fn test_lookup_empty_and_failed_responses_print_no_results() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/api/people")
        .match_query(Matcher::Any)
        .with_body("[]")
        .create();
    server
        .mock("GET", "/api/broken")
        .match_query(Matcher::Any)
        .with_status(500)
        .create();

    for path in ["/api/people", "/api/broken"] {
        govform()
            .args(["lookup", &format!("{}{}", server.url(), path), "zzz"])
            .assert()
            .success()
            .stdout("No suggestions found.\n");
    }
}

#[test]
fn test_playground_requires_a_source() {
    govform()
        .arg("playground")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--endpoint"));
}
