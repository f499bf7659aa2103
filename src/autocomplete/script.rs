//! Browser side of the autocomplete
//!
//! [`AUTOCOMPLETE_SCRIPT`] defines `GovformAutocomplete.create(config)`; each
//! rendered autocomplete field emits a small inline script that creates and
//! initialises its own instance from a JSON config.

use serde::Serialize;

use super::binding::FieldBinding;
use crate::config::AutocompleteConfig;
use crate::error::FormError;
use crate::html::{Element, Markup};

pub const AUTOCOMPLETE_SCRIPT: &str = include_str!("../../assets/govform-autocomplete.js");

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ClientConfig<'a> {
    #[serde(flatten)]
    binding: &'a FieldBinding,
    query_param: &'a str,
    min_query_length: usize,
    width_class: &'a str,
    before_suggestions_text: &'a str,
    after_suggestions_text: &'a str,
    no_results_text: &'a str,
}

/// Serialise for embedding in a `<script>` element. `<`, `>` and `&` are
/// escaped so no value can close the element early.
fn script_json<T: Serialize>(value: &T) -> Result<String, FormError> {
    let json = serde_json::to_string(value)
        .map_err(|e| FormError::InvalidForm(format!("cannot serialise client config: {}", e)))?;
    Ok(json
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026"))
}

/// Inline `<script>` creating and initialising the instance for `binding`
pub fn init_script(
    binding: &FieldBinding,
    config: &AutocompleteConfig,
    width_class: &str,
) -> Result<Markup, FormError> {
    let json = script_json(&ClientConfig {
        binding,
        query_param: &config.query_param,
        min_query_length: config.min_query_length,
        width_class,
        before_suggestions_text: &config.before_suggestions_text,
        after_suggestions_text: &config.after_suggestions_text,
        no_results_text: &config.no_results_text,
    })?;
    let body = format!(
        "document.addEventListener('DOMContentLoaded', function () {{ GovformAutocomplete.create({}).initialize(); }});",
        json
    );
    Ok(Element::new("script").child(Markup::trusted(body)).render())
}

/// The browser asset wrapped in a `<script>` element
pub fn asset_tag() -> Markup {
    Element::new("script")
        .child(Markup::trusted(AUTOCOMPLETE_SCRIPT))
        .render()
}

#[cfg(test)]
#[path = "script_tests.rs"]
mod script_tests;
