//! Declarative page descriptions
//!
//! A page file lists model values, validation errors and fields:
//!
//! ```toml
//! [model]
//! "Applicant.Name" = "Ada"
//!
//! [errors]
//! "Applicant.Email" = "Enter an email address"
//!
//! [[field]]
//! kind = "input"
//! for = "Applicant.Name"
//! label_text = "Full name"
//! ```
//!
//! TOML by default, JSON when the file ends in `.json`.

mod build;
mod spec;

use std::fs;
use std::path::Path;

use crate::components::RenderContext;
use crate::config::Config;
use crate::error::FormError;
use crate::html::Markup;

pub use build::build_component;
pub use spec::{Bound, CheckboxFieldAttrs, ErrorMessages, FieldSpec, FormSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFormat {
    Toml,
    Json,
}

impl FormFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => FormFormat::Json,
            _ => FormFormat::Toml,
        }
    }
}

pub fn parse_form(content: &str, format: FormFormat) -> Result<FormSpec, FormError> {
    match format {
        FormFormat::Toml => toml::from_str(content).map_err(|e| FormError::InvalidForm(e.to_string())),
        FormFormat::Json => {
            serde_json::from_str(content).map_err(|e| FormError::InvalidForm(e.to_string()))
        }
    }
}

pub fn load_form(path: &Path) -> Result<FormSpec, FormError> {
    let content = fs::read_to_string(path)?;
    parse_form(&content, FormFormat::from_path(path))
}

/// Render every field in order, one per line. The first field that cannot
/// be rendered fails the whole page.
pub fn render_form(spec: &FormSpec, config: &Config) -> Result<Markup, FormError> {
    let state = spec.model_state();
    let ctx = RenderContext::new(&state, config);
    let mut out = Markup::new();
    for (index, field) in spec.fields.iter().enumerate() {
        let component = build_component(spec, field)?;
        if index > 0 {
            out.push(&Markup::trusted("\n"));
        }
        out.push(&component.render(&ctx)?);
        log::debug!("Rendered {} field {:?}", field.kind(), field.target());
    }
    Ok(out)
}

#[cfg(test)]
#[path = "form_tests.rs"]
mod form_tests;
