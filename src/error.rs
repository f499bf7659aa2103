use thiserror::Error;

/// Errors raised while rendering components or loading form/config files.
///
/// Rendering fails loudly instead of emitting partial markup, so a missing
/// required attribute is an error rather than an empty string.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("{component} is missing required attribute `{attribute}`")]
    MissingAttribute {
        component: &'static str,
        attribute: &'static str,
    },

    #[error("{component} for `{field}` has no options to render")]
    MissingOptions {
        component: &'static str,
        field: String,
    },

    #[error("Invalid form description: {0}")]
    InvalidForm(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
