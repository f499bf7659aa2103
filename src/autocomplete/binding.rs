//! Identity of one autocomplete field on the page

use serde::Serialize;

/// Element ids and endpoint an autocomplete instance is wired to
///
/// Built once at render time; the client never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldBinding {
    /// Enhanced, visible text input
    pub input_id: String,
    /// Submission field carrying the canonical value
    pub hidden_id: String,
    /// Element the enhanced control and its menu are built into
    pub container_id: String,
    pub endpoint: String,
    /// Display value the enhanced input starts with
    pub initial_value: String,
    /// Hidden input set to `true` once the enhancement is live
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_marker_id: Option<String>,
    /// Submit the suggestion's value instead of its label
    pub submit_value: bool,
}

impl FieldBinding {
    /// Binding with the conventional ids derived from the submission field id
    pub fn for_field(field_id: &str, endpoint: impl Into<String>, initial_value: impl Into<String>) -> Self {
        Self {
            input_id: format!("{}_autocomplete", field_id),
            hidden_id: field_id.to_string(),
            container_id: format!("{}_autocomplete_container", field_id),
            endpoint: endpoint.into(),
            initial_value: initial_value.into(),
            enabled_marker_id: None,
            submit_value: false,
        }
    }

    pub fn with_enabled_marker(mut self, marker_id: impl Into<String>) -> Self {
        self.enabled_marker_id = Some(marker_id.into()).filter(|id| !id.is_empty());
        self
    }

    pub fn submitting_value(mut self, submit_value: bool) -> Self {
        self.submit_value = submit_value;
        self
    }
}
