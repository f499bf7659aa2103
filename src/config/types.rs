// Configuration type definitions

use serde::Deserialize;

/// Defaults applied by components when the template author leaves a token unset
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ComponentsConfig {
    pub input_width: String,
    pub textarea_width: String,
    pub autocomplete_width: String,
    pub textarea_rows: u32,
    pub default_option_text: String,
}

impl Default for ComponentsConfig {
    fn default() -> Self {
        ComponentsConfig {
            input_width: "govuk-!-width-one-half".to_string(),
            textarea_width: "govuk-!-width-full".to_string(),
            autocomplete_width: "govuk-!-width-three-quarters".to_string(),
            textarea_rows: 5,
            default_option_text: "Please select...".to_string(),
        }
    }
}

/// Autocomplete client behaviour and menu texts
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AutocompleteConfig {
    /// Queries shorter than this (in characters) never hit the lookup endpoint
    pub min_query_length: usize,
    /// Query-string parameter carrying the typed text
    pub query_param: String,
    pub before_suggestions_text: String,
    pub after_suggestions_text: String,
    pub no_results_text: String,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        AutocompleteConfig {
            min_query_length: 3,
            query_param: "name".to_string(),
            before_suggestions_text: "Suggestions".to_string(),
            after_suggestions_text: "Continue entering to improve suggestions".to_string(),
            no_results_text: "No suggestions found.".to_string(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub components: ComponentsConfig,
    #[serde(default)]
    pub autocomplete: AutocompleteConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.autocomplete.min_query_length, 3);
        assert_eq!(config.components.default_option_text, "Please select...");
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
[autocomplete]
min_query_length = 2
"#,
        )
        .unwrap();
        assert_eq!(config.autocomplete.min_query_length, 2);
        assert_eq!(config.autocomplete.query_param, "name");
        assert_eq!(config.components, ComponentsConfig::default());
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let result: Result<Config, _> = toml::from_str(
            r#"
[components]
textarea_rows = "five"
"#,
        );
        assert!(result.is_err());
    }

    // For any valid minimum length, parsing keeps it and leaves every other field at its default
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_min_length_round_trips(min in 0usize..64) {
            let toml_content = format!("[autocomplete]\nmin_query_length = {}\n", min);
            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse min_query_length {}", min);

            let config = config.unwrap();
            prop_assert_eq!(config.autocomplete.min_query_length, min);
            prop_assert_eq!(config.autocomplete.no_results_text, "No suggestions found.");
            prop_assert_eq!(config.components, ComponentsConfig::default());
        }
    }
}
