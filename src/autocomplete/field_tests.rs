//! Tests for the per-field state machine, driven through a recording view

use super::*;
use crate::autocomplete::LookupError;
use proptest::prelude::*;

#[derive(Debug, Default)]
struct RecordingView {
    input: String,
    hidden: String,
    menu: Option<Menu>,
    menu_renders: usize,
    fallback_visible: bool,
    enhanced_visible: bool,
    markers: Vec<(String, String)>,
}

impl RecordingView {
    fn with_hidden(value: &str) -> Self {
        Self {
            hidden: value.to_string(),
            fallback_visible: true,
            ..Self::default()
        }
    }
}

impl FieldView for RecordingView {
    fn input_value(&self) -> String {
        self.input.clone()
    }

    fn set_input_value(&mut self, value: &str) {
        self.input = value.to_string();
    }

    fn set_hidden_value(&mut self, value: &str) {
        self.hidden = value.to_string();
    }

    fn render_menu(&mut self, menu: Menu) {
        self.menu = Some(menu);
        self.menu_renders += 1;
    }

    fn set_fallback_visible(&mut self, visible: bool) {
        self.fallback_visible = visible;
    }

    fn set_enhanced_visible(&mut self, visible: bool) {
        self.enhanced_visible = visible;
    }

    fn set_marker(&mut self, marker_id: &str, value: &str) {
        self.markers.push((marker_id.to_string(), value.to_string()));
    }
}

fn binding() -> FieldBinding {
    FieldBinding::for_field("Person", "/api/people", "")
}

fn field() -> AutocompleteField<RecordingView> {
    AutocompleteField::initialize(binding(), &AutocompleteConfig::default(), RecordingView::with_hidden(""))
}

fn respond(token: RequestToken, result: Result<Vec<Suggestion>, LookupError>) -> LookupResponse {
    LookupResponse { token, result }
}

fn people() -> Vec<Suggestion> {
    vec![Suggestion::plain("John Smith"), Suggestion::plain("Johnny Appleseed")]
}

#[test]
fn test_initialize_enhances_view() {
    let binding = binding().with_enabled_marker("PersonEnabled");
    let field = AutocompleteField::initialize(
        FieldBinding {
            initial_value: "Ada".to_string(),
            ..binding
        },
        &AutocompleteConfig::default(),
        RecordingView::with_hidden("ada-id"),
    );
    let view = field.view();
    assert!(!view.fallback_visible);
    assert!(view.enhanced_visible);
    assert_eq!(view.input, "Ada");
    assert_eq!(view.hidden, "ada-id");
    assert_eq!(view.markers, vec![("PersonEnabled".to_string(), "true".to_string())]);
    assert_eq!(field.phase(), FieldPhase::Idle);
}

#[test]
fn test_destroy_restores_fallback() {
    let view = field().destroy();
    assert!(view.fallback_visible);
    assert!(!view.enhanced_visible);
    assert_eq!(view.menu, Some(Menu::Cleared));
}

#[test]
fn test_two_letter_query_shows_type_more() {
    let mut field = field();
    assert_eq!(field.on_input("jo"), None);
    assert_eq!(field.phase(), FieldPhase::TooShort);
    assert_eq!(
        field.view().menu,
        Some(Menu::TypeMore {
            after: "Continue entering to improve suggestions".to_string()
        })
    );
}

#[test]
fn test_john_with_two_results() {
    let mut field = field();
    field.view_mut().hidden = "previous".to_string();

    let request = field.on_input("john").expect("lookup dispatched");
    assert_eq!(request.query, "john");
    assert_eq!(request.endpoint, "/api/people");
    assert_eq!(field.phase(), FieldPhase::Querying { token: request.token });

    let resolution = field.on_response(respond(request.token, Ok(people())));
    assert_eq!(resolution, Resolution::Suggestions(2));
    assert_eq!(field.phase(), FieldPhase::Resolved);
    assert_eq!(field.view().hidden, "");

    match field.view().menu.as_ref() {
        Some(Menu::Suggestions { before, after, items }) => {
            assert_eq!(before, "Suggestions");
            assert_eq!(after, "Continue entering to improve suggestions");
            let rendered: Vec<&str> = items.iter().map(|i| i.markup.as_str()).collect();
            assert_eq!(
                rendered,
                vec!["<strong>John</strong> Smith", "<strong>John</strong>ny Appleseed"]
            );
        }
        other => panic!("expected suggestions, got {:?}", other),
    }
}

#[test]
fn test_out_of_order_arrival_keeps_latest() {
    let mut field = field();
    let john = field.on_input("john").expect("lookup dispatched");
    let johnny = field.on_input("johnny").expect("lookup dispatched");

    let first = field.on_response(respond(johnny.token, Ok(vec![Suggestion::plain("Johnny Appleseed")])));
    assert_eq!(first, Resolution::Suggestions(1));
    let renders = field.view().menu_renders;

    let late = field.on_response(respond(john.token, Ok(people())));
    assert_eq!(late, Resolution::StaleDiscarded);
    assert_eq!(field.view().menu_renders, renders);
    assert_eq!(field.suggestions(), &[Suggestion::plain("Johnny Appleseed")]);
}

#[test]
fn test_no_results_clears_hidden() {
    let mut field = field();
    field.view_mut().hidden = "previous".to_string();
    let request = field.on_input("zzz").expect("lookup dispatched");
    assert_eq!(field.on_response(respond(request.token, Ok(vec![]))), Resolution::NoResults);
    assert_eq!(field.view().hidden, "");
    assert_eq!(
        field.view().menu,
        Some(Menu::NoResults {
            message: "No suggestions found.".to_string()
        })
    );
}

#[test]
fn test_lookup_error_looks_like_no_results() {
    let mut field = field();
    let request = field.on_input("john").expect("lookup dispatched");
    let resolution = field.on_response(respond(
        request.token,
        Err(LookupError::Network("connection refused".to_string())),
    ));
    assert_eq!(resolution, Resolution::NoResults);
}

#[test]
fn test_response_after_input_shrinks_is_ignored() {
    let mut field = field();
    let request = field.on_input("john").expect("lookup dispatched");
    // Input edited to a short value without a new query event
    field.view_mut().input = "jo".to_string();
    let renders = field.view().menu_renders;
    assert_eq!(
        field.on_response(respond(request.token, Ok(people()))),
        Resolution::InputTooShort
    );
    assert_eq!(field.view().menu_renders, renders);
}

#[test]
fn test_clearing_input_resets_state() {
    let mut field = field();
    let request = field.on_input("john").expect("lookup dispatched");
    field.on_response(respond(request.token, Ok(people())));
    field.confirm(Some(0));
    assert_eq!(field.view().hidden, "John Smith");

    assert_eq!(field.on_input(""), None);
    assert_eq!(field.view().hidden, "");
    assert_eq!(field.view().menu, Some(Menu::Cleared));
    assert!(!field.results_found());
    assert_eq!(field.phase(), FieldPhase::Idle);
}

#[test]
fn test_confirm_binds_label_or_value() {
    let mut field = field();
    let request = field.on_input("leeds").expect("lookup dispatched");
    field.on_response(respond(
        request.token,
        Ok(vec![Suggestion::new("Leeds Teaching Hospitals", "RR8")]),
    ));
    assert_eq!(field.confirm(Some(0)), "Leeds Teaching Hospitals");
    assert_eq!(field.view().input, "Leeds Teaching Hospitals");

    let mut by_value = AutocompleteField::initialize(
        binding().submitting_value(true),
        &AutocompleteConfig::default(),
        RecordingView::default(),
    );
    let request = by_value.on_input("leeds").expect("lookup dispatched");
    by_value.on_response(respond(
        request.token,
        Ok(vec![Suggestion::new("Leeds Teaching Hospitals", "RR8")]),
    ));
    assert_eq!(by_value.confirm(Some(0)), "RR8");
    assert_eq!(by_value.view().hidden, "RR8");
    assert_eq!(by_value.view().input, "Leeds Teaching Hospitals");
}

#[test]
fn test_confirm_nothing_clears_hidden() {
    let mut field = field();
    field.view_mut().hidden = "previous".to_string();
    assert_eq!(field.confirm(None), "");
    assert_eq!(field.view().hidden, "");
    assert_eq!(field.confirm(Some(7)), "");
}

#[test]
fn test_min_length_from_config() {
    let config = AutocompleteConfig {
        min_query_length: 1,
        ..AutocompleteConfig::default()
    };
    let mut field = AutocompleteField::initialize(binding(), &config, RecordingView::default());
    assert!(field.on_input("j").is_some());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_empty_input_clears_everything(queries in prop::collection::vec("[a-z]{1,6}", 0..6)) {
        let mut field = field();
        for query in &queries {
            if let Some(request) = field.on_input(query) {
                field.on_response(respond(request.token, Ok(people())));
            }
        }
        field.confirm(Some(0));
        field.on_input("");
        prop_assert_eq!(field.view().hidden.as_str(), "");
        prop_assert_eq!(field.view().menu.as_ref(), Some(&Menu::Cleared));
        prop_assert!(!field.results_found());
    }

    #[test]
    fn prop_confirmation_binds_exact_label(label in "\\PC{1,30}") {
        let mut field = field();
        let request = field.on_input("abc").expect("lookup dispatched");
        field.on_response(respond(request.token, Ok(vec![Suggestion::plain(label.as_str())])));
        prop_assert_eq!(field.confirm(Some(0)), label.clone());
        prop_assert_eq!(field.view().hidden.as_str(), label.as_str());
    }

    #[test]
    fn prop_stale_responses_never_touch_view(count in 2usize..8) {
        let mut field = field();
        let requests: Vec<LookupRequest> = (0..count)
            .filter_map(|i| field.on_input(&format!("query{}", i)))
            .collect();
        let renders = field.view().menu_renders;
        for request in &requests[..count - 1] {
            prop_assert_eq!(
                field.on_response(respond(request.token, Ok(people()))),
                Resolution::StaleDiscarded
            );
        }
        prop_assert_eq!(field.view().menu_renders, renders);
    }
}
