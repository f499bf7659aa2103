//! Shared fixtures for playground tests

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::Playground;
use futures::future::{BoxFuture, FutureExt};

use crate::autocomplete::{Lookup, LookupError, LookupWorker, StaticLookup, Suggestion};
use crate::config::AutocompleteConfig;

/// Endpoint that always answers with a server error
pub struct FailingLookup;

impl Lookup for FailingLookup {
    fn fetch<'a>(
        &'a self,
        _endpoint: &'a str,
        _query: &'a str,
    ) -> BoxFuture<'a, Result<Vec<Suggestion>, LookupError>> {
        async { Err(LookupError::Status { code: 503 }) }.boxed()
    }
}

pub fn playground_with(lookup: impl Lookup + 'static) -> Playground {
    let lookup: Arc<dyn Lookup> = Arc::new(lookup);
    Playground::new("fixture", &AutocompleteConfig::default(), LookupWorker::spawn(lookup))
}

pub fn people_playground() -> Playground {
    playground_with(StaticLookup::new(vec![
        Suggestion::plain("John Smith"),
        Suggestion::plain("Johnny Appleseed"),
        Suggestion::new("Leeds Teaching Hospitals", "RR8"),
    ]))
}

/// Fifteen matches for "person", more than the menu draws
pub fn crowded_playground() -> Playground {
    let people = (1..=15)
        .map(|i| Suggestion::plain(format!("Person {:02}", i)))
        .collect();
    playground_with(StaticLookup::new(people))
}

pub fn type_text(app: &mut Playground, text: &str) {
    for c in text.chars() {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }
}

/// Poll until `count` responses have arrived or a few seconds pass
pub fn settle(app: &mut Playground, count: usize) {
    let deadline = Instant::now() + Duration::from_secs(5);
    let mut seen = 0;
    while seen < count && Instant::now() < deadline {
        seen += app.poll_responses();
        std::thread::sleep(Duration::from_millis(5));
    }
    assert!(seen >= count, "only {} of {} responses arrived", seen, count);
}
