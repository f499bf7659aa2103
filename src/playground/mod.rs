//! Terminal playground for one autocomplete field
//!
//! Drives an [`AutocompleteField`](crate::autocomplete::AutocompleteField)
//! from the keyboard against a live endpoint or a fixture, showing the menu,
//! the hidden value and how many responses were discarded as stale.

mod app;
mod render;
mod selection;
mod view;

#[cfg(test)]
mod test_helpers;

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use crate::autocomplete::{Lookup, LookupWorker};
use crate::config::Config;
use crate::error::FormError;

pub use app::Playground;
pub use selection::SelectionState;
pub use view::TerminalView;

const POLL_INTERVAL: Duration = Duration::from_millis(30);

/// Run the playground until the user quits
pub fn run(lookup: Arc<dyn Lookup>, endpoint: &str, config: &Config) -> Result<(), FormError> {
    let worker = LookupWorker::spawn(lookup);
    let mut app = Playground::new(endpoint, &config.autocomplete, worker);

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app);
    ratatui::restore();

    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut Playground) -> Result<(), FormError> {
    while !app.should_quit() {
        app.poll_responses();
        terminal.draw(|frame| render::render(app, frame))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (avoid duplicates)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }
    Ok(())
}
