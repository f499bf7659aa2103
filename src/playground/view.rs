//! Terminal implementation of the autocomplete field surface

use std::collections::BTreeMap;

use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders};
use tui_textarea::TextArea;

use crate::autocomplete::{FieldView, Menu};

/// Single-line input plus the state a page would keep in its DOM
pub struct TerminalView {
    pub textarea: TextArea<'static>,
    hidden_value: String,
    menu: Menu,
    enhanced: bool,
    fallback_visible: bool,
    markers: BTreeMap<String, String>,
}

fn input_block(enhanced: bool) -> Block<'static> {
    let (title, colour) = if enhanced {
        (" Autocomplete ", Color::Cyan)
    } else {
        (" Plain input ", Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(colour))
}

impl TerminalView {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        textarea.set_block(input_block(false));
        textarea.set_cursor_line_style(Style::default());
        Self {
            textarea,
            hidden_value: String::new(),
            menu: Menu::Cleared,
            enhanced: false,
            fallback_visible: true,
            markers: BTreeMap::new(),
        }
    }

    pub fn hidden_value(&self) -> &str {
        &self.hidden_value
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn is_enhanced(&self) -> bool {
        self.enhanced && !self.fallback_visible
    }

    pub fn marker(&self, id: &str) -> Option<&str> {
        self.markers.get(id).map(String::as_str)
    }
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldView for TerminalView {
    fn input_value(&self) -> String {
        self.textarea.lines().first().cloned().unwrap_or_default()
    }

    fn set_input_value(&mut self, value: &str) {
        if self.input_value() == value {
            return;
        }
        self.textarea.delete_line_by_head();
        self.textarea.delete_line_by_end();
        self.textarea.insert_str(value);
    }

    fn set_hidden_value(&mut self, value: &str) {
        self.hidden_value = value.to_string();
    }

    fn render_menu(&mut self, menu: Menu) {
        self.menu = menu;
    }

    fn set_fallback_visible(&mut self, visible: bool) {
        self.fallback_visible = visible;
    }

    fn set_enhanced_visible(&mut self, visible: bool) {
        self.enhanced = visible;
        self.textarea.set_block(input_block(visible));
    }

    fn set_marker(&mut self, marker_id: &str, value: &str) {
        self.markers.insert(marker_id.to_string(), value.to_string());
    }
}
