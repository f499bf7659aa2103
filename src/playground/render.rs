//! Playground rendering

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::app::{MAX_VISIBLE_SUGGESTIONS, Playground};
use crate::autocomplete::{FieldView, Menu, MenuItem, match_ranges};

const MENU_PADDING: u16 = 4;

pub fn render(app: &Playground, frame: &mut Frame) {
    let [input_area, menu_area, status_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(2),
    ])
    .areas(frame.area());

    let view = app.field().view();
    frame.render_widget(&view.textarea, input_area);
    render_menu(app, frame, menu_area);
    render_status(app, frame, status_area);
}

/// Label split into plain and bold spans around the query matches
fn highlighted_spans(label: &str, query: &str) -> Vec<Span<'static>> {
    let bold = Style::default().add_modifier(Modifier::BOLD).fg(Color::Yellow);
    let mut spans = Vec::new();
    let mut plain_start = 0;
    for range in match_ranges(label, query) {
        if range.start > plain_start {
            spans.push(Span::raw(label[plain_start..range.start].to_string()));
        }
        spans.push(Span::styled(label[range.clone()].to_string(), bold));
        plain_start = range.end;
    }
    if plain_start < label.len() {
        spans.push(Span::raw(label[plain_start..].to_string()));
    }
    spans
}

fn suggestion_lines(items: &[MenuItem], query: &str, selected: Option<usize>) -> Vec<Line<'static>> {
    items
        .iter()
        .take(MAX_VISIBLE_SUGGESTIONS)
        .enumerate()
        .map(|(index, item)| {
            let line = Line::from(highlighted_spans(&item.suggestion.label, query));
            if selected == Some(index) {
                line.style(Style::default().add_modifier(Modifier::REVERSED))
            } else {
                line
            }
        })
        .collect()
}

fn menu_width(lines: &[&str], area: Rect) -> u16 {
    let widest = lines.iter().map(|l| l.width()).max().unwrap_or(0) as u16;
    (widest + MENU_PADDING).min(area.width)
}

fn render_menu(app: &Playground, frame: &mut Frame, area: Rect) {
    let view = app.field().view();
    let hint = Style::default().fg(Color::DarkGray);

    let (title, mut lines, footer) = match view.menu() {
        Menu::Cleared => return,
        Menu::TypeMore { after } => (String::new(), Vec::new(), after.clone()),
        Menu::NoResults { message } => (String::new(), vec![Line::from(message.clone())], String::new()),
        Menu::Suggestions { before, after, items } => (
            before.clone(),
            suggestion_lines(items, &view.input_value(), app.selection().get_selected()),
            after.clone(),
        ),
    };

    let mut widths: Vec<&str> = view
        .menu()
        .items()
        .iter()
        .map(|item| item.suggestion.label.as_str())
        .collect();
    widths.push(&footer);
    widths.push(&title);
    if let Menu::NoResults { message } = view.menu() {
        widths.push(message);
    }

    if !footer.is_empty() {
        lines.push(Line::styled(footer.clone(), hint));
    }

    let height = (lines.len() as u16 + 2).min(area.height);
    let popup = Rect {
        x: area.x,
        y: area.y,
        width: menu_width(&widths, area),
        height,
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    if !title.is_empty() {
        block = block.title(format!(" {} ", title));
    }

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

/// Cut `text` to at most `max_width` display columns, marking the cut
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

fn render_status(app: &Playground, frame: &mut Frame, area: Rect) {
    let field = app.field();
    let details = format!(
        "  token {}  stale {}  Esc quits",
        field.current_token(),
        app.stale_discarded()
    );
    let room = (area.width as usize).saturating_sub(details.width() + "hidden: ".len());
    let hidden = truncate_to_width(field.view().hidden_value(), room);

    let mut lines = vec![Line::from(vec![
        Span::styled("hidden: ", Style::default().fg(Color::DarkGray)),
        Span::styled(hidden, Style::default().fg(Color::Green)),
        Span::styled(details, Style::default().fg(Color::DarkGray)),
    ])];
    if let Some(error) = app.last_error() {
        let message = truncate_to_width(&format!("error: {}", error), area.width as usize);
        lines.push(Line::styled(message, Style::default().fg(Color::Red)));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
