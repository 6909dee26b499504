// Suggestion dropdown below the player name input.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

use crate::tui::ViewState;

/// Render the suggestion list. Nothing is drawn when there are no matches.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    if state.form.suggestions.is_empty() || area.height == 0 {
        return;
    }
    let items = suggestion_items(&state.form.suggestions, state.suggestion_cursor);
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(list, area);
}

fn suggestion_items(suggestions: &[String], cursor: Option<usize>) -> Vec<ListItem<'static>> {
    suggestions
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let style = if cursor == Some(i) {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(Span::styled(format!(" {name}"), style)))
        })
        .collect()
}
