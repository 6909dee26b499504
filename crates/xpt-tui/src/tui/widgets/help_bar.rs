// Help bar widget: keyboard hints for the focused control.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::{Field, ViewState};

/// Render the help bar into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let mut spans = Vec::new();
    for (key, action) in hints(state.focus) {
        spans.push(Span::styled(
            format!(" {key}"),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::styled(
            format!(":{action}"),
            Style::default().fg(Color::Gray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Key/action pairs shown for the given focus.
pub fn hints(focus: Field) -> Vec<(&'static str, &'static str)> {
    let mut hints = match focus {
        Field::PlayerName => vec![
            ("Up/Down", "Suggestions"),
            ("Enter", "Select/Submit"),
            ("Ctrl+U", "Clear"),
        ],
        Field::Season => vec![("Left/Right", "Season"), ("q", "Quit")],
        Field::SeasonType => vec![("Space", "Toggle"), ("q", "Quit")],
        Field::GameDate => vec![("Left/Right", "Game date"), ("q", "Quit")],
        Field::Submit => vec![("Enter", "Get xPT"), ("q", "Quit")],
    };
    hints.extend([("Tab", "Next"), ("F5", "Reload players"), ("Ctrl+C", "Quit")]);
    hints
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
