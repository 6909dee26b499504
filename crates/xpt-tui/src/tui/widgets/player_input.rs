// Player name text input.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::field_block;
use crate::tui::{Field, ViewState};

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let focused = state.focus == Field::PlayerName;
    let paragraph = Paragraph::new(input_line(&state.form.player_name, focused))
        .block(field_block("Player Name", focused));
    frame.render_widget(paragraph, area);
}

/// The input contents, a placeholder when empty, and a cursor when focused.
fn input_line(name: &str, focused: bool) -> Line<'static> {
    let mut spans = Vec::new();
    if name.is_empty() && !focused {
        spans.push(Span::styled(
            "Type a player name",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ));
    } else {
        spans.push(Span::styled(
            name.to_string(),
            Style::default().fg(Color::White),
        ));
    }
    if focused {
        spans.push(Span::styled(
            "_",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::buffer_text;

    #[test]
    fn placeholder_only_when_unfocused_and_empty() {
        assert_eq!(input_line("", false).to_string(), "Type a player name");
        assert_eq!(input_line("", true).to_string(), "_");
        assert_eq!(input_line("Luka", true).to_string(), "Luka_");
        assert_eq!(input_line("Luka", false).to_string(), "Luka");
    }

    #[test]
    fn render_shows_name() {
        let backend = ratatui::backend::TestBackend::new(40, 3);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        state.form.player_name = "Luka Doncic".into();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Player Name"));
        assert!(text.contains("Luka Doncic_"));
    }
}
