// Status bar widget: title, player list size, latest notice.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::ViewState;

/// Render the status bar into the given area.
///
/// Layout: [title] | [player count] | [notice]
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let mut spans = vec![
        Span::styled(
            " NBA xPT ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", Style::default().fg(Color::Gray)),
        Span::styled(
            player_count_label(state.form.player_count),
            Style::default().fg(Color::White),
        ),
    ];

    if let Some(ref notice) = state.notice {
        spans.push(Span::styled(" | ", Style::default().fg(Color::Gray)));
        spans.push(Span::styled(
            notice.clone(),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

/// "N players", or a hint that the list is not available yet.
pub fn player_count_label(count: usize) -> String {
    match count {
        0 => "no players loaded".to_string(),
        1 => "1 player".to_string(),
        n => format!("{n} players"),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::buffer_text;

    #[test]
    fn player_count_label_variants() {
        assert_eq!(player_count_label(0), "no players loaded");
        assert_eq!(player_count_label(1), "1 player");
        assert_eq!(player_count_label(512), "512 players");
    }

    #[test]
    fn render_shows_count_and_notice() {
        let backend = ratatui::backend::TestBackend::new(80, 1);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        state.form.player_count = 2;
        state.notice = Some("Loaded 2 players".into());
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("2 players"), "got {text:?}");
        assert!(text.contains("Loaded 2 players"), "got {text:?}");
    }
}
