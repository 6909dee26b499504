// "Get xPT" submit button.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use xpt_core::form::{FormSnapshot, Submission};

use super::field_block;
use crate::tui::{Field, ViewState};

/// Button label and style for the current form.
pub fn button_label(form: &FormSnapshot) -> (&'static str, Style) {
    if !form.can_submit {
        return (
            "Get xPT",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
        );
    }
    if form.submission == Submission::Pending {
        return (
            "Calculating...",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::ITALIC),
        );
    }
    (
        "Get xPT",
        Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD),
    )
}

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let focused = state.focus == Field::Submit;
    let (label, style) = button_label(&state.form);
    let paragraph = Paragraph::new(Line::from(Span::styled(format!(" {label} "), style)))
        .alignment(Alignment::Center)
        .block(field_block("", focused));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_with_empty_name() {
        let (label, style) = button_label(&FormSnapshot::default());
        assert_eq!(label, "Get xPT");
        assert_eq!(style.fg, Some(Color::DarkGray));
    }

    #[test]
    fn enabled_with_a_name() {
        let form = FormSnapshot {
            player_name: "Luka Doncic".into(),
            can_submit: true,
            ..FormSnapshot::default()
        };
        let (label, style) = button_label(&form);
        assert_eq!(label, "Get xPT");
        assert_eq!(style.bg, Some(Color::Blue));
    }

    #[test]
    fn pending_shows_progress() {
        let form = FormSnapshot {
            player_name: "Luka Doncic".into(),
            can_submit: true,
            submission: Submission::Pending,
            ..FormSnapshot::default()
        };
        assert_eq!(button_label(&form).0, "Calculating...");
    }
}
