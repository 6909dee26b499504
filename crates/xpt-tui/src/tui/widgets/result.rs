// Result panel: the computed xPT or the error for the last submission.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use xpt_core::form::Submission;
use xpt_core::protocol::XptValue;

use crate::tui::ViewState;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let paragraph = Paragraph::new(result_lines(&state.form.submission))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Results"));
    frame.render_widget(paragraph, area);
}

/// Lines for the result panel. Empty until something has been submitted.
pub fn result_lines(submission: &Submission) -> Vec<Line<'static>> {
    match submission {
        Submission::Idle => Vec::new(),
        Submission::Pending => vec![Line::from(Span::styled(
            "Calculating xPT...",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))],
        Submission::ErrorDisplayed(message) => vec![Line::from(Span::styled(
            format!("Error: {message}"),
            Style::default().fg(Color::Red),
        ))],
        Submission::Displayed(value) => value_lines(value),
    }
}

fn value_lines(value: &XptValue) -> Vec<Line<'static>> {
    let mut heading = vec![
        Span::styled(
            value.player.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" ({})", value.season)),
    ];
    if let Some(ref date) = value.game_date {
        heading.push(Span::raw(format!(" - {date}")));
    }

    vec![
        Line::from(heading),
        Line::from(vec![
            Span::raw("Expected Points: "),
            Span::styled(
                format_xpt(value.xpt),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ]
}

/// Format an xPT value, `N/A` when the backend returned null.
pub fn format_xpt(xpt: Option<f64>) -> String {
    match xpt {
        None => "N/A".to_string(),
        Some(v) => v.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
