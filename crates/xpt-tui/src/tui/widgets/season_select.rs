// Season and season-type selectors.
//
// Both render as a single "< value >" line; the arrows are only drawn when
// the control has focus.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::field_block;
use crate::tui::{Field, ViewState};

pub fn render_season(frame: &mut Frame, area: Rect, state: &ViewState) {
    let focused = state.focus == Field::Season;
    let paragraph = Paragraph::new(selector_line(state.form.season.as_str(), focused))
        .block(field_block("Season", focused));
    frame.render_widget(paragraph, area);
}

pub fn render_season_type(frame: &mut Frame, area: Rect, state: &ViewState) {
    let focused = state.focus == Field::SeasonType;
    let paragraph = Paragraph::new(selector_line(state.form.season_type.label(), focused))
        .block(field_block("Season Type", focused));
    frame.render_widget(paragraph, area);
}

/// A selector value, wrapped in arrows when focused.
pub fn selector_line(value: &str, focused: bool) -> Line<'static> {
    let value_style = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    if focused {
        let arrow = Style::default().fg(Color::Yellow);
        Line::from(vec![
            Span::styled("< ", arrow),
            Span::styled(value.to_string(), value_style),
            Span::styled(" >", arrow),
        ])
    } else {
        Line::from(Span::styled(format!("  {value}"), value_style))
    }
}
