// Optional game-date selector.
//
// Hidden until a player name is entered. While dates load it shows a
// loading line; with no dates it explains that nothing was found; otherwise
// it shows the selected option out of "All Games (Season Average)" followed
// by every date.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use xpt_core::form::FormSnapshot;

use super::field_block;
use crate::tui::{Field, ViewState};

/// Label of the option that sends no game date.
pub const ALL_GAMES_LABEL: &str = "All Games (Season Average)";
pub const LOADING_MESSAGE: &str = "Loading game dates...";
pub const NO_DATES_MESSAGE: &str = "No game dates found for this player in the selected season.";

/// What the game-date control currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameDateView {
    Hidden,
    Loading,
    NoDates,
    Options {
        options: Vec<String>,
        selected: usize,
    },
}

/// Derive the control's contents from the form.
pub fn game_date_view(form: &FormSnapshot) -> GameDateView {
    if form.player_name.is_empty() {
        return GameDateView::Hidden;
    }
    if form.loading_dates {
        return GameDateView::Loading;
    }
    if form.game_dates.is_empty() {
        return GameDateView::NoDates;
    }
    let selected = form
        .selected_game_date
        .as_ref()
        .and_then(|date| form.game_dates.iter().position(|d| d == date))
        .map_or(0, |i| i + 1);
    GameDateView::Options {
        options: game_date_options(&form.game_dates),
        selected,
    }
}

/// "All Games (Season Average)" followed by each date, in order.
pub fn game_date_options(dates: &[String]) -> Vec<String> {
    std::iter::once(ALL_GAMES_LABEL.to_string())
        .chain(dates.iter().cloned())
        .collect()
}

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let focused = state.focus == Field::GameDate;
    let dim = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    let line = match game_date_view(&state.form) {
        GameDateView::Hidden => Line::from(Span::styled("Enter a player name first", dim)),
        GameDateView::Loading => Line::from(Span::styled(LOADING_MESSAGE, dim)),
        GameDateView::NoDates => Line::from(Span::styled(NO_DATES_MESSAGE, dim)),
        GameDateView::Options { options, selected } => {
            let value = options.get(selected).cloned().unwrap_or_default();
            let mut line = super::season_select::selector_line(&value, focused);
            line.spans.push(Span::styled(
                format!("  ({}/{})", selected + 1, options.len()),
                Style::default().fg(Color::DarkGray),
            ));
            line
        }
    };

    let paragraph = Paragraph::new(line).block(field_block("Game Date (Optional)", focused));
    frame.render_widget(paragraph, area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::buffer_text;

    fn luka(dates: &[&str]) -> FormSnapshot {
        FormSnapshot {
            player_name: "Luka Doncic".into(),
            game_dates: dates.iter().map(|d| d.to_string()).collect(),
            can_submit: true,
            ..FormSnapshot::default()
        }
    }

    #[test]
    fn hidden_without_a_name() {
        assert_eq!(game_date_view(&FormSnapshot::default()), GameDateView::Hidden);
    }

    #[test]
    fn loading_takes_precedence_over_dates() {
        let mut form = luka(&["2024-01-05"]);
        form.loading_dates = true;
        assert_eq!(game_date_view(&form), GameDateView::Loading);
    }

    #[test]
    fn no_dates_message_when_list_is_empty() {
        assert_eq!(game_date_view(&luka(&[])), GameDateView::NoDates);
    }

    #[test]
    fn options_lead_with_all_games_and_default_to_it() {
        let view = game_date_view(&luka(&["2024-01-05", "2024-01-08"]));
        assert_eq!(
            view,
            GameDateView::Options {
                options: vec![
                    "All Games (Season Average)".to_string(),
                    "2024-01-05".to_string(),
                    "2024-01-08".to_string(),
                ],
                selected: 0,
            }
        );
    }

    #[test]
    fn selected_date_maps_to_its_option() {
        let mut form = luka(&["2024-01-05", "2024-01-08"]);
        form.selected_game_date = Some("2024-01-08".into());
        match game_date_view(&form) {
            GameDateView::Options { selected, .. } => assert_eq!(selected, 2),
            other => panic!("expected options, got {:?}", other),
        }
    }

    #[test]
    fn render_shows_no_dates_message() {
        let backend = ratatui::backend::TestBackend::new(80, 3);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        state.form = luka(&[]);
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains(NO_DATES_MESSAGE), "got {text:?}");
    }

    #[test]
    fn render_shows_selected_option() {
        let backend = ratatui::backend::TestBackend::new(80, 3);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        state.form = luka(&["2024-01-05", "2024-01-08"]);
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("All Games (Season Average)"), "got {text:?}");
        assert!(text.contains("(1/3)"), "got {text:?}");
    }
}
