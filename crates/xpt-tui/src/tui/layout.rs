// Screen layout: form control arrangement and sizing.
//
// Stacks the form controls top to bottom:
//
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// +--------------------------------------------------+
// | Player Name (3 rows)                              |
// +--------------------------------------------------+
// | Suggestions (0 rows when empty)                   |
// +-------------------------+------------------------+
// | Season (50%)            | Season Type (50%)      |
// +-------------------------+------------------------+
// | Game Date (3 rows)                                |
// +--------------------------------------------------+
// | Submit (3 rows)                                   |
// +--------------------------------------------------+
// | Result (fill)                                     |
// +--------------------------------------------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved screen areas for each form control.
#[derive(Debug, Clone)]
pub struct FormLayout {
    pub status_bar: Rect,
    pub player_input: Rect,
    /// Zero height when there are no suggestions to show.
    pub suggestions: Rect,
    pub season: Rect,
    pub season_type: Rect,
    pub game_date: Rect,
    pub submit: Rect,
    pub result: Rect,
    pub help_bar: Rect,
}

/// Build the form layout from the available terminal area.
///
/// The suggestion list grows with `suggestion_count` plus one row for its
/// bottom border, and collapses entirely when empty.
pub fn build_layout(area: Rect, suggestion_count: usize) -> FormLayout {
    let suggestion_rows = if suggestion_count == 0 {
        0
    } else {
        suggestion_count as u16 + 1
    };

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),               // status bar
            Constraint::Length(3),               // player name
            Constraint::Length(suggestion_rows), // suggestions
            Constraint::Length(3),               // season + season type
            Constraint::Length(3),               // game date
            Constraint::Length(3),               // submit
            Constraint::Min(4),                  // result
            Constraint::Length(1),               // help bar
        ])
        .split(area);

    let selectors = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(vertical[3]);

    FormLayout {
        status_bar: vertical[0],
        player_input: vertical[1],
        suggestions: vertical[2],
        season: selectors[0],
        season_type: selectors[1],
        game_date: vertical[4],
        submit: vertical[5],
        result: vertical[6],
        help_bar: vertical[7],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn test_area() -> Rect {
        Rect::new(0, 0, 100, 40)
    }

    #[test]
    fn fixed_rows_have_expected_heights() {
        let layout = build_layout(test_area(), 0);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.player_input.height, 3);
        assert_eq!(layout.game_date.height, 3);
        assert_eq!(layout.submit.height, 3);
        assert_eq!(layout.help_bar.height, 1);
    }

    #[test]
    fn suggestions_collapse_when_empty() {
        let layout = build_layout(test_area(), 0);
        assert_eq!(layout.suggestions.height, 0);
    }

    #[test]
    fn suggestions_grow_with_count() {
        let layout = build_layout(test_area(), 3);
        assert_eq!(layout.suggestions.height, 4);
        assert!(layout.suggestions.y > layout.player_input.y);
        assert!(layout.season.y > layout.suggestions.y);
    }

    #[test]
    fn selectors_share_a_row() {
        let layout = build_layout(test_area(), 0);
        assert_eq!(layout.season.y, layout.season_type.y);
        assert!(layout.season.x < layout.season_type.x);
        assert_eq!(
            layout.season.width + layout.season_type.width,
            test_area().width
        );
    }

    #[test]
    fn controls_stack_in_form_order() {
        let layout = build_layout(test_area(), 2);
        let order = [
            layout.status_bar,
            layout.player_input,
            layout.suggestions,
            layout.season,
            layout.game_date,
            layout.submit,
            layout.result,
            layout.help_bar,
        ];
        for pair in order.windows(2) {
            assert!(pair[0].y < pair[1].y, "{:?} should be above {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn layout_fits_within_area() {
        let area = test_area();
        let layout = build_layout(area, 10);
        for rect in [
            layout.status_bar,
            layout.player_input,
            layout.suggestions,
            layout.season,
            layout.season_type,
            layout.game_date,
            layout.submit,
            layout.result,
            layout.help_bar,
        ] {
            assert!(rect.right() <= area.right());
            assert!(rect.bottom() <= area.bottom());
        }
    }
}
