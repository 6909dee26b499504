// Keyboard input handling and command dispatch.
//
// Translates crossterm key events into UserCommand messages sent to the
// app orchestrator, or into local ViewState mutations (focus movement,
// suggestion cursor).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use xpt_core::protocol::{NameEdit, UserCommand};

use super::{Field, ViewState};

/// Handle a keyboard event.
///
/// Returns `Some(UserCommand)` when the key press should be forwarded to the
/// app orchestrator. Returns `None` when the key press was handled locally
/// by mutating `ViewState`, or ignored.
pub fn handle_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    // Crossterm emits Release events on some platforms; only act on Press.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

    // Ctrl+C always quits, whatever has focus.
    if ctrl && key_event.code == KeyCode::Char('c') {
        return Some(UserCommand::Quit);
    }

    match key_event.code {
        KeyCode::F(5) => return Some(UserCommand::ReloadPlayers),
        KeyCode::Tab => {
            view_state.focus = view_state.focus.next();
            view_state.suggestion_cursor = None;
            return None;
        }
        KeyCode::BackTab => {
            view_state.focus = view_state.focus.prev();
            view_state.suggestion_cursor = None;
            return None;
        }
        _ => {}
    }

    match view_state.focus {
        Field::PlayerName => handle_player_name(key_event, ctrl, view_state),
        Field::Season => handle_season(key_event.code, view_state),
        Field::SeasonType => handle_season_type(key_event.code, view_state),
        Field::GameDate => handle_game_date(key_event.code, view_state),
        Field::Submit => handle_submit(key_event.code, view_state),
    }
}

// ---------------------------------------------------------------------------
// Per-field handlers
// ---------------------------------------------------------------------------

fn handle_player_name(
    key_event: KeyEvent,
    ctrl: bool,
    view_state: &mut ViewState,
) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Char('u') if ctrl => {
            view_state.suggestion_cursor = None;
            Some(UserCommand::EditName(NameEdit::Clear))
        }
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(c) => {
            view_state.suggestion_cursor = None;
            Some(UserCommand::EditName(NameEdit::Insert(c)))
        }
        KeyCode::Backspace => {
            view_state.suggestion_cursor = None;
            Some(UserCommand::EditName(NameEdit::Backspace))
        }
        KeyCode::Down => {
            let count = view_state.form.suggestions.len();
            if count > 0 {
                view_state.suggestion_cursor = Some(match view_state.suggestion_cursor {
                    None => 0,
                    Some(i) => (i + 1).min(count - 1),
                });
            }
            None
        }
        KeyCode::Up => {
            view_state.suggestion_cursor = match view_state.suggestion_cursor {
                None | Some(0) => None,
                Some(i) => Some(i - 1),
            };
            None
        }
        KeyCode::Esc => {
            view_state.suggestion_cursor = None;
            None
        }
        KeyCode::Enter => {
            let highlighted = view_state
                .suggestion_cursor
                .take()
                .and_then(|i| view_state.form.suggestions.get(i).cloned());
            match highlighted {
                Some(name) => Some(UserCommand::SelectSuggestion(name)),
                None if view_state.form.can_submit => Some(UserCommand::Submit),
                None => None,
            }
        }
        _ => None,
    }
}

fn handle_season(code: KeyCode, view_state: &ViewState) -> Option<UserCommand> {
    let season = view_state.form.season;
    match code {
        KeyCode::Left | KeyCode::Up => Some(UserCommand::SetSeason(season.newer())),
        KeyCode::Right | KeyCode::Down => Some(UserCommand::SetSeason(season.older())),
        KeyCode::Char('q') => Some(UserCommand::Quit),
        _ => None,
    }
}

fn handle_season_type(code: KeyCode, view_state: &ViewState) -> Option<UserCommand> {
    match code {
        KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down | KeyCode::Char(' ') => {
            Some(UserCommand::SetSeasonType(
                view_state.form.season_type.toggled(),
            ))
        }
        KeyCode::Char('q') => Some(UserCommand::Quit),
        _ => None,
    }
}

fn handle_game_date(code: KeyCode, view_state: &ViewState) -> Option<UserCommand> {
    let selectable = !view_state.form.loading_dates && !view_state.form.game_dates.is_empty();
    match code {
        KeyCode::Left | KeyCode::Up if selectable => Some(UserCommand::StepGameDate(-1)),
        KeyCode::Right | KeyCode::Down if selectable => Some(UserCommand::StepGameDate(1)),
        KeyCode::Char('q') => Some(UserCommand::Quit),
        _ => None,
    }
}

fn handle_submit(code: KeyCode, view_state: &ViewState) -> Option<UserCommand> {
    match code {
        KeyCode::Enter | KeyCode::Char(' ') if view_state.form.can_submit => {
            Some(UserCommand::Submit)
        }
        KeyCode::Char('q') => Some(UserCommand::Quit),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use xpt_core::form::FormSnapshot;
    use xpt_core::season::{Season, SeasonType};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl_key(c: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn state_with(form: FormSnapshot, focus: Field) -> ViewState {
        ViewState {
            form,
            focus,
            ..ViewState::default()
        }
    }

    fn named(name: &str) -> FormSnapshot {
        FormSnapshot {
            player_name: name.to_string(),
            can_submit: !name.is_empty(),
            ..FormSnapshot::default()
        }
    }

    // -- Global keys --

    #[test]
    fn release_events_are_ignored() {
        let mut state = ViewState::default();
        let mut event = key(KeyCode::Char('a'));
        event.kind = KeyEventKind::Release;
        assert_eq!(handle_key(event, &mut state), None);
    }

    #[test]
    fn ctrl_c_quits_from_any_field() {
        for focus in [Field::PlayerName, Field::Season, Field::Submit] {
            let mut state = state_with(FormSnapshot::default(), focus);
            assert_eq!(handle_key(ctrl_key('c'), &mut state), Some(UserCommand::Quit));
        }
    }

    #[test]
    fn f5_reloads_players() {
        let mut state = ViewState::default();
        assert_eq!(
            handle_key(key(KeyCode::F(5)), &mut state),
            Some(UserCommand::ReloadPlayers)
        );
    }

    #[test]
    fn tab_moves_focus_locally() {
        let mut state = ViewState::default();
        state.suggestion_cursor = Some(0);
        assert_eq!(handle_key(key(KeyCode::Tab), &mut state), None);
        assert_eq!(state.focus, Field::Season);
        assert!(state.suggestion_cursor.is_none());
        assert_eq!(handle_key(key(KeyCode::BackTab), &mut state), None);
        assert_eq!(state.focus, Field::PlayerName);
    }

    // -- Player name field --

    #[test]
    fn typing_sends_name_edits() {
        let mut state = ViewState::default();
        assert_eq!(
            handle_key(key(KeyCode::Char('q')), &mut state),
            Some(UserCommand::EditName(NameEdit::Insert('q')))
        );
        assert_eq!(
            handle_key(key(KeyCode::Backspace), &mut state),
            Some(UserCommand::EditName(NameEdit::Backspace))
        );
        assert_eq!(
            handle_key(ctrl_key('u'), &mut state),
            Some(UserCommand::EditName(NameEdit::Clear))
        );
    }

    #[test]
    fn arrow_keys_move_suggestion_cursor_within_bounds() {
        let form = FormSnapshot {
            suggestions: vec!["Luka Doncic".into(), "Luka Samanic".into()],
            ..named("luka")
        };
        let mut state = state_with(form, Field::PlayerName);

        handle_key(key(KeyCode::Down), &mut state);
        assert_eq!(state.suggestion_cursor, Some(0));
        handle_key(key(KeyCode::Down), &mut state);
        handle_key(key(KeyCode::Down), &mut state);
        assert_eq!(state.suggestion_cursor, Some(1));
        handle_key(key(KeyCode::Up), &mut state);
        handle_key(key(KeyCode::Up), &mut state);
        assert_eq!(state.suggestion_cursor, None);
    }

    #[test]
    fn down_without_suggestions_does_nothing() {
        let mut state = state_with(named("x"), Field::PlayerName);
        handle_key(key(KeyCode::Down), &mut state);
        assert!(state.suggestion_cursor.is_none());
    }

    #[test]
    fn enter_on_highlighted_suggestion_selects_it() {
        let form = FormSnapshot {
            suggestions: vec!["LeBron James".into()],
            ..named("leb")
        };
        let mut state = state_with(form, Field::PlayerName);
        state.suggestion_cursor = Some(0);
        assert_eq!(
            handle_key(key(KeyCode::Enter), &mut state),
            Some(UserCommand::SelectSuggestion("LeBron James".into()))
        );
        assert!(state.suggestion_cursor.is_none());
    }

    #[test]
    fn enter_selects_the_highlighted_name_not_its_position() {
        let form = FormSnapshot {
            suggestions: vec!["Luka Doncic".into(), "Luka Samanic".into()],
            ..named("luka")
        };
        let mut state = state_with(form, Field::PlayerName);
        state.suggestion_cursor = Some(1);
        assert_eq!(
            handle_key(key(KeyCode::Enter), &mut state),
            Some(UserCommand::SelectSuggestion("Luka Samanic".into()))
        );
    }

    #[test]
    fn enter_without_cursor_submits_when_allowed() {
        let mut state = state_with(named("Luka Doncic"), Field::PlayerName);
        assert_eq!(
            handle_key(key(KeyCode::Enter), &mut state),
            Some(UserCommand::Submit)
        );
    }

    #[test]
    fn submit_is_unreachable_with_empty_name() {
        let mut state = state_with(named(""), Field::PlayerName);
        assert_eq!(handle_key(key(KeyCode::Enter), &mut state), None);

        let mut state = state_with(named(""), Field::Submit);
        assert_eq!(handle_key(key(KeyCode::Enter), &mut state), None);
        assert_eq!(handle_key(key(KeyCode::Char(' ')), &mut state), None);
    }

    // -- Selectors --

    #[test]
    fn season_arrows_step_through_seasons() {
        let mut state = state_with(FormSnapshot::default(), Field::Season);
        assert_eq!(
            handle_key(key(KeyCode::Right), &mut state),
            Some(UserCommand::SetSeason(Season::parse("2022-23").unwrap()))
        );
        assert_eq!(
            handle_key(key(KeyCode::Left), &mut state),
            Some(UserCommand::SetSeason(Season::parse("2024-25").unwrap()))
        );
    }

    #[test]
    fn season_type_toggles() {
        let mut state = state_with(FormSnapshot::default(), Field::SeasonType);
        assert_eq!(
            handle_key(key(KeyCode::Char(' ')), &mut state),
            Some(UserCommand::SetSeasonType(SeasonType::Playoffs))
        );
    }

    #[test]
    fn game_date_steps_only_when_dates_are_loaded() {
        let mut state = state_with(named("Luka Doncic"), Field::GameDate);
        assert_eq!(handle_key(key(KeyCode::Right), &mut state), None);

        state.form.game_dates = vec!["2024-01-05".into()];
        assert_eq!(
            handle_key(key(KeyCode::Right), &mut state),
            Some(UserCommand::StepGameDate(1))
        );
        assert_eq!(
            handle_key(key(KeyCode::Left), &mut state),
            Some(UserCommand::StepGameDate(-1))
        );

        state.form.loading_dates = true;
        assert_eq!(handle_key(key(KeyCode::Right), &mut state), None);
    }

    #[test]
    fn q_quits_outside_the_name_field() {
        let mut state = state_with(FormSnapshot::default(), Field::GameDate);
        assert_eq!(
            handle_key(key(KeyCode::Char('q')), &mut state),
            Some(UserCommand::Quit)
        );
    }
}
