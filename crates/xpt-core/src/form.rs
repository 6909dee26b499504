// Player search form state.
//
// `FormState` is the single owner of every form field and everything derived
// from them. Each mutation recomputes the values that depend on it and returns
// the side effect the caller must perform (a game-date fetch, or nothing), so
// the dependency chain
//
//   player list ──┐
//   player name ──┼──▶ suggestions
//                 └──▶ game dates ◀── season, season type
//
// is evaluated in one place and in a fixed order.

use tracing::{debug, warn};

use crate::client::ApiError;
use crate::protocol::{GameDatesRequest, XptOutcome, XptRequest, XptResponse, XptValue};
use crate::season::{Season, SeasonType};
use crate::suggest::suggestions;

/// Message shown when a submission fails without a backend error message.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch data. Please try again.";

// ---------------------------------------------------------------------------
// Supporting types
// ---------------------------------------------------------------------------

/// Lifecycle of the xPT submission.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Submission {
    #[default]
    Idle,
    Pending,
    Displayed(XptValue),
    ErrorDisplayed(String),
}

/// What the game-date loader needs to do after a form change.
#[derive(Debug, Clone, PartialEq)]
pub enum DatesEffect {
    /// Nothing the loader depends on changed.
    Unchanged,
    /// The name is not a known player: dates were cleared locally.
    Cleared,
    /// Issue a request tagged with `generation`.
    Fetch {
        generation: u64,
        request: GameDatesRequest,
    },
}

/// Read-only copy of the form for rendering.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormSnapshot {
    pub player_name: String,
    pub season: Season,
    pub season_type: SeasonType,
    pub player_count: usize,
    pub suggestions: Vec<String>,
    pub game_dates: Vec<String>,
    pub selected_game_date: Option<String>,
    pub loading_dates: bool,
    pub submission: Submission,
    pub can_submit: bool,
}

// ---------------------------------------------------------------------------
// FormState
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct FormState {
    player_name: String,
    season: Season,
    season_type: SeasonType,
    player_list: Vec<String>,
    suggestions: Vec<String>,
    game_dates: Vec<String>,
    selected_game_date: Option<String>,
    loading_dates: bool,
    /// Bumped on every evaluation of the game-date loader. Responses tagged
    /// with an older generation are discarded.
    dates_generation: u64,
    submission: Submission,
    /// Bumped on every submit and on every reselection that clears the
    /// result, so late responses cannot resurrect a cleared result.
    submit_generation: u64,
}

impl FormState {
    pub fn new(season: Season, season_type: SeasonType) -> Self {
        FormState {
            season,
            season_type,
            ..FormState::default()
        }
    }

    // -- accessors --

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn season(&self) -> Season {
        self.season
    }

    pub fn season_type(&self) -> SeasonType {
        self.season_type
    }

    pub fn player_list(&self) -> &[String] {
        &self.player_list
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn game_dates(&self) -> &[String] {
        &self.game_dates
    }

    pub fn selected_game_date(&self) -> Option<&str> {
        self.selected_game_date.as_deref()
    }

    pub fn loading_dates(&self) -> bool {
        self.loading_dates
    }

    pub fn dates_generation(&self) -> u64 {
        self.dates_generation
    }

    pub fn submit_generation(&self) -> u64 {
        self.submit_generation
    }

    pub fn submission(&self) -> &Submission {
        &self.submission
    }

    /// Submission needs a non-empty player name.
    pub fn can_submit(&self) -> bool {
        !self.player_name.is_empty()
    }

    /// Whether the current name exactly matches a loaded player.
    pub fn is_known_player(&self) -> bool {
        !self.player_name.is_empty() && self.player_list.iter().any(|p| *p == self.player_name)
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            player_name: self.player_name.clone(),
            season: self.season,
            season_type: self.season_type,
            player_count: self.player_list.len(),
            suggestions: self.suggestions.clone(),
            game_dates: self.game_dates.clone(),
            selected_game_date: self.selected_game_date.clone(),
            loading_dates: self.loading_dates,
            submission: self.submission.clone(),
            can_submit: self.can_submit(),
        }
    }

    // -- input mutations --

    /// Replace the free-text player name.
    pub fn set_player_name(&mut self, name: impl Into<String>) -> DatesEffect {
        let name = name.into();
        if name == self.player_name {
            return DatesEffect::Unchanged;
        }
        self.player_name = name;
        self.recompute_suggestions();
        self.refresh_dates()
    }

    pub fn push_name_char(&mut self, c: char) -> DatesEffect {
        let mut name = self.player_name.clone();
        name.push(c);
        self.set_player_name(name)
    }

    pub fn pop_name_char(&mut self) -> DatesEffect {
        let mut name = self.player_name.clone();
        if name.pop().is_none() {
            return DatesEffect::Unchanged;
        }
        self.set_player_name(name)
    }

    pub fn clear_name(&mut self) -> DatesEffect {
        self.set_player_name(String::new())
    }

    /// Pick `name` from the suggestion list.
    ///
    /// Sets the name to the exact suggestion, closes the suggestion list and
    /// clears any result. Returns `None` when `name` is not among the current
    /// suggestions, which happens when the list changed after the front-end
    /// rendered it.
    pub fn select_suggestion(&mut self, name: &str) -> Option<DatesEffect> {
        let Some(chosen) = self.suggestions.iter().find(|s| *s == name).cloned() else {
            debug!("Ignoring selection of {}, no longer suggested", name);
            return None;
        };
        self.suggestions.clear();
        self.clear_submission();

        if chosen == self.player_name {
            return Some(DatesEffect::Unchanged);
        }
        self.player_name = chosen;
        Some(self.refresh_dates())
    }

    pub fn set_season(&mut self, season: Season) -> DatesEffect {
        if season == self.season {
            return DatesEffect::Unchanged;
        }
        self.season = season;
        self.refresh_dates()
    }

    pub fn set_season_type(&mut self, season_type: SeasonType) -> DatesEffect {
        if season_type == self.season_type {
            return DatesEffect::Unchanged;
        }
        self.season_type = season_type;
        self.refresh_dates()
    }

    /// Move through [season average, date 1, date 2, ...] by `delta`, wrapping.
    pub fn step_game_date(&mut self, delta: isize) {
        if self.game_dates.is_empty() {
            return;
        }
        let options = self.game_dates.len() as isize + 1;
        let current = match &self.selected_game_date {
            None => 0,
            Some(d) => self
                .game_dates
                .iter()
                .position(|g| g == d)
                .map_or(0, |i| i as isize + 1),
        };
        let next = (current + delta).rem_euclid(options);
        self.selected_game_date = if next == 0 {
            None
        } else {
            Some(self.game_dates[(next - 1) as usize].clone())
        };
    }

    // -- fetch results --

    /// Install a freshly loaded player list.
    pub fn set_player_list(&mut self, players: Vec<String>) -> DatesEffect {
        self.player_list = players;
        self.recompute_suggestions();
        self.refresh_dates()
    }

    /// Apply a game-date response issued under `generation`.
    ///
    /// Returns `false` when the response is stale and was discarded.
    pub fn apply_game_dates(
        &mut self,
        generation: u64,
        result: Result<Vec<String>, ApiError>,
    ) -> bool {
        if generation != self.dates_generation {
            debug!(
                "Discarding stale game dates (response gen: {}, current gen: {})",
                generation, self.dates_generation
            );
            return false;
        }

        self.loading_dates = false;
        self.selected_game_date = None;
        match result {
            Ok(dates) => {
                debug!("Received {} game dates for {}", dates.len(), self.player_name);
                self.game_dates = dates;
            }
            Err(e) => {
                warn!("Failed to fetch game dates for {}: {}", self.player_name, e);
                self.game_dates.clear();
            }
        }
        true
    }

    /// Start a submission. Returns the generation and request to send, or
    /// `None` when the name is empty.
    pub fn begin_submit(&mut self) -> Option<(u64, XptRequest)> {
        if !self.can_submit() {
            return None;
        }
        self.submit_generation += 1;
        self.submission = Submission::Pending;
        Some((
            self.submit_generation,
            XptRequest {
                player_name: self.player_name.clone(),
                season: self.season,
                season_type: self.season_type,
                game_date: self.selected_game_date.clone(),
            },
        ))
    }

    /// Apply an xPT response issued under `generation`.
    ///
    /// Returns `false` when the response is stale and was discarded.
    pub fn apply_submission(
        &mut self,
        generation: u64,
        result: Result<XptResponse, ApiError>,
    ) -> bool {
        if generation != self.submit_generation || self.submission != Submission::Pending {
            debug!(
                "Discarding stale xPT response (response gen: {}, current gen: {})",
                generation, self.submit_generation
            );
            return false;
        }

        self.submission = match result {
            Ok(response) => match response.into_outcome() {
                XptOutcome::Value(value) => Submission::Displayed(value),
                XptOutcome::Error(message) => Submission::ErrorDisplayed(message),
                XptOutcome::Malformed => {
                    warn!("xPT response had neither a value nor an error");
                    Submission::ErrorDisplayed(FETCH_FAILED_MESSAGE.to_string())
                }
            },
            Err(e) => {
                warn!("Failed to fetch xPT: {}", e);
                Submission::ErrorDisplayed(FETCH_FAILED_MESSAGE.to_string())
            }
        };
        true
    }

    // -- derived state --

    fn recompute_suggestions(&mut self) {
        self.suggestions = suggestions(&self.player_name, &self.player_list);
    }

    fn clear_submission(&mut self) {
        self.submit_generation += 1;
        self.submission = Submission::Idle;
    }

    /// Re-evaluate the game-date loader after one of its inputs changed.
    fn refresh_dates(&mut self) -> DatesEffect {
        self.dates_generation += 1;

        if !self.is_known_player() {
            self.game_dates.clear();
            self.selected_game_date = None;
            self.loading_dates = false;
            return DatesEffect::Cleared;
        }

        self.loading_dates = true;
        DatesEffect::Fetch {
            generation: self.dates_generation,
            request: GameDatesRequest {
                player_name: self.player_name.clone(),
                season: self.season,
                season_type: self.season_type,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
