// Message types: backend wire contract plus the channel messages exchanged
// between the TUI, the app orchestrator and spawned fetch tasks.

use serde::{Deserialize, Serialize};

use crate::client::ApiError;
use crate::form::FormSnapshot;
use crate::season::{Season, SeasonType};

// ---------------------------------------------------------------------------
// Backend wire contract
// ---------------------------------------------------------------------------

/// Response body of `GET /get_players`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlayersResponse {
    pub players: Vec<String>,
}

/// Request body of `POST /get_game_dates`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameDatesRequest {
    pub player_name: String,
    pub season: Season,
    pub season_type: SeasonType,
}

/// Response body of `POST /get_game_dates`.
///
/// `dates` is optional here so a body without it parses; the client reports
/// that case as malformed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GameDatesResponse {
    #[serde(default)]
    pub dates: Option<Vec<String>>,
}

/// Request body of the xPT endpoint. `game_date` is sent as `null` when the
/// season average is wanted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct XptRequest {
    pub player_name: String,
    pub season: Season,
    pub season_type: SeasonType,
    pub game_date: Option<String>,
}

/// Raw response body of the xPT endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct XptResponse {
    #[serde(rename = "Player", default)]
    pub player: Option<String>,
    #[serde(rename = "Season", default)]
    pub season: Option<String>,
    #[serde(rename = "GameDate", default, skip_serializing_if = "Option::is_none")]
    pub game_date: Option<String>,
    #[serde(rename = "xPT", default)]
    pub xpt: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A successfully computed xPT value.
#[derive(Debug, Clone, PartialEq)]
pub struct XptValue {
    pub player: String,
    pub season: String,
    pub game_date: Option<String>,
    /// `None` when the backend could not compute a value.
    pub xpt: Option<f64>,
}

/// What an xPT response means for the form.
#[derive(Debug, Clone, PartialEq)]
pub enum XptOutcome {
    Value(XptValue),
    /// The backend reported an error message.
    Error(String),
    /// Neither an error nor the required `Player`/`Season` fields.
    Malformed,
}

impl XptResponse {
    /// Classify the response. A non-empty `error` wins over any other field.
    pub fn into_outcome(self) -> XptOutcome {
        if let Some(message) = self.error.filter(|m| !m.is_empty()) {
            return XptOutcome::Error(message);
        }
        match (self.player, self.season) {
            (Some(player), Some(season)) => XptOutcome::Value(XptValue {
                player,
                season,
                game_date: self.game_date.filter(|d| !d.is_empty()),
                xpt: self.xpt,
            }),
            _ => XptOutcome::Malformed,
        }
    }
}

// ---------------------------------------------------------------------------
// Fetch task -> App
// ---------------------------------------------------------------------------

/// Completion events sent by spawned fetch tasks.
///
/// Game-date and xPT events carry the generation they were issued under so
/// the orchestrator can drop responses that have been superseded.
#[derive(Debug)]
pub enum FetchEvent {
    Players(Result<Vec<String>, ApiError>),
    GameDates {
        generation: u64,
        result: Result<Vec<String>, ApiError>,
    },
    Xpt {
        generation: u64,
        result: Result<XptResponse, ApiError>,
    },
}

// ---------------------------------------------------------------------------
// TUI -> App
// ---------------------------------------------------------------------------

/// An edit to the player name field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameEdit {
    Insert(char),
    Backspace,
    Clear,
}

/// Commands sent from the TUI to the app orchestrator.
#[derive(Debug, Clone, PartialEq)]
pub enum UserCommand {
    EditName(NameEdit),
    /// Pick a suggested player by name. Ignored if the name is no longer
    /// among the current suggestions.
    SelectSuggestion(String),
    SetSeason(Season),
    SetSeasonType(SeasonType),
    /// Move the game-date selection by the given number of options, wrapping.
    StepGameDate(isize),
    Submit,
    ReloadPlayers,
    Quit,
}

// ---------------------------------------------------------------------------
// App -> TUI
// ---------------------------------------------------------------------------

/// Updates pushed from the app orchestrator to the TUI.
#[derive(Debug, Clone)]
pub enum UiUpdate {
    /// The full form state after a change.
    Snapshot(Box<FormSnapshot>),
    /// A short status message for the status bar.
    Notice(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn game_dates_request_wire_shape() {
        let req = GameDatesRequest {
            player_name: "Luka Doncic".into(),
            season: Season::default(),
            season_type: SeasonType::RegularSeason,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "player_name": "Luka Doncic",
                "season": "2023-24",
                "season_type": "Regular Season"
            })
        );
    }

    #[test]
    fn xpt_request_sends_null_game_date() {
        let req = XptRequest {
            player_name: "LeBron James".into(),
            season: Season::parse("2022-23").unwrap(),
            season_type: SeasonType::Playoffs,
            game_date: None,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "player_name": "LeBron James",
                "season": "2022-23",
                "season_type": "Playoffs",
                "game_date": null
            })
        );
    }

    #[test]
    fn game_dates_response_without_dates_parses_as_none() {
        let resp: GameDatesResponse = serde_json::from_str(r#"{"other": 1}"#).unwrap();
        assert!(resp.dates.is_none());
        assert!(serde_json::from_str::<GameDatesResponse>(r#"{"dates": "2024-01-05"}"#).is_err());
    }

    #[test]
    fn xpt_response_with_value() {
        let resp: XptResponse = serde_json::from_value(json!({
            "Player": "Luka Doncic",
            "Season": "2023-24",
            "GameDate": "2024-01-05",
            "xPT": 31
        }))
        .unwrap();
        assert_eq!(
            resp.into_outcome(),
            XptOutcome::Value(XptValue {
                player: "Luka Doncic".into(),
                season: "2023-24".into(),
                game_date: Some("2024-01-05".into()),
                xpt: Some(31.0),
            })
        );
    }

    #[test]
    fn xpt_response_with_null_value_is_still_a_value() {
        let resp: XptResponse = serde_json::from_value(json!({
            "Player": "Luka Doncic",
            "Season": "2023-24",
            "xPT": null
        }))
        .unwrap();
        match resp.into_outcome() {
            XptOutcome::Value(v) => {
                assert!(v.xpt.is_none());
                assert!(v.game_date.is_none());
            }
            other => panic!("expected Value, got {:?}", other),
        }
    }

    #[test]
    fn xpt_response_error_wins() {
        let resp: XptResponse = serde_json::from_value(json!({
            "Player": "Nobody",
            "Season": "2023-24",
            "xPT": null,
            "error": "Player not found"
        }))
        .unwrap();
        assert_eq!(
            resp.into_outcome(),
            XptOutcome::Error("Player not found".into())
        );
    }

    #[test]
    fn xpt_response_missing_required_fields_is_malformed() {
        let resp: XptResponse = serde_json::from_value(json!({ "xPT": 12 })).unwrap();
        assert_eq!(resp.into_outcome(), XptOutcome::Malformed);

        let resp: XptResponse = serde_json::from_value(json!({
            "Player": "A",
            "error": ""
        }))
        .unwrap();
        assert_eq!(resp.into_outcome(), XptOutcome::Malformed);
    }
}
