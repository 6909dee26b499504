// HTTP client for the xPT statistics backend.
//
// The orchestrator talks to the backend through the `StatsApi` trait so tests
// can substitute a scripted implementation. `HttpStatsClient` is the reqwest
// implementation used by the binary.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::protocol::{
    GameDatesRequest, GameDatesResponse, PlayersResponse, XptRequest, XptResponse,
};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

const PLAYERS_PATH: &str = "get_players";
const GAME_DATES_PATH: &str = "get_game_dates";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        source: reqwest::Error,
    },

    #[error("{url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("malformed response from {url}: {message}")]
    Malformed { url: String, message: String },
}

// ---------------------------------------------------------------------------
// XptEndpoint
// ---------------------------------------------------------------------------

/// Which path serves xPT values. Two variants of the backend exist and
/// disagree on the name; both accept and return the same JSON shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum XptEndpoint {
    #[default]
    GetXpt,
    CalculateXp,
}

impl XptEndpoint {
    pub fn path(&self) -> &'static str {
        match self {
            XptEndpoint::GetXpt => "get_xpt",
            XptEndpoint::CalculateXp => "calculate_xp",
        }
    }
}

// ---------------------------------------------------------------------------
// StatsApi
// ---------------------------------------------------------------------------

/// The three backend calls the form makes.
#[async_trait]
pub trait StatsApi: Send + Sync {
    /// Every known player name.
    async fn fetch_players(&self) -> Result<Vec<String>, ApiError>;

    /// Dates the player appeared in for the given season and season type.
    async fn fetch_game_dates(&self, request: &GameDatesRequest)
        -> Result<Vec<String>, ApiError>;

    /// The xPT value (or backend error) for a submission.
    async fn fetch_xpt(&self, request: &XptRequest) -> Result<XptResponse, ApiError>;
}

// ---------------------------------------------------------------------------
// HttpStatsClient
// ---------------------------------------------------------------------------

/// reqwest-backed [`StatsApi`].
pub struct HttpStatsClient {
    http: reqwest::Client,
    base_url: String,
    xpt_endpoint: XptEndpoint,
    timeout: Option<Duration>,
}

impl HttpStatsClient {
    /// Create a client for the backend at `base_url`. `timeout` applies per
    /// request; `None` waits indefinitely.
    pub fn new(base_url: &str, xpt_endpoint: XptEndpoint, timeout: Option<Duration>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            xpt_endpoint,
            timeout,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn with_timeout(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.timeout {
            Some(timeout) => request.timeout(timeout),
            None => request,
        }
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        url: &str,
    ) -> Result<T, ApiError> {
        let response = self
            .with_timeout(request)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;
        read_json(response, url).await
    }
}

#[async_trait]
impl StatsApi for HttpStatsClient {
    async fn fetch_players(&self) -> Result<Vec<String>, ApiError> {
        let url = self.url(PLAYERS_PATH);
        debug!("GET {}", url);
        let body: PlayersResponse = self.send_json(self.http.get(&url), &url).await?;
        Ok(body.players)
    }

    async fn fetch_game_dates(
        &self,
        request: &GameDatesRequest,
    ) -> Result<Vec<String>, ApiError> {
        let url = self.url(GAME_DATES_PATH);
        debug!(
            "POST {} ({}, {}, {})",
            url, request.player_name, request.season, request.season_type
        );
        let body: GameDatesResponse = self
            .send_json(self.http.post(&url).json(request), &url)
            .await?;
        body.dates.ok_or_else(|| ApiError::Malformed {
            url,
            message: "missing `dates` array".to_string(),
        })
    }

    async fn fetch_xpt(&self, request: &XptRequest) -> Result<XptResponse, ApiError> {
        let url = self.url(self.xpt_endpoint.path());
        debug!("POST {} ({})", url, request.player_name);
        self.send_json(self.http.post(&url).json(request), &url).await
    }
}

/// Read a response body as JSON.
///
/// Error statuses are not rejected up front: the backend reports some failures
/// as a 4xx with a JSON body in the normal contract. Only when the body does
/// not parse is a non-success status reported as [`ApiError::Status`].
async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
    url: &str,
) -> Result<T, ApiError> {
    let status = response.status();
    let text = response.text().await.map_err(|source| ApiError::Transport {
        url: url.to_string(),
        source,
    })?;

    match serde_json::from_str::<T>(&text) {
        Ok(value) => Ok(value),
        Err(_) if !status.is_success() => Err(ApiError::Status {
            url: url.to_string(),
            status,
        }),
        Err(e) => Err(ApiError::Malformed {
            url: url.to_string(),
            message: e.to_string(),
        }),
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
