// Application state and orchestration logic.
//
// The central event loop owns the `FormState`, applies user commands from the
// TUI, spawns backend fetches and applies their results. After every change a
// fresh snapshot is pushed to the TUI render loop.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::client::StatsApi;
use crate::form::{DatesEffect, FormState};
use crate::protocol::{FetchEvent, NameEdit, UiUpdate, UserCommand};

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// The complete application state.
pub struct AppState {
    pub form: FormState,
    /// Backend client, shared with spawned fetch tasks.
    pub api: Arc<dyn StatsApi>,
    /// Sender for fetch results; spawned tasks use a clone of this sender.
    pub fetch_tx: mpsc::Sender<FetchEvent>,
    /// The in-flight game-date fetch, if any. Aborted when superseded.
    pub dates_task: Option<JoinHandle<()>>,
}

impl AppState {
    pub fn new(form: FormState, api: Arc<dyn StatsApi>, fetch_tx: mpsc::Sender<FetchEvent>) -> Self {
        AppState {
            form,
            api,
            fetch_tx,
            dates_task: None,
        }
    }

    /// Spawn a fetch of the full player list.
    pub fn load_players(&self) {
        let api = Arc::clone(&self.api);
        let tx = self.fetch_tx.clone();
        tokio::spawn(async move {
            let result = api.fetch_players().await;
            let _ = tx.send(FetchEvent::Players(result)).await;
        });
        info!("Requested player list");
    }

    /// Cancel the in-flight game-date fetch if one is running.
    pub fn cancel_dates_task(&mut self) {
        if let Some(handle) = self.dates_task.take() {
            handle.abort();
        }
    }

    /// Carry out the effect of a form change on the game-date loader.
    ///
    /// Any earlier fetch is aborted; its response, should it already be
    /// queued, is dropped by the generation check in `FormState`.
    pub fn apply_dates_effect(&mut self, effect: DatesEffect) {
        match effect {
            DatesEffect::Unchanged => {}
            DatesEffect::Cleared => self.cancel_dates_task(),
            DatesEffect::Fetch {
                generation,
                request,
            } => {
                self.cancel_dates_task();
                info!(
                    "Fetching game dates for {}, {}, {} (gen: {})",
                    request.player_name, request.season, request.season_type, generation
                );
                let api = Arc::clone(&self.api);
                let tx = self.fetch_tx.clone();
                self.dates_task = Some(tokio::spawn(async move {
                    let result = api.fetch_game_dates(&request).await;
                    let _ = tx.send(FetchEvent::GameDates { generation, result }).await;
                }));
            }
        }
    }

    /// Start a submission. Does nothing when the name is empty.
    pub fn submit(&mut self) -> bool {
        let Some((generation, request)) = self.form.begin_submit() else {
            warn!("Submit requested with an empty player name, ignoring");
            return false;
        };
        info!(
            "Fetching xPT for {}, {}, {}, game date {:?} (gen: {})",
            request.player_name, request.season, request.season_type, request.game_date, generation
        );
        let api = Arc::clone(&self.api);
        let tx = self.fetch_tx.clone();
        tokio::spawn(async move {
            let result = api.fetch_xpt(&request).await;
            let _ = tx.send(FetchEvent::Xpt { generation, result }).await;
        });
        true
    }
}

// ---------------------------------------------------------------------------
// Event loop
// ---------------------------------------------------------------------------

/// Run the application event loop.
///
/// Requests the player list, then listens on two channels using
/// `tokio::select!`:
/// 1. Fetch results from spawned tasks
/// 2. User commands from the TUI
///
/// Pushes UI updates through `ui_tx` for the TUI render loop. Returns when a
/// `Quit` command arrives or the command channel closes.
pub async fn run(
    mut fetch_rx: mpsc::Receiver<FetchEvent>,
    mut cmd_rx: mpsc::Receiver<UserCommand>,
    ui_tx: mpsc::Sender<UiUpdate>,
    mut state: AppState,
) -> anyhow::Result<()> {
    info!("Application event loop started");

    state.load_players();
    send_snapshot(&state, &ui_tx).await;

    loop {
        tokio::select! {
            // --- Fetch results ---
            event = fetch_rx.recv() => {
                match event {
                    Some(event) => {
                        handle_fetch_event(&mut state, event, &ui_tx).await;
                    }
                    None => {
                        // AppState holds a sender, so this only happens if it
                        // was dropped deliberately.
                        info!("Fetch channel closed, shutting down");
                        break;
                    }
                }
            }

            // --- User commands ---
            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(UserCommand::Quit) => {
                        info!("Quit command received, shutting down");
                        break;
                    }
                    Some(cmd) => {
                        handle_user_command(&mut state, cmd, &ui_tx).await;
                    }
                    None => {
                        info!("Command channel closed, shutting down");
                        break;
                    }
                }
            }
        }
    }

    state.cancel_dates_task();
    info!("Application event loop exiting");
    Ok(())
}

async fn send_snapshot(state: &AppState, ui_tx: &mpsc::Sender<UiUpdate>) {
    let _ = ui_tx
        .send(UiUpdate::Snapshot(Box::new(state.form.snapshot())))
        .await;
}

/// Handle a completed backend fetch.
async fn handle_fetch_event(
    state: &mut AppState,
    event: FetchEvent,
    ui_tx: &mpsc::Sender<UiUpdate>,
) {
    match event {
        FetchEvent::Players(Ok(players)) => {
            info!("Loaded {} players", players.len());
            let count = players.len();
            let effect = state.form.set_player_list(players);
            state.apply_dates_effect(effect);
            let _ = ui_tx
                .send(UiUpdate::Notice(format!("Loaded {count} players")))
                .await;
        }
        FetchEvent::Players(Err(e)) => {
            // Keep whatever list is already loaded; the form stays usable.
            warn!("Failed to fetch players: {}", e);
            let _ = ui_tx
                .send(UiUpdate::Notice("Player list unavailable".to_string()))
                .await;
        }
        FetchEvent::GameDates { generation, result } => {
            if !state.form.apply_game_dates(generation, result) {
                return;
            }
            state.dates_task = None;
        }
        FetchEvent::Xpt { generation, result } => {
            if !state.form.apply_submission(generation, result) {
                return;
            }
        }
    }
    send_snapshot(state, ui_tx).await;
}

/// Handle a user command from the TUI.
async fn handle_user_command(
    state: &mut AppState,
    cmd: UserCommand,
    ui_tx: &mpsc::Sender<UiUpdate>,
) {
    match cmd {
        UserCommand::EditName(edit) => {
            let effect = match edit {
                NameEdit::Insert(c) => state.form.push_name_char(c),
                NameEdit::Backspace => state.form.pop_name_char(),
                NameEdit::Clear => state.form.clear_name(),
            };
            state.apply_dates_effect(effect);
        }
        UserCommand::SelectSuggestion(name) => match state.form.select_suggestion(&name) {
            Some(effect) => {
                info!("Selected player {}", state.form.player_name());
                state.apply_dates_effect(effect);
            }
            None => return,
        },
        UserCommand::SetSeason(season) => {
            let effect = state.form.set_season(season);
            state.apply_dates_effect(effect);
        }
        UserCommand::SetSeasonType(season_type) => {
            let effect = state.form.set_season_type(season_type);
            state.apply_dates_effect(effect);
        }
        UserCommand::StepGameDate(delta) => {
            state.form.step_game_date(delta);
        }
        UserCommand::Submit => {
            if !state.submit() {
                return;
            }
        }
        UserCommand::ReloadPlayers => {
            state.load_players();
            return;
        }
        UserCommand::Quit => {
            // Handled in the main loop
            return;
        }
    }
    send_snapshot(state, ui_tx).await;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
