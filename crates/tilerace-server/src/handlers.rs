//! REST endpoint handlers.
//!
//! Every handler takes the session lock for its whole body, so reads see
//! a consistent state and writes never interleave.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Static game page |
//! | `GET` | `/game_state` | Current state plus board length |
//! | `POST` | `/roll` | Roll for the current player and resolve the move |
//! | `POST` | `/save` | Write the current state to the game file |
//! | `POST` | `/reset` | Reload the state from the game file |

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::response::Html;
use tilerace_types::{GameState, MoveResult, StateView};

use crate::error::ApiError;
use crate::state::AppState;

/// The browser page. It only talks to the JSON endpoints below.
const INDEX_HTML: &str = include_str!("../static/index.html");

/// Response body for `POST /save`.
#[derive(Debug, serde::Serialize)]
pub struct SaveResponse {
    /// Always `true`; failures go through [`ApiError::SaveFailed`].
    pub saved: bool,
}

/// Response body for `POST /reset`.
#[derive(Debug, serde::Serialize)]
pub struct ResetResponse {
    /// Always `true`.
    pub reset: bool,
    /// The state reloaded from the game file.
    pub state: GameState,
}

// ---------------------------------------------------------------------------
// GET /
// ---------------------------------------------------------------------------

/// Serve the static game page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

// ---------------------------------------------------------------------------
// GET /game_state
// ---------------------------------------------------------------------------

/// Return the full current state for rendering.
pub async fn game_state(State(state): State<Arc<AppState>>) -> Json<StateView> {
    let session = state.session.lock().await;
    Json(session.view())
}

// ---------------------------------------------------------------------------
// POST /roll
// ---------------------------------------------------------------------------

/// Roll the die for the player whose turn it is.
///
/// Returns 400 with the winner once the match is over. The implicit save
/// after a roll is best-effort and never fails the request.
pub async fn roll(State(state): State<Arc<AppState>>) -> Result<Json<MoveResult>, ApiError> {
    let mut session = state.session.lock().await;
    let result = session.roll()?;
    Ok(Json(result))
}

// ---------------------------------------------------------------------------
// POST /save
// ---------------------------------------------------------------------------

/// Write the current state to the game file.
pub async fn save(State(state): State<Arc<AppState>>) -> Result<Json<SaveResponse>, ApiError> {
    let session = state.session.lock().await;
    session.save()?;
    Ok(Json(SaveResponse { saved: true }))
}

// ---------------------------------------------------------------------------
// POST /reset
// ---------------------------------------------------------------------------

/// Reload the state from the game file, dropping unsaved progress.
pub async fn reset(State(state): State<Arc<AppState>>) -> Json<ResetResponse> {
    let mut session = state.session.lock().await;
    let reloaded = session.reset().clone();
    Json(ResetResponse {
        reset: true,
        state: reloaded,
    })
}
