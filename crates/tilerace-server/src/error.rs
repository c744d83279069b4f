//! Error types for the HTTP layer.
//!
//! [`ApiError`] maps core failures onto status codes and the JSON bodies
//! the browser page expects, via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tilerace_core::{GameError, PersistenceError};
use tilerace_types::Player;

/// Errors that can occur while handling a request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A roll was requested after the match was decided.
    #[error("Game already finished")]
    GameFinished {
        /// The player who won.
        winner: Player,
    },

    /// An explicit save could not be written.
    #[error("{0}")]
    SaveFailed(#[from] PersistenceError),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<GameError> for ApiError {
    fn from(err: GameError) -> Self {
        match err {
            GameError::GameAlreadyFinished { winner } => Self::GameFinished { winner },
            other @ GameError::InvalidRoll { .. } => Self::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::GameFinished { winner } => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({
                    "error": self.to_string(),
                    "winner": winner,
                }),
            ),
            Self::SaveFailed(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({
                    "saved": false,
                    "error": e.to_string(),
                }),
            ),
            Self::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({
                    "error": msg,
                    "status": StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                }),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}
