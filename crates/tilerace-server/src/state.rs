//! Shared application state for the HTTP server.
//!
//! There is exactly one live match per process. It sits behind a single
//! [`Mutex`] so that a roll, its turn switch and its save run as one unit
//! even when requests arrive concurrently.

use tilerace_core::GameSession;
use tokio::sync::Mutex;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`](std::sync::Arc) and injected via Axum's `State`
/// extractor.
pub struct AppState {
    /// The live match.
    pub session: Mutex<GameSession>,
}

impl AppState {
    /// Wrap a session for sharing across handlers.
    pub fn new(session: GameSession) -> Self {
        Self {
            session: Mutex::new(session),
        }
    }
}
