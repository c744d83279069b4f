//! HTTP API server for the Tilerace board game.
//!
//! A thin transport over [`tilerace_core`]: every endpoint locks the one
//! live [`GameSession`](tilerace_core::GameSession), calls a single core
//! operation, and renders the result as JSON.
//!
//! - `GET /game_state` -- current state for rendering
//! - `POST /roll` -- roll, move, resolve events, pass the turn, autosave
//! - `POST /save` -- explicit save, reporting failures
//! - `POST /reset` -- reload from the game file
//! - `GET /` -- static game page

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod startup;
pub mod state;

// Re-export primary types for convenience.
pub use router::build_router;
pub use server::{ServerError, start_server};
pub use state::AppState;
