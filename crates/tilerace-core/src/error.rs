//! Error types for the `tilerace-core` crate.
//!
//! Malformed persisted data is deliberately absent here: every anomaly in
//! a game file falls back to a per-field default inside [`crate::codec`].

use std::path::PathBuf;

use tilerace_types::Player;

/// Errors raised while resolving a move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// A move was attempted after the match was decided.
    #[error("Game already finished")]
    GameAlreadyFinished {
        /// The player who already won.
        winner: Player,
    },

    /// The step count is outside the faces of the die.
    #[error("invalid roll {steps}: must be between 1 and {faces}")]
    InvalidRoll {
        /// The rejected step count.
        steps: u32,
        /// Number of faces on the configured die.
        faces: u32,
    },
}

/// Errors raised while writing the game file.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    /// The durable write failed. In-memory state is untouched.
    #[error("failed to write game file {}: {source}", .path.display())]
    Write {
        /// Location of the game file.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}
