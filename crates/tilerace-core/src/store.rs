//! Persistence gateway between the in-memory game and the game file.
//!
//! Loading never fails: a missing file is a fresh game, and an unreadable
//! one is logged and treated the same way. Saving reports write failures
//! to the caller, who decides whether they matter.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tilerace_types::GameState;
use tracing::{info, warn};

use crate::codec;
use crate::error::PersistenceError;

/// The game file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStore {
    path: PathBuf,
    last_tile: u32,
}

impl GameStore {
    /// A store backed by the file at `path`, for a board ending at `last_tile`.
    pub fn new(path: impl Into<PathBuf>, last_tile: u32) -> Self {
        Self {
            path: path.into(),
            last_tile,
        }
    }

    /// Location of the game file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the game file, or a fresh game if there is nothing usable.
    pub fn load(&self) -> GameState {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => {
                let state = codec::parse(&text, self.last_tile);
                info!(
                    path = %self.path.display(),
                    turn = %state.turn,
                    event_tiles = state.events.len(),
                    winner = ?state.winner,
                    "Game loaded"
                );
                state
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No saved game, starting fresh");
                GameState::default()
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Unreadable game file, starting fresh");
                GameState::default()
            }
        }
    }

    /// Overwrite the game file with `state`.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Write`] if the file cannot be written.
    pub fn save(&self, state: &GameState) -> Result<(), PersistenceError> {
        std::fs::write(&self.path, codec::serialize(state)).map_err(|source| {
            PersistenceError::Write {
                path: self.path.clone(),
                source,
            }
        })
    }

    /// Reload the last saved game, discarding anything newer in memory.
    pub fn reset(&self) -> GameState {
        self.load()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tilerace_types::{Player, TileEvent};

    use super::*;

    #[test]
    fn missing_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = GameStore::new(dir.path().join("game.txt"), 100);
        assert_eq!(store.load(), GameState::default());
    }

    #[test]
    fn directory_path_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = GameStore::new(dir.path(), 100);
        assert_eq!(store.load(), GameState::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = GameStore::new(dir.path().join("game.txt"), 100);

        let mut state = GameState::default();
        state.turn = Player::Player2;
        state.set_position(Player::Player1, 31);
        state.events.insert(40, vec![TileEvent::Portal]);

        store.save(&state).unwrap();
        assert_eq!(store.load(), state);

        let text = std::fs::read_to_string(store.path()).unwrap();
        assert!(text.starts_with("Turn: Player2\nPlayer1: 31\n"));
    }

    #[test]
    fn save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = GameStore::new(dir.path().join("game.txt"), 100);

        let mut state = GameState::default();
        state.events.insert(5, vec![TileEvent::Treasure]);
        store.save(&state).unwrap();

        store.save(&GameState::default()).unwrap();
        assert_eq!(store.load(), GameState::default());
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = GameStore::new(dir.path().join("nope").join("game.txt"), 100);
        let err = store.save(&GameState::default()).unwrap_err();
        assert!(matches!(err, PersistenceError::Write { .. }));
        assert!(err.to_string().contains("game.txt"));
    }
}
