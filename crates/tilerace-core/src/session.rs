//! The live match and its roll transaction.
//!
//! [`GameSession`] owns the one [`GameState`] in the process together
//! with the rules, the store and the die. A roll, the turn switch and the
//! follow-up save happen inside one `&mut self` call, so a single lock
//! around the session is enough to serialize concurrent callers.

use tilerace_types::{GameState, MoveResult, StateView};
use tracing::{info, warn};

use crate::config::RulesConfig;
use crate::dice::Die;
use crate::engine;
use crate::error::{GameError, PersistenceError};
use crate::store::GameStore;

/// The live match.
pub struct GameSession {
    state: GameState,
    rules: RulesConfig,
    store: GameStore,
    die: Box<dyn Die>,
}

impl GameSession {
    /// Start a session from whatever the store currently holds.
    pub fn open(rules: RulesConfig, store: GameStore, die: Box<dyn Die>) -> Self {
        let state = store.load();
        Self::from_parts(state, rules, store, die)
    }

    /// Build a session around an existing state.
    pub fn from_parts(
        state: GameState,
        rules: RulesConfig,
        store: GameStore,
        die: Box<dyn Die>,
    ) -> Self {
        Self {
            state,
            rules,
            store,
            die,
        }
    }

    /// The current state.
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// The rules in force.
    pub const fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    /// The backing store.
    pub const fn store(&self) -> &GameStore {
        &self.store
    }

    /// Snapshot of the state plus board length, for clients.
    pub fn view(&self) -> StateView {
        StateView {
            state: self.state.clone(),
            last_tile: self.rules.last_tile,
        }
    }

    /// Roll for the player whose turn it is and resolve the move.
    ///
    /// The turn passes to the other player unless this move won. The new
    /// state is then saved; a failed save is logged and does not affect
    /// the returned result.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameAlreadyFinished`] if the match is over.
    /// No die is rolled and nothing changes in that case.
    pub fn roll(&mut self) -> Result<MoveResult, GameError> {
        if let Some(winner) = self.state.winner {
            return Err(GameError::GameAlreadyFinished { winner });
        }

        let player = self.state.turn;
        let steps = self.die.roll();
        let result = engine::attempt_move(&mut self.state, player, steps, &self.rules)?;

        if self.state.winner.is_none() {
            engine::switch_turn(&mut self.state);
        }

        info!(
            %player,
            rolled = result.rolled,
            moved_to = result.moved_to,
            final_position = result.final_position,
            winner = ?result.winner,
            "Roll resolved"
        );

        if let Err(e) = self.store.save(&self.state) {
            warn!(error = %e, "Save after roll failed, continuing");
        }

        Ok(result)
    }

    /// Write the current state to the store.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] if the write fails. In-memory state is
    /// unaffected.
    pub fn save(&self) -> Result<(), PersistenceError> {
        self.store.save(&self.state)?;
        info!(path = %self.store.path().display(), "Game saved");
        Ok(())
    }

    /// Replace the in-memory state with the last saved one.
    pub fn reset(&mut self) -> &GameState {
        self.state = self.store.reset();
        info!("Game reset from store");
        &self.state
    }
}
