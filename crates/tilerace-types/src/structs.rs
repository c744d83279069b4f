//! Core entity structs for the Tilerace board game.
//!
//! [`GameState`] is the whole mutable match; [`MoveResult`] describes one
//! resolved roll; [`StateView`] is the read-only projection served to
//! clients.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{Player, TileEvent};

/// Default index of the final tile. Reaching it wins the game.
pub const LAST_TILE: u32 = 100;

/// The complete state of a match.
///
/// Positions are kept for both players at all times. The event table is a
/// sorted map so that tiles are always visited in ascending order, and
/// each tile keeps its events in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct GameState {
    /// The player allowed to roll next.
    pub turn: Player,
    /// Current tile of each player.
    pub positions: BTreeMap<Player, u32>,
    /// Events keyed by tile index.
    #[ts(type = "Record<number, Array<string>>")]
    pub events: BTreeMap<u32, Vec<TileEvent>>,
    /// The winner, once someone has reached the final tile. Terminal.
    pub winner: Option<Player>,
}

impl GameState {
    /// Current tile of `player` (0 if the entry is somehow absent).
    pub fn position(&self, player: Player) -> u32 {
        self.positions.get(&player).copied().unwrap_or(0)
    }

    /// Move `player` to `tile`, without any range checks.
    pub fn set_position(&mut self, player: Player, tile: u32) {
        self.positions.insert(player, tile);
    }

    /// Events configured on `tile`, in insertion order.
    pub fn events_at(&self, tile: u32) -> &[TileEvent] {
        self.events.get(&tile).map_or(&[], Vec::as_slice)
    }

    /// Whether the match has been decided.
    pub const fn is_finished(&self) -> bool {
        self.winner.is_some()
    }
}

impl Default for GameState {
    /// `Player1` to move, both players on tile 0, no events, no winner.
    fn default() -> Self {
        Self {
            turn: Player::Player1,
            positions: Player::ALL.into_iter().map(|p| (p, 0)).collect(),
            events: BTreeMap::new(),
            winner: None,
        }
    }
}

/// The outcome of a single resolved roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MoveResult {
    /// The player who rolled.
    pub player: Player,
    /// The die value.
    pub rolled: u32,
    /// Tile before the move.
    pub start: u32,
    /// Tile reached by the die move alone, clamped to the final tile.
    pub moved_to: u32,
    /// Known events applied on the landing tile, in order.
    #[ts(type = "Array<string>")]
    pub events: Vec<TileEvent>,
    /// Tile after event resolution.
    #[serde(rename = "final")]
    pub final_position: u32,
    /// The winner after this move, if any.
    pub winner: Option<Player>,
}

/// Read-only projection of the match served to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct StateView {
    /// The full game state.
    #[serde(flatten)]
    pub state: GameState,
    /// Index of the final tile for this board.
    pub last_tile: u32,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_empty_board() {
        let state = GameState::default();
        assert_eq!(state.turn, Player::Player1);
        assert_eq!(state.position(Player::Player1), 0);
        assert_eq!(state.position(Player::Player2), 0);
        assert!(state.events.is_empty());
        assert!(!state.is_finished());
    }

    #[test]
    fn events_at_missing_tile_is_empty() {
        let mut state = GameState::default();
        state.events.insert(12, vec![TileEvent::Treasure]);
        assert_eq!(state.events_at(12), &[TileEvent::Treasure]);
        assert!(state.events_at(13).is_empty());
    }

    #[test]
    fn move_result_uses_final_key() {
        let result = MoveResult {
            player: Player::Player2,
            rolled: 6,
            start: 96,
            moved_to: 100,
            events: Vec::new(),
            final_position: 100,
            winner: Some(Player::Player2),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["final"], 100);
        assert_eq!(json["moved_to"], 100);
        assert_eq!(json["winner"], "Player2");
        assert!(json.get("final_position").is_none());
    }

    #[test]
    fn state_view_is_flat() {
        let mut state = GameState::default();
        state.events.insert(20, vec![TileEvent::Portal, TileEvent::Treasure]);
        let view = StateView {
            state,
            last_tile: LAST_TILE,
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["turn"], "Player1");
        assert_eq!(json["positions"]["Player2"], 0);
        assert_eq!(json["events"]["20"][1], "Treasure");
        assert!(json["winner"].is_null());
        assert_eq!(json["last_tile"], 100);
    }
}
