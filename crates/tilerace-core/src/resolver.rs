//! Tile event resolution.
//!
//! Events fire once per move, against the tile reached by the die roll.
//! A shift that lands the player on another event tile does not trigger
//! that tile: resolution is a single pass over one list.

use tilerace_types::{GameState, Player, TileEvent};
use tracing::debug;

use crate::config::RulesConfig;

/// What happened on the landing tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Known events that fired, in the order they were applied.
    pub applied: Vec<TileEvent>,
    /// The player's tile after all events, clamped to the board.
    pub final_position: u32,
}

/// Apply the events on `player`'s current tile.
///
/// Each known event shifts a running position; unknown events are
/// skipped and not reported. The result is clamped to
/// `0..=rules.last_tile` and written back to `state`. Landing on the final
/// tile sets the winner.
pub fn apply(state: &mut GameState, player: Player, rules: &RulesConfig) -> Resolution {
    let landed = state.position(player);
    let mut running = i64::from(landed);
    let mut applied = Vec::new();

    for event in state.events_at(landed) {
        match event {
            TileEvent::Treasure => {
                running = running.saturating_add(i64::from(rules.treasure_advance));
            }
            TileEvent::Portal => {
                running = running.saturating_sub(i64::from(rules.portal_retreat));
            }
            TileEvent::Unknown(name) => {
                debug!(tile = landed, event = %name, "Ignoring unknown event");
                continue;
            }
        }
        applied.push(event.clone());
    }

    let final_position = clamp_tile(running, rules.last_tile);
    state.set_position(player, final_position);

    if final_position >= rules.last_tile {
        state.winner = Some(player);
    }

    Resolution {
        applied,
        final_position,
    }
}

/// Clamp a signed position onto the board `0..=last_tile`.
pub fn clamp_tile(position: i64, last_tile: u32) -> u32 {
    if position <= 0 {
        0
    } else {
        u32::try_from(position).map_or(last_tile, |tile| tile.min(last_tile))
    }
}
