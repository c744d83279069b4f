//! Text format for persisted games.
//!
//! The format is line oriented. Keys are case-insensitive; blank lines
//! and lines starting with `#` are ignored:
//!
//! ```text
//! Turn: Player1
//! Player1: 0
//! Player2: 0
//!
//! Events:
//! 12: Treasure
//! 20: Portal, Treasure
//! ```
//!
//! Parsing never fails. Each field has its own fallback:
//!
//! - `Turn` must be exactly `Player1` or `Player2`, otherwise `Player1`.
//! - Player positions that are not integers become 0. Values are clamped
//!   to `0..=last_tile`; integers too large for any tile clamp to
//!   `last_tile`.
//! - After `Events:`, each `<tile>: <name>, <name>` line appends to that
//!   tile's list. Lines whose tile is not a non-negative integer are
//!   skipped. Event names are normalized; unknown names are kept.
//! - A player sitting on `last_tile` is the winner. If both are, the
//!   later player in [`Player::ALL`] wins.

use std::num::IntErrorKind;

use tilerace_types::{GameState, Player, TileEvent};
use tracing::debug;

use crate::resolver::clamp_tile;

/// Parse a game file. Never fails; see the module docs for fallbacks.
pub fn parse(text: &str, last_tile: u32) -> GameState {
    let mut state = GameState::default();
    let mut in_events = false;

    for line in text.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            debug!(line, "Skipping line without a key");
            continue;
        };

        if key.eq_ignore_ascii_case("turn") {
            state.turn = parse_turn(value.trim());
        } else if let Some(player) = player_key(key) {
            state.set_position(player, parse_position(value.trim(), last_tile));
        } else if key.eq_ignore_ascii_case("events") {
            in_events = true;
        } else if in_events {
            parse_event_line(&mut state, key, value);
        } else {
            debug!(line, "Skipping unrecognized header line");
        }
    }

    for player in Player::ALL {
        if state.position(player) >= last_tile {
            state.winner = Some(player);
            state.set_position(player, last_tile);
        }
    }

    state
}

/// Serialize a game in the text format, tiles in ascending order.
///
/// The winner is not written; it is derived from the positions on parse.
pub fn serialize(state: &GameState) -> String {
    let mut lines = vec![
        format!("Turn: {}", state.turn),
        format!("Player1: {}", state.position(Player::Player1)),
        format!("Player2: {}", state.position(Player::Player2)),
        String::new(),
        "Events:".to_owned(),
    ];

    for (tile, events) in &state.events {
        if events.is_empty() {
            continue;
        }
        let names: Vec<&str> = events.iter().map(TileEvent::name).collect();
        lines.push(format!("{tile}: {}", names.join(", ")));
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn player_key(key: &str) -> Option<Player> {
    Player::ALL
        .into_iter()
        .find(|p| key.eq_ignore_ascii_case(p.as_str()))
}

fn parse_turn(value: &str) -> Player {
    value.parse().unwrap_or_else(|_| {
        debug!(value, "Unrecognized turn value, defaulting to Player1");
        Player::Player1
    })
}

fn parse_position(value: &str, last_tile: u32) -> u32 {
    match value.parse::<i64>() {
        Ok(raw) => clamp_tile(raw, last_tile),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => last_tile,
        Err(e) => {
            debug!(value, error = %e, "Malformed position, defaulting to 0");
            0
        }
    }
}

fn parse_event_line(state: &mut GameState, key: &str, value: &str) {
    let Ok(tile) = key.trim().parse::<u32>() else {
        debug!(key, "Skipping event line with malformed tile");
        return;
    };

    let events: Vec<TileEvent> = value.split(',').filter_map(TileEvent::from_name).collect();
    if events.is_empty() {
        return;
    }
    state.events.entry(tile).or_default().extend(events);
}
