//! Enumeration types for the Tilerace board game.
//!
//! Both enums are closed: a [`Player`] is always one of the two seats, and
//! a [`TileEvent`] is one of the known kinds or an explicitly tagged
//! [`TileEvent::Unknown`] carrying the normalized name it was read with.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Players
// ---------------------------------------------------------------------------

/// One of the two fixed seats at the board.
///
/// Serialized as the exact strings `Player1` / `Player2`, both in JSON and
/// in the persisted text format.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export, export_to = "bindings/")]
pub enum Player {
    /// The first seat; always moves first in a fresh game.
    #[default]
    Player1,
    /// The second seat.
    Player2,
}

impl Player {
    /// Fixed evaluation order used wherever both players are visited.
    pub const ALL: [Self; 2] = [Self::Player1, Self::Player2];

    /// The opponent of this player.
    pub const fn other(self) -> Self {
        match self {
            Self::Player1 => Self::Player2,
            Self::Player2 => Self::Player1,
        }
    }

    /// The canonical name of this player.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Player1 => "Player1",
            Self::Player2 => "Player2",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not exactly `Player1` or `Player2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPlayer(pub String);

impl fmt::Display for UnknownPlayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown player: {:?}", self.0)
    }
}

impl std::error::Error for UnknownPlayer {}

impl FromStr for Player {
    type Err = UnknownPlayer;

    /// Matching is exact and case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Player1" => Ok(Self::Player1),
            "Player2" => Ok(Self::Player2),
            other => Err(UnknownPlayer(other.to_owned())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tile events
// ---------------------------------------------------------------------------

/// An event placed on a tile, triggered when a player's die move lands there.
///
/// Names read from persisted data are normalized (trimmed, first letter
/// upper case, the rest lower case) before matching. Names that match
/// neither known kind are kept as [`TileEvent::Unknown`] so they survive a
/// save, but they never move a player and are never reported as applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum TileEvent {
    /// Moves the player forward.
    Treasure,
    /// Moves the player backward.
    Portal,
    /// An unrecognized name, stored in normalized form.
    Unknown(String),
}

impl TileEvent {
    /// Build an event from a raw name, normalizing its capitalization.
    ///
    /// Returns `None` for names that are empty after trimming.
    pub fn from_name(raw: &str) -> Option<Self> {
        let name = normalize_name(raw);
        match name.as_str() {
            "" => None,
            "Treasure" => Some(Self::Treasure),
            "Portal" => Some(Self::Portal),
            _ => Some(Self::Unknown(name)),
        }
    }

    /// The normalized name of this event.
    pub fn name(&self) -> &str {
        match self {
            Self::Treasure => "Treasure",
            Self::Portal => "Portal",
            Self::Unknown(name) => name,
        }
    }

    /// Whether this event is one of the known kinds.
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for TileEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<TileEvent> for String {
    fn from(event: TileEvent) -> Self {
        match event {
            TileEvent::Unknown(name) => name,
            known => known.name().to_owned(),
        }
    }
}

impl From<String> for TileEvent {
    fn from(raw: String) -> Self {
        Self::from_name(&raw).unwrap_or(Self::Unknown(raw))
    }
}

/// Trim `raw`, upper-case its first character and lower-case the rest.
///
/// Only the leading character of a multi-character upper-case mapping
/// stays upper case (`ß` becomes `Ss`), so normalizing twice is a no-op.
fn normalize_name(raw: &str) -> String {
    let mut chars = raw.trim().chars();
    chars.next().map_or_else(String::new, |first| {
        let mut upper = first.to_uppercase();
        upper
            .next()
            .into_iter()
            .chain(upper.flat_map(char::to_lowercase))
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    })
}
