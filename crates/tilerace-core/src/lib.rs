//! Rules engine, text codec, and persistence for the Tilerace board game.
//!
//! Two players race along a numbered track by die roll. Tiles can carry
//! events that shift the player who lands on them; the first player to
//! reach the final tile wins.
//!
//! # Modules
//!
//! - [`codec`] -- The line-oriented text format for saved games.
//! - [`config`] -- Configuration loading from `tilerace-config.yaml`.
//! - [`dice`] -- [`Die`] trait, [`ThreadDie`] and [`ScriptedDie`].
//! - [`engine`] -- Move resolution and turn switching.
//! - [`error`] -- Error types.
//! - [`resolver`] -- Tile event resolution.
//! - [`session`] -- [`GameSession`], the live match and its roll transaction.
//! - [`store`] -- [`GameStore`], load/save of the game file.
//!
//! [`Die`]: dice::Die
//! [`ThreadDie`]: dice::ThreadDie
//! [`ScriptedDie`]: dice::ScriptedDie
//! [`GameSession`]: session::GameSession
//! [`GameStore`]: store::GameStore

pub mod codec;
pub mod config;
pub mod dice;
pub mod engine;
pub mod error;
pub mod resolver;
pub mod session;
pub mod store;

pub use config::{RulesConfig, TileraceConfig};
pub use error::{GameError, PersistenceError};
pub use session::GameSession;
pub use store::GameStore;
