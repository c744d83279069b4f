//! Shared type definitions for the Tilerace board game.
//!
//! This crate is the single source of truth for the types exchanged
//! between the game core and the HTTP layer. Types flow downstream to
//! `TypeScript` via `ts-rs` for the browser page.
//!
//! # Modules
//!
//! - [`enums`] -- [`Player`] seats and [`TileEvent`] kinds
//! - [`structs`] -- [`GameState`], [`MoveResult`], [`StateView`]

pub mod enums;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{Player, TileEvent, UnknownPlayer};
pub use structs::{GameState, LAST_TILE, MoveResult, StateView};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // Types with #[ts(export)] are written to `bindings/` relative to
        // the crate root.
        use ts_rs::TS;

        let _ = crate::enums::Player::export_all();
        let _ = crate::structs::GameState::export_all();
        let _ = crate::structs::MoveResult::export_all();
        let _ = crate::structs::StateView::export_all();
    }
}
