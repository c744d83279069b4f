//! Move resolution.
//!
//! [`attempt_move`] resolves one die roll for one player: move, clamp,
//! win check, then tile events. It performs no I/O and does not touch the
//! turn; callers pair it with [`switch_turn`] when the game goes on.

use tilerace_types::{GameState, MoveResult, Player};
use tracing::{debug, info};

use crate::config::RulesConfig;
use crate::error::GameError;
use crate::resolver;

/// Move `player` forward `steps` tiles and resolve the landing tile.
///
/// A move never overshoots: it is clamped to `rules.last_tile`, and
/// reaching that tile wins immediately without resolving any events.
///
/// # Errors
///
/// - [`GameError::GameAlreadyFinished`] if a winner is already set.
/// - [`GameError::InvalidRoll`] if `steps` is not in `1..=rules.die_faces`.
///
/// In both cases `state` is left untouched.
pub fn attempt_move(
    state: &mut GameState,
    player: Player,
    steps: u32,
    rules: &RulesConfig,
) -> Result<MoveResult, GameError> {
    if let Some(winner) = state.winner {
        return Err(GameError::GameAlreadyFinished { winner });
    }
    if steps == 0 || steps > rules.die_faces {
        return Err(GameError::InvalidRoll {
            steps,
            faces: rules.die_faces,
        });
    }

    let start = state.position(player);
    let moved_to = start.saturating_add(steps).min(rules.last_tile);
    state.set_position(player, moved_to);

    if moved_to >= rules.last_tile {
        state.winner = Some(player);
        info!(%player, rolled = steps, start, "Player reached the final tile");
        return Ok(MoveResult {
            player,
            rolled: steps,
            start,
            moved_to,
            events: Vec::new(),
            final_position: moved_to,
            winner: Some(player),
        });
    }

    let resolution = resolver::apply(state, player, rules);
    debug!(
        %player,
        rolled = steps,
        start,
        moved_to,
        final_position = resolution.final_position,
        events = resolution.applied.len(),
        "Move resolved"
    );

    Ok(MoveResult {
        player,
        rolled: steps,
        start,
        moved_to,
        events: resolution.applied,
        final_position: resolution.final_position,
        winner: state.winner,
    })
}

/// Hand the turn to the other player.
pub fn switch_turn(state: &mut GameState) {
    state.turn = state.turn.other();
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tilerace_types::TileEvent;

    use super::*;

    fn rules() -> RulesConfig {
        RulesConfig::default()
    }

    #[test]
    fn plain_move_advances() {
        let mut state = GameState::default();
        let result = attempt_move(&mut state, Player::Player1, 4, &rules()).unwrap();
        assert_eq!(result.start, 0);
        assert_eq!(result.moved_to, 4);
        assert_eq!(result.final_position, 4);
        assert!(result.events.is_empty());
        assert_eq!(result.winner, None);
        assert_eq!(state.position(Player::Player1), 4);
        assert_eq!(state.position(Player::Player2), 0);
    }

    #[test]
    fn portal_scenario_near_the_end() {
        let mut state = GameState::default();
        state.set_position(Player::Player1, 88);
        state.events.insert(93, vec![TileEvent::Portal]);

        let result = attempt_move(&mut state, Player::Player1, 5, &rules()).unwrap();
        assert_eq!(result.moved_to, 93);
        assert_eq!(result.events, vec![TileEvent::Portal]);
        assert_eq!(result.final_position, 90);
        assert_eq!(result.winner, None);
        assert_eq!(state.position(Player::Player1), 90);
    }

    #[test]
    fn overshoot_is_clamped_and_wins_without_events() {
        let mut state = GameState::default();
        state.set_position(Player::Player2, 96);
        state.events.insert(100, vec![TileEvent::Portal]);

        let result = attempt_move(&mut state, Player::Player2, 6, &rules()).unwrap();
        assert_eq!(result.moved_to, 100);
        assert_eq!(result.final_position, 100);
        assert!(result.events.is_empty());
        assert_eq!(result.winner, Some(Player::Player2));
        assert_eq!(state.winner, Some(Player::Player2));
    }

    #[test]
    fn treasure_then_portal_on_one_tile() {
        let mut state = GameState::default();
        state.set_position(Player::Player1, 17);
        state
            .events
            .insert(20, vec![TileEvent::Treasure, TileEvent::Portal]);

        let result = attempt_move(&mut state, Player::Player1, 3, &rules()).unwrap();
        assert_eq!(result.final_position, 27);
    }

    #[test]
    fn treasure_can_win() {
        let mut state = GameState::default();
        state.set_position(Player::Player1, 89);
        state.events.insert(92, vec![TileEvent::Treasure]);

        let result = attempt_move(&mut state, Player::Player1, 3, &rules()).unwrap();
        assert_eq!(result.moved_to, 92);
        assert_eq!(result.final_position, 100);
        assert_eq!(result.winner, Some(Player::Player1));
    }

    #[test]
    fn finished_game_rejects_moves_without_mutation() {
        let mut state = GameState::default();
        state.set_position(Player::Player1, 100);
        state.winner = Some(Player::Player1);
        let before = state.clone();

        let err = attempt_move(&mut state, Player::Player2, 3, &rules()).unwrap_err();
        assert_eq!(
            err,
            GameError::GameAlreadyFinished {
                winner: Player::Player1
            }
        );
        assert_eq!(state, before);
    }

    #[test]
    fn out_of_range_steps_are_rejected() {
        let mut state = GameState::default();
        assert!(matches!(
            attempt_move(&mut state, Player::Player1, 0, &rules()),
            Err(GameError::InvalidRoll { steps: 0, faces: 6 })
        ));
        assert!(matches!(
            attempt_move(&mut state, Player::Player1, 7, &rules()),
            Err(GameError::InvalidRoll { steps: 7, .. })
        ));
        assert_eq!(state, GameState::default());
    }

    #[test]
    fn switch_turn_toggles() {
        let mut state = GameState::default();
        switch_turn(&mut state);
        assert_eq!(state.turn, Player::Player2);
        switch_turn(&mut state);
        assert_eq!(state.turn, Player::Player1);
    }
}
