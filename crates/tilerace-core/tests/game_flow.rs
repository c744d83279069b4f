//! End-to-end play through the core crate: load a board from disk, roll
//! with a scripted die until someone wins, and check the file on disk.

#![allow(clippy::unwrap_used)]

use tilerace_core::dice::ScriptedDie;
use tilerace_core::{GameError, GameSession, GameStore, RulesConfig};
use tilerace_types::{Player, TileEvent};

const BOARD: &str = "\
Turn: Player1
Player1: 0
Player2: 0

Events:
3: Treasure
8: Portal
14: Treasure, Portal
";

fn open(dir: &tempfile::TempDir, rolls: Vec<u32>) -> GameSession {
    let path = dir.path().join("game.txt");
    std::fs::write(&path, BOARD).unwrap();
    GameSession::open(
        RulesConfig::default(),
        GameStore::new(path, 100),
        Box::new(ScriptedDie::new(rolls)),
    )
}

#[test]
fn game_runs_to_a_win_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = open(&dir, vec![3, 6]);

    // Player1 lands on the treasure at 3 and jumps to 13.
    let first = session.roll().unwrap();
    assert_eq!(first.player, Player::Player1);
    assert_eq!(first.events, vec![TileEvent::Treasure]);
    assert_eq!(first.final_position, 13);

    let mut rolls = 1;
    let winner = loop {
        let result = session.roll().unwrap();
        rolls += 1;
        let state = session.state();
        for player in Player::ALL {
            assert!(state.position(player) <= 100);
        }
        if let Some(winner) = result.winner {
            assert_eq!(result.final_position, 100);
            assert_eq!(state.turn, winner);
            break winner;
        }
        assert_eq!(state.turn, result.player.other());
        assert!(rolls < 200, "game did not finish");
    };

    assert_eq!(
        session.roll().unwrap_err(),
        GameError::GameAlreadyFinished { winner }
    );

    // The autosave after the winning roll recorded the finish line.
    let reloaded = session.store().load();
    assert_eq!(reloaded.winner, Some(winner));
    assert_eq!(reloaded.position(winner), 100);
    assert_eq!(reloaded.events, session.state().events);
}

#[test]
fn reset_returns_to_last_save() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = open(&dir, vec![2]);
    session.save().unwrap();

    let saved = session.state().clone();
    let path = session.store().path().to_owned();
    std::fs::write(&path, "Turn: Player2\nPlayer1: 50\n").unwrap();

    let reloaded = session.reset().clone();
    assert_eq!(reloaded.turn, Player::Player2);
    assert_eq!(reloaded.position(Player::Player1), 50);
    assert!(reloaded.events.is_empty());
    assert_ne!(reloaded, saved);
}
