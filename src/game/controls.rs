//! Keyboard mapping.
//!
//! Arrow keys drive blue. In two-player games w/a/s/d drive red. Enter
//! restarts. Key names follow the DOM `KeyboardEvent.key` convention
//! (`"ArrowLeft"`, `"Enter"`, `"w"`).

use crate::core::{Agent, Direction, GameMode, TurnState};

/// A user command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move { agent: Agent, direction: Direction },
    Reset,
}

fn arrow(key: &str) -> Option<Direction> {
    match key {
        "ArrowLeft" => Some(Direction::Left),
        "ArrowRight" => Some(Direction::Right),
        "ArrowUp" => Some(Direction::Up),
        "ArrowDown" => Some(Direction::Down),
        _ => None,
    }
}

fn wasd(key: &str) -> Option<Direction> {
    match key.to_ascii_lowercase().as_str() {
        "a" => Some(Direction::Left),
        "d" => Some(Direction::Right),
        "w" => Some(Direction::Up),
        "s" => Some(Direction::Down),
        _ => None,
    }
}

/// Map a key press to a command.
///
/// Only the side whose turn it is gets a command in two-player games; keys
/// for the other side map to nothing.
#[must_use]
pub fn resolve_key(key: &str, mode: GameMode, turn: TurnState) -> Option<Command> {
    if key == "Enter" {
        return Some(Command::Reset);
    }

    let (agent, direction) = match (mode, turn) {
        (GameMode::TwoPlayer, TurnState::RedToMove) => (Agent::Red, wasd(key)?),
        _ => (Agent::Blue, arrow(key)?),
    };
    Some(Command::Move { agent, direction })
}
