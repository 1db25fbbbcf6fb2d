//! Construction errors.
//!
//! Gameplay itself never fails: invalid move intents are ignored and
//! reported through `MoveOutcome`. Only building a game from a bad
//! configuration produces an error.

use thiserror::Error;

use super::position::Position;

/// Errors raised while validating a configuration or building a game.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("grid size {size} is too small (minimum {min})")]
    GridTooSmall { size: i32, min: i32 },

    #[error("grid size {size} is too large (maximum {max})")]
    GridTooLarge { size: i32, max: i32 },

    #[error("{agent} start position {position} lies outside a {size}x{size} grid")]
    StartOutOfBounds {
        agent: &'static str,
        position: Position,
        size: i32,
    },

    #[error("supplied graph is {graph_size}x{graph_size} but the configuration asks for {config_size}x{config_size}")]
    GraphSizeMismatch { graph_size: i32, config_size: i32 },
}
