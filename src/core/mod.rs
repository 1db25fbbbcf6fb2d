//! Core engine types: positions, agents, RNG, configuration, move records.
//!
//! This module contains the value types every other module builds on.

pub mod position;
pub mod agent;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use position::{Direction, Position};
pub use agent::{Agent, AgentState};
pub use rng::{GameRng, IndexPicker};
pub use config::{
    GameConfig, GameMode, TurnState, DEFAULT_GRID_SIZE, DEFAULT_INITIAL_GAPS, MAX_GRID_SIZE,
    MIN_GRID_SIZE,
};
pub use action::MoveRecord;
pub use error::ConfigError;
