//! # grid-pursuit
//!
//! A two-agent pursuit game on an eroding square lattice.
//!
//! Blue and red walk the cells of an N×N grid along active edges. After
//! every move one random active edge disappears. The pursuer wins by landing
//! on the other agent's cell; the evader wins once no active path connects
//! them.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: all randomness flows through `IndexPicker`. A seed
//!    (or a scripted picker) reproduces a game exactly.
//!
//! 2. **Table-Driven Modes**: who pursues, who is automated and where each
//!    side starts come from one `ModeRoles` lookup.
//!
//! 3. **Cheap Snapshots**: edges and history live in `im-rs` vectors, so a
//!    renderer can take a `GameSnapshot` every frame.
//!
//! ## Modules
//!
//! - `core`: positions, agents, RNG, configuration, move records, errors
//! - `graph`: the eroding lattice and breadth-first path search
//! - `agents`: attack and evade heuristics
//! - `rules`: role table and game-over detection
//! - `game`: the turn engine, builder, snapshots and key controls

pub mod core;
pub mod graph;
pub mod agents;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Agent, AgentState, ConfigError, Direction, GameConfig, GameMode, GameRng, IndexPicker,
    MoveRecord, Position, TurnState,
};

pub use crate::graph::{reachable, shortest_path, Edge, EdgeId, GridGraph, Path};

pub use crate::agents::{AgentKind, AttackAgent, EvadeAgent, MovePolicy, ScoredMove};

pub use crate::rules::{evaluate, EndReason, GameResult, ModeRoles};

pub use crate::game::{
    resolve_key, Command, GameBuilder, GameSnapshot, MoveOutcome, PursuitGame, Rejection,
};
