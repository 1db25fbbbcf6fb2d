//! Running games.
//!
//! - `PursuitGame`: the turn engine
//! - `GameBuilder`: validated construction
//! - `GameSnapshot`: serializable read-only view
//! - `controls`: key → command mapping

pub mod builder;
pub mod controls;
pub mod engine;
pub mod snapshot;

pub use builder::GameBuilder;
pub use controls::{resolve_key, Command};
pub use engine::{MoveOutcome, PursuitGame, Rejection};
pub use snapshot::GameSnapshot;
