//! Move records for game history.
//!
//! Every committed move is recorded with the edge that eroded right after
//! it (if any). The history is enough to replay a game on a fresh graph.

use serde::{Deserialize, Serialize};

use super::agent::Agent;
use super::position::{Direction, Position};
use crate::graph::EdgeId;

/// A committed move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Turn number the move was made on (starts at 1).
    pub turn: u32,

    /// The agent that moved.
    pub agent: Agent,

    /// Cell the agent left.
    pub from: Position,

    /// Cell the agent entered.
    pub to: Position,

    /// Edge deactivated after this move, if one was eligible.
    pub removed_edge: Option<EdgeId>,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(turn: u32, agent: Agent, from: Position, to: Position) -> Self {
        Self {
            turn,
            agent,
            from,
            to,
            removed_edge: None,
        }
    }

    /// Attach the edge removed after this move.
    #[must_use]
    pub fn with_removed_edge(mut self, edge: Option<EdgeId>) -> Self {
        self.removed_edge = edge;
        self
    }

    /// Direction of the step.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        self.from.direction_to(self.to)
    }
}
