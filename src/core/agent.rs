//! Agent identification and per-agent position storage.
//!
//! ## Agent
//!
//! The game always has exactly two agents, blue and red.
//!
//! ## AgentState
//!
//! The pair of current positions, indexable by `Agent`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::position::Position;

/// One of the two agents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Agent {
    Blue,
    Red,
}

impl Agent {
    /// Both agents, blue first.
    pub const BOTH: [Agent; 2] = [Agent::Blue, Agent::Red];

    /// The other agent.
    #[must_use]
    pub const fn opponent(self) -> Agent {
        match self {
            Agent::Blue => Agent::Red,
            Agent::Red => Agent::Blue,
        }
    }
}

impl std::fmt::Display for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Agent::Blue => f.write_str("Blue"),
            Agent::Red => f.write_str("Red"),
        }
    }
}

/// Current positions of both agents.
///
/// The positions may coincide; that is the join condition.
///
/// ## Example
///
/// ```
/// use grid_pursuit::core::{Agent, AgentState, Position};
///
/// let mut agents = AgentState::new(Position::new(0, 2), Position::new(5, 3));
/// assert_eq!(agents[Agent::Red], Position::new(5, 3));
///
/// agents[Agent::Blue] = Position::new(1, 2);
/// assert_eq!(agents.blue, Position::new(1, 2));
/// assert!(!agents.joined());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentState {
    pub blue: Position,
    pub red: Position,
}

impl AgentState {
    /// Create a new agent state.
    #[must_use]
    pub const fn new(blue: Position, red: Position) -> Self {
        Self { blue, red }
    }

    /// Get an agent's position.
    #[must_use]
    pub fn get(&self, agent: Agent) -> Position {
        match agent {
            Agent::Blue => self.blue,
            Agent::Red => self.red,
        }
    }

    /// Get a mutable reference to an agent's position.
    pub fn get_mut(&mut self, agent: Agent) -> &mut Position {
        match agent {
            Agent::Blue => &mut self.blue,
            Agent::Red => &mut self.red,
        }
    }

    /// Both agents occupy the same cell.
    #[must_use]
    pub fn joined(&self) -> bool {
        self.blue == self.red
    }

    /// Both agents are exactly one lattice step apart.
    #[must_use]
    pub fn adjacent(&self) -> bool {
        self.blue.manhattan(self.red) == 1
    }
}

impl Index<Agent> for AgentState {
    type Output = Position;

    fn index(&self, agent: Agent) -> &Self::Output {
        match agent {
            Agent::Blue => &self.blue,
            Agent::Red => &self.red,
        }
    }
}

impl IndexMut<Agent> for AgentState {
    fn index_mut(&mut self, agent: Agent) -> &mut Self::Output {
        self.get_mut(agent)
    }
}
