//! Heuristic move selection for the automated side.
//!
//! Policies are trait-based so the turn engine can dispatch on role:
//! - `AttackAgent`: closes in on the target
//! - `EvadeAgent`: flees the target, corners and dead ends
//!
//! Both score every valid move and take the highest score. Ties go to the
//! earliest candidate in `Direction::ALL` order, never to a random pick.

pub mod attack;
pub mod evade;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Direction, Position};
use crate::graph::GridGraph;

pub use attack::AttackAgent;
pub use evade::{DirectionalForces, EvadeAgent};

/// A candidate move and its heuristic score.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoredMove {
    pub direction: Direction,
    pub position: Position,
    pub score: f64,
}

/// Scored candidates, at most one per direction.
pub type ScoredMoves = SmallVec<[ScoredMove; 4]>;

/// Which heuristic an automated agent runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentKind {
    Attack,
    Evade,
}

/// Policy for choosing an automated agent's next cell.
pub trait MovePolicy {
    /// Score every valid move from `own`, in `Direction::ALL` order.
    fn score_moves(&self, graph: &GridGraph, own: Position, target: Position) -> ScoredMoves;

    /// Pick the highest-scoring move.
    ///
    /// Returns `None` when `own` has no active edges.
    fn choose_move(&self, graph: &GridGraph, own: Position, target: Position) -> Option<Position> {
        best_move(&self.score_moves(graph, own, target)).map(|m| m.position)
    }
}

/// Highest score, first candidate on ties.
#[must_use]
pub fn best_move(moves: &[ScoredMove]) -> Option<ScoredMove> {
    moves.iter().copied().fold(None, |best, candidate| match best {
        Some(b) if b.score >= candidate.score => Some(b),
        _ => Some(candidate),
    })
}
