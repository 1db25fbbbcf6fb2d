//! Pursuit heuristic.
//!
//! Each candidate move `m` toward target `t` scores
//!
//! ```text
//! force / max(manhattan(m, t), min_distance)
//!   + two_hop_bonus   if m is within two hops of t
//!   + 1 / path_len    if a path m → t exists (path_len counts cells)
//! ```

use rustc_hash::FxHashSet;

use super::{MovePolicy, ScoredMove, ScoredMoves};
use crate::core::Position;
use crate::graph::{shortest_path, GridGraph};

/// Attraction toward the target.
pub const ATTACK_FORCE: f64 = 1.5;

/// Distance floor, used when the move lands on the target.
pub const MIN_DISTANCE: f64 = 0.1;

/// Bonus for landing within two hops of the target.
pub const TWO_HOP_BONUS: f64 = 2.0;

/// Moves an agent toward its target.
#[derive(Clone, Debug, PartialEq)]
pub struct AttackAgent {
    pub force: f64,
    pub min_distance: f64,
    pub two_hop_bonus: f64,
}

impl Default for AttackAgent {
    fn default() -> Self {
        Self {
            force: ATTACK_FORCE,
            min_distance: MIN_DISTANCE,
            two_hop_bonus: TWO_HOP_BONUS,
        }
    }
}

impl AttackAgent {
    /// Cells two active hops from `target` (neighbors of neighbors).
    ///
    /// Includes `target` itself whenever it has a neighbor.
    #[must_use]
    pub fn two_hop_cells(graph: &GridGraph, target: Position) -> FxHashSet<Position> {
        graph
            .neighbors(target)
            .into_iter()
            .flat_map(|n| graph.neighbors(n))
            .collect()
    }
}

impl MovePolicy for AttackAgent {
    fn score_moves(&self, graph: &GridGraph, own: Position, target: Position) -> ScoredMoves {
        let two_hop = Self::two_hop_cells(graph, target);

        graph
            .moves(own)
            .into_iter()
            .map(|(direction, position)| {
                let distance = f64::from(position.manhattan(target));
                let mut score = self.force / distance.max(self.min_distance);

                if two_hop.contains(&position) {
                    score += self.two_hop_bonus;
                }

                if let Some(path) = shortest_path(graph, position, target) {
                    score += 1.0 / path.len() as f64;
                }

                ScoredMove {
                    direction,
                    position,
                    score,
                }
            })
            .collect()
    }
}
