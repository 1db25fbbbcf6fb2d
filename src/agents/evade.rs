//! Evasion heuristic: an inverse-distance force field.
//!
//! Three kinds of sources repel the agent:
//! - the target, with charge `target_charge`
//! - every corner reachable from the agent, with charge `obstacle_charge`
//! - every dead end (non-corner cell with exactly one active edge, other than
//!   the two agents' cells), with charge `obstacle_charge`
//!
//! For each source with a path of at least one step to the agent, the charge
//! divided by the path's step count is added to the direction pointing from
//! the agent back along that path. Directions accumulate independently; they
//! are not summed as a vector. A move then scores its direction's force plus
//! `escape_weight` per active edge at the destination.

use super::{MovePolicy, ScoredMove, ScoredMoves};
use crate::core::{Direction, Position};
use crate::graph::{shortest_path, GridGraph};

/// Charge of the pursuing target.
pub const TARGET_CHARGE: f64 = -2.0;

/// Charge of each corner and dead end.
pub const OBSTACLE_CHARGE: f64 = -1.0;

/// Score per escape route at the destination cell.
pub const ESCAPE_ROUTE_WEIGHT: f64 = 0.1;

/// Per-direction force accumulators.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DirectionalForces {
    components: [f64; 4],
}

impl DirectionalForces {
    /// Force currently accumulated for `direction`.
    #[must_use]
    pub fn get(&self, direction: Direction) -> f64 {
        self.components[direction.index()]
    }

    /// Add `amount` to `direction`.
    pub fn add(&mut self, direction: Direction, amount: f64) {
        self.components[direction.index()] += amount;
    }
}

/// Moves an agent away from its target and away from traps.
#[derive(Clone, Debug, PartialEq)]
pub struct EvadeAgent {
    pub target_charge: f64,
    pub obstacle_charge: f64,
    pub escape_weight: f64,
}

impl Default for EvadeAgent {
    fn default() -> Self {
        Self {
            target_charge: TARGET_CHARGE,
            obstacle_charge: OBSTACLE_CHARGE,
            escape_weight: ESCAPE_ROUTE_WEIGHT,
        }
    }
}

impl EvadeAgent {
    /// Accumulate the forces acting on an agent at `own`.
    #[must_use]
    pub fn forces(&self, graph: &GridGraph, own: Position, target: Position) -> DirectionalForces {
        let mut forces = DirectionalForces::default();

        self.push_away(graph, &mut forces, target, own, self.target_charge);

        for corner in graph.corners() {
            self.push_away(graph, &mut forces, corner, own, self.obstacle_charge);
        }

        for dead_end in dead_ends(graph, own, target) {
            self.push_away(graph, &mut forces, dead_end, own, self.obstacle_charge);
        }

        forces
    }

    fn push_away(
        &self,
        graph: &GridGraph,
        forces: &mut DirectionalForces,
        source: Position,
        own: Position,
        charge: f64,
    ) {
        // Unreachable sources exert nothing
        let Some(path) = shortest_path(graph, source, own) else {
            return;
        };
        if let Some(direction) = path.direction_back_from_end() {
            forces.add(direction, charge / path.steps() as f64);
        }
    }
}

/// Non-corner cells with exactly one active edge, excluding both agents'
/// cells. Recomputed on every call.
#[must_use]
pub fn dead_ends(graph: &GridGraph, own: Position, target: Position) -> Vec<Position> {
    graph
        .cells()
        .filter(|&p| p != own && p != target && !graph.is_corner(p))
        .filter(|&p| graph.degree(p) == 1)
        .collect()
}

impl MovePolicy for EvadeAgent {
    fn score_moves(&self, graph: &GridGraph, own: Position, target: Position) -> ScoredMoves {
        let forces = self.forces(graph, own, target);

        graph
            .moves(own)
            .into_iter()
            .map(|(direction, position)| ScoredMove {
                direction,
                position,
                score: forces.get(direction) + self.escape_weight * graph.degree(position) as f64,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn isolate_corners(graph: &mut GridGraph) {
        for corner in graph.corners() {
            graph.isolate(corner);
        }
    }

    #[test]
    fn test_dead_ends() {
        let mut graph = GridGraph::new(6);
        let cell = Position::new(2, 0);
        graph.deactivate_between(cell, Position::new(1, 0));
        graph.deactivate_between(cell, Position::new(3, 0));

        let found = dead_ends(&graph, Position::new(4, 4), Position::new(1, 1));
        assert_eq!(found, vec![cell]);

        // The agents' own cells never count
        assert!(dead_ends(&graph, cell, Position::new(1, 1)).is_empty());
    }

    #[test]
    fn test_corners_are_not_dead_ends() {
        let mut graph = GridGraph::new(6);
        graph.deactivate_between(Position::new(0, 0), Position::new(1, 0));

        assert_eq!(graph.degree(Position::new(0, 0)), 1);
        assert!(dead_ends(&graph, Position::new(3, 3), Position::new(2, 2)).is_empty());
    }

    #[test]
    fn test_target_force_points_toward_target() {
        let mut graph = GridGraph::new(6);
        isolate_corners(&mut graph);
        let agent = EvadeAgent::default();

        let forces = agent.forces(&graph, Position::new(2, 2), Position::new(1, 2));
        assert!((forces.get(Direction::Left) - -2.0).abs() < 1e-9);
        assert_eq!(forces.get(Direction::Right), 0.0);
        assert_eq!(forces.get(Direction::Up), 0.0);
        assert_eq!(forces.get(Direction::Down), 0.0);
    }

    #[test]
    fn test_flees_adjacent_target() {
        let mut graph = GridGraph::new(6);
        isolate_corners(&mut graph);
        let agent = EvadeAgent::default();
        let own = Position::new(2, 2);
        let target = Position::new(1, 2);

        // Right, Up and Down tie at 0.4; Right comes first
        let chosen = agent.choose_move(&graph, own, target).unwrap();
        assert_eq!(chosen, Position::new(3, 2));
        assert_eq!(chosen.manhattan(target), 2);
    }

    #[test]
    fn test_unreachable_corners_exert_nothing() {
        let mut graph = GridGraph::new(6);
        isolate_corners(&mut graph);
        let agent = EvadeAgent::default();

        // Target unreachable too, and cutting it off leaves no dead ends
        let target = Position::new(2, 4);
        graph.isolate(target);
        assert!(dead_ends(&graph, Position::new(2, 2), target).is_empty());

        let forces = agent.forces(&graph, Position::new(2, 2), target);
        assert_eq!(forces, DirectionalForces::default());
    }

    #[test]
    fn test_dead_ends_next_to_isolated_cell_push() {
        let mut graph = GridGraph::new(6);
        isolate_corners(&mut graph);
        let agent = EvadeAgent::default();

        // Cutting off (4,4) leaves (5,4) and (4,5) with one edge each
        graph.isolate(Position::new(4, 4));
        let own = Position::new(2, 2);
        let found = dead_ends(&graph, own, Position::new(4, 4));
        assert_eq!(found, vec![Position::new(4, 5), Position::new(5, 4)]);

        // Both are five steps away and both paths arrive from below
        let forces = agent.forces(&graph, own, Position::new(4, 4));
        assert!((forces.get(Direction::Down) - -0.4).abs() < 1e-9);
        assert_eq!(forces.get(Direction::Left), 0.0);
        assert_eq!(forces.get(Direction::Right), 0.0);
        assert_eq!(forces.get(Direction::Up), 0.0);
    }

    #[test]
    fn test_corner_force_scales_with_distance() {
        let graph = GridGraph::new(6);
        let agent = EvadeAgent::default();

        // Target on the agent's cell exerts nothing; only corners push
        let own = Position::new(1, 0);
        let forces = agent.forces(&graph, own, own);

        // (0,0) is one step to the left
        assert!(forces.get(Direction::Left) <= -1.0);
        assert!(forces.get(Direction::Left) < forces.get(Direction::Right));
    }

    #[test]
    fn test_escape_routes_break_symmetry() {
        let mut graph = GridGraph::new(6);
        isolate_corners(&mut graph);
        // Make (3,2) a poorer escape than (2,1)
        graph.deactivate_between(Position::new(3, 2), Position::new(4, 2));
        let agent = EvadeAgent::default();

        let chosen = agent
            .choose_move(&graph, Position::new(2, 2), Position::new(1, 2))
            .unwrap();
        assert_eq!(chosen, Position::new(2, 1));
    }

    #[test]
    fn test_no_moves() {
        let mut graph = GridGraph::new(6);
        graph.isolate(Position::new(2, 2));
        let agent = EvadeAgent::default();

        assert_eq!(agent.choose_move(&graph, Position::new(2, 2), Position::new(0, 0)), None);
    }
}
