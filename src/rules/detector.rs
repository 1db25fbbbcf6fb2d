//! Win-condition detection.
//!
//! Join is checked before separation. The winner of each condition comes
//! from the mode's role table: the pursuer wins a join, the evader wins a
//! separation.

use super::result::{EndReason, GameResult};
use super::roles::ModeRoles;
use crate::core::{AgentState, GameMode};
use crate::graph::{reachable, GridGraph};

/// Evaluate the win condition for the current positions and edges.
#[must_use]
pub fn evaluate(graph: &GridGraph, agents: &AgentState, mode: GameMode) -> GameResult {
    let roles = ModeRoles::for_mode(mode);

    if agents.joined() {
        GameResult::finished(roles.pursuer, EndReason::Joined)
    } else if !reachable(graph, agents.blue, agents.red) {
        GameResult::finished(roles.evader(), EndReason::Separated)
    } else {
        GameResult::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;

    #[test]
    fn test_joined_winner_by_mode() {
        let graph = GridGraph::new(6);
        let agents = AgentState::new(Position::new(2, 2), Position::new(2, 2));

        assert_eq!(evaluate(&graph, &agents, GameMode::Offense), GameResult::BlueWinsJoined);
        assert_eq!(evaluate(&graph, &agents, GameMode::Defense), GameResult::RedWinsJoined);
        assert_eq!(evaluate(&graph, &agents, GameMode::TwoPlayer), GameResult::BlueWinsJoined);
    }

    #[test]
    fn test_separated_winner_by_mode() {
        let mut graph = GridGraph::new(6);
        let agents = AgentState::new(Position::new(0, 0), Position::new(5, 5));
        graph.isolate(agents.red);

        assert_eq!(evaluate(&graph, &agents, GameMode::Offense), GameResult::RedWinsSeparated);
        assert_eq!(evaluate(&graph, &agents, GameMode::Defense), GameResult::BlueWinsSeparated);
        assert_eq!(evaluate(&graph, &agents, GameMode::TwoPlayer), GameResult::RedWinsSeparated);
    }

    #[test]
    fn test_join_checked_first() {
        // A joined pair on an isolated cell is a join, not a separation
        let mut graph = GridGraph::new(4);
        let agents = AgentState::new(Position::new(1, 1), Position::new(1, 1));
        graph.isolate(agents.blue);

        assert_eq!(evaluate(&graph, &agents, GameMode::Offense), GameResult::BlueWinsJoined);
    }

    #[test]
    fn test_in_progress() {
        let graph = GridGraph::new(6);
        let agents = AgentState::new(Position::new(0, 0), Position::new(5, 5));
        assert_eq!(evaluate(&graph, &agents, GameMode::Offense), GameResult::InProgress);
    }
}
