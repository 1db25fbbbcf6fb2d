//! Read-only game view for renderers.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{AgentState, GameMode, MoveRecord, TurnState};
use crate::graph::Edge;
use crate::rules::GameResult;

/// Everything a renderer needs to draw one frame.
///
/// Edge and history vectors share structure with the live game, so taking a
/// snapshot every frame is cheap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub mode: GameMode,
    pub grid_size: i32,
    /// All edges in id order, active or not.
    pub edges: Vector<Edge>,
    pub agents: AgentState,
    /// Both agents on one cell; renderers draw a single merged marker.
    pub joined: bool,
    pub turn: TurnState,
    pub turn_number: u32,
    pub result: GameResult,
    /// Outcome text, empty while the game is in progress.
    pub message: String,
    pub history: Vector<MoveRecord>,
}

impl GameSnapshot {
    /// Active edges only.
    pub fn active_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(|e| e.active)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::Position;
    use crate::game::GameBuilder;

    #[test]
    fn test_snapshot_is_detached() {
        let mut game = GameBuilder::new()
            .initial_gaps(0)
            .start_positions(Position::new(0, 0), Position::new(5, 5))
            .build()
            .unwrap();

        let before = game.snapshot();
        assert_eq!(before.active_edges().count(), 60);
        assert!(before.message.is_empty());
        assert!(!before.joined);

        game.reset();
        game.submit_move(crate::core::Agent::Blue, crate::core::Direction::Right);

        // The earlier view still shows the untouched board
        assert_eq!(before.active_edges().count(), 60);
        assert!(game.snapshot().active_edges().count() < 60);
    }

    #[test]
    fn test_snapshot_serialization() {
        let game = GameBuilder::new().seed(5).build().unwrap();
        let snapshot = game.snapshot();

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: super::GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
    }
}
