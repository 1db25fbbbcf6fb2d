//! Builder for `PursuitGame`.

use crate::core::{
    AgentState, ConfigError, GameConfig, GameMode, GameRng, IndexPicker, Position,
};
use crate::graph::GridGraph;

use super::engine::PursuitGame;

/// Builder for creating a `PursuitGame`.
///
/// ```
/// use grid_pursuit::game::GameBuilder;
/// use grid_pursuit::core::GameMode;
///
/// let game = GameBuilder::new()
///     .grid_size(8)
///     .mode(GameMode::Defense)
///     .seed(7)
///     .build()
///     .unwrap();
///
/// assert_eq!(game.graph().size(), 8);
/// assert_eq!(game.agents().blue.x, 7);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
    start: Option<AgentState>,
    graph: Option<GridGraph>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn grid_size(mut self, size: i32) -> Self {
        self.config.grid_size = size;
        self
    }

    pub fn initial_gaps(mut self, gaps: usize) -> Self {
        self.config.initial_gaps = gaps;
        self
    }

    pub fn mode(mut self, mode: GameMode) -> Self {
        self.config.mode = mode;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Fix the starting cells instead of drawing rows at random.
    ///
    /// Applies to every reset of the built game.
    pub fn start_positions(mut self, blue: Position, red: Position) -> Self {
        self.start = Some(AgentState::new(blue, red));
        self
    }

    /// Start the first game on this board instead of a fresh one.
    ///
    /// Later resets build a fresh board as usual.
    pub fn graph(mut self, graph: GridGraph) -> Self {
        self.graph = Some(graph);
        self
    }

    /// Build with a ChaCha8 RNG seeded from the configuration.
    pub fn build(self) -> Result<PursuitGame<GameRng>, ConfigError> {
        let rng = GameRng::new(self.config.seed);
        self.build_with_picker(rng)
    }

    /// Build with a caller-supplied random source.
    pub fn build_with_picker<P: IndexPicker>(self, picker: P) -> Result<PursuitGame<P>, ConfigError> {
        self.validate()?;

        let mut game = PursuitGame::assemble(self.config, self.start, picker);
        if let Some(graph) = self.graph {
            game.install_graph(graph);
        }
        Ok(game)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.config.validate()?;
        let size = self.config.grid_size;

        if let Some(start) = self.start {
            for (name, position) in [("blue", start.blue), ("red", start.red)] {
                let inside = (0..size).contains(&position.x) && (0..size).contains(&position.y);
                if !inside {
                    return Err(ConfigError::StartOutOfBounds {
                        agent: name,
                        position,
                        size,
                    });
                }
            }
        }

        if let Some(graph) = &self.graph {
            if graph.size() != size {
                return Err(ConfigError::GraphSizeMismatch {
                    graph_size: graph.size(),
                    config_size: size,
                });
            }
        }

        Ok(())
    }
}
