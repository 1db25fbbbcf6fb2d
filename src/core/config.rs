//! Game configuration types.
//!
//! - `GameMode`: who plays which role (fixed for a game)
//! - `TurnState`: whose turn it is in two-player games
//! - `GameConfig`: grid size, setup gaps, mode and seed

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Default lattice width and height.
pub const DEFAULT_GRID_SIZE: i32 = 6;

/// Interior edges removed when a game starts.
pub const DEFAULT_INITIAL_GAPS: usize = 3;

/// Smallest grid with at least one edge.
pub const MIN_GRID_SIZE: i32 = 2;

/// Largest supported grid. Path searches run every turn, so keep it small.
pub const MAX_GRID_SIZE: i32 = 64;

/// Game mode. Changing it resets the game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Human blue chases an evading red.
    #[default]
    Offense,
    /// Human blue evades an attacking red.
    Defense,
    /// Two humans alternate, red first.
    TwoPlayer,
}

impl GameMode {
    /// Next mode in the toggle cycle: Offense → Defense → TwoPlayer → Offense.
    #[must_use]
    pub const fn next(self) -> GameMode {
        match self {
            GameMode::Offense => GameMode::Defense,
            GameMode::Defense => GameMode::TwoPlayer,
            GameMode::TwoPlayer => GameMode::Offense,
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameMode::Offense => f.write_str("Offense"),
            GameMode::Defense => f.write_str("Defense"),
            GameMode::TwoPlayer => f.write_str("Two Player"),
        }
    }
}

/// Whose turn it is. Only meaningful in `GameMode::TwoPlayer`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnState {
    #[default]
    RedToMove,
    BlueToMove,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Lattice width and height.
    pub grid_size: i32,

    /// Interior edges removed at setup.
    pub initial_gaps: usize,

    /// Mode the game starts in.
    pub mode: GameMode,

    /// Seed for the default RNG. Ignored when a custom picker is supplied.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            initial_gaps: DEFAULT_INITIAL_GAPS,
            mode: GameMode::default(),
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Set the grid size.
    #[must_use]
    pub fn with_grid_size(mut self, size: i32) -> Self {
        self.grid_size = size;
        self
    }

    /// Set how many interior edges start missing.
    #[must_use]
    pub fn with_initial_gaps(mut self, gaps: usize) -> Self {
        self.initial_gaps = gaps;
        self
    }

    /// Set the starting mode.
    #[must_use]
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check the configuration is playable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < MIN_GRID_SIZE {
            return Err(ConfigError::GridTooSmall {
                size: self.grid_size,
                min: MIN_GRID_SIZE,
            });
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::GridTooLarge {
                size: self.grid_size,
                max: MAX_GRID_SIZE,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_size, 6);
        assert_eq!(config.initial_gaps, 3);
        assert_eq!(config.mode, GameMode::Offense);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_grid_size(8)
            .with_initial_gaps(5)
            .with_mode(GameMode::Defense)
            .with_seed(123);

        assert_eq!(config.grid_size, 8);
        assert_eq!(config.initial_gaps, 5);
        assert_eq!(config.mode, GameMode::Defense);
        assert_eq!(config.seed, 123);
    }

    #[test]
    fn test_validate_bounds() {
        assert_eq!(
            GameConfig::default().with_grid_size(1).validate(),
            Err(ConfigError::GridTooSmall { size: 1, min: 2 })
        );
        assert_eq!(
            GameConfig::default().with_grid_size(65).validate(),
            Err(ConfigError::GridTooLarge { size: 65, max: 64 })
        );
        assert!(GameConfig::default().with_grid_size(2).validate().is_ok());
    }

    #[test]
    fn test_mode_cycle() {
        assert_eq!(GameMode::Offense.next(), GameMode::Defense);
        assert_eq!(GameMode::Defense.next(), GameMode::TwoPlayer);
        assert_eq!(GameMode::TwoPlayer.next(), GameMode::Offense);
        assert_eq!(format!("{}", GameMode::TwoPlayer), "Two Player");
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_mode(GameMode::TwoPlayer);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
