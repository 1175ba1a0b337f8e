use serde::{Deserialize, Serialize};

/// Configuration for a round of snake
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid in cells
    pub grid_width: usize,
    /// Height of the game grid in cells
    pub grid_height: usize,
    /// Target body length at round start (the snake grows toward it)
    pub initial_target_length: usize,

    // Speed progression
    /// External ticks per game advance at round start (lower = faster)
    pub start_speed_divisor: u32,
    /// The divisor never drops below this
    pub speed_floor: u32,
    /// Points between speed-ups
    pub speedup_interval: u32,

    // Obstacles
    /// Whether obstacles are generated on reset
    pub obstacles_enabled: bool,
    /// Number of obstacle cells per round
    pub obstacle_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 25,
            grid_height: 25,
            initial_target_length: 4,
            start_speed_divisor: 10,
            speed_floor: 4,
            speedup_interval: 5,
            obstacles_enabled: false,
            obstacle_count: 5,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }
}

/// Named difficulty presets, selected before a round starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Starting ticks-per-move divisor for this difficulty
    pub fn speed_divisor(&self) -> u32 {
        match self {
            Difficulty::Easy => 15,
            Difficulty::Medium => 10,
            Difficulty::Hard => 5,
        }
    }

    /// Whether rounds at this difficulty spawn obstacles
    pub fn has_obstacles(&self) -> bool {
        matches!(self, Difficulty::Hard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 25);
        assert_eq!(config.grid_height, 25);
        assert_eq!(config.initial_target_length, 4);
        assert_eq!(config.start_speed_divisor, 10);
        assert_eq!(config.speed_floor, 4);
        assert_eq!(config.speedup_interval, 5);
        assert!(!config.obstacles_enabled);
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 15);
        assert_eq!(config.grid_width, 15);
        assert_eq!(config.grid_height, 15);
    }

    #[test]
    fn test_difficulty_presets() {
        assert_eq!(Difficulty::Easy.speed_divisor(), 15);
        assert_eq!(Difficulty::Medium.speed_divisor(), 10);
        assert_eq!(Difficulty::Hard.speed_divisor(), 5);

        assert!(!Difficulty::Easy.has_obstacles());
        assert!(!Difficulty::Medium.has_obstacles());
        assert!(Difficulty::Hard.has_obstacles());
    }
}
