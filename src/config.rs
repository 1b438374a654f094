//! Game configuration
//!
//! Static, load-time settings for arena, paddle, ball, blocks and grid.
//! Loaded from JSON; every field falls back to the classic defaults.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{0} must be greater than zero")]
    Zero(&'static str),

    #[error("{name} is {value}, larger than the supported maximum {max}", max = MAX_DIMENSION)]
    TooLarge { name: &'static str, value: u32 },

    #[error("block grid needs {needed} units of width but the arena is only {available} wide")]
    GridTooWide { needed: u64, available: u32 },

    #[error("block grid needs {needed} units of height but only {available} are above the paddle")]
    GridTooTall { needed: u64, available: u32 },

    #[error("block grid reaches down to y={bottom} but the ball can spawn with its top at y={spawn_top}")]
    GridOverlapsSpawn { bottom: u64, spawn_top: i32 },

    #[error("paddle ({width}x{height}) does not fit inside the arena")]
    PaddleTooLarge { width: u32, height: u32 },

    #[error("paddle height {height} must exceed the ball's contact offset {offset}")]
    PaddleTooThin { height: u32, offset: i32 },

    #[error("ball with radius {radius} does not fit inside the arena")]
    BallTooLarge { radius: u32 },
}

/// Width/height pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Ball settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallConfig {
    pub radius: u32,
    /// Ticks per second (the ball moves one unit per axis each tick)
    pub speed: u32,
}

/// Block grid dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    pub cols: u32,
    pub rows: u32,
}

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub arena: Size,
    pub paddle: Size,
    pub ball: BallConfig,
    pub block: Size,
    pub grid: GridConfig,
    /// RNG seed for ball spawns (random when absent)
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena: Size::new(ARENA_WIDTH, ARENA_HEIGHT),
            paddle: Size::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            ball: BallConfig {
                radius: BALL_RADIUS,
                speed: BALL_SPEED,
            },
            block: Size::new(BLOCK_WIDTH, BLOCK_HEIGHT),
            grid: GridConfig {
                cols: GRID_COLS,
                rows: GRID_ROWS,
            },
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject layouts whose arithmetic would go negative or overflow, and
    /// layouts no round could be played on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dims = [
            ("arena.width", self.arena.width),
            ("arena.height", self.arena.height),
            ("paddle.width", self.paddle.width),
            ("paddle.height", self.paddle.height),
            ("ball.radius", self.ball.radius),
            ("ball.speed", self.ball.speed),
            ("block.width", self.block.width),
            ("block.height", self.block.height),
            ("grid.cols", self.grid.cols),
            ("grid.rows", self.grid.rows),
        ];
        for (name, value) in dims {
            if value == 0 {
                return Err(ConfigError::Zero(name));
            }
            if value > MAX_DIMENSION {
                return Err(ConfigError::TooLarge { name, value });
            }
        }

        if self.paddle.width > self.arena.width || self.paddle.height >= self.arena.height {
            return Err(ConfigError::PaddleTooLarge {
                width: self.paddle.width,
                height: self.paddle.height,
            });
        }

        // The ball needs a free unit on every side to move at all
        let diameter = 2 * self.ball.radius + 2;
        if diameter > self.arena.width || diameter > self.arena.height {
            return Err(ConfigError::BallTooLarge {
                radius: self.ball.radius,
            });
        }

        // A contact line on or below the floor is never reached before the loss
        let offset = self.paddle_hit_offset();
        if offset >= self.paddle.height as i32 {
            return Err(ConfigError::PaddleTooThin {
                height: self.paddle.height,
                offset,
            });
        }

        let needed_width = self.grid.cols as u64 * self.block.width as u64;
        if needed_width > self.arena.width as u64 {
            return Err(ConfigError::GridTooWide {
                needed: needed_width,
                available: self.arena.width,
            });
        }

        let row_gap = BLOCK_ROW_GAP as u64;
        let needed_height = self.grid.rows as u64 * (self.block.height as u64 + row_gap) + row_gap;
        let available = self.arena.height - self.paddle.height;
        if needed_height > available as u64 {
            return Err(ConfigError::GridTooTall {
                needed: needed_height,
                available,
            });
        }

        let bottom = self.grid.rows as u64 * (self.block.height as u64 + row_gap);
        let spawn_top = self.highest_spawn_top();
        if bottom > spawn_top.max(0) as u64 {
            return Err(ConfigError::GridOverlapsSpawn { bottom, spawn_top });
        }

        Ok(())
    }

    /// Interval between simulation ticks (1000 / speed milliseconds)
    pub fn tick_interval(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / self.ball.speed.max(1) as u64)
    }

    /// Equal gap between blocks and from both side walls
    pub fn horizontal_gap(&self) -> f32 {
        let free = self.arena.width as f32 - (self.block.width * self.grid.cols) as f32;
        free / (self.grid.cols + 1) as f32
    }

    /// How far below the paddle's top edge the ball's bottom edge registers a hit
    pub fn paddle_hit_offset(&self) -> i32 {
        crate::to_grid(self.ball.radius as f32 / 4.0)
    }

    /// Smallest y the ball's top edge can have right after spawning
    pub fn highest_spawn_top(&self) -> i32 {
        let radius = self.ball.radius as i32;
        let height = self.arena.height as i32;
        crate::clamp_inside(height - SPAWN_RISE - SPAWN_SPREAD_Y, radius, height) - radius
    }

    /// Total number of blocks in a fresh round
    pub fn block_count(&self) -> usize {
        (self.grid.cols * self.grid.rows) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.block_count(), 12);
        assert_eq!(config.horizontal_gap(), 16.0);
        assert_eq!(config.paddle_hit_offset(), 2);
        assert_eq!(config.tick_interval(), Duration::from_millis(5));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{ "grid": { "cols": 2, "rows": 1 }, "seed": 7 }"#)
            .expect("valid config");
        assert_eq!(config.grid.cols, 2);
        assert_eq!(config.arena, Size::new(ARENA_WIDTH, ARENA_HEIGHT));
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_grid_wider_than_arena_is_rejected() {
        let mut config = GameConfig::default();
        config.grid.cols = 6; // 6 * 55 = 330 > 300
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GridTooWide { needed: 330, available: 300 })
        ));
    }

    #[test]
    fn test_grid_taller_than_arena_is_rejected() {
        let mut config = GameConfig::default();
        config.grid.rows = 8; // 8 * 35 + 15 = 295 > 260
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GridTooTall { .. })
        ));
    }

    #[test]
    fn test_grid_overlapping_spawn_is_rejected() {
        let mut config = GameConfig::default();
        assert_eq!(config.highest_spawn_top(), 212);

        config.grid.rows = 6; // bottom row ends at 210
        assert!(config.validate().is_ok());

        config.grid.rows = 7; // 245, fits above the paddle but not the spawn band
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GridOverlapsSpawn { bottom: 245, spawn_top: 212 })
        ));
    }

    #[test]
    fn test_large_ball_spawn_band_accounts_for_clamping() {
        let mut config = GameConfig::default();
        config.ball.radius = 100;
        config.paddle.height = 30;
        // Spawn line 220 is clamped to 179, so the top edge can reach 79
        assert_eq!(config.highest_spawn_top(), 79);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GridOverlapsSpawn { bottom: 105, spawn_top: 79 })
        ));
    }

    #[test]
    fn test_paddle_thinner_than_contact_offset_is_rejected() {
        let mut config = GameConfig::default();
        config.paddle.height = 2; // offset round(8 / 4) = 2 puts the contact line on the floor
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PaddleTooThin { height: 2, offset: 2 })
        ));

        config.paddle.height = 3;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_speed_is_rejected() {
        let mut config = GameConfig::default();
        config.ball.speed = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Zero("ball.speed"))));
    }

    #[test]
    fn test_oversized_ball_and_paddle_are_rejected() {
        let mut config = GameConfig::default();
        config.ball.radius = 150;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BallTooLarge { radius: 150 })
        ));

        let mut config = GameConfig::default();
        config.paddle.width = 301;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PaddleTooLarge { .. })
        ));
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        assert!(matches!(
            GameConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = GameConfig::load("/nonexistent/block-breaker.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
