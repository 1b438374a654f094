//! Block Breaker - A rectangular arena breakout game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, session state machine)
//! - `renderer`: Pure state -> frame descriptors and the drawing adapter trait
//! - `platform`: Input mapping and tick/frame scheduling
//! - `config`: Load-time game configuration
//! - `runner`: Headless driver with an autopilot paddle

pub mod config;
pub mod platform;
pub mod renderer;
pub mod runner;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use sim::{GamePhase, Session};

/// Game configuration constants
pub mod consts {
    /// Default arena dimensions
    pub const ARENA_WIDTH: u32 = 300;
    pub const ARENA_HEIGHT: u32 = 280;

    /// Paddle defaults
    pub const PADDLE_WIDTH: u32 = 100;
    pub const PADDLE_HEIGHT: u32 = 20;

    /// Ball defaults
    pub const BALL_RADIUS: u32 = 8;
    /// Ticks per second
    pub const BALL_SPEED: u32 = 200;

    /// Block defaults
    pub const BLOCK_WIDTH: u32 = 55;
    pub const BLOCK_HEIGHT: u32 = 20;
    pub const GRID_COLS: u32 = 4;
    pub const GRID_ROWS: u32 = 3;

    /// Vertical gap between block rows (also the top margin)
    pub const BLOCK_ROW_GAP: f32 = 15.0;

    /// Ball spawn: horizontal offset range around the arena center
    pub const SPAWN_SPREAD_X: i32 = 70;
    /// Ball spawn: vertical offset range around the spawn line
    pub const SPAWN_SPREAD_Y: i32 = 10;
    /// Ball spawn line, measured up from the arena floor
    pub const SPAWN_RISE: i32 = 50;

    /// Maximum ticks run per frame to prevent spiral of death
    pub const MAX_CATCH_UP_TICKS: u32 = 8;

    /// Upper bound for any configured dimension, keeps edge arithmetic in i32
    pub const MAX_DIMENSION: u32 = 1 << 15;

    /// Menu text baselines
    pub const MENU_TITLE_Y: f32 = 140.0;
    pub const MENU_PROMPT_Y: f32 = 165.0;
}

/// Round half away from zero and narrow to the integer grid the ball moves on
#[inline]
pub fn to_grid(value: f32) -> i32 {
    value.round() as i32
}

/// Keep a ball center at least one unit away from both walls of an axis
#[inline]
pub(crate) fn clamp_inside(center: i32, radius: i32, extent: i32) -> i32 {
    let lo = radius + 1;
    let hi = (extent - radius - 1).max(lo);
    center.clamp(lo, hi)
}
