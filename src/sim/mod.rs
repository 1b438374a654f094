//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Unit-step integer motion only
//! - Seeded RNG only
//! - Stable iteration order (blocks in insertion order)
//! - No rendering or platform dependencies beyond input mapping

pub mod collision;
pub mod layout;
pub mod state;
pub mod tick;

pub use collision::{
    BlockHit, ball_block_collision, ball_paddle_collision, ball_past_floor,
    ball_side_wall_collision, ball_top_wall_collision,
};
pub use layout::block_grid;
pub use state::{Ball, Block, GamePhase, Paddle, Session};
pub use tick::{Arena, TickOutcome, step};
