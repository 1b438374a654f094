//! Collision tests for the axis-aligned arena
//!
//! The ball moves exactly one unit per axis per tick, so contact with the
//! paddle and with blocks is detected by exact edge equality. Each approach
//! lands on the contact line on exactly one tick, which is what keeps a hit
//! from firing twice. Walls use range tests.

use super::state::{Ball, Block, Paddle};
use super::tick::Arena;
use crate::to_grid;

/// Which face of a block the ball struck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockHit {
    /// Top or bottom face, flips the vertical direction
    Vertical,
    /// Left or right face, flips the horizontal direction
    Horizontal,
}

/// Closed-interval overlap
#[inline]
pub fn spans_overlap(a_lo: f32, a_hi: f32, b_lo: f32, b_hi: f32) -> bool {
    a_hi >= b_lo && a_lo <= b_hi
}

/// Ball's bottom edge has reached or passed the floor
pub fn ball_past_floor(ball: &Ball, arena: Arena) -> bool {
    ball.bottom() >= arena.height
}

/// Ball touches the left or right wall
pub fn ball_side_wall_collision(ball: &Ball, arena: Arena) -> bool {
    ball.right() >= arena.width || ball.left() <= 0
}

/// Ball touches the ceiling
pub fn ball_top_wall_collision(ball: &Ball) -> bool {
    ball.top() <= 0
}

/// Ball sits exactly on the paddle's contact line and overlaps it horizontally.
///
/// The contact line is `round(radius / 4)` below the paddle's top edge.
pub fn ball_paddle_collision(ball: &Ball, paddle: &Paddle) -> bool {
    let contact_line = paddle.top() + to_grid(ball.radius as f32 / 4.0) as f32;
    ball.bottom() as f32 == contact_line
        && spans_overlap(
            ball.left() as f32,
            ball.right() as f32,
            paddle.left(),
            paddle.right(),
        )
}

/// Check a ball against one block.
///
/// Vertical faces are tested first; a block hit on both axes in the same
/// tick reports `Vertical`. Side faces compare against rounded block edges
/// because grid gaps may be fractional.
pub fn ball_block_collision(ball: &Ball, block: &Block) -> Option<BlockHit> {
    let top = ball.top() as f32;
    let bottom = ball.bottom() as f32;
    let left = ball.left() as f32;
    let right = ball.right() as f32;

    if (top == block.bottom() || bottom == block.top())
        && spans_overlap(left, right, block.left(), block.right())
    {
        return Some(BlockHit::Vertical);
    }

    if (ball.left() == to_grid(block.right()) || ball.right() == to_grid(block.left()))
        && spans_overlap(top, bottom, block.top(), block.bottom())
    {
        return Some(BlockHit::Horizontal);
    }

    None
}
