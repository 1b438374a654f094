//! Fixed timestep simulation tick
//!
//! One call to [`step`] resolves collisions in a fixed order and then moves
//! the ball one unit along each axis. The order decides tie-breaks when
//! several surfaces are touched on the same tick:
//!
//! 1. floor (lose, ends the tick)
//! 2. side walls
//! 3. ceiling
//! 4. paddle
//! 5. blocks, newest first
//! 6. win check
//! 7. advance

use super::collision::{
    BlockHit, ball_block_collision, ball_paddle_collision, ball_past_floor,
    ball_side_wall_collision, ball_top_wall_collision,
};
use super::state::{Ball, Block, Paddle};
use crate::config::GameConfig;

/// Arena bounds on the ball's integer grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arena {
    pub width: i32,
    pub height: i32,
}

impl Arena {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            width: config.arena.width as i32,
            height: config.arena.height as i32,
        }
    }
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Ball reached the floor; nothing else ran this tick
    pub lost: bool,
    /// The block collection is empty after this tick's removals
    pub won: bool,
    /// Blocks destroyed this tick
    pub blocks_removed: u32,
    pub bounced_x: bool,
    pub bounced_y: bool,
}

/// Advance the ball by one tick against the paddle, blocks and walls.
///
/// Reaching the floor short-circuits: the ball is left where it is and no
/// further checks run. Blocks are scanned from the back of the collection
/// so removal never skips an entry, and every block is tested on its own,
/// so several can go in one tick.
pub fn step(ball: &mut Ball, paddle: &Paddle, blocks: &mut Vec<Block>, arena: Arena) -> TickOutcome {
    let mut outcome = TickOutcome::default();

    if ball_past_floor(ball, arena) {
        log::debug!("Ball reached floor at {:?}", ball.pos);
        outcome.lost = true;
        return outcome;
    }

    // Edges are taken before any flips; flips only change direction.
    if ball_side_wall_collision(ball, arena) {
        ball.dir.x = -ball.dir.x;
        outcome.bounced_x = true;
    }

    if ball_top_wall_collision(ball) {
        ball.dir.y = -ball.dir.y;
        outcome.bounced_y = true;
    }

    if ball_paddle_collision(ball, paddle) {
        log::trace!("Paddle hit at x={}", ball.pos.x);
        ball.dir.y = -ball.dir.y;
        outcome.bounced_y = true;
    }

    for i in (0..blocks.len()).rev() {
        let Some(hit) = ball_block_collision(ball, &blocks[i]) else {
            continue;
        };
        match hit {
            BlockHit::Vertical => {
                ball.dir.y = -ball.dir.y;
                outcome.bounced_y = true;
            }
            BlockHit::Horizontal => {
                ball.dir.x = -ball.dir.x;
                outcome.bounced_x = true;
            }
        }
        let block = blocks.remove(i);
        outcome.blocks_removed += 1;
        log::debug!(
            "Block {} destroyed ({:?}), {} left",
            block.id,
            hit,
            blocks.len()
        );
    }

    outcome.won = blocks.is_empty();

    ball.advance();
    log::trace!("Ball at {:?} heading {:?}", ball.pos, ball.dir);

    outcome
}
