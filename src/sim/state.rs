//! Game session state and core entity types
//!
//! Entities are plain data. All mutation of the ball and the block
//! collection goes through [`Session`]; the paddle's x is only written by
//! the input path.

use glam::{IVec2, Vec2};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::layout::block_grid;
use super::tick::{Arena, TickOutcome, step};
use crate::config::GameConfig;
use crate::clamp_inside;
use crate::consts::*;
use crate::platform::input::{Viewport, pointer_to_paddle_x};
use crate::platform::scheduler::CancellationToken;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    /// Nothing started yet, menu is shown
    #[default]
    Inactive,
    /// Round in progress, ticking
    Active,
    /// Ball left through the bottom
    Lose,
    /// Every block destroyed
    Win,
}

impl GamePhase {
    pub fn is_active(self) -> bool {
        self == GamePhase::Active
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Inactive => "inactive",
            GamePhase::Active => "active",
            GamePhase::Lose => "lose",
            GamePhase::Win => "win",
        }
    }
}

/// The player's paddle, resting on the arena floor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub width: f32,
    pub height: f32,
    /// Top-left corner
    pub pos: Vec2,
}

impl Paddle {
    /// Centered horizontally, bottom edge on the arena floor
    pub fn new(config: &GameConfig) -> Self {
        let width = config.paddle.width as f32;
        let height = config.paddle.height as f32;
        Self {
            width,
            height,
            pos: Vec2::new(
                (config.arena.width as f32 - width) / 2.0,
                config.arena.height as f32 - height,
            ),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    /// Set x, clamped to `[0, arena_width - width]`
    pub fn set_x(&mut self, x: f32, arena_width: f32) {
        let max_x = (arena_width - self.width).max(0.0);
        self.pos.x = if x.is_nan() { 0.0 } else { x.clamp(0.0, max_x) };
    }
}

/// The ball. Moves one grid unit per axis per tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    pub radius: i32,
    /// Ticks per second
    pub speed: u32,
    /// Center
    pub pos: IVec2,
    /// Each component is always -1 or +1
    pub dir: IVec2,
}

impl Ball {
    pub fn new(radius: i32, speed: u32, pos: IVec2, dir: IVec2) -> Self {
        debug_assert!(dir.x.abs() == 1 && dir.y.abs() == 1);
        Self {
            radius,
            speed,
            pos,
            dir,
        }
    }

    /// Spawn a fresh ball heading upward.
    ///
    /// x is the arena center plus a uniform offset in
    /// `[-SPAWN_SPREAD_X, SPAWN_SPREAD_X]`; y is `SPAWN_RISE` above the floor
    /// plus a uniform offset in `[-SPAWN_SPREAD_Y, SPAWN_SPREAD_Y]`. The
    /// horizontal direction is either way with equal probability. Both
    /// coordinates are clamped so the ball starts clear of every wall.
    pub fn spawn<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        let radius = config.ball.radius as i32;
        let width = config.arena.width as i32;
        let height = config.arena.height as i32;

        let x = width / 2 + rng.random_range(-SPAWN_SPREAD_X..=SPAWN_SPREAD_X);
        let y = height - SPAWN_RISE + rng.random_range(-SPAWN_SPREAD_Y..=SPAWN_SPREAD_Y);
        let dir_x = if rng.random_bool(0.5) { 1 } else { -1 };

        let x = clamp_inside(x, radius, width);
        let y = clamp_inside(y, radius, height);

        Self::new(radius, config.ball.speed, IVec2::new(x, y), IVec2::new(dir_x, -1))
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.radius
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.radius
    }

    /// One unit step along the current direction
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.dir;
    }
}

/// A destructible block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: u32,
    pub width: f32,
    pub height: f32,
    /// Top-left corner
    pub pos: Vec2,
}

impl Block {
    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height
    }
}

/// One game session: the state machine plus everything it owns.
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    /// Current phase
    pub phase: GamePhase,
    /// Created lazily on the first start, kept across rounds
    pub paddle: Option<Paddle>,
    /// Present only while a round is active
    pub ball: Option<Ball>,
    /// Remaining blocks in insertion order
    pub blocks: Vec<Block>,
    /// Rounds started so far
    pub round: u32,
    /// Ticks simulated in the current round
    pub round_ticks: u64,
    rng: Pcg32,
    cancel: CancellationToken,
    next_id: u32,
}

impl Session {
    /// New inactive session. `config` is expected to be validated.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, Pcg32::seed_from_u64(seed))
    }

    /// New inactive session drawing ball spawns from `rng`
    pub fn with_rng(config: GameConfig, rng: Pcg32) -> Self {
        let cancel = CancellationToken::new();
        cancel.cancel();
        Self {
            config,
            phase: GamePhase::Inactive,
            paddle: None,
            ball: None,
            blocks: Vec::new(),
            round: 0,
            round_ticks: 0,
            rng,
            cancel,
            next_id: 1,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn arena(&self) -> Arena {
        Arena::from_config(&self.config)
    }

    /// Token tripped when the current round stops ticking
    pub fn cancellation(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Handle the "start" trigger.
    ///
    /// Ignored while a round is active. Otherwise builds a fresh ball and
    /// block grid (and the paddle, the first time) and enters `Active`.
    /// Returns whether a round was started.
    pub fn start(&mut self) -> bool {
        if self.phase.is_active() {
            log::debug!("Start ignored, round {} already active", self.round);
            return false;
        }

        if self.paddle.is_none() {
            self.paddle = Some(Paddle::new(&self.config));
        }

        self.ball = Some(Ball::spawn(&self.config, &mut self.rng));
        self.blocks.clear();
        for pos in block_grid(&self.config) {
            let id = self.next_entity_id();
            self.blocks.push(Block {
                id,
                width: self.config.block.width as f32,
                height: self.config.block.height as f32,
                pos,
            });
        }

        self.round += 1;
        self.round_ticks = 0;
        self.cancel = CancellationToken::new();
        log::info!(
            "Round {} started from {}: {} blocks",
            self.round,
            self.phase.as_str(),
            self.blocks.len()
        );
        self.phase = GamePhase::Active;
        true
    }

    /// Map a pointer x (viewport coordinates) onto the paddle.
    /// No-op until the paddle exists.
    pub fn move_paddle(&mut self, pointer_x: f32, viewport: Viewport) {
        let arena_width = self.config.arena.width as f32;
        if let Some(paddle) = self.paddle.as_mut() {
            let x = pointer_to_paddle_x(pointer_x, viewport, paddle.width, arena_width);
            paddle.set_x(x, arena_width);
        }
    }

    /// Advance the round by one tick.
    ///
    /// Does nothing unless the session is active. Leaving `Active` discards
    /// the ball and trips the cancellation token.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.phase.is_active() {
            return TickOutcome::default();
        }
        let arena = self.arena();
        let (Some(ball), Some(paddle)) = (self.ball.as_mut(), self.paddle.as_ref()) else {
            return TickOutcome::default();
        };

        let outcome = step(ball, paddle, &mut self.blocks, arena);
        self.round_ticks += 1;

        if outcome.lost {
            self.finish(GamePhase::Lose);
        } else if outcome.won {
            self.finish(GamePhase::Win);
        }
        outcome
    }

    fn finish(&mut self, phase: GamePhase) {
        log::info!(
            "Round {} ended: {} after {} ticks, {} blocks left",
            self.round,
            phase.as_str(),
            self.round_ticks,
            self.blocks.len()
        );
        self.phase = phase;
        self.ball = None;
        self.cancel.cancel();
    }

    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
