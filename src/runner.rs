//! Headless driver
//!
//! Runs rounds without a display. The autopilot stands in for the pointer
//! (the idle/demo mode): it parks the paddle's center under the ball.

use crate::platform::Viewport;
use crate::sim::{GamePhase, Session};

/// Pointer source that tracks the ball
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Autopilot {
    /// Horizontal offset of the aim point from the paddle center
    pub aim_offset: f32,
}

impl Autopilot {
    /// Pointer x (in arena-aligned viewport coordinates) for the next tick
    pub fn pointer_x(&self, session: &Session) -> Option<f32> {
        let ball = session.ball.as_ref()?;
        Some(ball.pos.x as f32 + self.aim_offset)
    }

    /// Move the session's paddle toward the ball
    pub fn steer(&self, session: &mut Session) {
        if let Some(x) = self.pointer_x(session) {
            let viewport = Viewport::arena(session.config().arena.width as f32);
            session.move_paddle(x, viewport);
        }
    }
}

/// How a headless round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Won,
    Lost,
    /// Still active when the tick budget ran out
    TimedOut,
}

impl RunOutcome {
    pub fn from_phase(phase: GamePhase) -> Self {
        match phase {
            GamePhase::Win => RunOutcome::Won,
            GamePhase::Lose => RunOutcome::Lost,
            GamePhase::Inactive | GamePhase::Active => RunOutcome::TimedOut,
        }
    }
}

/// Result of [`run_headless`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub outcome: RunOutcome,
    pub round: u32,
    pub ticks: u64,
    pub blocks_left: usize,
}

/// Start a round (or continue the active one) and tick it until it ends or
/// `max_ticks` pass.
///
/// With an autopilot the paddle is steered before every tick, the same
/// place pointer events interleave in a live game.
pub fn run_headless(session: &mut Session, autopilot: Option<&Autopilot>, max_ticks: u64) -> RunSummary {
    session.start();

    let mut ticks = 0;
    while session.phase.is_active() && ticks < max_ticks {
        if let Some(pilot) = autopilot {
            pilot.steer(session);
        }
        session.tick();
        ticks += 1;
    }

    let outcome = RunOutcome::from_phase(session.phase);
    if outcome == RunOutcome::TimedOut {
        log::warn!("Round {} still running after {} ticks", session.round, ticks);
    }

    RunSummary {
        outcome,
        round: session.round,
        ticks,
        blocks_left: session.blocks.len(),
    }
}
