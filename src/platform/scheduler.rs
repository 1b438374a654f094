//! Tick and frame scheduling
//!
//! Everything runs on one thread: the host calls [`TickTimer::advance`] with
//! elapsed wall time and runs the ticks it reports, then calls
//! [`FrameLoop::frame`] once per display refresh.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::consts::MAX_CATCH_UP_TICKS;
use crate::renderer::{RenderAdapter, frame_for, present};
use crate::sim::Session;

/// Shared single-threaded cancellation flag
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// Fixed-interval tick timer with an accumulator
#[derive(Debug, Clone)]
pub struct TickTimer {
    interval: Duration,
    accumulator: Duration,
    max_catch_up: u32,
    token: CancellationToken,
}

impl TickTimer {
    pub fn new(interval: Duration, token: CancellationToken) -> Self {
        Self {
            interval,
            accumulator: Duration::ZERO,
            max_catch_up: MAX_CATCH_UP_TICKS,
            token,
        }
    }

    /// Timer for the session's current round
    pub fn for_session(session: &Session) -> Self {
        Self::new(session.config().tick_interval(), session.cancellation())
    }

    pub fn with_max_catch_up(mut self, max_catch_up: u32) -> Self {
        self.max_catch_up = max_catch_up.max(1);
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Add elapsed time and return how many ticks are due.
    ///
    /// Returns 0 once cancelled. Backlog beyond the catch-up limit is
    /// dropped to prevent a spiral of death.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.token.is_cancelled() || self.interval.is_zero() {
            self.accumulator = Duration::ZERO;
            return 0;
        }

        self.accumulator += elapsed;
        let mut due = 0;
        while self.accumulator >= self.interval && due < self.max_catch_up {
            self.accumulator -= self.interval;
            due += 1;
        }
        if due == self.max_catch_up && self.accumulator >= self.interval {
            log::debug!("Dropping {:?} of tick backlog", self.accumulator);
            self.accumulator = Duration::ZERO;
        }
        due
    }

    /// Advance the timer and run the due ticks on `session`.
    ///
    /// Stops early as soon as the session leaves `Active`.
    pub fn run(&mut self, session: &mut Session, elapsed: Duration) -> u32 {
        let due = self.advance(elapsed);
        let mut ran = 0;
        for _ in 0..due {
            if self.token.is_cancelled() || !session.phase.is_active() {
                break;
            }
            session.tick();
            ran += 1;
        }
        ran
    }
}

/// Whether the frame loop should schedule another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Display-rate render loop.
///
/// Keeps going while the session is active; a non-active session gets
/// exactly one frame, then the loop stops until restarted.
#[derive(Debug, Clone, Default)]
pub struct FrameLoop {
    frames: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn frame<R: RenderAdapter + ?Sized>(&mut self, session: &Session, adapter: &mut R) -> LoopControl {
        let frame = frame_for(session);
        present(&frame, adapter);
        self.frames += 1;

        if session.phase.is_active() {
            LoopControl::Continue
        } else {
            LoopControl::Stop
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::renderer::RecordingAdapter;

    #[test]
    fn test_timer_accumulates() {
        let mut timer = TickTimer::new(Duration::from_millis(5), CancellationToken::new());
        assert_eq!(timer.advance(Duration::from_millis(3)), 0);
        assert_eq!(timer.advance(Duration::from_millis(3)), 1);
        assert_eq!(timer.advance(Duration::from_millis(9)), 2);
    }

    #[test]
    fn test_timer_caps_backlog() {
        let mut timer =
            TickTimer::new(Duration::from_millis(5), CancellationToken::new()).with_max_catch_up(4);
        assert_eq!(timer.advance(Duration::from_secs(1)), 4);
        // Backlog was dropped
        assert_eq!(timer.advance(Duration::from_millis(1)), 0);
    }

    #[test]
    fn test_cancelled_timer_yields_nothing() {
        let token = CancellationToken::new();
        let mut timer = TickTimer::new(Duration::from_millis(5), token.clone());
        token.cancel();
        assert!(timer.is_cancelled());
        assert_eq!(timer.advance(Duration::from_secs(1)), 0);
    }

    #[test]
    fn test_timer_cancelled_when_round_ends() {
        let mut session = Session::new(GameConfig::default(), 5);
        session.start();
        let mut timer = TickTimer::for_session(&session);
        assert_eq!(timer.interval(), Duration::from_millis(5));

        // Drop the ball right above the floor
        if let Some(ball) = session.ball.as_mut() {
            ball.pos.y = 272;
        }
        let ran = timer.run(&mut session, Duration::from_millis(20));
        assert_eq!(ran, 1);
        assert!(timer.is_cancelled());
        assert_eq!(timer.run(&mut session, Duration::from_millis(20)), 0);
    }

    #[test]
    fn test_frame_loop_stops_when_not_active() {
        let mut session = Session::new(GameConfig::default(), 5);
        let mut frames = FrameLoop::new();
        let mut adapter = RecordingAdapter::default();

        assert_eq!(frames.frame(&session, &mut adapter), LoopControl::Stop);

        session.start();
        assert_eq!(frames.frame(&session, &mut adapter), LoopControl::Continue);
        assert_eq!(frames.frames(), 2);
    }
}
