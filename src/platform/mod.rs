//! Platform abstraction layer
//!
//! Handles the pieces that sit between the simulation and the host:
//! - Input events (pointer -> paddle mapping)
//! - Time/ticks (fixed-interval tick timer, frame loop, cancellation)

pub mod input;
pub mod scheduler;

pub use input::{Viewport, pointer_to_paddle_x};
pub use scheduler::{CancellationToken, FrameLoop, LoopControl, TickTimer};
