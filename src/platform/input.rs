//! Pointer input mapping

/// Horizontal extent of the drawing surface in pointer coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub left: f32,
    pub right: f32,
}

impl Viewport {
    pub fn new(left: f32, right: f32) -> Self {
        Self { left, right }
    }

    /// Viewport that lines up 1:1 with the arena
    pub fn arena(arena_width: f32) -> Self {
        Self::new(0.0, arena_width)
    }
}

/// Convert a pointer x into the paddle's x.
///
/// The pointer is clamped to `[left + paddle_width/2, right - paddle_width/2]`
/// and that range is mapped linearly onto `[0, arena_width - paddle_width]`,
/// so the paddle's center follows the pointer. A viewport narrower than the
/// paddle collapses to 0.
pub fn pointer_to_paddle_x(pointer_x: f32, viewport: Viewport, paddle_width: f32, arena_width: f32) -> f32 {
    let lo = viewport.left + paddle_width / 2.0;
    let hi = viewport.right - paddle_width / 2.0;
    let travel = (arena_width - paddle_width).max(0.0);

    if !(hi > lo) || !pointer_x.is_finite() {
        return 0.0;
    }

    let t = (pointer_x.clamp(lo, hi) - lo) / (hi - lo);
    (t * travel).clamp(0.0, travel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_identity_viewport() {
        let vp = Viewport::arena(300.0);
        assert_eq!(pointer_to_paddle_x(150.0, vp, 100.0, 300.0), 100.0);
        assert_eq!(pointer_to_paddle_x(50.0, vp, 100.0, 300.0), 0.0);
        assert_eq!(pointer_to_paddle_x(250.0, vp, 100.0, 300.0), 200.0);
    }

    #[test]
    fn test_pointer_outside_clamps() {
        let vp = Viewport::new(40.0, 340.0);
        assert_eq!(pointer_to_paddle_x(-500.0, vp, 100.0, 300.0), 0.0);
        assert_eq!(pointer_to_paddle_x(5000.0, vp, 100.0, 300.0), 200.0);
        // Offset viewport: pointer at the surface's center centers the paddle
        assert_eq!(pointer_to_paddle_x(190.0, vp, 100.0, 300.0), 100.0);
    }

    #[test]
    fn test_scaled_viewport() {
        // Surface drawn at double size
        let vp = Viewport::new(0.0, 600.0);
        assert_eq!(pointer_to_paddle_x(300.0, vp, 100.0, 300.0), 100.0);
    }

    #[test]
    fn test_degenerate_viewport() {
        let vp = Viewport::new(0.0, 80.0);
        assert_eq!(pointer_to_paddle_x(40.0, vp, 100.0, 300.0), 0.0);
        assert_eq!(pointer_to_paddle_x(f32::NAN, Viewport::arena(300.0), 100.0, 300.0), 0.0);
    }

    proptest! {
        #[test]
        fn prop_paddle_stays_in_bounds(
            pointer in -1.0e6f32..1.0e6,
            left in -1000.0f32..1000.0,
            span in 0.0f32..2000.0,
            paddle_width in 1.0f32..300.0,
        ) {
            let x = pointer_to_paddle_x(pointer, Viewport::new(left, left + span), paddle_width, 300.0);
            prop_assert!(x >= 0.0);
            prop_assert!(x <= 300.0 - paddle_width);
        }
    }
}
