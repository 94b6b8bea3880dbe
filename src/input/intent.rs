//! Movement Intent
//!
//! The four shared directional scalars that every input source writes and
//! the per-frame integrator reads. Values are snapshots: only the latest
//! write matters, nothing accumulates across frames.

use glam::Vec2;

/// Current movement intent as four non-negative scalars in `[0, 1]`.
///
/// Opposed axes (forward/backward, left/right) are mutually exclusive when
/// written through [`apply_move_vector`](MovementIntent::apply_move_vector):
/// setting one side of a pair forces the other to zero. Both the keyboard
/// source and the virtual joystick write the same scalars, so the sources
/// can interfere with each other (see [`crate::input::joystick`] for the
/// release behavior this implies).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MovementIntent {
    /// How strongly the subject wants to move forward (0.0 to 1.0).
    pub forward: f32,
    /// How strongly the subject wants to move backward (0.0 to 1.0).
    pub backward: f32,
    /// How strongly the subject wants to strafe left (0.0 to 1.0).
    pub left: f32,
    /// How strongly the subject wants to strafe right (0.0 to 1.0).
    pub right: f32,
}

impl MovementIntent {
    /// Create a new intent with all scalars at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decompose a 2D drag vector into the four intent scalars.
    ///
    /// Convention: `v.y` is the forward axis (positive = forward),
    /// `v.x` is the strafe axis (positive = right). The sign selects
    /// which side of an opposed pair becomes active; the magnitude
    /// (clamped to 1.0) becomes that side's scalar and the opposite
    /// side is forced to zero.
    ///
    /// A zero component leaves its axis pair untouched. This mirrors the
    /// keyboard path, which submits a vector with only one non-zero
    /// component and must not disturb the other pair.
    pub fn apply_move_vector(&mut self, v: Vec2) {
        if v.y > 0.0 {
            self.forward = v.y.min(1.0);
            self.backward = 0.0;
        } else if v.y < 0.0 {
            self.forward = 0.0;
            self.backward = (-v.y).min(1.0);
        }

        if v.x > 0.0 {
            self.left = 0.0;
            self.right = v.x.min(1.0);
        } else if v.x < 0.0 {
            self.left = (-v.x).min(1.0);
            self.right = 0.0;
        }
    }

    /// Zero all four scalars.
    ///
    /// The joystick source calls this on release, regardless of what the
    /// keyboard source last wrote.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` if no directional input is active.
    pub fn is_idle(&self) -> bool {
        self.forward == 0.0 && self.backward == 0.0 && self.left == 0.0 && self.right == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let intent = MovementIntent::new();
        assert!(intent.is_idle());
    }

    #[test]
    fn test_forward_vector() {
        let mut intent = MovementIntent::new();
        intent.apply_move_vector(Vec2::new(0.0, 0.7));
        assert_eq!(intent.forward, 0.7);
        assert_eq!(intent.backward, 0.0);
        assert!(!intent.is_idle());
    }

    #[test]
    fn test_left_vector() {
        let mut intent = MovementIntent::new();
        intent.apply_move_vector(Vec2::new(-0.5, 0.0));
        assert_eq!(intent.left, 0.5);
        assert_eq!(intent.right, 0.0);
    }

    #[test]
    fn test_opposed_axis_forced_to_zero() {
        let mut intent = MovementIntent::new();
        intent.apply_move_vector(Vec2::new(0.0, 1.0));
        intent.apply_move_vector(Vec2::new(0.0, -0.4));
        assert_eq!(intent.forward, 0.0);
        assert_eq!(intent.backward, 0.4);
    }

    #[test]
    fn test_zero_component_leaves_pair_untouched() {
        let mut intent = MovementIntent::new();
        intent.apply_move_vector(Vec2::new(1.0, 0.0));
        assert_eq!(intent.right, 1.0);

        // A pure-vertical drag must not clear the horizontal pair.
        intent.apply_move_vector(Vec2::new(0.0, 0.6));
        assert_eq!(intent.right, 1.0);
        assert_eq!(intent.forward, 0.6);
    }

    #[test]
    fn test_magnitude_clamped_to_one() {
        let mut intent = MovementIntent::new();
        intent.apply_move_vector(Vec2::new(-3.0, 2.5));
        assert_eq!(intent.left, 1.0);
        assert_eq!(intent.forward, 1.0);
    }

    #[test]
    fn test_clear_zeroes_everything() {
        let mut intent = MovementIntent::new();
        intent.apply_move_vector(Vec2::new(0.3, -0.8));
        intent.clear();
        assert!(intent.is_idle());
    }
}
