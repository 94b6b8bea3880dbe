//! Player Anchor
//!
//! The invisible proxy object whose position represents the controllable
//! subject. The motion integrator is the only writer; the camera follower
//! and the host's renderer read it.

use glam::{Mat4, Vec3};

/// Anchor position plus its cached world transform.
///
/// The transform is a plain translation recomputed after every integration
/// step, exported column-major for hosts that upload it as an instance or
/// uniform matrix.
#[derive(Debug, Clone)]
pub struct PlayerAnchor {
    /// World-space position of the subject.
    pub position: Vec3,
    world_transform: Mat4,
}

impl PlayerAnchor {
    /// Create an anchor at `position` with an up-to-date transform.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            world_transform: Mat4::from_translation(position),
        }
    }

    /// Move the anchor by `delta` without recomputing the transform.
    ///
    /// The integrator applies several deltas per frame (one per active
    /// intent) and recomputes the transform once at the end.
    pub fn translate_by(&mut self, delta: Vec3) {
        self.position += delta;
    }

    /// Recompute the cached world transform from the current position.
    pub fn update_world_transform(&mut self) {
        self.world_transform = Mat4::from_translation(self.position);
    }

    /// The cached world transform.
    pub fn world_transform(&self) -> Mat4 {
        self.world_transform
    }

    /// The cached world transform as a column-major array.
    pub fn world_matrix(&self) -> [[f32; 4]; 4] {
        self.world_transform.to_cols_array_2d()
    }
}

impl Default for PlayerAnchor {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}
