//! Perspective Camera
//!
//! Holds the viewing camera's position and lens parameters and produces
//! view/projection matrices. Matrices are returned as `[[f32; 4]; 4]`
//! column-major arrays suitable for passing to wgpu uniform buffers.

use glam::{Mat4, Vec3};

use crate::config::CameraConfig;

/// Perspective camera state.
///
/// The camera does not own its look-target; the controller points it at the
/// orbit target each frame. Only the position is mutated during normal
/// operation (by the camera follower and the orbit interactive surface).
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    /// Camera position in world space.
    pub position: Vec3,
    /// Vertical field of view in degrees.
    pub fov: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clip plane distance.
    pub near: f32,
    /// Far clip plane distance.
    pub far: f32,
}

impl PerspectiveCamera {
    /// Create a camera from its configuration.
    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            position: config.position,
            fov: config.fov,
            aspect: config.aspect,
            near: config.near,
            far: config.far,
        }
    }

    /// Compute the view (look-at) matrix toward `target` with +Y up.
    pub fn view_matrix(&self, target: Vec3) -> [[f32; 4]; 4] {
        Mat4::look_at_rh(self.position, target, Vec3::Y).to_cols_array_2d()
    }

    /// Compute the perspective projection matrix (right-handed, wgpu
    /// depth convention).
    pub fn projection_matrix(&self) -> [[f32; 4]; 4] {
        Mat4::perspective_rh(self.fov.to_radians(), self.aspect, self.near, self.far)
            .to_cols_array_2d()
    }

    /// Compute `projection * view` in one call.
    pub fn view_projection_matrix(&self, target: Vec3) -> [[f32; 4]; 4] {
        let view = Mat4::look_at_rh(self.position, target, Vec3::Y);
        let proj = Mat4::perspective_rh(self.fov.to_radians(), self.aspect, self.near, self.far);
        (proj * view).to_cols_array_2d()
    }

    /// Update the aspect ratio after a window resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_default_matches_config() {
        let cam = PerspectiveCamera::default();
        let config = CameraConfig::default();
        assert_eq!(cam.position, config.position);
        assert!(approx_eq(cam.fov, config.fov));
    }

    #[test]
    fn test_projection_matrix_is_perspective() {
        let cam = PerspectiveCamera::default();
        let proj = cam.projection_matrix();
        assert!(proj[0][0] > 0.0);
        assert!(proj[1][1] > 0.0);
        // Perspective matrices have a zero in the bottom-right corner.
        assert!(approx_eq(proj[3][3], 0.0));
    }

    #[test]
    fn test_view_matrix_not_degenerate() {
        let cam = PerspectiveCamera::default();
        let view = cam.view_matrix(Vec3::ZERO);
        let sum: f32 = view.iter().flat_map(|col| col.iter()).map(|v| v.abs()).sum();
        assert!(sum > 0.0);
    }

    #[test]
    fn test_resize_updates_aspect() {
        let mut cam = PerspectiveCamera::default();
        cam.resize(1920, 1080);
        assert!(approx_eq(cam.aspect, 1920.0 / 1080.0));
    }

    #[test]
    fn test_resize_zero_ignored() {
        let mut cam = PerspectiveCamera::default();
        let aspect = cam.aspect;
        cam.resize(0, 1080);
        assert!(approx_eq(cam.aspect, aspect));
    }
}
