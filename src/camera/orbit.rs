//! Orbit Controls
//!
//! The orbit/look-target helper the movement controller reads its azimuth
//! from. Owns the look-target and the interactive rotate/zoom/pan surface;
//! the camera position itself lives in [`PerspectiveCamera`].
//!
//! The azimuthal angle is derived from the camera's offset to the target
//! (`atan2(x, z)`), so repositioning the camera around the target is all it
//! takes to steer the player's movement frame.

use glam::{Vec2, Vec3};

use crate::camera::perspective::PerspectiveCamera;
use crate::config::OrbitConfig;

/// Rotate sensitivity: degrees of orbit per pixel of drag, before the
/// configured rotate speed is applied.
const ROTATE_SENSITIVITY: f32 = 0.3;
/// Pan sensitivity factor: multiplied by distance for depth-proportional
/// panning.
const PAN_SENSITIVITY: f32 = 0.005;
/// Zoom factor: how much each scroll tick affects distance.
const ZOOM_FACTOR: f32 = 0.1;

/// Orbit-style look-target helper with an interactive control surface.
///
/// Rotation input accumulates into a pending velocity and is applied on the
/// next [`update`](OrbitControls::update) call; with damping enabled the
/// velocity decays over subsequent frames instead of being consumed at once.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    /// The point the camera orbits and looks at. The controller keeps this
    /// synced to the player anchor every frame.
    pub target: Vec3,
    config: OrbitConfig,
    /// Pending rotation (azimuth, elevation) in radians.
    rot_velocity: Vec2,
}

impl OrbitControls {
    /// Create orbit controls from their configuration.
    pub fn from_config(config: OrbitConfig) -> Self {
        Self {
            target: config.target,
            config,
            rot_velocity: Vec2::ZERO,
        }
    }

    /// The configuration this helper was built with.
    pub fn config(&self) -> &OrbitConfig {
        &self.config
    }

    /// Horizontal angle of the camera around the target, in radians.
    ///
    /// Zero means the camera sits on the +Z side of the target looking down
    /// -Z, matching the three.js spherical convention, so "forward" input
    /// at zero azimuth moves the subject toward -Z.
    pub fn azimuthal_angle(&self, camera_position: Vec3) -> f32 {
        let offset = camera_position - self.target;
        offset.x.atan2(offset.z)
    }

    /// Queue a rotate drag of (`dx`, `dy`) pixels.
    ///
    /// Ignored when rotation is disabled. Applied on the next `update`.
    pub fn handle_rotate(&mut self, dx: f32, dy: f32) {
        if !self.config.enable_rotate {
            return;
        }
        let scale = ROTATE_SENSITIVITY.to_radians() * self.config.rotate_speed;
        self.rot_velocity.x -= dx * scale;
        self.rot_velocity.y -= dy * scale;
    }

    /// Dolly the camera toward/away from the target.
    ///
    /// Multiplicative so zooming feels consistent at every distance;
    /// positive `delta` zooms in. Distance is clamped to the configured
    /// [min, max] range. Ignored when zoom is disabled.
    pub fn handle_zoom(&mut self, camera: &mut PerspectiveCamera, delta: f32) {
        if !self.config.enable_zoom {
            return;
        }
        let offset = camera.position - self.target;
        let distance = offset.length();
        if distance <= 0.0 {
            return;
        }

        let new_distance = (distance * (1.0 - delta * ZOOM_FACTOR * self.config.zoom_speed))
            .clamp(self.config.min_distance, self.config.max_distance);
        camera.position = self.target + offset / distance * new_distance;
    }

    /// Pan the view: translate the target and the camera together in
    /// camera-local right/up directions. Ignored when pan is disabled.
    pub fn handle_pan(&mut self, camera: &mut PerspectiveCamera, dx: f32, dy: f32) {
        if !self.config.enable_pan {
            return;
        }
        let offset = camera.position - self.target;
        let distance = offset.length();
        if distance <= 0.0 {
            return;
        }

        let forward = -offset / distance;
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward);

        let scale = PAN_SENSITIVITY * distance * self.config.pan_speed;
        let translation = right * (-dx * scale) + up * (dy * scale);

        self.target += translation;
        camera.position += translation;
    }

    /// Apply pending rotation to the camera position.
    ///
    /// Call once per frame, before the motion integrator reads the azimuth.
    /// Without damping the pending velocity is consumed entirely; with
    /// damping it decays by the configured factor each frame, giving the
    /// glide-to-rest feel.
    pub fn update(&mut self, camera: &mut PerspectiveCamera) {
        if self.rot_velocity != Vec2::ZERO {
            self.rotate_camera(camera, self.rot_velocity.x, self.rot_velocity.y);
        }

        if self.config.enable_damping {
            self.rot_velocity *= 1.0 - self.config.damping_factor;
            if self.rot_velocity.length_squared() < 1e-10 {
                self.rot_velocity = Vec2::ZERO;
            }
        } else {
            self.rot_velocity = Vec2::ZERO;
        }
    }

    /// Rotate the camera around the target by the given azimuth/elevation
    /// deltas (radians), clamping elevation to the configured limits.
    fn rotate_camera(&self, camera: &mut PerspectiveCamera, d_azimuth: f32, d_elevation: f32) {
        let offset = camera.position - self.target;
        let radius = offset.length();
        if radius <= 0.0 {
            return;
        }

        let azimuth = offset.x.atan2(offset.z) + d_azimuth;
        let elevation = ((offset.y / radius).asin() + d_elevation).clamp(
            self.config.min_elevation_deg.to_radians(),
            self.config.max_elevation_deg.to_radians(),
        );

        let cos_elev = elevation.cos();
        camera.position = self.target
            + Vec3::new(
                radius * cos_elev * azimuth.sin(),
                radius * elevation.sin(),
                radius * cos_elev * azimuth.cos(),
            );
    }
}
