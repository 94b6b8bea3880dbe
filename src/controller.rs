//! Movement Controller
//!
//! Ties the input sources, the orbit helper, the perspective camera, and the
//! player anchor into one controller value. The host forwards input events
//! as they arrive and calls [`update`](FpsControls::update) once per
//! rendered frame; everything else is owned state, so several controllers
//! can coexist without interfering.
//!
//! Per-frame order of operations:
//! 1. apply pending orbit rotation to the camera,
//! 2. integrate movement intent into the anchor position (camera-relative,
//!    fixed step per call, no delta-time scaling),
//! 3. follow: re-aim the look-target at the anchor and translate the camera
//!    by the same delta, preserving its orbit offset.

use glam::{Quat, Vec3};

use crate::camera::{OrbitControls, PerspectiveCamera};
use crate::config::ControlsConfig;
use crate::input::{JoystickSource, JoystickZone, Key, KeyboardSource, MovementIntent};
use crate::player::PlayerAnchor;

/// First/third-person movement controller.
///
/// Movement is camera-relative: each active intent scalar is turned into a
/// local displacement, rotated about +Y by the orbit azimuth, scaled by the
/// speed multiplier, and added to the anchor. Simultaneous intents apply
/// independently and additively, so diagonal movement is faster by √2 —
/// observable behavior of the original controller, kept as-is.
#[derive(Debug, Clone)]
pub struct FpsControls {
    intent: MovementIntent,
    keyboard: KeyboardSource,
    joystick: JoystickSource,
    joystick_zone: JoystickZone,
    orbit: OrbitControls,
    camera: PerspectiveCamera,
    anchor: PlayerAnchor,
    speed_multiplier: f32,
}

impl FpsControls {
    /// Build a controller from its configuration.
    ///
    /// The anchor starts at the orbit target. Sources flagged enabled in the
    /// config are enabled immediately (which, for the joystick, creates its
    /// session).
    pub fn new(config: ControlsConfig) -> Self {
        let mut controls = Self {
            intent: MovementIntent::new(),
            keyboard: KeyboardSource::new(),
            joystick: JoystickSource::new(),
            joystick_zone: config.joystick_zone,
            anchor: PlayerAnchor::new(config.orbit.target),
            orbit: OrbitControls::from_config(config.orbit),
            camera: PerspectiveCamera::from_config(&config.camera),
            speed_multiplier: config.speed_multiplier,
        };

        if config.enable_keyboard {
            controls.keyboard.enable();
        }
        if config.enable_joystick {
            controls.joystick.enable(controls.joystick_zone);
        }

        controls
    }

    // ========================================================================
    // SOURCE LIFECYCLE
    // ========================================================================

    /// Enable or disable the keyboard source.
    ///
    /// Disabling does not clear intent the keyboard already wrote.
    pub fn set_keyboard_enabled(&mut self, enabled: bool) {
        if enabled {
            self.keyboard.enable();
        } else {
            self.keyboard.disable();
        }
    }

    /// Enable or disable the joystick source.
    ///
    /// First enablement creates the session from the configured zone; later
    /// enablements reuse it. Disabling mid-drag releases the stick.
    pub fn set_joystick_enabled(&mut self, enabled: bool) {
        if enabled {
            self.joystick.enable(self.joystick_zone);
        } else {
            self.joystick.disable(&mut self.intent);
        }
    }

    /// Whether the keyboard source is processing events.
    pub fn keyboard_enabled(&self) -> bool {
        self.keyboard.is_enabled()
    }

    /// Whether the joystick source is processing events.
    pub fn joystick_enabled(&self) -> bool {
        self.joystick.is_enabled()
    }

    // ========================================================================
    // EVENT ENTRY POINTS
    // ========================================================================

    /// Forward a key press/release. Returns `true` if it changed intent.
    pub fn handle_key(&mut self, key: Key, pressed: bool) -> bool {
        self.keyboard.handle_key(&mut self.intent, key, pressed)
    }

    /// Forward a winit key event. Returns `true` if it changed intent.
    pub fn handle_winit_key(&mut self, key: winit::keyboard::KeyCode, pressed: bool) -> bool {
        self.handle_key(crate::input::map_winit_key(key), pressed)
    }

    /// Forward a pointer press at window coordinates (joystick source).
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.joystick.pointer_down(&mut self.intent, x, y);
    }

    /// Forward pointer movement while pressed (joystick source).
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.joystick.pointer_move(&mut self.intent, x, y);
    }

    /// Forward a pointer release (joystick source).
    pub fn pointer_up(&mut self) {
        self.joystick.pointer_up(&mut self.intent);
    }

    /// Forward an orbit rotate drag in pixels.
    pub fn orbit_rotate(&mut self, dx: f32, dy: f32) {
        self.orbit.handle_rotate(dx, dy);
    }

    /// Forward an orbit zoom tick (positive = in).
    pub fn orbit_zoom(&mut self, delta: f32) {
        self.orbit.handle_zoom(&mut self.camera, delta);
    }

    /// Forward an orbit pan drag in pixels.
    pub fn orbit_pan(&mut self, dx: f32, dy: f32) {
        self.orbit.handle_pan(&mut self.camera, dx, dy);
    }

    // ========================================================================
    // PER-FRAME UPDATE
    // ========================================================================

    /// Advance the controller by one rendered frame.
    ///
    /// Reads the intent snapshot, moves the anchor, recomputes its world
    /// transform, then repositions the camera. When all four intents are
    /// zero the anchor position is untouched this frame.
    pub fn update(&mut self) {
        self.orbit.update(&mut self.camera);
        self.integrate_movement();
        self.follow_anchor();
    }

    /// Camera-relative integration of the four intent scalars.
    fn integrate_movement(&mut self) {
        let azimuth = self.orbit.azimuthal_angle(self.camera.position);
        let rotation = Quat::from_rotation_y(azimuth);
        let intent = self.intent;

        // Each active intent applies independently, matching the original:
        // no normalization across simultaneous directions.
        if intent.forward > 0.0 {
            self.anchor
                .translate_by(rotation * Vec3::new(0.0, 0.0, -intent.forward) * self.speed_multiplier);
        }
        if intent.backward > 0.0 {
            self.anchor
                .translate_by(rotation * Vec3::new(0.0, 0.0, intent.backward) * self.speed_multiplier);
        }
        if intent.left > 0.0 {
            self.anchor
                .translate_by(rotation * Vec3::new(-intent.left, 0.0, 0.0) * self.speed_multiplier);
        }
        if intent.right > 0.0 {
            self.anchor
                .translate_by(rotation * Vec3::new(intent.right, 0.0, 0.0) * self.speed_multiplier);
        }

        self.anchor.update_world_transform();
    }

    /// Re-aim the look-target at the anchor, carrying the camera along so
    /// its offset (orbit radius and angles) is preserved.
    fn follow_anchor(&mut self) {
        let offset = self.camera.position - self.orbit.target;
        self.orbit.target = self.anchor.position;
        self.camera.position = self.anchor.position + offset;
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    /// Snapshot of the current movement intent.
    pub fn intent(&self) -> MovementIntent {
        self.intent
    }

    /// The player anchor.
    pub fn anchor(&self) -> &PlayerAnchor {
        &self.anchor
    }

    /// The viewing camera.
    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    /// Mutable camera access (e.g. for aspect updates on resize).
    pub fn camera_mut(&mut self) -> &mut PerspectiveCamera {
        &mut self.camera
    }

    /// The orbit helper.
    pub fn orbit(&self) -> &OrbitControls {
        &self.orbit
    }

    /// Current per-frame speed multiplier.
    pub fn speed_multiplier(&self) -> f32 {
        self.speed_multiplier
    }

    /// Change the per-frame speed multiplier.
    pub fn set_speed_multiplier(&mut self, multiplier: f32) {
        self.speed_multiplier = multiplier;
    }

    /// View matrix toward the current look-target, column-major.
    pub fn view_matrix(&self) -> [[f32; 4]; 4] {
        self.camera.view_matrix(self.orbit.target)
    }

    /// Projection matrix, column-major.
    pub fn projection_matrix(&self) -> [[f32; 4]; 4] {
        self.camera.projection_matrix()
    }
}

impl Default for FpsControls {
    fn default() -> Self {
        Self::new(ControlsConfig::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CameraConfig, OrbitConfig};

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPSILON
    }

    fn joystick_controls() -> FpsControls {
        let mut config = ControlsConfig::new();
        config.enable_joystick = true;
        config.joystick_zone = JoystickZone::new(100.0, 100.0, 50.0);
        FpsControls::new(config)
    }

    #[test]
    fn test_idle_frame_leaves_anchor_unchanged() {
        let mut controls = FpsControls::default();
        let before = controls.anchor().position;

        for _ in 0..10 {
            controls.update();
        }

        assert_eq!(controls.anchor().position, before);
    }

    #[test]
    fn test_forward_step_at_zero_azimuth() {
        let mut controls = FpsControls::default();
        // Default camera sits at (0, 2, 3) looking at the origin: azimuth 0.
        controls.handle_key(Key::W, true);
        controls.update();

        assert!(vec_approx_eq(
            controls.anchor().position,
            Vec3::new(0.0, 0.0, -0.1)
        ));
    }

    #[test]
    fn test_follower_preserves_camera_offset() {
        let mut controls = FpsControls::default();
        let offset_before = controls.camera().position - controls.orbit().target;

        controls.handle_key(Key::W, true);
        controls.handle_key(Key::D, true);
        controls.update();

        let offset_after = controls.camera().position - controls.orbit().target;
        assert!(vec_approx_eq(offset_before, offset_after));
        assert_eq!(controls.orbit().target, controls.anchor().position);
    }

    #[test]
    fn test_diagonal_movement_not_normalized() {
        let mut controls = FpsControls::default();
        controls.handle_key(Key::W, true);
        controls.handle_key(Key::D, true);
        controls.update();

        // Forward and right each contribute a full 0.1 step.
        let expected_length = (2.0_f32).sqrt() * 0.1;
        assert!(approx_eq(
            controls.anchor().position.length(),
            expected_length
        ));
    }

    #[test]
    fn test_movement_is_camera_relative() {
        let mut config = ControlsConfig::new();
        // Camera on the +X side of the target: azimuth is pi/2 and the
        // camera looks toward -X, so "forward" must move the anchor to -X.
        config.camera = CameraConfig {
            position: Vec3::new(3.0, 0.0, 0.0),
            ..CameraConfig::default()
        };
        let mut controls = FpsControls::new(config);

        controls.handle_key(Key::W, true);
        controls.update();

        assert!(vec_approx_eq(
            controls.anchor().position,
            Vec3::new(-0.1, 0.0, 0.0)
        ));
    }

    #[test]
    fn test_anchor_starts_at_orbit_target() {
        let mut config = ControlsConfig::new();
        config.orbit = OrbitConfig {
            target: Vec3::new(4.0, 0.0, -2.0),
            ..OrbitConfig::default()
        };
        let controls = FpsControls::new(config);
        assert_eq!(controls.anchor().position, Vec3::new(4.0, 0.0, -2.0));
    }

    #[test]
    fn test_speed_multiplier_scales_step() {
        let mut controls = FpsControls::default();
        controls.set_speed_multiplier(0.5);
        controls.handle_key(Key::S, true);
        controls.update();

        assert!(vec_approx_eq(
            controls.anchor().position,
            Vec3::new(0.0, 0.0, 0.5)
        ));
    }

    #[test]
    fn test_repeated_frames_accumulate() {
        let mut controls = FpsControls::default();
        controls.handle_key(Key::W, true);
        for _ in 0..5 {
            controls.update();
        }

        assert!(vec_approx_eq(
            controls.anchor().position,
            Vec3::new(0.0, 0.0, -0.5)
        ));
    }

    #[test]
    fn test_key_release_stops_movement() {
        let mut controls = FpsControls::default();
        controls.handle_key(Key::W, true);
        controls.update();
        controls.handle_key(Key::W, false);

        let after_release = controls.anchor().position;
        controls.update();
        assert_eq!(controls.anchor().position, after_release);
    }

    #[test]
    fn test_joystick_drag_moves_anchor() {
        let mut controls = joystick_controls();

        controls.pointer_down(100.0, 100.0);
        controls.pointer_move(100.0, 65.0); // 0.7 forward
        controls.update();

        assert!(vec_approx_eq(
            controls.anchor().position,
            Vec3::new(0.0, 0.0, -0.07)
        ));
    }

    #[test]
    fn test_joystick_release_clears_held_keyboard_intent() {
        let mut controls = joystick_controls();

        controls.handle_key(Key::D, true);
        controls.pointer_down(100.0, 100.0);
        controls.pointer_move(100.0, 65.0);
        controls.pointer_up();

        // Regression for the shared-scalar quirk: the release wipes the
        // keyboard's scalar too.
        assert!(controls.intent().is_idle());

        let before = controls.anchor().position;
        controls.update();
        assert_eq!(controls.anchor().position, before);
    }

    #[test]
    fn test_disabled_keyboard_produces_no_intent() {
        let mut controls = FpsControls::default();
        controls.set_keyboard_enabled(false);

        assert!(!controls.handle_key(Key::W, true));
        assert!(controls.intent().is_idle());
    }

    #[test]
    fn test_joystick_disabled_by_default() {
        let mut controls = FpsControls::default();
        controls.pointer_down(60.0, 60.0);
        controls.pointer_move(60.0, 20.0);
        assert!(controls.intent().is_idle());
    }

    #[test]
    fn test_orbit_rotation_changes_movement_frame() {
        let mut controls = FpsControls::default();

        // Swing the camera a quarter turn around the target, then walk
        // forward: the anchor should move along the rotated frame, not -Z.
        let quarter_turn_px = 90.0 / (0.3 * 0.4);
        controls.orbit_rotate(-quarter_turn_px, 0.0);
        controls.update();

        controls.handle_key(Key::W, true);
        controls.update();

        let pos = controls.anchor().position;
        assert!(pos.x.abs() > 0.09, "expected sideways movement, got {pos}");
        assert!(pos.z.abs() < 0.02, "expected little -Z movement, got {pos}");
    }

    #[test]
    fn test_view_matrix_tracks_anchor() {
        let mut controls = FpsControls::default();
        controls.handle_key(Key::A, true);
        controls.update();

        // The look-target follows the anchor, so the view matrix changes.
        let moved = controls.view_matrix();
        let fresh = FpsControls::default().view_matrix();
        assert!(moved != fresh);
    }
}
