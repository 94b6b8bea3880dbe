//! Virtual Joystick Source
//!
//! An on-screen joystick bound to a fixed circular region of the window.
//! The host forwards pointer (mouse or touch) events; a drag inside the
//! zone is decomposed into a unit-ish 2D vector that drives the movement
//! intent scalars, exactly like the keyboard source does.
//!
//! The drag-session state is created lazily on first enablement and then
//! retained for the life of the controller, including across later
//! disable/enable cycles. Each controller owns its own session, so two
//! mounted controllers never share joystick state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::intent::MovementIntent;

/// Default zone center X in logical pixels (matches the stock on-screen
/// placement: 60px from the left edge).
const DEFAULT_ZONE_X: f32 = 60.0;
/// Default zone center Y in logical pixels (60px from the top edge).
const DEFAULT_ZONE_Y: f32 = 60.0;
/// Default zone radius in logical pixels (a 120px-wide joystick).
const DEFAULT_ZONE_RADIUS: f32 = 60.0;

/// Fixed circular screen region the joystick listens on.
///
/// Coordinates are window-space logical pixels with the origin at the
/// top-left, matching what winit cursor/touch events report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JoystickZone {
    /// Zone center X in logical pixels.
    pub center_x: f32,
    /// Zone center Y in logical pixels.
    pub center_y: f32,
    /// Zone radius in logical pixels. A degenerate (non-positive) radius is
    /// not rejected; drags in such a zone produce a zero vector.
    pub radius: f32,
}

impl Default for JoystickZone {
    fn default() -> Self {
        Self {
            center_x: DEFAULT_ZONE_X,
            center_y: DEFAULT_ZONE_Y,
            radius: DEFAULT_ZONE_RADIUS,
        }
    }
}

impl JoystickZone {
    /// Create a zone centered at (`center_x`, `center_y`) with `radius`.
    pub fn new(center_x: f32, center_y: f32, radius: f32) -> Self {
        Self {
            center_x,
            center_y,
            radius,
        }
    }

    /// Returns `true` if the point lies inside the zone circle.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        let dx = x - self.center_x;
        let dy = y - self.center_y;
        dx * dx + dy * dy <= self.radius * self.radius
    }

    /// Convert a pointer position into a drag vector.
    ///
    /// X is positive toward the right of the zone center. Screen Y grows
    /// downward, so it is negated to make positive Y mean "forward".
    /// The result is radially clamped to the unit circle so the magnitude
    /// never exceeds 1.0 even when the pointer leaves the zone mid-drag.
    pub fn drag_vector(&self, x: f32, y: f32) -> Vec2 {
        if self.radius <= 0.0 {
            return Vec2::ZERO;
        }

        let v = Vec2::new(
            (x - self.center_x) / self.radius,
            -(y - self.center_y) / self.radius,
        );

        if v.length_squared() > 1.0 {
            v.normalize()
        } else {
            v
        }
    }
}

/// Drag-session state for one pointer interacting with the zone.
///
/// At most one drag is active at a time; pointer-down outside the zone is
/// ignored, and moves are ignored unless a drag is in progress.
#[derive(Debug, Clone)]
pub struct JoystickSession {
    zone: JoystickZone,
    dragging: bool,
}

impl JoystickSession {
    /// Create a session bound to `zone` with no active drag.
    pub fn new(zone: JoystickZone) -> Self {
        Self {
            zone,
            dragging: false,
        }
    }

    /// The screen region this session listens on.
    pub fn zone(&self) -> JoystickZone {
        self.zone
    }

    /// Whether a drag is currently in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    fn begin(&mut self, intent: &mut MovementIntent, x: f32, y: f32) {
        if self.zone.contains(x, y) {
            self.dragging = true;
            intent.apply_move_vector(self.zone.drag_vector(x, y));
        }
    }

    fn drag(&mut self, intent: &mut MovementIntent, x: f32, y: f32) {
        if self.dragging {
            intent.apply_move_vector(self.zone.drag_vector(x, y));
        }
    }

    fn end(&mut self, intent: &mut MovementIntent) {
        if self.dragging {
            self.dragging = false;
            // Release zeroes everything, including scalars a concurrently
            // held keyboard key wrote. Observable original behavior.
            intent.clear();
        }
    }
}

/// Joystick input source with an enable/disable lifecycle.
///
/// The session is constructed on first [`enable`](JoystickSource::enable)
/// and never reconstructed afterwards; disable merely stops event
/// processing (and ends any in-flight drag, which releases the stick).
#[derive(Debug, Clone, Default)]
pub struct JoystickSource {
    enabled: bool,
    session: Option<JoystickSession>,
}

impl JoystickSource {
    /// Create a disabled joystick source with no session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether pointer events are currently being processed.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Access the lazily created session, if it exists yet.
    pub fn session(&self) -> Option<&JoystickSession> {
        self.session.as_ref()
    }

    /// Start processing pointer events, creating the session on first use.
    ///
    /// `zone` is only consulted the first time; later enables reuse the
    /// session (and zone) created back then.
    pub fn enable(&mut self, zone: JoystickZone) {
        if self.session.is_none() {
            log::debug!(
                "joystick session created: center=({}, {}) radius={}",
                zone.center_x,
                zone.center_y,
                zone.radius
            );
            self.session = Some(JoystickSession::new(zone));
        }
        if !self.enabled {
            log::debug!("joystick source enabled");
        }
        self.enabled = true;
    }

    /// Stop processing pointer events. An in-flight drag is released first
    /// (zeroing all intent), since no end event can arrive afterwards.
    pub fn disable(&mut self, intent: &mut MovementIntent) {
        if let Some(session) = self.session.as_mut() {
            session.end(intent);
        }
        if self.enabled {
            log::debug!("joystick source disabled");
        }
        self.enabled = false;
    }

    /// Handle a pointer press at window coordinates (`x`, `y`).
    pub fn pointer_down(&mut self, intent: &mut MovementIntent, x: f32, y: f32) {
        if !self.enabled {
            return;
        }
        if let Some(session) = self.session.as_mut() {
            session.begin(intent, x, y);
        }
    }

    /// Handle pointer movement while pressed.
    pub fn pointer_move(&mut self, intent: &mut MovementIntent, x: f32, y: f32) {
        if !self.enabled {
            return;
        }
        if let Some(session) = self.session.as_mut() {
            session.drag(intent, x, y);
        }
    }

    /// Handle a pointer release anywhere on screen.
    pub fn pointer_up(&mut self, intent: &mut MovementIntent) {
        if !self.enabled {
            return;
        }
        if let Some(session) = self.session.as_mut() {
            session.end(intent);
        }
    }
}
