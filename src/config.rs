//! Controller Configuration
//!
//! Constructor-style options for the movement controller, expressed as data
//! so hosts can build them in code or load them from JSON. Defaults mirror
//! the stock mount: keyboard on, joystick off, rotate-only orbit at speed
//! 0.4, per-frame speed multiplier 0.1.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::input::JoystickZone;

/// Default per-frame speed multiplier.
pub const DEFAULT_SPEED_MULTIPLIER: f32 = 0.1;
/// Default orbit rotate speed.
pub const DEFAULT_ROTATE_SPEED: f32 = 0.4;
/// Default orbit damping factor.
pub const DEFAULT_DAMPING_FACTOR: f32 = 0.1;

/// Passthrough configuration for the orbit/look-target helper.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    /// Initial look-target (also the anchor's starting position).
    pub target: Vec3,
    /// Whether rotate drags are honored.
    pub enable_rotate: bool,
    /// Rotate speed multiplier.
    pub rotate_speed: f32,
    /// Whether zoom (dolly) input is honored.
    pub enable_zoom: bool,
    /// Zoom speed multiplier.
    pub zoom_speed: f32,
    /// Whether pan input is honored.
    pub enable_pan: bool,
    /// Pan speed multiplier.
    pub pan_speed: f32,
    /// Whether rotation velocity decays over frames instead of being
    /// consumed in one.
    pub enable_damping: bool,
    /// Per-frame decay factor when damping is enabled.
    pub damping_factor: f32,
    /// Minimum camera distance from the target.
    pub min_distance: f32,
    /// Maximum camera distance from the target.
    pub max_distance: f32,
    /// Lower elevation clamp in degrees.
    pub min_elevation_deg: f32,
    /// Upper elevation clamp in degrees.
    pub max_elevation_deg: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            enable_rotate: true,
            rotate_speed: DEFAULT_ROTATE_SPEED,
            enable_zoom: false,
            zoom_speed: 1.0,
            enable_pan: false,
            pan_speed: 1.0,
            enable_damping: false,
            damping_factor: DEFAULT_DAMPING_FACTOR,
            min_distance: 0.5,
            max_distance: 50.0,
            min_elevation_deg: -89.0,
            max_elevation_deg: 89.0,
        }
    }
}

/// Passthrough configuration for the perspective camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Initial camera position in world space.
    pub position: Vec3,
    /// Vertical field of view in degrees.
    pub fov: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clip plane.
    pub near: f32,
    /// Far clip plane.
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            // Behind and above the subject, on the +Z side (zero azimuth).
            position: Vec3::new(0.0, 2.0, 3.0),
            fov: 45.0,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// Top-level controller options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Turn on the key-event source.
    pub enable_keyboard: bool,
    /// Turn on the on-screen gesture source.
    pub enable_joystick: bool,
    /// Screen region the joystick listens on (used on first enablement).
    pub joystick_zone: JoystickZone,
    /// Orbit helper passthrough.
    pub orbit: OrbitConfig,
    /// Perspective camera passthrough.
    pub camera: CameraConfig,
    /// Per-frame speed multiplier applied to every intent displacement.
    pub speed_multiplier: f32,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlsConfig {
    /// Configuration matching the stock mount: keyboard enabled, joystick
    /// disabled, default orbit/camera, multiplier 0.1.
    pub fn new() -> Self {
        Self {
            enable_keyboard: true,
            enable_joystick: false,
            joystick_zone: JoystickZone::default(),
            orbit: OrbitConfig::default(),
            camera: CameraConfig::default(),
            speed_multiplier: DEFAULT_SPEED_MULTIPLIER,
        }
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Serialize the configuration to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the configuration to a JSON file.
    pub fn save_json_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_json_string()?)?;
        Ok(())
    }
}

// ============================================================================
// ERROR TYPE
// ============================================================================

/// Errors that can occur while loading or saving a configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Standard I/O error.
    Io(std::io::Error),
    /// JSON serialization/deserialization error.
    Json(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {e}"),
            ConfigError::Json(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}
