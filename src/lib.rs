//! # fps-controls
//!
//! A reusable first/third-person movement controller for 3D scenes.
//! Binds keyboard input and an on-screen virtual joystick to camera-relative
//! player translation and camera repositioning, advanced once per rendered
//! frame by the host's render loop.
//!
//! The crate is renderer-agnostic. It owns the movement intent state, an
//! invisible player anchor, an orbit look-target helper, and a perspective
//! camera; the host supplies events and consumes matrices:
//!
//! ```rust
//! use fps_controls::{ControlsConfig, FpsControls, Key};
//!
//! let mut controls = FpsControls::new(ControlsConfig::new());
//!
//! // Event dispatch (winit hosts can use `handle_winit_key` instead):
//! controls.handle_key(Key::W, true);
//!
//! // Once per rendered frame:
//! controls.update();
//!
//! let view = controls.view_matrix();
//! let projection = controls.projection_matrix();
//! let model = controls.anchor().world_matrix();
//! # let _ = (view, projection, model);
//! ```
//!
//! All state is per-controller; two mounted controllers never share intent
//! or joystick sessions. Within one controller the keyboard and joystick
//! write the same four intent scalars, with the interference quirks of the
//! original controller preserved and documented in [`input`].

pub mod camera;
pub mod config;
pub mod controller;
pub mod input;
pub mod player;

pub use camera::{OrbitControls, PerspectiveCamera};
pub use config::{CameraConfig, ConfigError, ControlsConfig, OrbitConfig};
pub use controller::FpsControls;
pub use input::{map_winit_key, JoystickZone, Key, MovementIntent};
pub use player::PlayerAnchor;
