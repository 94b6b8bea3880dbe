//! Input Module
//!
//! Converts keyboard key events and virtual-joystick drag gestures into the
//! four movement intent scalars the per-frame integrator reads. The core
//! types are decoupled from any windowing system; winit hosts use
//! [`map_winit_key`] to feed their key events in.
//!
//! Event-driven writes, pull-based reads: sources mutate the shared
//! [`MovementIntent`] as events arrive, and the integrator snapshots it once
//! per frame. Only the latest value matters; nothing is queued.

pub mod intent;
pub mod joystick;
pub mod keyboard;

pub use intent::MovementIntent;
pub use joystick::{JoystickSession, JoystickSource, JoystickZone};
pub use keyboard::{map_winit_key, Key, KeyboardSource};
