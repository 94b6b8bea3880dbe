//! Keyboard Source
//!
//! Maps WASD and arrow keys onto the four movement intent scalars.
//! The key codes are generic so the core stays decoupled from any
//! windowing system; a winit mapping is provided for winit hosts.

use glam::Vec2;

use super::intent::MovementIntent;

/// Movement-relevant key codes, independent of the windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    /// Catch-all for keys the controller does not recognize.
    Unknown,
}

/// Map a winit key code to a controller [`Key`].
///
/// Anything outside the eight movement keys becomes [`Key::Unknown`],
/// which the keyboard source silently ignores.
pub fn map_winit_key(key: winit::keyboard::KeyCode) -> Key {
    use winit::keyboard::KeyCode;
    match key {
        KeyCode::KeyW => Key::W,
        KeyCode::KeyA => Key::A,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyD => Key::D,
        KeyCode::ArrowUp => Key::ArrowUp,
        KeyCode::ArrowDown => Key::ArrowDown,
        KeyCode::ArrowLeft => Key::ArrowLeft,
        KeyCode::ArrowRight => Key::ArrowRight,
        _ => Key::Unknown,
    }
}

/// Keyboard input source with an enable/disable lifecycle.
///
/// While enabled, key-down events write intent through the same drag-vector
/// decomposition the joystick uses (so a key press carries magnitude 1.0 and
/// resets the opposed axis), and key-up events zero exactly the released
/// axis. While disabled, events are no-ops.
///
/// Disabling does NOT clear intent the source already wrote: a key held
/// across a disable leaves its scalar set until something else overwrites
/// it. That residue is observable behavior of the original controller and
/// is kept as-is.
#[derive(Debug, Clone, Default)]
pub struct KeyboardSource {
    enabled: bool,
}

impl KeyboardSource {
    /// Create a disabled keyboard source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether key events are currently being processed.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Start processing key events (attach).
    pub fn enable(&mut self) {
        if !self.enabled {
            log::debug!("keyboard source enabled");
        }
        self.enabled = true;
    }

    /// Stop processing key events (detach). Residual intent is retained.
    pub fn disable(&mut self) {
        if self.enabled {
            log::debug!("keyboard source disabled");
        }
        self.enabled = false;
    }

    /// Handle a key press or release.
    ///
    /// Returns `true` if the key was a movement key and the source was
    /// enabled, `false` otherwise (unrecognized keys are ignored).
    pub fn handle_key(&self, intent: &mut MovementIntent, key: Key, pressed: bool) -> bool {
        if !self.enabled {
            return false;
        }

        if pressed {
            let vector = match key {
                Key::W | Key::ArrowUp => Vec2::new(0.0, 1.0),
                Key::S | Key::ArrowDown => Vec2::new(0.0, -1.0),
                Key::A | Key::ArrowLeft => Vec2::new(-1.0, 0.0),
                Key::D | Key::ArrowRight => Vec2::new(1.0, 0.0),
                Key::Unknown => return false,
            };
            intent.apply_move_vector(vector);
        } else {
            // Key-up zeroes only the released axis, leaving the rest alone.
            match key {
                Key::W | Key::ArrowUp => intent.forward = 0.0,
                Key::S | Key::ArrowDown => intent.backward = 0.0,
                Key::A | Key::ArrowLeft => intent.left = 0.0,
                Key::D | Key::ArrowRight => intent.right = 0.0,
                Key::Unknown => return false,
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enabled_source() -> KeyboardSource {
        let mut source = KeyboardSource::new();
        source.enable();
        source
    }

    #[test]
    fn test_key_down_sets_forward() {
        let source = enabled_source();
        let mut intent = MovementIntent::new();

        assert!(source.handle_key(&mut intent, Key::W, true));
        assert_eq!(intent.forward, 1.0);
        assert_eq!(intent.backward, 0.0);
    }

    #[test]
    fn test_key_up_resets_only_its_axis() {
        let source = enabled_source();
        let mut intent = MovementIntent::new();

        source.handle_key(&mut intent, Key::W, true);
        source.handle_key(&mut intent, Key::D, true);
        source.handle_key(&mut intent, Key::W, false);

        assert_eq!(intent.forward, 0.0);
        assert_eq!(intent.right, 1.0);
    }

    #[test]
    fn test_opposed_key_overrides() {
        let source = enabled_source();
        let mut intent = MovementIntent::new();

        source.handle_key(&mut intent, Key::W, true);
        source.handle_key(&mut intent, Key::S, true);

        assert_eq!(intent.forward, 0.0);
        assert_eq!(intent.backward, 1.0);
    }

    #[test]
    fn test_arrow_keys_alias_wasd() {
        let source = enabled_source();
        let mut intent = MovementIntent::new();

        source.handle_key(&mut intent, Key::ArrowLeft, true);
        assert_eq!(intent.left, 1.0);

        source.handle_key(&mut intent, Key::ArrowLeft, false);
        assert_eq!(intent.left, 0.0);
    }

    #[test]
    fn test_unknown_key_ignored() {
        let source = enabled_source();
        let mut intent = MovementIntent::new();

        assert!(!source.handle_key(&mut intent, Key::Unknown, true));
        assert!(intent.is_idle());
    }

    #[test]
    fn test_disabled_source_ignores_events() {
        let mut source = enabled_source();
        let mut intent = MovementIntent::new();

        source.disable();
        assert!(!source.handle_key(&mut intent, Key::W, true));
        assert!(intent.is_idle());
    }

    #[test]
    fn test_disable_retains_residual_intent() {
        let mut source = enabled_source();
        let mut intent = MovementIntent::new();

        source.handle_key(&mut intent, Key::W, true);
        source.disable();

        // The held key's scalar survives the detach.
        assert_eq!(intent.forward, 1.0);

        // And the release that arrives afterwards is a no-op.
        source.handle_key(&mut intent, Key::W, false);
        assert_eq!(intent.forward, 1.0);
    }

    #[test]
    fn test_winit_mapping() {
        use winit::keyboard::KeyCode;

        assert_eq!(map_winit_key(KeyCode::KeyW), Key::W);
        assert_eq!(map_winit_key(KeyCode::ArrowRight), Key::ArrowRight);
        assert_eq!(map_winit_key(KeyCode::Escape), Key::Unknown);
    }
}
