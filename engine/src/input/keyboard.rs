//! Keyboard Input Module
//!
//! Contains held-key tracking for continuous controls.
//! Decoupled from winit to use generic key codes.

use std::collections::HashSet;

use super::events::InputEvent;

/// Generic key codes, independent of windowing system.
///
/// These map to standard keyboard keys but are not tied to winit::keyboard::KeyCode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Letter keys (alternate aim bindings and camera reset)
    W,
    A,
    S,
    D,
    R,

    // Control keys
    Space,
    Enter,
    Escape,
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,

    /// Catch-all for unhandled keys
    Unknown,
}

/// Tracks which keys are currently held down.
///
/// Continuous controls (aiming, power) read this every frame instead of
/// reacting to individual key events.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: HashSet<KeyCode>,
}

impl KeyboardState {
    /// Create a new keyboard state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press or release.
    ///
    /// Returns `true` if the held state of the key changed.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        if key == KeyCode::Unknown {
            return false;
        }
        if pressed {
            self.held.insert(key)
        } else {
            self.held.remove(&key)
        }
    }

    /// Update held state from an input event. Non-key events are ignored.
    pub fn apply(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::KeyDown { key } => self.handle_key(key, true),
            InputEvent::KeyUp { key } => self.handle_key(key, false),
            _ => false,
        }
    }

    /// Check if a key is currently held.
    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Check if any key is held.
    pub fn any_held(&self) -> bool {
        !self.held.is_empty()
    }

    /// Release every key (e.g. when the window loses focus).
    pub fn reset(&mut self) {
        self.held.clear();
    }
}
