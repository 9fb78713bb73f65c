//! Input Bindings Module
//!
//! Maps physical keys to logical actions, allowing for key remapping without
//! touching the simulation code.

use std::collections::HashMap;

use super::keyboard::{KeyCode, KeyboardState};

/// Logical input actions that can be bound to physical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Rotate the launcher counter-clockwise (default: Left arrow)
    AimLeft,
    /// Rotate the launcher clockwise (default: Right arrow)
    AimRight,
    /// Increase launch power (default: Up arrow)
    PowerUp,
    /// Decrease launch power (default: Down arrow)
    PowerDown,
    /// Launch a shell (default: Space)
    Fire,
    /// Return the camera to its initial view (default: R)
    ResetCamera,
    /// End the session (default: Escape)
    Quit,
}

/// Maps physical keys to logical actions, supporting customizable key bindings.
///
/// Each action has at most one key and each key at most one action.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    /// Map from physical key to logical action
    key_to_action: HashMap<KeyCode, InputAction>,
    /// Map from logical action to physical key (for reverse lookup and display)
    action_to_key: HashMap<InputAction, KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindings {
    /// Create a new KeyBindings instance with default key mappings.
    ///
    /// Default bindings:
    /// - Left / Right arrow = AimLeft / AimRight
    /// - Up / Down arrow = PowerUp / PowerDown
    /// - Space = Fire
    /// - R = ResetCamera
    /// - Escape = Quit
    pub fn new() -> Self {
        let mut bindings = Self::empty();

        bindings.bind(KeyCode::ArrowLeft, InputAction::AimLeft);
        bindings.bind(KeyCode::ArrowRight, InputAction::AimRight);
        bindings.bind(KeyCode::ArrowUp, InputAction::PowerUp);
        bindings.bind(KeyCode::ArrowDown, InputAction::PowerDown);
        bindings.bind(KeyCode::Space, InputAction::Fire);
        bindings.bind(KeyCode::R, InputAction::ResetCamera);
        bindings.bind(KeyCode::Escape, InputAction::Quit);

        bindings
    }

    /// Create a binding table with nothing bound.
    pub fn empty() -> Self {
        Self {
            key_to_action: HashMap::new(),
            action_to_key: HashMap::new(),
        }
    }

    /// Bind a physical key to a logical action.
    ///
    /// If the key was previously bound to another action, that binding is removed.
    /// If the action was previously bound to another key, that binding is also removed.
    pub fn bind(&mut self, key: KeyCode, action: InputAction) {
        if let Some(old_action) = self.key_to_action.remove(&key) {
            self.action_to_key.remove(&old_action);
        }
        if let Some(old_key) = self.action_to_key.remove(&action) {
            self.key_to_action.remove(&old_key);
        }

        self.key_to_action.insert(key, action);
        self.action_to_key.insert(action, key);
    }

    /// Remove the binding for a specific action.
    pub fn unbind_action(&mut self, action: InputAction) {
        if let Some(key) = self.action_to_key.remove(&action) {
            self.key_to_action.remove(&key);
        }
    }

    /// Get the action bound to a physical key, if any.
    pub fn get_action(&self, key: KeyCode) -> Option<InputAction> {
        self.key_to_action.get(&key).copied()
    }

    /// Get the key bound to a logical action, if any.
    pub fn get_key(&self, action: InputAction) -> Option<KeyCode> {
        self.action_to_key.get(&action).copied()
    }

    /// Check if the key bound to `action` is currently held.
    pub fn is_action_held(&self, action: InputAction, keyboard: &KeyboardState) -> bool {
        self.action_to_key
            .get(&action)
            .is_some_and(|key| keyboard.is_held(*key))
    }
}
