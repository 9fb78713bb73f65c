//! Input Actions
//!
//! Held-key signals a launcher reads each frame.

use crate::input::{InputAction, KeyBindings, KeyboardState};

/// Aiming state for launcher controls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AimingState {
    pub aim_left: bool,
    pub aim_right: bool,
    pub power_up: bool,
    pub power_down: bool,
}

impl AimingState {
    /// Sample the bound aiming keys from the held-key state.
    pub fn from_keyboard(keyboard: &KeyboardState, bindings: &KeyBindings) -> Self {
        Self {
            aim_left: bindings.is_action_held(InputAction::AimLeft, keyboard),
            aim_right: bindings.is_action_held(InputAction::AimRight, keyboard),
            power_up: bindings.is_action_held(InputAction::PowerUp, keyboard),
            power_down: bindings.is_action_held(InputAction::PowerDown, keyboard),
        }
    }

    /// Get rotation direction (-1.0 to 1.0), positive is clockwise on screen
    pub fn get_rotation_delta(&self) -> f32 {
        let mut delta = 0.0;
        if self.aim_left { delta -= 1.0; }
        if self.aim_right { delta += 1.0; }
        delta
    }

    /// Get power direction (-1.0 to 1.0)
    pub fn get_power_delta(&self) -> f32 {
        let mut delta = 0.0;
        if self.power_up { delta += 1.0; }
        if self.power_down { delta -= 1.0; }
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyCode;

    #[test]
    fn test_idle_by_default() {
        let state = AimingState::from_keyboard(&KeyboardState::new(), &KeyBindings::new());
        assert_eq!(state, AimingState::default());
        assert_eq!(state.get_rotation_delta(), 0.0);
        assert_eq!(state.get_power_delta(), 0.0);
    }

    #[test]
    fn test_reads_bound_keys() {
        let mut keyboard = KeyboardState::new();
        keyboard.handle_key(KeyCode::ArrowLeft, true);
        keyboard.handle_key(KeyCode::ArrowUp, true);

        let state = AimingState::from_keyboard(&keyboard, &KeyBindings::new());
        assert!(state.aim_left);
        assert!(state.power_up);
        assert!(!state.aim_right);
        assert!(!state.power_down);
        assert_eq!(state.get_rotation_delta(), -1.0);
        assert_eq!(state.get_power_delta(), 1.0);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let state = AimingState {
            aim_left: true,
            aim_right: true,
            power_up: true,
            power_down: true,
        };
        assert_eq!(state.get_rotation_delta(), 0.0);
        assert_eq!(state.get_power_delta(), 0.0);
    }

    #[test]
    fn test_rebound_keys() {
        let mut bindings = KeyBindings::new();
        bindings.bind(KeyCode::A, InputAction::AimLeft);

        let mut keyboard = KeyboardState::new();
        keyboard.handle_key(KeyCode::ArrowLeft, true);
        assert!(!AimingState::from_keyboard(&keyboard, &bindings).aim_left);

        keyboard.handle_key(KeyCode::A, true);
        assert!(AimingState::from_keyboard(&keyboard, &bindings).aim_left);
    }
}
