//! Input Module
//!
//! Launcher aiming state and the winit-to-engine event mapping.

pub mod actions;
pub mod keyboard;

pub use actions::AimingState;
pub use keyboard::{EventTranslator, map_key_code, map_mouse_button, map_scroll_delta};
