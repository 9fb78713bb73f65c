//! Input Module
//!
//! Provides platform-agnostic input handling for keyboard and mouse.
//! This module is decoupled from any specific windowing system (like winit);
//! the host translates its native events into [`InputEvent`]s once per frame.
//!
//! # Example
//!
//! ```rust,ignore
//! use zero_g_engine::input::{InputAction, InputEvent, KeyBindings, KeyCode, KeyboardState};
//!
//! let bindings = KeyBindings::new();
//! let mut keyboard = KeyboardState::new();
//!
//! keyboard.apply(&InputEvent::KeyDown { key: KeyCode::ArrowUp });
//! if bindings.is_action_held(InputAction::PowerUp, &keyboard) {
//!     // Raise cannon power
//! }
//! ```

pub mod bindings;
pub mod events;
pub mod keyboard;
pub mod mouse;

// Re-export commonly used types at module level
pub use bindings::{InputAction, KeyBindings};
pub use events::InputEvent;
pub use keyboard::{KeyCode, KeyboardState};
pub use mouse::{MouseButton, PIXELS_PER_NOTCH, ScrollDelta};
