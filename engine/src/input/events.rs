//! Input Events
//!
//! The per-frame event vocabulary the host feeds into the simulation.
//! Positions are window pixels with the origin at the top-left corner.

use glam::Vec2;

use super::keyboard::KeyCode;
use super::mouse::{MouseButton, ScrollDelta};

/// One interaction event, already translated from the window system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A mouse button was pressed at `position`
    PointerDown { button: MouseButton, position: Vec2 },
    /// A mouse button was released at `position`
    PointerUp { button: MouseButton, position: Vec2 },
    /// The cursor moved to `position`
    PointerMove { position: Vec2 },
    /// The wheel was scrolled; positive `y` is away from the user
    Wheel { delta: ScrollDelta },
    /// A key went down (auto-repeat included)
    KeyDown { key: KeyCode },
    /// A key was released
    KeyUp { key: KeyCode },
    /// The drawable area changed size
    Resized { width: u32, height: u32 },
    /// The window lost keyboard focus; key-up events for held keys will
    /// not arrive
    FocusLost,
    /// The host asked the session to end (window closed)
    Quit,
}
