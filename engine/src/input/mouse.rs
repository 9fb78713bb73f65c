//! Pointer buttons and wheel deltas.

/// A pointer button as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    /// Back/forward and vendor buttons, by platform index
    Other(u16),
}

impl MouseButton {
    /// Only the left button starts a camera drag.
    pub fn is_primary(&self) -> bool {
        *self == MouseButton::Left
    }
}

/// Wheel movement in notches. Positive `y` scrolls away from the user
/// (zoom in); positive `x` scrolls right.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollDelta {
    pub x: f32,
    pub y: f32,
}

/// Pixels of trackpad travel treated as one wheel notch.
pub const PIXELS_PER_NOTCH: f64 = 100.0;

impl ScrollDelta {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Notch-based wheels already report lines.
    pub fn from_lines(x: f32, y: f32) -> Self {
        Self::new(x, y)
    }

    /// Trackpads report pixels; scale them down to notches.
    pub fn from_pixels(x: f64, y: f64) -> Self {
        Self::new((x / PIXELS_PER_NOTCH) as f32, (y / PIXELS_PER_NOTCH) as f32)
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}
