//! Visual Configuration
//!
//! Frame colours, the debug crosshair and the host window settings.

use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Colours and overlay sizes used by the draw pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualConfig {
    /// Frame clear colour
    pub background: Color,
    /// Colour of the world-origin crosshair
    pub crosshair_color: Color,
    /// Length of each crosshair arm from the centre (pixels)
    pub crosshair_half_length: f32,
    /// Stroke width for lines (pixels)
    pub line_width: f32,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            background: Color::rgb(30, 40, 50),
            crosshair_color: Color::rgb(200, 80, 80),
            crosshair_half_length: 10.0,
            line_width: 1.0,
        }
    }
}

/// Host window parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
    /// Cap presentation to the monitor refresh rate
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Zero-G Prototype with Camera".to_string(),
            width: 1280,
            height: 720,
            resizable: true,
            vsync: true,
        }
    }
}
