//! Pan/Zoom Camera Module
//!
//! A 2D camera that is dragged with the primary mouse button and zoomed with
//! the wheel. The camera centre (`offset`) is the world point shown in the
//! middle of the screen:
//!
//! ```text
//! screen = screen_center + (world - offset) * zoom
//! ```
//!
//! Drag deltas are divided by the zoom factor so the world point under the
//! cursor follows the cursor at every zoom level.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::input::InputEvent;

/// Zoom limits and the wheel step used by [`Camera`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Smallest allowed zoom factor
    pub min_zoom: f32,
    /// Largest allowed zoom factor
    pub max_zoom: f32,
    /// Multiplier applied per wheel notch (must be > 1)
    pub zoom_step: f32,
    /// Zoom factor at session start and after a reset
    pub initial_zoom: f32,
    /// World point centred on screen at session start and after a reset
    pub initial_offset: Vec2,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            min_zoom: 0.1,
            max_zoom: 5.0,
            zoom_step: 1.1,
            initial_zoom: 1.0,
            initial_offset: Vec2::ZERO,
        }
    }
}

/// Pan/zoom camera state.
#[derive(Clone, Debug)]
pub struct Camera {
    /// World point mapped to the screen centre
    pub offset: Vec2,
    /// World-to-screen scale, always within the configured limits
    pub zoom: f32,
    /// Whether a drag gesture is in progress
    pub dragging: bool,
    /// Pointer position (pixels) at the last drag update
    pub last_pointer: IVec2,
    config: CameraConfig,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}

impl Camera {
    /// Create a camera at the configured initial offset and zoom.
    pub fn new(config: CameraConfig) -> Self {
        Self {
            offset: config.initial_offset,
            zoom: config.initial_zoom.max(config.min_zoom).min(config.max_zoom),
            dragging: false,
            last_pointer: IVec2::ZERO,
            config,
        }
    }

    /// The limits this camera was created with.
    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Consume one input event.
    ///
    /// Returns `true` if the event changed camera state. Anything that is not
    /// a primary-button press/release, a pointer move or a wheel notch is
    /// ignored.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::PointerDown { button, position } if button.is_primary() => {
                self.dragging = true;
                self.last_pointer = position.as_ivec2();
                true
            }
            InputEvent::PointerUp { button, .. } if button.is_primary() => {
                let was_dragging = self.dragging;
                self.dragging = false;
                was_dragging
            }
            InputEvent::PointerMove { position } if self.dragging => {
                let pointer = position.as_ivec2();
                self.pan_by((pointer - self.last_pointer).as_vec2());
                self.last_pointer = pointer;
                true
            }
            InputEvent::Wheel { delta } => self.zoom_by_notch(delta.y),
            _ => false,
        }
    }

    /// Move the view by a screen-space pointer delta.
    fn pan_by(&mut self, screen_delta: Vec2) {
        self.offset -= screen_delta / self.zoom;
    }

    /// Step the zoom once in the direction of `scroll`.
    fn zoom_by_notch(&mut self, scroll: f32) -> bool {
        let before = self.zoom;
        if scroll > 0.0 {
            self.zoom *= self.config.zoom_step;
        } else if scroll < 0.0 {
            self.zoom /= self.config.zoom_step;
        }
        self.zoom = self.zoom.max(self.config.min_zoom).min(self.config.max_zoom);
        self.zoom != before
    }

    /// Map a world point to screen pixels.
    pub fn world_to_screen(&self, world: Vec2, screen_w: u32, screen_h: u32) -> Vec2 {
        screen_center(screen_w, screen_h) + (world - self.offset) * self.zoom
    }

    /// Map screen pixels back to a world point. Inverse of [`Self::world_to_screen`].
    pub fn screen_to_world(&self, screen: Vec2, screen_w: u32, screen_h: u32) -> Vec2 {
        (screen - screen_center(screen_w, screen_h)) / self.zoom + self.offset
    }

    /// Return to the initial offset and zoom and drop any drag in progress.
    pub fn reset(&mut self) {
        *self = Self::new(self.config);
    }
}

fn screen_center(screen_w: u32, screen_h: u32) -> Vec2 {
    Vec2::new(screen_w as f32, screen_h as f32) * 0.5
}
