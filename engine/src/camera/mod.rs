//! Camera Module
//!
//! Provides the 2D pan/zoom camera and its world/screen mapping.
//! This module is window-system agnostic - it only deals with camera state and math.

pub mod pan_zoom;

pub use pan_zoom::{Camera, CameraConfig};
