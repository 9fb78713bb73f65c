//! Render Module
//!
//! Screen-space drawing for the prototype: a [`DrawSurface`] abstraction the
//! simulation draws into, a recording [`DrawList`], and a wgpu-based
//! [`ShapeRenderer`] that puts a recorded frame on the window.

pub mod color;
pub mod gpu_context;
pub mod shape_renderer;
pub mod surface;

// Re-export commonly used types for convenience
pub use color::Color;
pub use gpu_context::{GpuContext, GpuContextConfig, choose_present_mode, choose_surface_format};
pub use shape_renderer::{
    DEFAULT_LINE_WIDTH, SHAPE_SHADER_SOURCE, ShapeMesh, ShapeRenderer, ShapeVertex,
};
pub use surface::{DrawCommand, DrawList, DrawSurface, Rect};
