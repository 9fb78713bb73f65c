//! Physics type re-exports from glam
//!
//! The prototype is planar, so only the 2D vector types are needed.

pub use glam::{IVec2, Vec2};
