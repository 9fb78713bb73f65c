//! Physics module for the Zero-G prototype
//!
//! Hand-written ballistics for the single live shell. No external physics
//! library is involved; the integrator is a few lines of semi-implicit Euler.
//!
//! # Coordinate Convention
//!
//! World space follows the screen: **+y points down**. The ground is the
//! line `y = 0` and anything with `y > 0` is underground. Gravity is
//! therefore a positive y acceleration.
//!
//! # Submodules
//!
//! - [`types`] - Core mathematical types re-exported from glam
//! - [`ballistics`] - Projectile state, integration and ground contact

pub mod ballistics;
pub mod types;

// Re-export commonly used types at the physics module level
pub use ballistics::{
    BallisticsConfig, DEFAULT_GRAVITY, GROUND_Y, PROJECTILE_COLOR, PROJECTILE_HALF_SIZE,
    Projectile, ProjectileState,
};
pub use types::{IVec2, Vec2};
