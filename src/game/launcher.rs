//! Launcher Capability
//!
//! Anything the simulation can aim and fire from. The simulation loop is
//! generic over this trait; [`Cannon`](super::cannon::Cannon) is the stock
//! implementation.

use crate::camera::Camera;
use crate::physics::Projectile;
use crate::render::DrawSurface;

use super::input::AimingState;

/// A device that aims from held input and launches projectiles.
pub trait Launcher {
    /// Advance aiming by `dt` seconds from the currently held controls.
    fn update(&mut self, aiming: &AimingState, dt: f32);

    /// Draw the launcher in screen space through `camera`.
    fn draw(&self, surface: &mut dyn DrawSurface, camera: &Camera, screen_w: u32, screen_h: u32);

    /// Create a fresh, active projectile from the launcher's current aim.
    ///
    /// Must not mutate the launcher.
    fn launch(&self) -> Projectile;
}
