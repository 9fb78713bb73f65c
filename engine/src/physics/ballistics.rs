//! Ballistics simulation for the cannon shell
//!
//! A shell is a point mass under constant gravity, advanced with
//! semi-implicit Euler and retired the moment it touches the ground.
//!
//! # Example
//!
//! ```ignore
//! use zero_g_engine::physics::ballistics::{Projectile, ProjectileState};
//! use glam::Vec2;
//!
//! let mut shell = Projectile::spawn(Vec2::new(0.0, -100.0), Vec2::new(300.0, 0.0));
//! if let ProjectileState::Landed { position } = shell.update(1.0 / 60.0) {
//!     println!("impact at {position}");
//! }
//! ```

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::render::{Color, DrawSurface, Rect};

/// Downward gravitational acceleration (world units/s²).
pub const DEFAULT_GRAVITY: f32 = 500.0;
/// World-space height of the ground plane. Larger y is below ground.
pub const GROUND_Y: f32 = 0.0;
/// Half the edge length of the drawn shell marker (pixels).
pub const PROJECTILE_HALF_SIZE: f32 = 4.0;
/// Fill colour of the shell marker.
pub const PROJECTILE_COLOR: Color = Color::rgb(255, 200, 100);

/// A shell in flight.
///
/// When `active` is false the position and velocity carry no meaning and
/// both `update` and `draw` do nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    /// Current position in world space
    pub position: Vec2,
    /// Current velocity (world units/second)
    pub velocity: Vec2,
    /// Whether the shell is still being simulated
    pub active: bool,
}

impl Default for Projectile {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            active: false,
        }
    }
}

impl Projectile {
    /// Spawn an active shell with the given initial conditions.
    pub fn spawn(position: Vec2, velocity: Vec2) -> Self {
        Self {
            position,
            velocity,
            active: true,
        }
    }

    /// Advance the shell by `dt` seconds under the default ballistics.
    pub fn update(&mut self, dt: f32) -> ProjectileState {
        self.integrate(&BallisticsConfig::default(), dt)
    }

    /// Integrate the shell's motion over a time step.
    ///
    /// Semi-implicit Euler: velocity first, then position with the new
    /// velocity. If the step ends below the ground plane the shell is
    /// snapped onto it, stopped and deactivated on this same step.
    pub fn integrate(&mut self, config: &BallisticsConfig, dt: f32) -> ProjectileState {
        if !self.active {
            return ProjectileState::Inactive;
        }

        self.velocity.y += config.gravity * dt;
        self.position += self.velocity * dt;

        if self.position.y > config.ground_y {
            self.position.y = config.ground_y;
            self.velocity = Vec2::ZERO;
            self.active = false;
            return ProjectileState::Landed {
                position: self.position,
            };
        }

        ProjectileState::Flying
    }

    /// Draw the shell as a small filled square centred on its screen position.
    pub fn draw(&self, surface: &mut dyn DrawSurface, camera: &Camera, screen_w: u32, screen_h: u32) {
        if !self.active {
            return;
        }
        let center = camera.world_to_screen(self.position, screen_w, screen_h);
        surface.fill_rect(
            Rect::centered(center, Vec2::splat(PROJECTILE_HALF_SIZE)),
            PROJECTILE_COLOR,
        );
    }
}

/// Environment parameters shared by every shell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallisticsConfig {
    /// Gravity along +y (world units/s²). Positive pulls toward the ground.
    pub gravity: f32,
    /// Height of the ground plane
    pub ground_y: f32,
}

impl Default for BallisticsConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            ground_y: GROUND_Y,
        }
    }
}

/// Outcome of one integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectileState {
    /// Still airborne after the step
    Flying,
    /// Touched the ground during this step and was deactivated
    Landed {
        /// Resting position on the ground plane
        position: Vec2,
    },
    /// Was already inactive; nothing happened
    Inactive,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCommand, DrawList};

    #[test]
    fn test_projectile_default_inactive() {
        let p = Projectile::default();
        assert!(!p.active);
        assert_eq!(p.position, Vec2::ZERO);
    }

    #[test]
    fn test_ballistics_config_default() {
        let config = BallisticsConfig::default();
        assert_eq!(config.gravity, 500.0);
        assert_eq!(config.ground_y, 0.0);
    }

    #[test]
    fn test_semi_implicit_step() {
        let mut p = Projectile::spawn(Vec2::new(0.0, -100.0), Vec2::new(300.0, 0.0));
        let state = p.update(0.1);

        assert_eq!(state, ProjectileState::Flying);
        assert!((p.velocity.y - 50.0).abs() < 1e-4);
        assert!((p.position.x - 30.0).abs() < 1e-4);
        // Position uses the already-updated velocity: -100 + 50 * 0.1
        assert!((p.position.y + 95.0).abs() < 1e-4);
        assert!(p.active);
    }

    #[test]
    fn test_zero_dt_is_noop() {
        let mut p = Projectile::spawn(Vec2::new(12.0, -40.0), Vec2::new(-30.0, -80.0));
        let before = p;
        p.update(0.0);
        assert_eq!(p, before);
    }

    #[test]
    fn test_inactive_update_is_noop() {
        let mut p = Projectile {
            position: Vec2::new(5.0, -5.0),
            velocity: Vec2::new(1.0, 1.0),
            active: false,
        };
        let before = p;
        assert_eq!(p.update(1.0), ProjectileState::Inactive);
        assert_eq!(p, before);
    }

    #[test]
    fn test_ground_contact_snaps_and_stops() {
        let mut p = Projectile::spawn(Vec2::new(0.0, -1.0), Vec2::new(40.0, 0.0));

        let mut steps = 0;
        loop {
            let y_before = p.position.y;
            let state = p.update(0.01);
            steps += 1;
            if let ProjectileState::Landed { position } = state {
                assert!(y_before <= 0.0);
                assert_eq!(position.y, 0.0);
                break;
            }
            assert!(p.active, "deactivated without a landing report");
            assert!(p.position.y <= 0.0);
            assert!(steps < 1000, "never landed");
        }

        assert!(!p.active);
        assert_eq!(p.position.y, 0.0);
        assert_eq!(p.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_resting_exactly_on_ground_stays_active() {
        // y == 0 is on the ground, not below it
        let mut p = Projectile::spawn(Vec2::ZERO, Vec2::new(10.0, 0.0));
        assert_eq!(p.update(0.0), ProjectileState::Flying);
        assert!(p.active);
    }

    #[test]
    fn test_custom_gravity() {
        let config = BallisticsConfig {
            gravity: 0.0,
            ground_y: 0.0,
        };
        let mut p = Projectile::spawn(Vec2::new(0.0, -10.0), Vec2::new(1.0, 0.0));
        for _ in 0..100 {
            p.integrate(&config, 0.1);
        }
        assert!(p.active);
        assert!((p.position.y + 10.0).abs() < 1e-5);
        assert!((p.position.x - 10.0).abs() < 1e-3);
    }

    #[test]
    fn test_draw_inactive_emits_nothing() {
        let p = Projectile::default();
        let mut list = DrawList::new();
        p.draw(&mut list, &Camera::default(), 800, 600);
        assert!(list.is_empty());
    }

    #[test]
    fn test_draw_active_emits_one_rect() {
        let p = Projectile::spawn(Vec2::new(10.0, -20.0), Vec2::ZERO);
        let mut list = DrawList::new();
        p.draw(&mut list, &Camera::default(), 800, 600);

        assert_eq!(list.len(), 1);
        match list.commands()[0] {
            DrawCommand::FilledRect { rect, color } => {
                assert_eq!(color, PROJECTILE_COLOR);
                assert_eq!(rect.center(), Vec2::new(410.0, 280.0));
                assert_eq!(rect.size, Vec2::splat(8.0));
            }
            ref other => panic!("expected a filled rect, got {other:?}"),
        }
    }
}
