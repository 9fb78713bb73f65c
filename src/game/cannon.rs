//! Cannon Module
//!
//! The stock [`Launcher`]: a fixed emplacement whose barrel angle and charge
//! are adjusted with held keys.
//!
//! Angles are radians measured from +x toward +y. World +y points at the
//! ground, so negative angles aim upward on screen.

use glam::Vec2;

use crate::camera::Camera;
use crate::physics::Projectile;
use crate::render::DrawSurface;

use super::config::CannonConfig;
use super::input::AimingState;
use super::launcher::Launcher;

/// Cannon state for aiming and firing.
#[derive(Debug, Clone)]
pub struct Cannon {
    /// World position of the barrel pivot (also the muzzle)
    pub position: Vec2,
    /// Barrel angle in radians. Unbounded.
    pub angle: f32,
    /// Launch speed, always within the configured power range
    pub power: f32,
    config: CannonConfig,
}

impl Default for Cannon {
    fn default() -> Self {
        Self::from_config(&CannonConfig::default())
    }
}

impl Cannon {
    /// Build a cannon at the configured position and initial aim.
    pub fn from_config(config: &CannonConfig) -> Self {
        let mut cannon = Self {
            position: config.position,
            angle: config.initial_angle,
            power: config.initial_power,
            config: config.clone(),
        };
        cannon.clamp_power();
        cannon
    }

    pub fn config(&self) -> &CannonConfig {
        &self.config
    }

    /// Unit vector along the barrel.
    pub fn barrel_direction(&self) -> Vec2 {
        Vec2::from_angle(self.angle)
    }

    /// World position of the far end of the drawn aim line.
    pub fn aim_line_end(&self) -> Vec2 {
        self.position + self.barrel_direction() * self.config.aim_line_length
    }

    fn clamp_power(&mut self) {
        self.power = self.power.max(self.config.min_power).min(self.config.max_power);
    }
}

impl Launcher for Cannon {
    fn update(&mut self, aiming: &AimingState, dt: f32) {
        self.angle += aiming.get_rotation_delta() * self.config.rotation_speed * dt;
        self.power += aiming.get_power_delta() * self.config.power_rate * dt;
        self.clamp_power();
    }

    fn draw(&self, surface: &mut dyn DrawSurface, camera: &Camera, screen_w: u32, screen_h: u32) {
        let start = camera.world_to_screen(self.position, screen_w, screen_h);
        let end = camera.world_to_screen(self.aim_line_end(), screen_w, screen_h);
        surface.draw_line(start, end, self.config.color);
    }

    fn launch(&self) -> Projectile {
        Projectile::spawn(self.position, self.barrel_direction() * self.power)
    }
}
