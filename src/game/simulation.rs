//! Simulation Loop
//!
//! Owns the camera, one launcher and the single projectile slot, and runs
//! them in a fixed order each frame:
//!
//! 1. drain this frame's input events (camera, held keys, fire/quit/reset)
//! 2. advance the launcher's aim
//! 3. step the projectile once
//! 4. draw background, launcher, projectile and the origin crosshair
//!
//! The host supplies `dt`, the event batch and a [`DrawSurface`]; nothing in
//! here touches a window or a clock.

use glam::{UVec2, Vec2};

use crate::camera::Camera;
use crate::input::{InputAction, InputEvent, KeyBindings, KeyboardState};
use crate::physics::{BallisticsConfig, Projectile, ProjectileState};
use crate::render::DrawSurface;

use super::cannon::Cannon;
use super::config::{SimulationConfig, VisualConfig};
use super::input::AimingState;
use super::launcher::Launcher;

/// One artillery session.
pub struct Simulation<L: Launcher = Cannon> {
    camera: Camera,
    launcher: L,
    /// At most one shell exists; a new launch replaces it wholesale
    projectile: Option<Projectile>,
    keyboard: KeyboardState,
    bindings: KeyBindings,
    ballistics: BallisticsConfig,
    visuals: VisualConfig,
    screen_size: UVec2,
    shots_fired: u32,
    running: bool,
}

impl Simulation<Cannon> {
    /// Session with the stock cannon built from `config.cannon`.
    pub fn with_config(config: &SimulationConfig) -> Self {
        Self::new(config, Cannon::from_config(&config.cannon))
    }
}

impl<L: Launcher> Simulation<L> {
    pub fn new(config: &SimulationConfig, launcher: L) -> Self {
        log::info!(
            "simulation started (gravity {}, ground at y={})",
            config.ballistics.gravity,
            config.ballistics.ground_y
        );
        Self {
            camera: Camera::new(config.camera),
            launcher,
            projectile: None,
            keyboard: KeyboardState::new(),
            bindings: KeyBindings::new(),
            ballistics: config.ballistics,
            visuals: config.visuals.clone(),
            screen_size: UVec2::new(config.window.width, config.window.height),
            shots_fired: 0,
            running: true,
        }
    }

    /// Consume one frame's worth of input events in order.
    pub fn handle_events(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        for event in events {
            self.handle_event(&event);
        }
    }

    /// Route a single event to the camera, the held-key state and the
    /// session-level actions.
    pub fn handle_event(&mut self, event: &InputEvent) {
        self.camera.handle_event(event);
        self.keyboard.apply(event);

        match *event {
            InputEvent::Quit => self.request_quit(),
            InputEvent::Resized { width, height } => {
                self.screen_size = UVec2::new(width, height);
            }
            InputEvent::FocusLost => {
                // Key-up events go to whichever window has focus now
                if self.keyboard.any_held() {
                    log::debug!("focus lost, releasing held keys");
                }
                self.keyboard.reset();
            }
            InputEvent::KeyDown { key } => match self.bindings.get_action(key) {
                Some(InputAction::Fire) => {
                    self.try_fire();
                }
                Some(InputAction::Quit) => self.request_quit(),
                Some(InputAction::ResetCamera) => self.camera.reset(),
                _ => {}
            },
            _ => {}
        }
    }

    /// Launch a shell unless one is already in flight.
    ///
    /// Returns `true` if a new projectile was created.
    pub fn try_fire(&mut self) -> bool {
        if self.has_active_projectile() {
            log::debug!("fire ignored: shell already in flight");
            return false;
        }

        let shell = self.launcher.launch();
        log::debug!(
            "shell launched from {} with velocity {}",
            shell.position,
            shell.velocity
        );
        self.projectile = Some(shell);
        self.shots_fired += 1;
        true
    }

    /// Advance the launcher and the projectile by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        let aiming = AimingState::from_keyboard(&self.keyboard, &self.bindings);
        self.launcher.update(&aiming, dt);

        if let Some(shell) = self.projectile.as_mut() {
            if let ProjectileState::Landed { position } = shell.integrate(&self.ballistics, dt) {
                log::debug!("shell landed at {position}");
            }
        }
    }

    /// Events then one update step.
    pub fn frame(&mut self, events: impl IntoIterator<Item = InputEvent>, dt: f32) {
        self.handle_events(events);
        self.update(dt);
    }

    /// Record the whole frame onto `surface`.
    pub fn draw(&self, surface: &mut dyn DrawSurface, screen_w: u32, screen_h: u32) {
        surface.clear(self.visuals.background);

        self.launcher.draw(surface, &self.camera, screen_w, screen_h);

        if let Some(shell) = &self.projectile {
            shell.draw(surface, &self.camera, screen_w, screen_h);
        }

        self.draw_crosshair(surface, screen_w, screen_h);
    }

    /// Screen-space cross over the world origin. Arm length ignores zoom.
    fn draw_crosshair(&self, surface: &mut dyn DrawSurface, screen_w: u32, screen_h: u32) {
        let origin = self.camera.world_to_screen(Vec2::ZERO, screen_w, screen_h);
        let half = self.visuals.crosshair_half_length;
        let color = self.visuals.crosshair_color;

        surface.draw_line(origin - Vec2::new(half, 0.0), origin + Vec2::new(half, 0.0), color);
        surface.draw_line(origin - Vec2::new(0.0, half), origin + Vec2::new(0.0, half), color);
    }

    /// Draw at the last size reported through a `Resized` event.
    pub fn draw_to_screen(&self, surface: &mut dyn DrawSurface) {
        self.draw(surface, self.screen_size.x, self.screen_size.y);
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Clear the running flag. The host stops at its next poll.
    pub fn request_quit(&mut self) {
        if self.running {
            log::info!("session ending after {} shots", self.shots_fired);
        }
        self.running = false;
    }

    pub fn has_active_projectile(&self) -> bool {
        self.projectile.is_some_and(|shell| shell.active)
    }

    /// The most recent shell, landed or not.
    pub fn projectile(&self) -> Option<&Projectile> {
        self.projectile.as_ref()
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    pub fn launcher_mut(&mut self) -> &mut L {
        &mut self.launcher
    }

    pub fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Remap keys for this session.
    pub fn bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.bindings
    }

    pub fn shots_fired(&self) -> u32 {
        self.shots_fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{KeyCode, MouseButton};
    use crate::render::{Color, DrawCommand, DrawList};

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key }
    }

    fn key_up(key: KeyCode) -> InputEvent {
        InputEvent::KeyUp { key }
    }

    fn new_sim() -> Simulation {
        Simulation::with_config(&SimulationConfig::default())
    }

    #[test]
    fn test_starts_running_without_projectile() {
        let sim = new_sim();
        assert!(sim.is_running());
        assert!(sim.projectile().is_none());
        assert!(!sim.has_active_projectile());
    }

    #[test]
    fn test_fire_creates_projectile() {
        let mut sim = new_sim();
        sim.handle_events([key_down(KeyCode::Space)]);
        assert!(sim.has_active_projectile());
        assert_eq!(sim.shots_fired(), 1);
    }

    #[test]
    fn test_second_fire_is_ignored() {
        let mut sim = new_sim();
        sim.handle_events([key_down(KeyCode::Space)]);
        let before = *sim.projectile().unwrap();

        sim.handle_events([key_up(KeyCode::Space), key_down(KeyCode::Space)]);
        assert_eq!(*sim.projectile().unwrap(), before);
        assert_eq!(sim.shots_fired(), 1);
    }

    #[test]
    fn test_quit_event_and_escape() {
        let mut sim = new_sim();
        sim.handle_events([InputEvent::Quit]);
        assert!(!sim.is_running());

        let mut sim = new_sim();
        sim.handle_events([key_down(KeyCode::Escape)]);
        assert!(!sim.is_running());
    }

    #[test]
    fn test_held_keys_drive_cannon() {
        let mut sim = new_sim();
        sim.frame([key_down(KeyCode::ArrowUp)], 1.0);
        assert!((sim.launcher().power - 400.0).abs() < 1e-3);

        sim.frame([key_up(KeyCode::ArrowUp)], 1.0);
        assert!((sim.launcher().power - 400.0).abs() < 1e-3);
    }

    #[test]
    fn test_reset_camera_key() {
        let mut sim = new_sim();
        sim.camera_mut().offset = Vec2::new(50.0, 50.0);
        sim.camera_mut().zoom = 3.0;

        sim.handle_events([key_down(KeyCode::R)]);
        assert_eq!(sim.camera().offset, Vec2::ZERO);
        assert_eq!(sim.camera().zoom, 1.0);
    }

    #[test]
    fn test_camera_receives_pointer_events() {
        let mut sim = new_sim();
        sim.handle_events([
            InputEvent::PointerDown {
                button: MouseButton::Left,
                position: Vec2::new(100.0, 100.0),
            },
            InputEvent::PointerMove {
                position: Vec2::new(120.0, 90.0),
            },
        ]);
        assert_eq!(sim.camera().offset, Vec2::new(-20.0, 10.0));
    }

    #[test]
    fn test_focus_loss_releases_held_keys() {
        let mut sim = new_sim();
        sim.frame([key_down(KeyCode::ArrowRight)], 0.0);
        let angle = sim.launcher().angle;

        sim.frame([InputEvent::FocusLost], 2.0);
        assert_eq!(sim.launcher().angle, angle);
        assert!(!sim.keyboard().is_held(KeyCode::ArrowRight));

        // Pressing again after focus returns resumes aiming
        sim.frame([key_down(KeyCode::ArrowRight)], 1.0);
        assert!((sim.launcher().angle - (angle + 1.5)).abs() < 1e-3);
    }

    #[test]
    fn test_draw_to_screen_uses_window_size() {
        let mut sim = new_sim();
        let mut list = DrawList::new();
        sim.draw_to_screen(&mut list);
        let (from, _, _) = list.lines().last().unwrap();
        assert_eq!(from, Vec2::new(640.0, 350.0));

        sim.handle_events([InputEvent::Resized {
            width: 640,
            height: 480,
        }]);
        list.reset();
        sim.draw_to_screen(&mut list);
        let (from, _, _) = list.lines().last().unwrap();
        assert_eq!(from, Vec2::new(320.0, 230.0));
    }

    #[test]
    fn test_draw_order() {
        let mut sim = new_sim();
        sim.handle_events([key_down(KeyCode::Space)]);

        let mut list = DrawList::new();
        sim.draw(&mut list, 800, 600);

        let commands = list.commands();
        assert_eq!(commands.len(), 5);
        assert_eq!(commands[0], DrawCommand::Clear(Color::rgb(30, 40, 50)));
        assert!(matches!(commands[1], DrawCommand::Line { color: Color::WHITE, .. }));
        assert!(matches!(commands[2], DrawCommand::FilledRect { .. }));
        assert!(matches!(commands[3], DrawCommand::Line { .. }));
        assert!(matches!(commands[4], DrawCommand::Line { .. }));
    }

    #[test]
    fn test_crosshair_follows_origin() {
        let mut sim = new_sim();
        sim.camera_mut().offset = Vec2::new(100.0, 0.0);
        sim.camera_mut().zoom = 2.0;

        let mut list = DrawList::new();
        sim.draw(&mut list, 800, 600);

        let lines: Vec<_> = list.lines().collect();
        let (from, to, color) = lines[lines.len() - 2];
        assert_eq!(color, Color::rgb(200, 80, 80));
        assert_eq!(from, Vec2::new(190.0, 300.0));
        assert_eq!(to, Vec2::new(210.0, 300.0));
    }
}
