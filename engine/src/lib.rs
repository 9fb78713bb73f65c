//! Zero-G Engine Library
//!
//! The simulation core of the Zero-G artillery prototype: a ballistic shell
//! integrator, a pan/zoom camera and the input/drawing seams a host window
//! plugs into. The engine never talks to a window system directly; the
//! `zero_g` binary translates winit events into [`input::InputEvent`]s and
//! renders whatever the simulation records into a [`render::DrawList`].
//!
//! # Modules
//!
//! - [`camera`] - Pan/zoom camera and world/screen mapping
//! - [`input`] - Platform-agnostic events, held-key tracking and key bindings
//! - [`physics`] - Projectile ballistics
//! - [`render`] - Drawing surface abstraction and the wgpu shape renderer
//! - [`time`] - Frame clock and delta-time computation
//! - [`game`] - Launcher trait, the cannon, configuration and the simulation loop
//!
//! # Example
//!
//! ```ignore
//! use zero_g_engine::game::{Cannon, Simulation, SimulationConfig};
//! use zero_g_engine::input::{InputEvent, KeyCode};
//! use zero_g_engine::render::DrawList;
//!
//! let config = SimulationConfig::default();
//! let mut sim = Simulation::new(&config, Cannon::from_config(&config.cannon));
//!
//! sim.frame([InputEvent::KeyDown { key: KeyCode::Space }], 1.0 / 60.0);
//!
//! let mut list = DrawList::new();
//! sim.draw(&mut list, 1280, 720);
//! ```

pub mod camera;
pub mod input;
pub mod physics;
pub mod render;
pub mod time;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export commonly used types at crate level
pub use camera::{Camera, CameraConfig};
pub use input::{InputEvent, KeyBindings, KeyCode, KeyboardState, MouseButton, ScrollDelta};
pub use physics::{BallisticsConfig, Projectile, ProjectileState};
pub use render::{Color, DrawCommand, DrawList, DrawSurface, Rect};
pub use time::{Clock, FrameTimer, ManualClock, SystemClock};
