//! Game Module
//!
//! The artillery prototype built on the engine: launcher capability, the
//! stock cannon, session configuration and the per-frame simulation loop.

pub mod cannon;
pub mod config;
pub mod input;
pub mod launcher;
pub mod simulation;

pub use cannon::Cannon;
pub use config::{CannonConfig, ConfigError, SimulationConfig, VisualConfig, WindowConfig};
pub use input::{AimingState, EventTranslator};
pub use launcher::Launcher;
pub use simulation::Simulation;
