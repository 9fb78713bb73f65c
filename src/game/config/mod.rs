//! Config Module
//!
//! Centralized configuration for the simulation, the cannon and the host
//! window. Every section deserializes with `#[serde(default)]`, so a config
//! file only needs the values it changes.

pub mod simulation_config;
pub mod visual_config;

pub use simulation_config::{CONFIG_ENV_VAR, CannonConfig, ConfigError, SimulationConfig};
pub use visual_config::{VisualConfig, WindowConfig};
