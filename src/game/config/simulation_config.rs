//! Simulation Configuration
//!
//! Top-level [`SimulationConfig`] plus the cannon section, JSON loading and
//! range validation. `Default` reproduces the stock prototype exactly.

use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::camera::CameraConfig;
use crate::physics::BallisticsConfig;
use crate::render::Color;

use super::visual_config::{VisualConfig, WindowConfig};

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV_VAR: &str = "ZERO_G_CONFIG";

/// Cannon placement, initial aim and control rates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CannonConfig {
    /// World position of the cannon
    pub position: Vec2,
    /// Barrel angle at session start (radians)
    pub initial_angle: f32,
    /// Launch speed at session start
    pub initial_power: f32,
    /// Barrel rotation while an aim key is held (radians/second)
    pub rotation_speed: f32,
    /// Power change while a power key is held (units/second)
    pub power_rate: f32,
    pub min_power: f32,
    pub max_power: f32,
    /// Length of the drawn aim line (world units)
    pub aim_line_length: f32,
    pub color: Color,
}

impl Default for CannonConfig {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            initial_angle: -0.5,
            initial_power: 300.0,
            rotation_speed: 1.5,
            power_rate: 100.0,
            min_power: 50.0,
            max_power: 800.0,
            aim_line_length: 40.0,
            color: Color::WHITE,
        }
    }
}

/// Everything tunable about a session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub camera: CameraConfig,
    pub ballistics: BallisticsConfig,
    pub cannon: CannonConfig,
    pub visuals: VisualConfig,
    pub window: WindowConfig,
}

/// Errors that can occur while loading a config file.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Io(std::io::Error),
    /// The file is not valid JSON for this schema.
    Json(serde_json::Error),
    /// The values parsed but are out of range.
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {e}"),
            ConfigError::Json(e) => write!(f, "JSON error: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

impl SimulationConfig {
    /// Read and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the file named by `ZERO_G_CONFIG` or the first CLI argument,
    /// falling back to defaults when neither is given.
    pub fn from_env_or_args() -> Result<Self, ConfigError> {
        match config_path(std::env::var(CONFIG_ENV_VAR).ok(), std::env::args().skip(1)) {
            Some(path) => {
                log::info!("loading config from {}", path.display());
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Check every range the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let camera = &self.camera;
        require_finite("camera.min_zoom", camera.min_zoom)?;
        require_finite("camera.max_zoom", camera.max_zoom)?;
        require_finite("camera.zoom_step", camera.zoom_step)?;
        require_finite("camera.initial_zoom", camera.initial_zoom)?;
        if !camera.initial_offset.is_finite() {
            return Err(invalid("camera.initial_offset must be finite"));
        }
        if camera.min_zoom <= 0.0 {
            return Err(invalid("camera.min_zoom must be positive"));
        }
        if camera.min_zoom > camera.max_zoom {
            return Err(invalid("camera.min_zoom exceeds camera.max_zoom"));
        }
        if camera.zoom_step <= 1.0 {
            return Err(invalid("camera.zoom_step must be greater than 1"));
        }

        require_finite("ballistics.gravity", self.ballistics.gravity)?;
        require_finite("ballistics.ground_y", self.ballistics.ground_y)?;

        let cannon = &self.cannon;
        if !cannon.position.is_finite() {
            return Err(invalid("cannon.position must be finite"));
        }
        require_finite("cannon.initial_angle", cannon.initial_angle)?;
        require_finite("cannon.initial_power", cannon.initial_power)?;
        require_finite("cannon.rotation_speed", cannon.rotation_speed)?;
        require_finite("cannon.power_rate", cannon.power_rate)?;
        require_finite("cannon.min_power", cannon.min_power)?;
        require_finite("cannon.max_power", cannon.max_power)?;
        require_finite("cannon.aim_line_length", cannon.aim_line_length)?;
        if cannon.min_power < 0.0 {
            return Err(invalid("cannon.min_power must not be negative"));
        }
        if cannon.min_power > cannon.max_power {
            return Err(invalid("cannon.min_power exceeds cannon.max_power"));
        }

        require_finite("visuals.crosshair_half_length", self.visuals.crosshair_half_length)?;
        if self.visuals.crosshair_half_length < 0.0 {
            return Err(invalid("visuals.crosshair_half_length must not be negative"));
        }
        require_finite("visuals.line_width", self.visuals.line_width)?;
        if self.visuals.line_width <= 0.0 {
            return Err(invalid("visuals.line_width must be positive"));
        }

        if self.window.width == 0 || self.window.height == 0 {
            return Err(invalid("window size must be non-zero"));
        }

        Ok(())
    }
}

/// `ZERO_G_CONFIG` wins over the first positional argument.
fn config_path(env: Option<String>, mut args: impl Iterator<Item = String>) -> Option<PathBuf> {
    env.filter(|value| !value.is_empty())
        .or_else(|| args.next())
        .map(PathBuf::from)
}

fn require_finite(name: &str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{name} must be finite")))
    }
}

fn invalid(msg: &str) -> ConfigError {
    ConfigError::Invalid(msg.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.camera.min_zoom, 0.1);
        assert_eq!(config.camera.max_zoom, 5.0);
        assert_eq!(config.ballistics.gravity, 500.0);
        assert_eq!(config.cannon.initial_power, 300.0);
        assert_eq!(config.visuals.background, Color::rgb(30, 40, 50));
        assert_eq!(config.window.width, 1280);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SimulationConfig::from_json_str(
            r#"{ "cannon": { "max_power": 1000.0 }, "ballistics": { "gravity": 250.0 } }"#,
        )
        .unwrap();
        assert_eq!(config.cannon.max_power, 1000.0);
        assert_eq!(config.cannon.min_power, 50.0);
        assert_eq!(config.ballistics.gravity, 250.0);
        assert_eq!(config.ballistics.ground_y, 0.0);
        assert_eq!(config.camera, CameraConfig::default());
    }

    #[test]
    fn test_empty_object_is_default() {
        let config = SimulationConfig::from_json_str("{}").unwrap();
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn test_bad_json() {
        let err = SimulationConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_rejects_inverted_zoom() {
        let err = SimulationConfig::from_json_str(
            r#"{ "camera": { "min_zoom": 6.0, "max_zoom": 5.0 } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_zoom_step_at_one() {
        let mut config = SimulationConfig::default();
        config.camera.zoom_step = 1.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_inverted_power() {
        let mut config = SimulationConfig::default();
        config.cannon.min_power = 900.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_non_finite() {
        let mut config = SimulationConfig::default();
        config.ballistics.gravity = f32::NAN;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("ballistics.gravity"));
    }

    #[test]
    fn test_rejects_non_positive_line_width() {
        let mut config = SimulationConfig::default();
        config.visuals.line_width = 0.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("visuals.line_width"));
    }

    #[test]
    fn test_rejects_zero_window() {
        let mut config = SimulationConfig::default();
        config.window.height = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let err = SimulationConfig::load(Path::new("/nonexistent/zero_g.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_load_round_trip_file() {
        let path = std::env::temp_dir().join(format!("zero_g_config_{}.json", std::process::id()));
        let mut config = SimulationConfig::default();
        config.cannon.initial_angle = -1.0;
        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = SimulationConfig::load(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded.unwrap(), config);
    }

    #[test]
    fn test_config_path_precedence() {
        let args = || vec!["from_args.json".to_string()].into_iter();

        assert_eq!(
            config_path(Some("from_env.json".into()), args()),
            Some(PathBuf::from("from_env.json"))
        );
        assert_eq!(config_path(None, args()), Some(PathBuf::from("from_args.json")));
        assert_eq!(
            config_path(Some(String::new()), args()),
            Some(PathBuf::from("from_args.json"))
        );
        assert_eq!(config_path(None, std::iter::empty()), None);
    }
}
