use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

use crate::model::EntityConfig;

/// Environment variable consulted when no config path is passed on the
/// command line.
pub const CONFIG_ENV_VAR: &str = "BOXDEMO_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot parse config{}: {source}", display_path(.path))]
    Parse {
        path: Option<PathBuf>,
        source: toml::de::Error,
    },
    #[error("move_step must be positive, got {0}")]
    InvalidMoveStep(i32),
    #[error("window size must be non-zero, got {width}x{height}")]
    InvalidWindowSize { width: u32, height: u32 },
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" at {}", p.display()))
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Distance covered by one move or zoom command.
    pub move_step: i32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self { move_step: 2 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            title: "boxdemo".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub entity: EntityConfig,
    pub controller: ControllerConfig,
    pub window: WindowConfig,
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|source| ConfigError::Parse { path: None, source })?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&content).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: Some(path.to_path_buf()),
                source,
            },
            other => other,
        })
    }

    /// Picks the config source: an explicit path wins, then
    /// [`CONFIG_ENV_VAR`], then the built-in defaults.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self, ConfigError> {
        let path = explicit.or_else(|| env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));

        match path {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading config");
                Self::load(&path)
            }
            None => {
                tracing::debug!("no config given, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.controller.move_step <= 0 {
            return Err(ConfigError::InvalidMoveStep(self.controller.move_step));
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::InvalidWindowSize {
                width: self.window.width,
                height: self.window.height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Coordinate;
    use std::io::Write;

    #[test]
    fn empty_config_uses_defaults() {
        let config = DemoConfig::from_toml_str("").unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.controller.move_step, 2);
        assert_eq!(config.window.width, 500);
        assert_eq!(config.window.height, 500);
    }

    #[test]
    fn parses_all_sections() {
        let toml_str = r#"
[entity]
size_min = 2
size_max = 20
size_initial = 6
position_min = { x = 0, y = 10 }
position_max = { x = 50, y = 60 }

[controller]
move_step = 5

[window]
width = 640
height = 480
title = "box"
"#;
        let config = DemoConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(config.entity.size_min, 2);
        assert_eq!(config.entity.size_max, 20);
        assert_eq!(config.entity.size_initial, 6);
        assert_eq!(config.entity.position_min, Coordinate::new(0, 10));
        assert_eq!(config.entity.position_max, Coordinate::new(50, 60));
        assert_eq!(config.controller.move_step, 5);
        assert_eq!(config.window.title, "box");
    }

    #[test]
    fn rejects_non_positive_step() {
        let err = DemoConfig::from_toml_str("[controller]\nmove_step = 0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMoveStep(0)));
    }

    #[test]
    fn rejects_zero_window() {
        let err = DemoConfig::from_toml_str("[window]\nwidth = 0").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidWindowSize {
                width: 0,
                height: 500
            }
        ));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = DemoConfig::from_toml_str("[entity\nsize_min = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { path: None, .. }));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[entity]\nsize_initial = 20").unwrap();

        let config = DemoConfig::load(file.path()).unwrap();
        assert_eq!(config.entity.size_initial, 20);
    }

    #[test]
    fn load_reports_path_on_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "entity = 3").unwrap();

        let err = DemoConfig::load(file.path()).unwrap_err();
        match err {
            ConfigError::Parse { path, .. } => assert_eq!(path.as_deref(), Some(file.path())),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = DemoConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn resolve_prefers_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[controller]\nmove_step = 7").unwrap();

        let config = DemoConfig::resolve(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.controller.move_step, 7);
    }
}
