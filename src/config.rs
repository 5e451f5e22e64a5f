use crate::physics::math::Scalar;
use crate::physics::spring::{DEFAULT_FRICTION, DEFAULT_SPRING, SpringParameters};
use crate::presets::{PresetError, PresetRegistry};
use bevy::log::{info, warn};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Prefix of environment variables overriding configuration values, e.g.
/// `SPRINGDRIFT__SPRING__FRICTION=20`
pub const ENV_PREFIX: &str = "SPRINGDRIFT";

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("failed to write configuration file {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("no configuration directory is available for this user")]
    NoConfigDirectory,
    #[error(transparent)]
    Preset(#[from] PresetError),
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct SpringDriftConfig {
    pub spring: SpringConfig,
    pub animation: AnimationConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SpringConfig {
    /// Named preset; takes precedence over the raw constants when set
    pub preset: Option<String>,
    pub spring: Scalar,
    pub friction: Scalar,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            preset: None,
            spring: DEFAULT_SPRING,
            friction: DEFAULT_FRICTION,
        }
    }
}

impl SpringConfig {
    /// Resolve the configured constants, looking up the preset if one is named
    pub fn parameters(&self, registry: &PresetRegistry) -> Result<SpringParameters, PresetError> {
        match &self.preset {
            Some(name) => registry.parameters(name),
            None => Ok(SpringParameters::new(self.spring, self.friction)),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct AnimationConfig {
    /// Frames per second driving the integrator
    pub frame_rate: Scalar,
    pub rest_epsilon: Scalar,
    /// Seconds after which an unsettled animation is abandoned
    pub max_duration: Scalar,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frame_rate: 60.0,
            rest_epsilon: crate::animation::DEFAULT_REST_EPSILON,
            max_duration: 10.0,
        }
    }
}

impl AnimationConfig {
    /// Seconds per frame
    pub fn time_step(&self) -> Scalar {
        1.0 / self.frame_rate
    }
}

impl SpringDriftConfig {
    /// Load configuration from an optional file with environment overrides
    ///
    /// Values come from the defaults, then the file if it exists, then any
    /// `SPRINGDRIFT__SECTION__KEY` environment variables. The file is always
    /// read as TOML, whatever its extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .add_source(
                config::File::from(path.as_ref())
                    .format(config::FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Path of the per-user configuration file, if the platform has one
    pub fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "springdrift")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load the per-user configuration, falling back to defaults on any failure
    pub fn load_from_user_config() -> Self {
        let Some(path) = Self::user_config_path() else {
            warn!("No user configuration directory available. Using defaults.");
            return Self::default();
        };

        match Self::load(&path) {
            Ok(config) => {
                info!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                warn!("{e}. Using defaults.");
                Self::default()
            }
        }
    }

    /// Save configuration to a file, creating missing parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        std::fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
