//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the rota
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{RotaError, RotaResult};

use super::types::RotaConfig;

/// Loads and provides access to the rota configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── rota.yaml   # Shift windows, classification cutoff, early finish
/// ```
///
/// # Example
///
/// ```no_run
/// use rota_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Day window starts {}", loader.config().shift_times.day.start);
/// # Ok::<(), rota_engine::error::RotaError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: RotaConfig,
}

impl ConfigLoader {
    /// Name of the configuration file inside the directory.
    pub const FILE_NAME: &'static str = "rota.yaml";

    /// Loads configuration from the specified directory.
    ///
    /// Returns `ConfigNotFound` when `rota.yaml` is missing and
    /// `ConfigParseError` when it is not valid YAML for [`RotaConfig`].
    pub fn load<P: AsRef<Path>>(path: P) -> RotaResult<Self> {
        let config_path = path.as_ref().join(Self::FILE_NAME);
        let config = Self::load_yaml::<RotaConfig>(&config_path)?;

        tracing::debug!(path = %config_path.display(), "Loaded rota configuration");

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> RotaResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| RotaError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| RotaError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &RotaConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> RotaConfig {
        self.config
    }
}
