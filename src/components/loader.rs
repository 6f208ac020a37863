use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::components::params::{AircraftParams, ParamsUpdate};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

impl AircraftParams {
    /// Loads parameters from a YAML file.
    ///
    /// The file is a flat mapping of parameter names to numbers; fields it
    /// does not mention keep their default values.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(&path)?;
        let overrides: ParamsUpdate = serde_yaml::from_str(&contents)?;
        info!(
            "Loaded aircraft parameters from {}",
            path.as_ref().display()
        );
        Ok(Self::default().update(overrides))
    }
}
