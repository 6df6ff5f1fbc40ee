// src/config/loader.rs
//! Configuration loader with path discovery and validation

use crate::config::SystemConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration loader
///
/// Resolves the first readable configuration file from a list of candidate
/// paths, falling back to built-in defaults when none exists.
pub struct ConfigLoader {
    config_paths: Vec<PathBuf>,
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Configuration parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Configuration serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Configuration validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigLoader {
    /// Create a loader over the default search paths
    pub fn new() -> Self {
        Self {
            config_paths: Self::discover_config_paths(),
        }
    }

    /// Create a loader with custom paths
    pub fn with_paths(paths: Vec<PathBuf>) -> Self {
        Self { config_paths: paths }
    }

    /// Load system configuration, validating consistency
    ///
    /// Returns defaults when no candidate path exists on disk.
    pub fn load_system_config(&self) -> Result<SystemConfig, ConfigError> {
        let config = match self.first_existing_path() {
            Some(path) => Self::load_config_file(path)?,
            None => SystemConfig::default(),
        };

        config
            .validate_consistency()
            .map_err(ConfigError::Validation)?;

        Ok(config)
    }

    /// Load and validate a specific configuration file
    pub fn load_config_file<P: AsRef<Path>>(path: P) -> Result<SystemConfig, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let config: SystemConfig = toml::from_str(&content)?;

        config
            .validate_consistency()
            .map_err(ConfigError::Validation)?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Export a configuration to a TOML file
    pub fn export_config<P: AsRef<Path>>(config: &SystemConfig, path: P) -> Result<(), ConfigError> {
        let toml_content = toml::to_string_pretty(config)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    /// Candidate paths, highest priority first
    fn discover_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(env_path) = std::env::var("TREMOR_CONFIG") {
            paths.push(PathBuf::from(env_path));
        }

        paths.push(PathBuf::from("tremor.toml"));
        paths.push(PathBuf::from("config/tremor.toml"));

        if let Some(home) = std::env::var_os("HOME") {
            paths.push(PathBuf::from(home).join(".config/tremor-assist/tremor.toml"));
        }

        paths
    }

    fn first_existing_path(&self) -> Option<&PathBuf> {
        self.config_paths.iter().find(|p| p.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
