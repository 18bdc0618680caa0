use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::errors::CredentialError;
use crate::infrastructure::credentials::{
    ChainProvider, EnvProvider, SharedConfig, SharedCredentialsProvider,
};
use crate::infrastructure::logging::LogConfig;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Profile name cannot be empty")]
    EmptyProfile,

    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    #[error("Failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Keys(#[from] CredentialError),
}

/// Application settings for the `awsenv` tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    /// Profile to read from the shared files (defaults to `AWS_PROFILE`/`default`)
    #[serde(default)]
    pub profile: Option<String>,

    /// Override for the shared credentials file location
    #[serde(default)]
    pub credentials_file: Option<PathBuf>,

    /// Override for the shared config file location
    #[serde(default)]
    pub config_file: Option<PathBuf>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LogConfig,
}

impl AppConfig {
    /// The restricted local chain, honoring profile and file overrides.
    pub fn credential_chain(&self) -> ChainProvider {
        let mut shared = SharedCredentialsProvider::new();
        if let Some(path) = &self.credentials_file {
            shared = shared.with_filename(path.clone());
        }
        if let Some(profile) = &self.profile {
            shared = shared.with_profile(profile);
        }
        ChainProvider::restricted(vec![Box::new(EnvProvider::new()), Box::new(shared)])
    }

    /// Region lookup honoring profile and file overrides.
    pub fn shared_config(&self) -> SharedConfig {
        let mut shared = SharedConfig::new();
        if let Some(path) = &self.config_file {
            shared = shared.with_filename(path.clone());
        }
        if let Some(profile) = &self.profile {
            shared = shared.with_profile(profile);
        }
        shared
    }
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .awsenv/config.yaml (project config, optional)
    /// 3. Environment variables (AWSENV_* prefix, highest priority)
    pub fn load() -> Result<AppConfig> {
        let config: AppConfig = Figment::new()
            .merge(Serialized::defaults(AppConfig::default()))
            .merge(Yaml::file(".awsenv/config.yaml"))
            .merge(Env::prefixed("AWSENV_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file, still honoring AWSENV_* overrides
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<AppConfig> {
        let config: AppConfig = Figment::new()
            .merge(Serialized::defaults(AppConfig::default()))
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed("AWSENV_").split("__"))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        if matches!(config.profile.as_deref(), Some(p) if p.trim().is_empty()) {
            return Err(ConfigError::EmptyProfile);
        }

        for (name, path) in [
            ("credentials_file", &config.credentials_file),
            ("config_file", &config.config_file),
        ] {
            if matches!(path, Some(p) if p.as_os_str().is_empty()) {
                return Err(ConfigError::ValidationFailed(format!(
                    "{name} cannot be an empty path"
                )));
            }
        }

        Ok(())
    }
}
