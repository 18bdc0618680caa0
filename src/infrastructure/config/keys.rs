//! YAML-backed configuration substrate.

use std::fs;
use std::path::Path;

use super::loader::ConfigError;
use crate::domain::errors::CredentialResult;
use crate::domain::ports::{Config, Keys};

/// A configuration that is simply a set of marshaled keys.
///
/// This is the base a credential session is layered on, and the form an
/// exported configuration is read back from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyValueConfig {
    keys: Keys,
}

impl KeyValueConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn from_keys(keys: Keys) -> Self {
        Self { keys }
    }

    /// Parse a YAML mapping of keys. An empty document is an empty config.
    pub fn from_yaml_str(yaml: &str) -> CredentialResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let keys: Keys = serde_yaml::from_str(yaml)?;
        Ok(Self { keys })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_yaml_str(&contents)?)
    }

    pub fn to_yaml_string(&self) -> CredentialResult<String> {
        Ok(serde_yaml::to_string(&self.keys)?)
    }

    /// Write the keys as YAML, creating missing parent directories.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let yaml = self.to_yaml_string()?;
        fs::write(path, yaml).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn insert(&mut self, key: impl Into<String>, value: serde_yaml::Value) {
        self.keys.insert(key.into(), value);
    }

    pub const fn keys(&self) -> &Keys {
        &self.keys
    }

    pub fn into_keys(self) -> Keys {
        self.keys
    }
}

impl Config for KeyValueConfig {
    fn value(&self, key: &str) -> Option<serde_yaml::Value> {
        self.keys.get(key).cloned()
    }

    fn marshal(&self, keys: &mut Keys) -> CredentialResult<()> {
        keys.extend(self.keys.iter().map(|(k, v)| (k.clone(), v.clone())));
        Ok(())
    }
}
