//! Configuration substrate port.
//!
//! A configuration is a named set of values. The credential layer reads one
//! entry out of it and writes one entry back when it is marshaled for export.

use std::collections::BTreeMap;

use crate::domain::errors::CredentialResult;

/// Marshaled configuration entries keyed by name.
pub type Keys = BTreeMap<String, serde_yaml::Value>;

/// A composable configuration.
pub trait Config: Send + Sync {
    /// Look up the value stored under `key`.
    fn value(&self, key: &str) -> Option<serde_yaml::Value>;

    /// Write this configuration's entries into `keys`.
    fn marshal(&self, keys: &mut Keys) -> CredentialResult<()>;
}
