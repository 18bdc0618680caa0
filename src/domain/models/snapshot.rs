//! Point-in-time captures of resolved credentials.

use serde::{Deserialize, Serialize};

use super::credentials::CredentialValue;
use super::region::Region;
use crate::domain::errors::CredentialResult;

/// A serializable capture of a resolved credential value and region.
///
/// Snapshots own copies of their values; nothing links them back to the
/// resolver they were captured from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub credentials: CredentialValue,
    #[serde(default)]
    pub region: Region,
}

impl Snapshot {
    pub const fn new(credentials: CredentialValue, region: Region) -> Self {
        Self {
            credentials,
            region,
        }
    }

    /// Decodes a snapshot from a configuration value.
    pub fn from_yaml_value(value: serde_yaml::Value) -> CredentialResult<Self> {
        Ok(serde_yaml::from_value(value)?)
    }

    /// Encodes the snapshot as a configuration value.
    pub fn to_yaml_value(&self) -> CredentialResult<serde_yaml::Value> {
        Ok(serde_yaml::to_value(self)?)
    }
}
