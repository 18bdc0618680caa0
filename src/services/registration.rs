//! Selection between live and snapshot credentials, and export.
//!
//! A configuration either carries an exported snapshot under [`AWSENV_KEY`]
//! or it does not. With a snapshot, credentials come from it and the local
//! environment is never read; without one, they are resolved live.
//! Marshaling a session always writes a snapshot, so whatever reads the
//! marshaled keys back takes the snapshot path.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use super::capture::capture;
use super::live_resolver::LiveCredentialResolver;
use super::snapshot_resolver::SnapshotCredentialResolver;
use crate::domain::errors::CredentialResult;
use crate::domain::models::{CredentialValue, Region, ResolutionState, Session, Snapshot};
use crate::domain::ports::{Config, Keys};

/// Configuration key holding the credential snapshot.
pub const AWSENV_KEY: &str = "awsenv";

/// Which resolver a session was built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialMode {
    Live,
    Snapshot,
}

impl fmt::Display for CredentialMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Live => f.write_str("live"),
            Self::Snapshot => f.write_str("snapshot"),
        }
    }
}

/// One of the two credential resolvers.
#[derive(Debug)]
pub enum CredentialResolver {
    Live(LiveCredentialResolver),
    Snapshot(SnapshotCredentialResolver),
}

impl CredentialResolver {
    pub fn credentials(&self) -> CredentialResult<CredentialValue> {
        match self {
            Self::Live(r) => r.credentials(),
            Self::Snapshot(r) => r.credentials(),
        }
    }

    pub fn region(&self) -> CredentialResult<Region> {
        match self {
            Self::Live(r) => r.region(),
            Self::Snapshot(r) => r.region(),
        }
    }

    pub fn session(&self) -> CredentialResult<Arc<Session>> {
        match self {
            Self::Live(r) => r.session(),
            Self::Snapshot(r) => r.session(),
        }
    }

    pub fn state(&self) -> ResolutionState {
        match self {
            Self::Live(r) => r.state(),
            Self::Snapshot(r) => r.state(),
        }
    }

    pub const fn mode(&self) -> CredentialMode {
        match self {
            Self::Live(_) => CredentialMode::Live,
            Self::Snapshot(_) => CredentialMode::Snapshot,
        }
    }

    /// Snapshot of this resolver's state, resolving a live resolver first.
    pub fn snapshot(&self) -> CredentialResult<Snapshot> {
        match self {
            Self::Live(r) => capture(r),
            Self::Snapshot(r) => Ok(r.snapshot().clone()),
        }
    }
}

/// A configuration layered with environment-derived AWS credentials.
pub struct AwsEnvSession {
    base: Arc<dyn Config>,
    resolver: CredentialResolver,
}

/// Build a session over `base`, resolving live credentials from the default
/// local chain when `base` carries no snapshot.
pub fn register(base: Arc<dyn Config>) -> CredentialResult<AwsEnvSession> {
    register_with(base, LiveCredentialResolver::new)
}

/// Like [`register`], with a caller-supplied live resolver. `live` is only
/// called when `base` carries no snapshot.
pub fn register_with<F>(base: Arc<dyn Config>, live: F) -> CredentialResult<AwsEnvSession>
where
    F: FnOnce() -> LiveCredentialResolver,
{
    let resolver = match base.value(AWSENV_KEY) {
        Some(value) => {
            let snapshot = Snapshot::from_yaml_value(value)?;
            CredentialResolver::Snapshot(SnapshotCredentialResolver::new(snapshot))
        }
        None => CredentialResolver::Live(live()),
    };
    info!(mode = %resolver.mode(), "registered AWS credentials");
    Ok(AwsEnvSession { base, resolver })
}

impl AwsEnvSession {
    pub fn credentials(&self) -> CredentialResult<CredentialValue> {
        self.resolver.credentials()
    }

    pub fn region(&self) -> CredentialResult<Region> {
        self.resolver.region()
    }

    pub fn session(&self) -> CredentialResult<Arc<Session>> {
        self.resolver.session()
    }

    pub const fn mode(&self) -> CredentialMode {
        self.resolver.mode()
    }

    pub const fn resolver(&self) -> &CredentialResolver {
        &self.resolver
    }
}

impl fmt::Debug for AwsEnvSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AwsEnvSession")
            .field("resolver", &self.resolver)
            .finish_non_exhaustive()
    }
}

impl Config for AwsEnvSession {
    fn value(&self, key: &str) -> Option<serde_yaml::Value> {
        self.base.value(key)
    }

    fn marshal(&self, keys: &mut Keys) -> CredentialResult<()> {
        self.base.marshal(keys)?;
        let snapshot = self.resolver.snapshot()?;
        keys.insert(AWSENV_KEY.to_string(), snapshot.to_yaml_value()?);
        Ok(())
    }
}
