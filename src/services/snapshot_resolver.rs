//! Credentials and session rebuilt from a previously captured snapshot.

use std::sync::Arc;

use tracing::debug;

use super::once_task::OnceTask;
use crate::domain::errors::{CredentialError, CredentialResult};
use crate::domain::models::{
    CredentialValue, Region, ResolutionState, Session, SessionOptions, Snapshot,
};

/// Serves a frozen credential value and region without searching any
/// provider. Used where the original environment is not available, such as a
/// remote worker that received an exported configuration.
#[derive(Debug)]
pub struct SnapshotCredentialResolver {
    snapshot: Snapshot,
    session: OnceTask<Arc<Session>, CredentialError>,
}

impl SnapshotCredentialResolver {
    pub const fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            session: OnceTask::new(),
        }
    }

    /// The embedded credential value. Never fails.
    pub fn credentials(&self) -> CredentialResult<CredentialValue> {
        Ok(self.snapshot.credentials.clone())
    }

    /// The embedded region. Never fails.
    pub fn region(&self) -> CredentialResult<Region> {
        Ok(self.snapshot.region.clone())
    }

    /// The session built from the embedded values, constructed on first use.
    pub fn session(&self) -> CredentialResult<Arc<Session>> {
        self.session.get_or_init(|| {
            let session = Session::new(SessionOptions {
                credentials: self.snapshot.credentials.clone(),
                region: self.snapshot.region.clone(),
            })?;
            debug!(
                session_id = %session.id(),
                provider = session.credentials().provider_name(),
                region = %session.region(),
                "built session from snapshot"
            );
            Ok(Arc::new(session))
        })
    }

    /// Replace the embedded region. A session that was already built keeps
    /// the region it was built with.
    pub fn set_region(&mut self, region: impl Into<Region>) {
        self.snapshot.region = region.into();
    }

    pub const fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn state(&self) -> ResolutionState {
        self.session.state()
    }
}
