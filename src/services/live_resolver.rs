//! Credentials and session derived from the caller's local environment.

use std::sync::Arc;

use tracing::{debug, instrument};

use super::once_task::OnceTask;
use crate::domain::errors::{CredentialError, CredentialResult};
use crate::domain::models::{CredentialValue, Region, ResolutionState, Session, SessionOptions};
use crate::domain::ports::ProvideCredentials;
use crate::infrastructure::credentials::{ChainProvider, SharedConfig};

/// Resolves credentials from the environment and the shared credentials
/// file, exactly once per instance.
///
/// Only local providers take part. Remote providers are excluded because
/// they issue temporary credentials that need the originating host to
/// refresh, so a snapshot of them could not be handed to another process.
///
/// The first call to [`credentials`](Self::credentials),
/// [`region`](Self::region) or [`session`](Self::session) runs the
/// resolution; every later call, from any thread, sees the same session or
/// the same error.
#[derive(Debug)]
pub struct LiveCredentialResolver {
    chain: ChainProvider,
    shared_config: SharedConfig,
    session: OnceTask<Arc<Session>, CredentialError>,
}

impl LiveCredentialResolver {
    /// Resolver over the default local chain and shared config locations.
    pub fn new() -> Self {
        Self::with_chain(ChainProvider::local_default(), SharedConfig::new())
    }

    /// Resolver over a specific chain and region source.
    pub const fn with_chain(chain: ChainProvider, shared_config: SharedConfig) -> Self {
        Self {
            chain,
            shared_config,
            session: OnceTask::new(),
        }
    }

    /// The resolved credential value.
    pub fn credentials(&self) -> CredentialResult<CredentialValue> {
        Ok(self.session()?.credentials().clone())
    }

    /// The resolved region. Empty if none is configured.
    pub fn region(&self) -> CredentialResult<Region> {
        Ok(self.session()?.region().clone())
    }

    /// The session built from the resolved credentials and region.
    pub fn session(&self) -> CredentialResult<Arc<Session>> {
        self.session.get_or_init(|| self.resolve())
    }

    /// Where this resolver is in its lifecycle.
    pub fn state(&self) -> ResolutionState {
        self.session.state()
    }

    /// Query the chain once and build the session from the value it returns.
    ///
    /// That single retrieval doubles as the early "no credentials" check, so
    /// the session holds exactly the value it returned and the chain is never
    /// consulted again.
    #[instrument(skip(self), fields(providers = ?self.chain.provider_names()))]
    fn resolve(&self) -> CredentialResult<Arc<Session>> {
        let credentials = self.chain.retrieve()?;
        let region = self.shared_config.load_region();
        let session = Session::new(SessionOptions {
            credentials,
            region,
        })?;

        debug!(
            session_id = %session.id(),
            provider = session.credentials().provider_name(),
            access_key_id = %session.credentials().masked_access_key_id(),
            region = %session.region(),
            "resolved live credentials"
        );
        Ok(Arc::new(session))
    }
}

impl Default for LiveCredentialResolver {
    fn default() -> Self {
        Self::new()
    }
}
