use std::fmt;

use tracing::{debug, warn};

use super::env::EnvProvider;
use super::shared_file::SharedCredentialsProvider;
use crate::domain::errors::ProviderError;
use crate::domain::models::CredentialValue;
use crate::domain::ports::{ProvideCredentials, ProviderKind};

/// An ordered list of credential providers. The first provider that yields
/// a value wins.
pub struct ChainProvider {
    providers: Vec<Box<dyn ProvideCredentials>>,
}

impl ChainProvider {
    /// Chain of local-only providers: environment, then shared credentials file.
    ///
    /// Remote providers (instance metadata, container roles) are left out
    /// because their credentials are temporary and tied to the host, so they
    /// cannot be exported to another process.
    pub fn local_default() -> Self {
        Self::restricted(vec![
            Box::new(EnvProvider::new()),
            Box::new(SharedCredentialsProvider::new()),
        ])
    }

    /// Build a chain from `providers`, dropping any [`ProviderKind::Remote`] ones.
    pub fn restricted(providers: Vec<Box<dyn ProvideCredentials>>) -> Self {
        let providers = providers
            .into_iter()
            .filter(|p| {
                let keep = p.kind() == ProviderKind::Local;
                if !keep {
                    warn!(provider = p.name(), "excluding remote credential provider from chain");
                }
                keep
            })
            .collect();
        Self { providers }
    }

    /// Names of the providers in the order they are tried.
    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl fmt::Debug for ChainProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainProvider")
            .field("providers", &self.provider_names())
            .finish()
    }
}

impl ProvideCredentials for ChainProvider {
    fn name(&self) -> &'static str {
        "ChainProvider"
    }

    fn retrieve(&self) -> Result<CredentialValue, ProviderError> {
        let mut errors = Vec::with_capacity(self.providers.len());
        for provider in &self.providers {
            match provider.retrieve() {
                Ok(value) => {
                    debug!(provider = provider.name(), "credentials retrieved");
                    return Ok(value.with_provider_name(provider.name()));
                }
                Err(err) => errors.push(err),
            }
        }
        Err(ProviderError::NoValidProviders(errors))
    }
}
