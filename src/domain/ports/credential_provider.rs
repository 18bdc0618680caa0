//! Credential provider port - interface for credential sources.

use crate::domain::errors::ProviderError;
use crate::domain::models::CredentialValue;

/// Where a provider gets its credentials from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    /// Reads only local process state (environment, files on disk).
    Local,
    /// Talks to a remote endpoint such as an instance metadata service, or
    /// hands out temporary role credentials. Output of these providers must
    /// not be exported to another process.
    Remote,
}

/// A single source of credentials.
pub trait ProvideCredentials: Send + Sync {
    /// Provider name recorded on the credentials it produces.
    fn name(&self) -> &'static str;

    /// Kind of source. Defaults to [`ProviderKind::Local`].
    fn kind(&self) -> ProviderKind {
        ProviderKind::Local
    }

    /// Retrieve credentials from this source.
    fn retrieve(&self) -> Result<CredentialValue, ProviderError>;
}
