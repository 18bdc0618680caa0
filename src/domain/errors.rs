//! Domain errors for credential resolution and session snapshots.

use thiserror::Error;

/// Errors surfaced by the credential resolvers.
///
/// The type is `Clone` because a memoized resolution replays the same error
/// to every caller for the lifetime of the resolver.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CredentialError {
    /// No source in the restricted credential chain produced a value.
    #[error("failed to retrieve AWS credentials: {0}")]
    CredentialResolution(String),

    /// The supplied credentials or region were rejected while building a session.
    #[error("failed to construct session: {0}")]
    SessionConstruction(String),

    /// A snapshot could not be converted to or from its serialized form.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl CredentialError {
    /// Returns true for `CredentialResolution` errors.
    pub const fn is_resolution(&self) -> bool {
        matches!(self, Self::CredentialResolution(_))
    }

    /// Returns true for `SessionConstruction` errors.
    pub const fn is_session_construction(&self) -> bool {
        matches!(self, Self::SessionConstruction(_))
    }
}

impl From<serde_yaml::Error> for CredentialError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result alias for resolver operations.
pub type CredentialResult<T> = Result<T, CredentialError>;

/// Failure reported by a single credential source.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error("EnvProvider: {0}")]
    Environment(String),

    #[error("SharedCredsLoad: failed to load shared credentials file {path}: {reason}")]
    SharedCredsLoad { path: String, reason: String },

    #[error("SharedCredsLoad: profile {profile} not found in {path}")]
    ProfileNotFound { profile: String, path: String },

    #[error("SharedCredsAccessKey: shared credentials profile {profile} is missing {key}")]
    MissingKey { profile: String, key: &'static str },

    #[error("SharedCredsLoad: profile {profile} sets {key}, which needs a remote credential source")]
    RemoteProfile { profile: String, key: &'static str },

    #[error("{provider}: {message}")]
    Other { provider: String, message: String },

    #[error("NoCredentialProviders: no valid providers in chain{}", format_chain_errors(.0))]
    NoValidProviders(Vec<ProviderError>),
}

/// Render the per-provider failures of a chain as `. caused by: a; b`.
fn format_chain_errors(errors: &[ProviderError]) -> String {
    if errors.is_empty() {
        return String::new();
    }
    let causes = errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    format!(". caused by: {causes}")
}

impl From<ProviderError> for CredentialError {
    fn from(err: ProviderError) -> Self {
        Self::CredentialResolution(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_error_lists_every_cause() {
        let err = ProviderError::NoValidProviders(vec![
            ProviderError::Environment("access key not set".to_string()),
            ProviderError::ProfileNotFound {
                profile: "default".to_string(),
                path: "/tmp/creds".to_string(),
            },
        ]);
        let message = err.to_string();
        assert!(message.starts_with("NoCredentialProviders: no valid providers in chain"));
        assert!(message.contains("EnvProvider: access key not set"));
        assert!(message.contains("profile default not found in /tmp/creds"));
    }

    #[test]
    fn test_empty_chain_error() {
        let err = ProviderError::NoValidProviders(vec![]);
        assert_eq!(
            err.to_string(),
            "NoCredentialProviders: no valid providers in chain"
        );
    }

    #[test]
    fn test_provider_error_becomes_resolution_error() {
        let err: CredentialError = ProviderError::Environment("secret not set".to_string()).into();
        assert!(err.is_resolution());
        assert!(err.to_string().starts_with("failed to retrieve AWS credentials"));
    }

    #[test]
    fn test_yaml_error_becomes_serialization_error() {
        let yaml_err = serde_yaml::from_str::<u32>("not a number").unwrap_err();
        let err: CredentialError = yaml_err.into();
        assert!(matches!(err, CredentialError::Serialization(_)));
    }
}
