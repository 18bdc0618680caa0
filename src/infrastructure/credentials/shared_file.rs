use std::borrow::Cow;
use std::path::PathBuf;

use aws_config::profile::profile_file::{ProfileFileKind, ProfileFiles};
use aws_config::profile::{self, Profile};
use aws_smithy_types::error::display::DisplayErrorContext;
use aws_types::os_shim_internal::{Env, Fs};
use futures::executor::block_on;
use tracing::debug;

use crate::domain::errors::ProviderError;
use crate::domain::models::CredentialValue;
use crate::domain::ports::ProvideCredentials;

/// Name recorded on credentials read from the shared credentials file.
pub const SHARED_CREDENTIALS_PROVIDER_NAME: &str = "SharedCredentialsProvider";

/// Profile keys that hand credential resolution to STS, SSO or an external
/// process. A profile carrying any of them is not a static local source.
const DELEGATING_KEYS: [&str; 8] = [
    "role_arn",
    "credential_source",
    "credential_process",
    "web_identity_token_file",
    "sso_session",
    "sso_start_url",
    "sso_account_id",
    "sso_role_name",
];

/// Reads static credentials from the shared credentials file
/// (`AWS_SHARED_CREDENTIALS_FILE`, else `~/.aws/credentials`).
///
/// Parsing and profile selection (`AWS_PROFILE`, else `default`) are done
/// by the SDK's profile loader. Only `aws_access_key_id`,
/// `aws_secret_access_key` and `aws_session_token` are honored.
#[derive(Debug, Clone, Default)]
pub struct SharedCredentialsProvider {
    filename: Option<PathBuf>,
    profile: Option<String>,
}

impl SharedCredentialsProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read from `path` instead of the default location.
    pub fn with_filename(mut self, path: impl Into<PathBuf>) -> Self {
        self.filename = Some(path.into());
        self
    }

    /// Use `profile` instead of `AWS_PROFILE`/`default`.
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    fn profile_files(&self) -> ProfileFiles {
        let builder = ProfileFiles::builder();
        match &self.filename {
            Some(path) => builder.with_file(ProfileFileKind::Credentials, path.clone()),
            None => builder.include_default_credentials_file(true),
        }
        .build()
    }

    /// Human-readable location used in error messages.
    fn location(&self) -> String {
        self.filename.as_ref().map_or_else(
            || "the shared credentials file".to_string(),
            |path| path.display().to_string(),
        )
    }

    fn static_credentials(&self, name: &str, profile: &Profile) -> Result<CredentialValue, ProviderError> {
        if let Some(key) = DELEGATING_KEYS.into_iter().find(|key| profile.get(key).is_some()) {
            return Err(ProviderError::RemoteProfile {
                profile: name.to_string(),
                key,
            });
        }

        let lookup = |key: &'static str| {
            profile
                .get(key)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .ok_or_else(|| ProviderError::MissingKey {
                    profile: name.to_string(),
                    key,
                })
        };
        let access_key_id = lookup("aws_access_key_id")?;
        let secret_access_key = lookup("aws_secret_access_key")?;
        let session_token = profile.get("aws_session_token").map(str::to_string);

        Ok(CredentialValue::new(
            access_key_id,
            secret_access_key,
            session_token,
            SHARED_CREDENTIALS_PROVIDER_NAME,
        ))
    }
}

impl ProvideCredentials for SharedCredentialsProvider {
    fn name(&self) -> &'static str {
        SHARED_CREDENTIALS_PROVIDER_NAME
    }

    fn retrieve(&self) -> Result<CredentialValue, ProviderError> {
        let selected = self.profile.clone().map(Cow::Owned);
        // Profile files are read with blocking IO, so the loader completes
        // on the first poll.
        let profiles = block_on(profile::load(
            &Fs::real(),
            &Env::real(),
            &self.profile_files(),
            selected,
        ))
        .map_err(|e| ProviderError::SharedCredsLoad {
            path: self.location(),
            reason: DisplayErrorContext(&e).to_string(),
        })?;

        let name = profiles.selected_profile();
        let profile = profiles
            .get_profile(name)
            .ok_or_else(|| ProviderError::ProfileNotFound {
                profile: name.to_string(),
                path: self.location(),
            })?;
        let value = self.static_credentials(name, profile)?;

        debug!(path = %self.location(), profile = %name, "loaded shared credentials");
        Ok(value)
    }
}
