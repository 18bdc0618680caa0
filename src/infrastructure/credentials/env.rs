use aws_config::environment::EnvironmentVariableCredentialsProvider;
use aws_credential_types::provider::ProvideCredentials as _;
use aws_smithy_types::error::display::DisplayErrorContext;
use futures::executor::block_on;

use crate::domain::errors::ProviderError;
use crate::domain::models::CredentialValue;
use crate::domain::ports::ProvideCredentials;

/// Name recorded on credentials read from the environment.
pub const ENV_PROVIDER_NAME: &str = "EnvProvider";

/// Reads credentials from the process environment through the SDK's
/// environment provider.
///
/// - `AWS_ACCESS_KEY_ID`
/// - `AWS_SECRET_ACCESS_KEY`
/// - `AWS_SESSION_TOKEN` (optional)
///
/// Blank values count as unset.
#[derive(Debug)]
pub struct EnvProvider {
    inner: EnvironmentVariableCredentialsProvider,
}

impl EnvProvider {
    pub fn new() -> Self {
        Self {
            inner: EnvironmentVariableCredentialsProvider::new(),
        }
    }
}

impl Default for EnvProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ProvideCredentials for EnvProvider {
    fn name(&self) -> &'static str {
        ENV_PROVIDER_NAME
    }

    fn retrieve(&self) -> Result<CredentialValue, ProviderError> {
        // The environment provider never suspends, so no runtime is needed.
        let credentials = block_on(self.inner.provide_credentials())
            .map_err(|e| ProviderError::Environment(DisplayErrorContext(&e).to_string()))?;

        Ok(CredentialValue::from_sdk(&credentials, ENV_PROVIDER_NAME))
    }
}
