//! Resolved credential values.

use aws_credential_types::Credentials;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Provider name carried by SDK credentials built from a [`CredentialValue`].
pub const SDK_PROVIDER_NAME: &str = "awsenv";

/// An immutable set of resolved AWS credentials.
///
/// Field names in the serialized form (`accesskeyid`, `secretaccesskey`, ...)
/// are the ones already written by existing exported configurations, so they
/// must not change.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialValue {
    #[serde(rename = "accesskeyid")]
    access_key_id: String,

    #[serde(rename = "secretaccesskey")]
    secret_access_key: String,

    #[serde(
        rename = "sessiontoken",
        default,
        deserialize_with = "empty_as_none",
        serialize_with = "none_as_empty"
    )]
    session_token: Option<String>,

    #[serde(rename = "providername", default)]
    provider_name: String,
}

impl CredentialValue {
    /// Creates a credential value tagged with the source that produced it.
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: Option<String>,
        provider_name: impl Into<String>,
    ) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token: session_token.filter(|t| !t.is_empty()),
            provider_name: provider_name.into(),
        }
    }

    /// Copies SDK credentials, attributing them to `provider_name`.
    ///
    /// The SDK's own provider name is a `&'static str` chosen by the SDK, so
    /// the name recorded for export is supplied by the caller instead.
    pub fn from_sdk(credentials: &Credentials, provider_name: impl Into<String>) -> Self {
        Self::new(
            credentials.access_key_id(),
            credentials.secret_access_key(),
            credentials.session_token().map(str::to_string),
            provider_name,
        )
    }

    /// SDK credentials for handing to an AWS client.
    pub fn to_sdk_credentials(&self) -> Credentials {
        Credentials::new(
            self.access_key_id.clone(),
            self.secret_access_key.clone(),
            self.session_token.clone(),
            None,
            SDK_PROVIDER_NAME,
        )
    }

    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    pub fn secret_access_key(&self) -> &str {
        &self.secret_access_key
    }

    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }

    /// Name of the credential source that produced this value.
    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    /// Returns a copy of this value attributed to `provider_name`.
    pub fn with_provider_name(mut self, provider_name: impl Into<String>) -> Self {
        self.provider_name = provider_name.into();
        self
    }

    /// Access key id with everything after the first four characters masked.
    pub fn masked_access_key_id(&self) -> String {
        let prefix: String = self.access_key_id.chars().take(4).collect();
        format!("{prefix}****")
    }
}

impl fmt::Debug for CredentialValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialValue")
            .field("access_key_id", &self.masked_access_key_id())
            .field("secret_access_key", &"** redacted **")
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "** redacted **"),
            )
            .field("provider_name", &self.provider_name)
            .finish()
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.is_empty()))
}

#[allow(clippy::ref_option)]
fn none_as_empty<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(value.as_deref().unwrap_or_default())
}
