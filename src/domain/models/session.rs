//! Session handles built from resolved credentials and a region.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::credentials::CredentialValue;
use super::region::Region;
use crate::domain::errors::{CredentialError, CredentialResult};

/// Inputs required to build a [`Session`].
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub credentials: CredentialValue,
    pub region: Region,
}

/// A ready-to-use handle encapsulating credentials and region.
///
/// Sessions are immutable once built and are shared as `Arc<Session>`.
#[derive(Debug)]
pub struct Session {
    id: Uuid,
    created_at: DateTime<Utc>,
    credentials: CredentialValue,
    region: Region,
}

impl Session {
    /// Builds a session, rejecting empty keys and malformed regions.
    pub fn new(options: SessionOptions) -> CredentialResult<Self> {
        let SessionOptions {
            credentials,
            region,
        } = options;

        if credentials.access_key_id().is_empty() {
            return Err(CredentialError::SessionConstruction(
                "access key id is empty".to_string(),
            ));
        }
        if credentials.secret_access_key().is_empty() {
            return Err(CredentialError::SessionConstruction(
                "secret access key is empty".to_string(),
            ));
        }
        if !region.is_well_formed() {
            return Err(CredentialError::SessionConstruction(format!(
                "invalid region {region:?}"
            )));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            credentials,
            region,
        })
    }

    pub const fn id(&self) -> Uuid {
        self.id
    }

    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub const fn credentials(&self) -> &CredentialValue {
        &self.credentials
    }

    pub const fn region(&self) -> &Region {
        &self.region
    }
}
