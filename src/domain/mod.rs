//! Domain layer for awsenv
//!
//! This module contains the credential, region, session and snapshot models
//! together with the ports the resolvers depend on.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{CredentialError, CredentialResult, ProviderError};
