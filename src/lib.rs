//! awsenv - AWS credentials derived from the user's environment
//!
//! Credentials are resolved once per process from a restricted, local-only
//! provider chain (environment variables, then the shared credentials file)
//! and can be exported as a snapshot for a process that has no access to the
//! original environment, such as a remote worker.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): credential, region, session and snapshot
//!   models plus the provider and configuration ports
//! - **Service Layer** (`services`): memoized live and snapshot resolvers,
//!   snapshot capture and mode selection
//! - **Infrastructure Layer** (`infrastructure`): credential sources,
//!   configuration and logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use awsenv::domain::ports::{Config, Keys};
//! use awsenv::infrastructure::config::KeyValueConfig;
//!
//! # fn main() -> Result<(), awsenv::CredentialError> {
//! // Resolve live credentials and export them.
//! let session = awsenv::register(Arc::new(KeyValueConfig::new()))?;
//! let mut keys = Keys::new();
//! session.marshal(&mut keys)?;
//!
//! // Elsewhere: the exported keys select the snapshot path.
//! let worker = awsenv::register(Arc::new(KeyValueConfig::from_keys(keys)))?;
//! let handle = worker.session()?;
//! println!("region: {}", handle.region());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{CredentialValue, Region, ResolutionState, Session, Snapshot};
pub use domain::ports::{Config, Keys, ProvideCredentials, ProviderKind};
pub use domain::{CredentialError, CredentialResult, ProviderError};
pub use infrastructure::config::{AppConfig, ConfigError, ConfigLoader, KeyValueConfig};
pub use services::{
    capture, register, register_with, AwsEnvSession, CredentialMode, LiveCredentialResolver,
    SnapshotCredentialResolver, AWSENV_KEY,
};
