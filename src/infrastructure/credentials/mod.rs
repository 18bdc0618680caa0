//! Credentials management infrastructure
//!
//! Local credential sources and the restricted provider chain, built on the
//! AWS SDK's environment and profile-file loaders:
//! - Environment variables
//! - Shared credentials file (`~/.aws/credentials`)
//! - Region lookup from the shared config file (`~/.aws/config`)

pub mod chain;
pub mod env;
pub mod shared_config;
pub mod shared_file;

pub use chain::ChainProvider;
pub use env::EnvProvider;
pub use shared_config::SharedConfig;
pub use shared_file::SharedCredentialsProvider;
