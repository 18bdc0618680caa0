//! Configuration management infrastructure
//!
//! - `KeyValueConfig`: the YAML-backed key/value substrate that credential
//!   sessions are layered on and exported into
//! - `ConfigLoader`: hierarchical application settings using figment
//!   (YAML file loading, environment variable overrides, validation)

pub mod keys;
pub mod loader;

pub use keys::KeyValueConfig;
pub use loader::{AppConfig, ConfigError, ConfigLoader};
