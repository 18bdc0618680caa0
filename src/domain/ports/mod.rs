//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the interfaces that infrastructure adapters implement:
//! - ProvideCredentials: a single credential source
//! - Config: the key/value configuration substrate
//!
//! These traits keep the resolvers independent of where credentials and
//! configuration actually come from.

pub mod config;
pub mod credential_provider;

pub use config::{Config, Keys};
pub use credential_provider::{ProvideCredentials, ProviderKind};
