//! Infrastructure layer module
//!
//! This module contains the adapters behind the domain ports:
//! - Credential sources (environment, shared credentials file) and the
//!   restricted provider chain
//! - Configuration management
//! - Logging infrastructure

pub mod config;
pub mod credentials;
pub mod logging;
