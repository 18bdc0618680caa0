//! CLI command implementations.

pub mod export;
pub mod inspect;
pub mod resolve;
