//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use awsenv::{CredentialValue, ProvideCredentials, ProviderError};
use tempfile::NamedTempFile;

const AWS_ENV_VARS: [&str; 9] = [
    "AWS_ACCESS_KEY_ID",
    "AWS_SECRET_ACCESS_KEY",
    "SECRET_ACCESS_KEY",
    "AWS_SESSION_TOKEN",
    "AWS_PROFILE",
    "AWS_REGION",
    "AWS_DEFAULT_REGION",
    "AWS_SHARED_CREDENTIALS_FILE",
    "AWS_CONFIG_FILE",
];

/// Variables for `temp_env::with_vars`: `overrides` are set, other AWS
/// variables are unset and the shared files point nowhere.
pub fn aws_env(overrides: &[(&str, &str)]) -> Vec<(&'static str, Option<String>)> {
    AWS_ENV_VARS
        .iter()
        .map(|name| {
            let value = overrides
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| (*value).to_string())
                .or_else(|| match *name {
                    "AWS_SHARED_CREDENTIALS_FILE" => {
                        Some("/nonexistent/awsenv-it/credentials".to_string())
                    }
                    "AWS_CONFIG_FILE" => Some("/nonexistent/awsenv-it/config".to_string()),
                    _ => None,
                });
            (*name, value)
        })
        .collect()
}

/// Write `contents` to a fresh temporary file.
pub fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file.flush().unwrap();
    file
}

/// Provider wrapper that counts retrievals.
pub struct Counting<P> {
    pub inner: P,
    pub calls: Arc<AtomicUsize>,
}

impl<P> Counting<P> {
    pub fn new(inner: P) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                inner,
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }
}

impl<P: ProvideCredentials> ProvideCredentials for Counting<P> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn kind(&self) -> awsenv::ProviderKind {
        self.inner.kind()
    }

    fn retrieve(&self) -> Result<CredentialValue, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.retrieve()
    }
}

pub fn count(calls: &AtomicUsize) -> usize {
    calls.load(Ordering::SeqCst)
}
