//! Implementation of the `awsenv resolve` command.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::cli::output::{display_region, output, CommandOutput};
use crate::infrastructure::config::AppConfig;
use crate::services::LiveCredentialResolver;

#[derive(Args, Debug)]
pub struct ResolveArgs {}

#[derive(Debug, Serialize)]
pub struct ResolveOutput {
    pub provider: String,
    pub access_key_id: String,
    pub has_session_token: bool,
    pub region: String,
    pub session_id: String,
}

impl CommandOutput for ResolveOutput {
    fn to_human(&self) -> String {
        [
            format!("Provider:      {}", self.provider),
            format!("Access key:    {}", self.access_key_id),
            format!("Session token: {}", if self.has_session_token { "yes" } else { "no" }),
            format!("Region:        {}", display_region(&self.region)),
        ]
        .join("\n")
    }
}

pub fn execute(_args: ResolveArgs, config: &AppConfig, json_mode: bool) -> Result<()> {
    let resolver =
        LiveCredentialResolver::with_chain(config.credential_chain(), config.shared_config());
    let session = resolver
        .session()
        .context("Failed to resolve credentials from the local environment")?;

    let creds = session.credentials();
    let output_data = ResolveOutput {
        provider: creds.provider_name().to_string(),
        access_key_id: creds.masked_access_key_id(),
        has_session_token: creds.session_token().is_some(),
        region: session.region().to_string(),
        session_id: session.id().to_string(),
    };
    output(&output_data, json_mode);
    Ok(())
}
