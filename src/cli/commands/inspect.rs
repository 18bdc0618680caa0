//! Implementation of the `awsenv inspect` command.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

use crate::cli::output::{display_region, output, CommandOutput};
use crate::infrastructure::config::{AppConfig, KeyValueConfig};
use crate::services::{register_with, CredentialMode, CredentialResolver, LiveCredentialResolver};

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Exported configuration file
    pub path: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct InspectOutput {
    pub path: PathBuf,
    pub mode: CredentialMode,
    pub provider: Option<String>,
    pub access_key_id: Option<String>,
    pub region: Option<String>,
}

impl CommandOutput for InspectOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![format!("{}: {} credentials", self.path.display(), self.mode)];
        match (&self.provider, &self.access_key_id, &self.region) {
            (Some(provider), Some(key), Some(region)) => {
                lines.push(format!("  Provider:   {provider}"));
                lines.push(format!("  Access key: {key}"));
                lines.push(format!("  Region:     {}", display_region(region)));
            }
            _ => lines.push(
                "  No snapshot present; credentials would be resolved from the environment"
                    .to_string(),
            ),
        }
        lines.join("\n")
    }
}

pub fn execute(args: InspectArgs, config: &AppConfig, json_mode: bool) -> Result<()> {
    let base = KeyValueConfig::from_file(&args.path)
        .with_context(|| format!("Failed to load {}", args.path.display()))?;
    let session = register_with(Arc::new(base), || {
        LiveCredentialResolver::with_chain(config.credential_chain(), config.shared_config())
    })?;

    // Only a snapshot is reported; a live resolver is left unresolved.
    let (provider, access_key_id, region) = match session.resolver() {
        CredentialResolver::Snapshot(resolver) => {
            let creds = resolver.credentials()?;
            (
                Some(creds.provider_name().to_string()),
                Some(creds.masked_access_key_id()),
                Some(resolver.region()?.to_string()),
            )
        }
        CredentialResolver::Live(_) => (None, None, None),
    };

    let output_data = InspectOutput {
        path: args.path,
        mode: session.mode(),
        provider,
        access_key_id,
        region,
    };
    output(&output_data, json_mode);
    Ok(())
}
