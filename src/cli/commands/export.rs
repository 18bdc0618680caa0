//! Implementation of the `awsenv export` command.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

use crate::cli::output::{display_region, output, CommandOutput};
use crate::domain::ports::{Config, Keys};
use crate::infrastructure::config::{AppConfig, KeyValueConfig};
use crate::services::{register_with, CredentialMode, LiveCredentialResolver};

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// File to write the exported configuration to
    #[arg(long, short)]
    pub output: PathBuf,

    /// Existing configuration to layer the credentials on
    #[arg(long)]
    pub from: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct ExportOutput {
    pub output: PathBuf,
    pub mode: CredentialMode,
    pub provider: String,
    pub region: String,
    pub keys_written: usize,
}

impl CommandOutput for ExportOutput {
    fn to_human(&self) -> String {
        format!(
            "Exported {} credentials from {} (region {}) to {} ({} key(s))",
            self.mode,
            self.provider,
            display_region(&self.region),
            self.output.display(),
            self.keys_written
        )
    }
}

pub fn execute(args: ExportArgs, config: &AppConfig, json_mode: bool) -> Result<()> {
    let base = match &args.from {
        Some(path) => KeyValueConfig::from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => KeyValueConfig::new(),
    };

    let session = register_with(Arc::new(base), || {
        LiveCredentialResolver::with_chain(config.credential_chain(), config.shared_config())
    })?;

    let mut keys = Keys::new();
    session
        .marshal(&mut keys)
        .context("Failed to snapshot credentials")?;
    let keys_written = keys.len();

    KeyValueConfig::from_keys(keys)
        .write_to_file(&args.output)
        .context("Failed to write exported configuration")?;

    let creds = session.credentials()?;
    let output_data = ExportOutput {
        output: args.output,
        mode: session.mode(),
        provider: creds.provider_name().to_string(),
        region: session.region()?.to_string(),
        keys_written,
    };
    output(&output_data, json_mode);
    Ok(())
}
