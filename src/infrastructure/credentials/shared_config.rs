use std::path::PathBuf;

use aws_config::environment::EnvironmentVariableRegionProvider;
use aws_config::meta::region::RegionProviderChain;
use aws_config::profile::profile_file::{ProfileFileKind, ProfileFiles};
use aws_config::profile::ProfileFileRegionProvider;
use futures::executor::block_on;
use tracing::debug;

use crate::domain::models::Region;

/// Region lookup from the environment and the shared config file
/// (`AWS_CONFIG_FILE`, else `~/.aws/config`).
///
/// Only the region is read. Credentials that appear in the config file are
/// ignored.
#[derive(Debug, Clone, Default)]
pub struct SharedConfig {
    filename: Option<PathBuf>,
    profile: Option<String>,
}

impl SharedConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filename(mut self, path: impl Into<PathBuf>) -> Self {
        self.filename = Some(path.into());
        self
    }

    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    fn profile_files(&self) -> ProfileFiles {
        let builder = ProfileFiles::builder();
        match &self.filename {
            Some(path) => builder.with_file(ProfileFileKind::Config, path.clone()),
            None => builder.include_default_config_file(true),
        }
        .build()
    }

    /// Resolve the region: `AWS_REGION`, `AWS_DEFAULT_REGION`, then the
    /// selected profile's `region` key in the config file.
    ///
    /// No region anywhere, including an unreadable config file, yields an
    /// empty region.
    pub fn load_region(&self) -> Region {
        let mut from_profile = ProfileFileRegionProvider::builder().profile_files(self.profile_files());
        if let Some(profile) = &self.profile {
            from_profile = from_profile.profile_name(profile.clone());
        }
        let chain = RegionProviderChain::first_try(EnvironmentVariableRegionProvider::new())
            .or_else(from_profile.build());

        // Both providers read the environment and files synchronously.
        let region = block_on(chain.region())
            .map(|region| Region::new(region.to_string()))
            .unwrap_or_default();

        debug!(region = %region, "resolved region");
        region
    }
}
