//! Snapshot capture from a live resolver.

use crate::domain::errors::CredentialResult;
use crate::domain::models::Snapshot;

use super::live_resolver::LiveCredentialResolver;

/// Capture the resolver's credentials and region into an independent snapshot.
///
/// Forces resolution if it has not happened yet; a resolution failure is
/// returned unchanged.
pub fn capture(resolver: &LiveCredentialResolver) -> CredentialResult<Snapshot> {
    let credentials = resolver.credentials()?;
    let region = resolver.region()?;
    Ok(Snapshot::new(credentials, region))
}
