//! Service layer: memoized credential resolution, snapshot capture and
//! mode selection.

pub mod capture;
pub mod live_resolver;
pub mod once_task;
pub mod registration;
pub mod snapshot_resolver;

pub use capture::capture;
pub use live_resolver::LiveCredentialResolver;
pub use once_task::OnceTask;
pub use registration::{
    register, register_with, AwsEnvSession, CredentialMode, CredentialResolver, AWSENV_KEY,
};
pub use snapshot_resolver::SnapshotCredentialResolver;
