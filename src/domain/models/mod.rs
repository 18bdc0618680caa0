pub mod credentials;
pub mod region;
pub mod resolution;
pub mod session;
pub mod snapshot;

pub use credentials::CredentialValue;
pub use region::Region;
pub use resolution::ResolutionState;
pub use session::{Session, SessionOptions};
pub use snapshot::Snapshot;
