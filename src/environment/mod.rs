//! PHP runtime introspection.
//!
//! The environment is queried once, at command start, and the result is
//! passed explicitly to the reconciliation logic.

pub mod driver;
pub mod probe;
pub mod snapshot;
pub mod version;

pub use driver::{ClassPresence, Connectivity, DriverReport};
pub use probe::{CapabilityProvider, PhpProbe, StaticProvider};
pub use snapshot::EnvironmentSnapshot;
pub use version::{parse_version_id, series, version_id};
