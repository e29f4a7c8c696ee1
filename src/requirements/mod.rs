//! Required capabilities and their reconciliation.
//!
//! This module decides, for a fixed table of required extensions, which
//! are present in a PHP runtime and which are missing.
//!
//! # Modules
//!
//! - [`capability`] - Required entries, version gating and name canonicalization
//! - [`alias`] - Data-driven alias table for divergent runtime names
//! - [`registry`] - The compiled-in required extension and driver tables
//! - [`checker`] - Pure reconciliation against an environment snapshot
//! - [`status`] - Result types for reconciliation
//!
//! # Example
//!
//! ```
//! use extcheck::environment::EnvironmentSnapshot;
//! use extcheck::requirements::{reconcile, AliasTable, RequiredCapability};
//!
//! let snapshot = EnvironmentSnapshot::new("8.3.4", 80304, vec!["Zend OPcache".to_string()]);
//! let required = vec![RequiredCapability::always("opcache")];
//!
//! let result = reconcile(&required, &snapshot, &AliasTable::builtin());
//! assert_eq!(result.found(), vec!["opcache"]);
//! assert_eq!(result.exit_code(), 0);
//! ```

pub mod alias;
pub mod capability;
pub mod checker;
pub mod registry;
pub mod status;

pub use alias::{AliasTable, BUILTIN_ALIAS_GROUPS};
pub use capability::{canonical_name, RequiredCapability, VersionRange};
pub use checker::{reconcile, CapabilityChecker};
pub use registry::{
    required_extensions, DEFAULT_DRIVER_URI, DRIVER_CLASSES, DRIVER_EXTENSION, REQUIRED_EXTENSIONS,
};
pub use status::{CapabilityStatus, CheckOutcome, ReconciliationResult};
