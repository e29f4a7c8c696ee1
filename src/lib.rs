//! extcheck - PHP runtime capability checker.
//!
//! extcheck asks a PHP runtime which extensions it has loaded and reconciles
//! that against a fixed table of required extensions, reporting each one as
//! found or missing and exiting non-zero when anything is absent.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Settings file loading and layering
//! - [`environment`] - PHP runtime introspection
//! - [`error`] - Error types and result aliases
//! - [`report`] - Human and JSON report formatters
//! - [`requirements`] - Required tables, aliases and reconciliation
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use extcheck::environment::EnvironmentSnapshot;
//! use extcheck::requirements::{reconcile, required_extensions, AliasTable};
//!
//! let snapshot = EnvironmentSnapshot::new(
//!     "8.4.1",
//!     80401,
//!     vec!["curl".to_string(), "Zend OPcache".to_string()],
//! );
//! let result = reconcile(&required_extensions(), &snapshot, &AliasTable::builtin());
//!
//! assert!(result.found().contains(&"opcache"));
//! assert!(result.skipped().contains(&"imap".to_string()));
//! assert_eq!(result.exit_code(), 1);
//! ```

pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod report;
pub mod requirements;
pub mod ui;

pub use error::{ExtcheckError, Result};
