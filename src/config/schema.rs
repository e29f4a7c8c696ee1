//! Configuration schema definitions.
//!
//! These structs map to the optional `extcheck.yml` settings file. The
//! required extension table is deliberately absent: it is compiled in.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::report::ReportFormat;

/// Root structure of `extcheck.yml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtcheckConfig {
    /// PHP binary to introspect (path or name on PATH)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub php_binary: Option<PathBuf>,

    /// Report format: human or json
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<ReportFormat>,

    /// Extra alias groups, each a list of equivalent extension names
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<Vec<String>>,

    /// Database driver check settings
    pub driver: DriverSettings,
}

/// Settings for the driver check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DriverSettings {
    /// Connection URI pinged by the advisory connectivity check
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}
