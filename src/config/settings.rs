//! Effective settings after layering.
//!
//! Precedence, lowest to highest: built-in defaults, the settings file,
//! command-line flags and their environment variables.

use std::path::PathBuf;

use crate::config::schema::ExtcheckConfig;
use crate::report::ReportFormat;
use crate::requirements::{AliasTable, DEFAULT_DRIVER_URI};

/// Values supplied on the command line (or through their env vars).
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub php_binary: Option<PathBuf>,
    pub format: Option<ReportFormat>,
    pub driver_uri: Option<String>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    /// PHP binary to introspect.
    pub php_binary: PathBuf,
    /// Report format.
    pub format: ReportFormat,
    /// Built-in aliases plus any configured groups.
    pub aliases: AliasTable,
    /// URI for the advisory driver ping.
    pub driver_uri: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self::resolve(&ExtcheckConfig::default(), &Overrides::default())
    }
}

impl Settings {
    /// Layer overrides on top of the file config on top of defaults.
    pub fn resolve(config: &ExtcheckConfig, overrides: &Overrides) -> Self {
        let mut aliases = AliasTable::builtin();
        for group in &config.aliases {
            aliases.add_group(group);
        }

        Self {
            php_binary: overrides
                .php_binary
                .clone()
                .or_else(|| config.php_binary.clone())
                .unwrap_or_else(|| PathBuf::from("php")),
            format: overrides.format.or(config.format).unwrap_or_default(),
            aliases,
            driver_uri: overrides
                .driver_uri
                .clone()
                .or_else(|| config.driver.uri.clone())
                .unwrap_or_else(|| DEFAULT_DRIVER_URI.to_string()),
        }
    }
}
