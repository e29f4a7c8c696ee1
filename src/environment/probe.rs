//! Runtime introspection providers.
//!
//! A [`CapabilityProvider`] answers two questions about a PHP runtime: which
//! extensions are loaded (an [`EnvironmentSnapshot`]) and what the database
//! driver looks like (a [`DriverReport`]). [`PhpProbe`] asks a real `php`
//! binary; [`StaticProvider`] returns canned answers for tests.
//!
//! # Example
//!
//! ```no_run
//! use extcheck::environment::{CapabilityProvider, PhpProbe};
//!
//! let probe = PhpProbe::new("php");
//! let snapshot = probe.snapshot().unwrap();
//! println!("PHP {} with {} extensions", snapshot.version(), snapshot.extension_count());
//! ```

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use super::driver::{driver_script, DriverReport};
use super::snapshot::EnvironmentSnapshot;
use crate::error::{ExtcheckError, Result};
use crate::requirements::DRIVER_CLASSES;

/// Script printing the version and loaded extensions as JSON.
pub const SNAPSHOT_SCRIPT: &str = "echo json_encode(['version' => PHP_VERSION, \
     'version_id' => PHP_VERSION_ID, 'extensions' => get_loaded_extensions()]);";

/// Source of runtime introspection data.
pub trait CapabilityProvider {
    /// Take a snapshot of the runtime's version and loaded extensions.
    fn snapshot(&self) -> Result<EnvironmentSnapshot>;

    /// Probe the database driver, pinging the server at `uri`.
    fn driver_report(&self, uri: &str) -> Result<DriverReport>;
}

/// Introspects a PHP runtime by running its CLI binary.
#[derive(Debug, Clone)]
pub struct PhpProbe {
    binary: PathBuf,
}

impl PhpProbe {
    /// Create a probe for the given `php` binary (a path or a name on PATH).
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// The binary this probe runs.
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Run `script` with `php -r` and return its stdout.
    ///
    /// Diagnostics are routed to stderr so they cannot corrupt the JSON
    /// printed on stdout.
    fn run_script(&self, script: &str) -> Result<String> {
        debug!("Running {} -r <script>", self.binary.display());

        let output = Command::new(&self.binary)
            .args(["-d", "display_errors=stderr", "-r", script])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| ExtcheckError::ProbeUnavailable {
                binary: self.binary.clone(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = stderr.trim();
            return Err(ExtcheckError::ProbeFailed {
                message: if detail.is_empty() {
                    format!("{} exited with {}", self.binary.display(), output.status)
                } else {
                    format!(
                        "{} exited with {}: {}",
                        self.binary.display(),
                        output.status,
                        detail
                    )
                },
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for PhpProbe {
    fn default() -> Self {
        Self::new("php")
    }
}

impl CapabilityProvider for PhpProbe {
    fn snapshot(&self) -> Result<EnvironmentSnapshot> {
        let stdout = self.run_script(SNAPSHOT_SCRIPT)?;
        let snapshot = EnvironmentSnapshot::from_json(&stdout)?;
        debug!(
            "PHP {} ({}) reports {} extensions",
            snapshot.version(),
            snapshot.version_id(),
            snapshot.extension_count()
        );
        Ok(snapshot)
    }

    fn driver_report(&self, uri: &str) -> Result<DriverReport> {
        let stdout = self.run_script(&driver_script(uri, DRIVER_CLASSES))?;
        DriverReport::from_json(&stdout)
    }
}

/// Provider returning fixed data.
#[derive(Debug, Clone)]
pub struct StaticProvider {
    snapshot: EnvironmentSnapshot,
    driver: Option<DriverReport>,
}

impl StaticProvider {
    /// Provider with a fixed snapshot and no driver data.
    pub fn new(snapshot: EnvironmentSnapshot) -> Self {
        Self {
            snapshot,
            driver: None,
        }
    }

    /// Attach a fixed driver report.
    pub fn with_driver(mut self, report: DriverReport) -> Self {
        self.driver = Some(report);
        self
    }
}

impl CapabilityProvider for StaticProvider {
    fn snapshot(&self) -> Result<EnvironmentSnapshot> {
        Ok(self.snapshot.clone())
    }

    fn driver_report(&self, _uri: &str) -> Result<DriverReport> {
        self.driver.clone().ok_or_else(|| ExtcheckError::ProbeFailed {
            message: "no driver report available".to_string(),
        })
    }
}
