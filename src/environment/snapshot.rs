//! Immutable snapshot of a PHP runtime's capabilities.

use serde::{Deserialize, Serialize};

use super::version::parse_version_id;
use crate::error::{ExtcheckError, Result};

/// What the runtime reported about itself, taken once at start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvironmentSnapshot {
    version: String,
    version_id: u32,
    extensions: Vec<String>,
}

/// Wire shape of the probe output. `version_id` may be absent when the
/// probe could only report the version string.
#[derive(Debug, Deserialize)]
struct RawSnapshot {
    version: String,
    #[serde(default)]
    version_id: Option<u32>,
    #[serde(default)]
    extensions: Vec<String>,
}

impl EnvironmentSnapshot {
    /// Create a snapshot from already-known values.
    pub fn new(version: impl Into<String>, version_id: u32, extensions: Vec<String>) -> Self {
        Self {
            version: version.into(),
            version_id,
            extensions,
        }
    }

    /// Decode the JSON document printed by the introspection script.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawSnapshot =
            serde_json::from_str(json.trim()).map_err(|e| ExtcheckError::ProbeFailed {
                message: format!("unexpected introspection output: {}", e),
            })?;

        let version_id = match raw.version_id {
            Some(id) => id,
            None => parse_version_id(&raw.version).ok_or_else(|| ExtcheckError::ProbeFailed {
                message: format!("cannot determine version id from '{}'", raw.version),
            })?,
        };

        Ok(Self::new(raw.version, version_id, raw.extensions))
    }

    /// Human-readable version (`PHP_VERSION`).
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Numeric version (`PHP_VERSION_ID`).
    pub fn version_id(&self) -> u32 {
        self.version_id
    }

    /// Loaded extension names, as reported.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Number of loaded extensions.
    pub fn extension_count(&self) -> usize {
        self.extensions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_document() {
        let json = r#"{"version":"8.3.12","version_id":80312,"extensions":["Core","curl"]}"#;
        let snapshot = EnvironmentSnapshot::from_json(json).unwrap();
        assert_eq!(snapshot.version(), "8.3.12");
        assert_eq!(snapshot.version_id(), 80312);
        assert_eq!(snapshot.extensions(), ["Core".to_string(), "curl".to_string()]);
        assert_eq!(snapshot.extension_count(), 2);
    }

    #[test]
    fn derives_version_id_when_absent() {
        let json = r#"{"version":"8.2.7-dev","extensions":[]}"#;
        let snapshot = EnvironmentSnapshot::from_json(json).unwrap();
        assert_eq!(snapshot.version_id(), 80207);
    }

    #[test]
    fn tolerates_surrounding_whitespace_and_extra_fields() {
        let json = "\n{\"version\":\"8.4.1\",\"version_id\":80401,\"sapi\":\"cli\"}\n";
        let snapshot = EnvironmentSnapshot::from_json(json).unwrap();
        assert_eq!(snapshot.version_id(), 80401);
        assert!(snapshot.extensions().is_empty());
    }

    #[test]
    fn rejects_non_json() {
        let err = EnvironmentSnapshot::from_json("PHP Warning: something").unwrap_err();
        assert!(matches!(err, ExtcheckError::ProbeFailed { .. }));
    }

    #[test]
    fn rejects_unparseable_version() {
        let err = EnvironmentSnapshot::from_json(r#"{"version":"unknown"}"#).unwrap_err();
        assert!(err.to_string().contains("unknown"));
    }
}
