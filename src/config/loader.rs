//! Configuration file discovery and loading.
//!
//! An explicitly requested file must exist. Otherwise `extcheck.yml` in the
//! working directory is used when present, and built-in defaults when not.

use crate::config::schema::ExtcheckConfig;
use crate::error::{ExtcheckError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the settings file discovered in the working directory.
pub const CONFIG_FILE_NAME: &str = "extcheck.yml";

/// Find `extcheck.yml` in `dir`.
pub fn discover_config(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Parse configuration from a YAML string.
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, path: &Path) -> Result<ExtcheckConfig> {
    if content.trim().is_empty() {
        return Ok(ExtcheckConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| ExtcheckError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and parse one configuration file.
pub fn load_config_file(path: &Path) -> Result<ExtcheckConfig> {
    let content = fs::read_to_string(path).map_err(|e| ExtcheckError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_config(&content, path)
}

/// Load the effective configuration.
///
/// # Errors
///
/// - [`ExtcheckError::ConfigNotFound`] if `explicit` names a file that does not exist
/// - [`ExtcheckError::ConfigParseError`] if the chosen file cannot be read or parsed
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<ExtcheckConfig> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(ExtcheckError::ConfigNotFound {
                    path: path.to_path_buf(),
                });
            }
            path.to_path_buf()
        }
        None => match discover_config(cwd) {
            Some(path) => path,
            None => {
                debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                return Ok(ExtcheckConfig::default());
            }
        },
    };

    debug!("Loading config from {}", path.display());
    load_config_file(&path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ReportFormat;
    use tempfile::TempDir;

    #[test]
    fn no_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config(None, temp.path()).unwrap();
        assert_eq!(config, ExtcheckConfig::default());
    }

    #[test]
    fn discovers_file_in_working_directory() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "format: json\n").unwrap();

        assert_eq!(
            discover_config(temp.path()),
            Some(temp.path().join(CONFIG_FILE_NAME))
        );
        let config = load_config(None, temp.path()).unwrap();
        assert_eq!(config.format, Some(ReportFormat::Json));
    }

    #[test]
    fn explicit_path_wins_over_discovery() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "format: json\n").unwrap();
        let other = temp.path().join("ci.yml");
        fs::write(&other, "format: human\n").unwrap();

        let config = load_config(Some(&other), temp.path()).unwrap();
        assert_eq!(config.format, Some(ReportFormat::Human));
    }

    #[test]
    fn explicit_missing_path_is_not_found() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.yml");
        let err = load_config(Some(&missing), temp.path()).unwrap_err();
        assert!(matches!(err, ExtcheckError::ConfigNotFound { .. }));
    }

    #[test]
    fn invalid_yaml_is_parse_error_with_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "aliases: {not: [a list").unwrap();

        let err = load_config(None, temp.path()).unwrap_err();
        assert!(matches!(err, ExtcheckError::ConfigParseError { .. }));
        assert!(err.to_string().contains(CONFIG_FILE_NAME));
    }

    #[test]
    fn empty_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "\n  \n").unwrap();
        let config = load_config(None, temp.path()).unwrap();
        assert_eq!(config, ExtcheckConfig::default());
    }
}
