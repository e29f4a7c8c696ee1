//! Configuration loading and resolution.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Layering with command-line overrides in [`settings`]
//!
//! # Example
//!
//! ```
//! use extcheck::config::{load_config, Overrides, Settings};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("extcheck.yml"), "aliases:\n  - [spx, php-spx]\n").unwrap();
//!
//! let config = load_config(None, temp.path()).unwrap();
//! let settings = Settings::resolve(&config, &Overrides::default());
//! assert_eq!(settings.aliases.aliases_of("spx"), ["php-spx".to_string()]);
//! ```

pub mod loader;
pub mod schema;
pub mod settings;

pub use loader::{discover_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::{DriverSettings, ExtcheckConfig};
pub use settings::{Overrides, Settings};
