//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct. Running with no subcommand
//! performs the extension check.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::report::ReportFormat;

/// extcheck - Verify a PHP runtime provides every required extension.
#[derive(Debug, Parser)]
#[command(name = "extcheck")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// PHP binary to introspect (defaults to `php` on PATH)
    #[arg(long, global = true, env = "EXTCHECK_PHP", value_name = "PATH")]
    pub php: Option<PathBuf>,

    /// Path to settings file (overrides ./extcheck.yml)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, global = true, value_enum)]
    pub format: Option<ReportFormat>,

    /// Only show missing capabilities, warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check loaded extensions against the required table (default)
    Extensions(ExtensionsArgs),

    /// Check the MongoDB driver classes and construction
    Driver(DriverArgs),
}

/// Arguments for the `extensions` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ExtensionsArgs {
    /// List every loaded extension on success instead of the first 20
    #[arg(long)]
    pub all: bool,
}

/// Arguments for the `driver` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DriverArgs {
    /// Server pinged by the advisory connectivity check
    #[arg(long, env = "EXTCHECK_DRIVER_URI", value_name = "URI")]
    pub uri: Option<String>,
}
