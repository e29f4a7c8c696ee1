//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`extcheck extensions`, `extcheck driver`)
//! - One capability provider shared by every command
//! - Consistent global flag handling

pub mod dispatcher;
pub mod display;
pub mod driver;
pub mod extensions;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use driver::DriverCommand;
pub use extensions::ExtensionsCommand;
