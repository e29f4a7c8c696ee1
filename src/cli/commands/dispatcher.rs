//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands, ExtensionsArgs};
use crate::config::Settings;
use crate::environment::{CapabilityProvider, PhpProbe};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying the report
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Map a process exit code onto a result.
    pub fn from_exit_code(exit_code: i32) -> Self {
        if exit_code == 0 {
            Self::success()
        } else {
            Self::failure(exit_code)
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    settings: Settings,
}

impl CommandDispatcher {
    /// Create a new dispatcher using resolved settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Get the resolved settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Dispatch against the configured PHP binary.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let probe = PhpProbe::new(self.settings.php_binary.clone());
        self.dispatch_with(cli, &probe, ui)
    }

    /// Dispatch against an explicit capability provider.
    pub fn dispatch_with(
        &self,
        cli: &Cli,
        provider: &dyn CapabilityProvider,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Extensions(args)) => {
                let cmd =
                    super::extensions::ExtensionsCommand::new(provider, &self.settings, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Driver(args)) => {
                let cmd = super::driver::DriverCommand::new(provider, &self.settings, args.clone());
                cmd.execute(ui)
            }
            None => {
                // Default to the extension check
                let cmd = super::extensions::ExtensionsCommand::new(
                    provider,
                    &self.settings,
                    ExtensionsArgs::default(),
                );
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::{EnvironmentSnapshot, StaticProvider};
    use crate::requirements::required_extensions;
    use crate::ui::MockUI;
    use clap::Parser;

    fn full_snapshot() -> EnvironmentSnapshot {
        let names = required_extensions()
            .iter()
            .map(|r| r.name().to_string())
            .collect();
        EnvironmentSnapshot::new("8.3.12", 80312, names)
    }

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn command_result_from_exit_code() {
        assert!(CommandResult::from_exit_code(0).success);
        assert_eq!(CommandResult::from_exit_code(1).exit_code, 1);
    }

    #[test]
    fn dispatcher_keeps_settings() {
        let dispatcher = CommandDispatcher::new(Settings::default());
        assert_eq!(dispatcher.settings().php_binary, std::path::PathBuf::from("php"));
    }

    #[test]
    fn no_subcommand_runs_extension_check() {
        let dispatcher = CommandDispatcher::new(Settings::default());
        let provider = StaticProvider::new(full_snapshot());
        let cli = Cli::parse_from(["extcheck"]);
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch_with(&cli, &provider, &mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("Testing PHP Extensions"));
    }

    #[test]
    fn missing_extension_fails_with_one() {
        let dispatcher = CommandDispatcher::new(Settings::default());
        let provider = StaticProvider::new(EnvironmentSnapshot::new(
            "8.3.12",
            80312,
            vec!["curl".to_string()],
        ));
        let cli = Cli::parse_from(["extcheck", "extensions"]);
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch_with(&cli, &provider, &mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_failure("imap (MISSING)"));
    }
}
