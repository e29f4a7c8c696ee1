//! Extensions command implementation.
//!
//! The `extcheck extensions` command (also the default when no subcommand is
//! given) reconciles the compiled-in required table against the runtime.

use tracing::{debug, info};

use crate::cli::args::ExtensionsArgs;
use crate::config::Settings;
use crate::environment::CapabilityProvider;
use crate::error::Result;
use crate::report::{
    ExtensionReport, HumanFormatter, JsonFormatter, ReportFormat, ReportFormatter,
};
use crate::requirements::{reconcile, required_extensions};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::emit_lines;

/// The extensions command implementation.
pub struct ExtensionsCommand<'a> {
    provider: &'a dyn CapabilityProvider,
    settings: &'a Settings,
    args: ExtensionsArgs,
}

impl<'a> ExtensionsCommand<'a> {
    /// Create a new extensions command.
    pub fn new(
        provider: &'a dyn CapabilityProvider,
        settings: &'a Settings,
        args: ExtensionsArgs,
    ) -> Self {
        Self {
            provider,
            settings,
            args,
        }
    }

    /// Render the report in the configured format.
    fn render(&self, report: &ExtensionReport<'_>) -> Result<String> {
        let mut output = Vec::new();
        match self.settings.format {
            ReportFormat::Json => JsonFormatter::new().format(report, &mut output)?,
            ReportFormat::Human => {
                let formatter = if self.args.all {
                    HumanFormatter::listing_all()
                } else {
                    HumanFormatter::new()
                };
                formatter.format(report, &mut output)?
            }
        }
        Ok(String::from_utf8_lossy(&output).into_owned())
    }
}

impl Command for ExtensionsCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let snapshot = self.provider.snapshot()?;
        let required = required_extensions();
        debug!(
            "Checking {} required entries against PHP {}",
            required.len(),
            snapshot.version()
        );

        let result = reconcile(&required, &snapshot, &self.settings.aliases);
        info!(
            "Reconciled: {} found, {} missing, {} skipped",
            result.found_count(),
            result.missing_count(),
            result.skipped().len()
        );

        let rendered = self.render(&ExtensionReport::new(&snapshot, &result))?;
        match self.settings.format {
            ReportFormat::Json => ui.data(&rendered),
            ReportFormat::Human => emit_lines(ui, &rendered),
        }

        Ok(CommandResult::from_exit_code(result.exit_code()))
    }
}
