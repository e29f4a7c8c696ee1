//! Driver command implementation.
//!
//! The `extcheck driver` command verifies the MongoDB driver in three steps:
//! the extension is loaded, its classes exist, and basic objects can be
//! constructed. A final ping reports connectivity but never fails the check.

use serde::Serialize;
use tracing::{debug, info};

use crate::cli::args::DriverArgs;
use crate::config::Settings;
use crate::environment::{parse_version_id, CapabilityProvider, Connectivity, DriverReport};
use crate::error::Result;
use crate::report::human::RULE;
use crate::report::ReportFormat;
use crate::requirements::{CapabilityChecker, DRIVER_CLASSES, DRIVER_EXTENSION};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::{show_section, show_test_heading};

/// Exception class the driver raises when no server answers in time.
const CONNECTION_TIMEOUT_EXCEPTION: &str = "ConnectionTimeoutException";

/// JSON form of the driver check.
#[derive(Serialize)]
struct DriverJson<'r> {
    success: bool,
    uri: &'r str,
    extension_loaded: bool,
    missing_class: Option<&'static str>,
    #[serde(flatten)]
    report: &'r DriverReport,
}

/// Whether the report lists `class` as present.
fn has_class(report: &DriverReport, class: &str) -> bool {
    report.classes.iter().any(|c| c.name == class && c.exists)
}

/// The first required driver class the report does not provide.
pub fn missing_driver_class(report: &DriverReport) -> Option<&'static str> {
    DRIVER_CLASSES
        .iter()
        .copied()
        .find(|class| !has_class(report, class))
}

/// The driver command implementation.
pub struct DriverCommand<'a> {
    provider: &'a dyn CapabilityProvider,
    settings: &'a Settings,
    args: DriverArgs,
}

impl<'a> DriverCommand<'a> {
    /// Create a new driver command.
    pub fn new(provider: &'a dyn CapabilityProvider, settings: &'a Settings, args: DriverArgs) -> Self {
        Self {
            provider,
            settings,
            args,
        }
    }

    /// URI the advisory ping targets.
    pub fn uri(&self) -> &str {
        self.args
            .uri
            .as_deref()
            .unwrap_or(self.settings.driver_uri.as_str())
    }

    /// Whether the driver extension is loaded, alias-aware.
    fn extension_loaded(&self, report: &DriverReport) -> bool {
        let version_id = parse_version_id(&report.php_version).unwrap_or_default();
        CapabilityChecker::from_parts(report.extensions.iter(), version_id, &self.settings.aliases)
            .is_available(DRIVER_EXTENSION)
    }

    /// Whether the three deciding checks pass. The ping never counts.
    fn is_functional(&self, report: &DriverReport) -> bool {
        self.extension_loaded(report)
            && missing_driver_class(report).is_none()
            && report.construct_error.is_none()
            && report.manager
    }

    fn render_json(&self, report: &DriverReport) -> Result<String> {
        let doc = DriverJson {
            success: self.is_functional(report),
            uri: self.uri(),
            extension_loaded: self.extension_loaded(report),
            missing_class: missing_driver_class(report),
            report,
        };
        let mut rendered = serde_json::to_string_pretty(&doc).map_err(anyhow::Error::from)?;
        rendered.push('\n');
        Ok(rendered)
    }

    fn check_loaded(&self, report: &DriverReport, ui: &mut dyn UserInterface) -> bool {
        show_test_heading(ui, "Test 1: Extension loaded");

        if !self.extension_loaded(report) {
            ui.failure("FAILED: MongoDB extension not loaded");
            ui.message("");
            ui.message("Available extensions:");
            for name in &report.extensions {
                ui.detail(&format!("  - {}", name));
            }
            return false;
        }

        ui.success("PASSED: MongoDB extension loaded");
        ui.message("");
        true
    }

    fn check_classes(&self, report: &DriverReport, ui: &mut dyn UserInterface) -> bool {
        show_test_heading(ui, "Test 2: MongoDB classes available");

        for class in DRIVER_CLASSES {
            if !has_class(report, class) {
                ui.failure(&format!("FAILED: Class {} not found", class));
                return false;
            }
            ui.success(class);
        }

        ui.message("");
        true
    }

    fn check_instantiation(&self, report: &DriverReport, ui: &mut dyn UserInterface) -> bool {
        show_test_heading(ui, "Test 3: Basic instantiation");

        if let Some(message) = &report.construct_error {
            ui.failure(&format!("FAILED: {}", message));
            ui.message("");
            return false;
        }
        if !report.manager {
            ui.failure("FAILED: MongoDB\\Driver\\Manager could not be instantiated");
            ui.message("");
            return false;
        }

        ui.success("MongoDB\\Driver\\Manager instantiated");
        match &report.object_id {
            Some(id) => ui.success(&format!("MongoDB\\BSON\\ObjectId created: {}", id)),
            None => ui.success("MongoDB\\BSON\\ObjectId created"),
        }

        self.show_connectivity(report, ui);
        true
    }

    fn show_connectivity(&self, report: &DriverReport, ui: &mut dyn UserInterface) {
        match report.connectivity() {
            Connectivity::Connected => {
                info!("Driver ping to {} succeeded", self.uri());
                ui.success("Successfully connected to MongoDB server");
            }
            Connectivity::Unreachable(class) if class.ends_with(CONNECTION_TIMEOUT_EXCEPTION) => {
                info!("Driver ping to {} timed out", self.uri());
                ui.warning(
                    "Cannot connect to MongoDB server (this is expected if no server is running)",
                );
                ui.message("  Connection would work if MongoDB server was available");
            }
            Connectivity::Unreachable(class) => {
                info!("Driver ping to {} raised {}", self.uri(), class);
                ui.warning(&format!("MongoDB connection test: {}", class));
                ui.message("  (This is expected if no MongoDB server is running)");
            }
            Connectivity::NotAttempted => {
                debug!("Driver ping was not attempted");
            }
        }
    }

    fn show_success(&self, report: &DriverReport, ui: &mut dyn UserInterface) {
        ui.message("");
        ui.message(RULE);
        ui.success("SUCCESS: MongoDB extension functional");
        ui.message(RULE);
        ui.message("");
        ui.message(&format!(
            "MongoDB extension version: {}",
            report.extension_version.as_deref().unwrap_or("unknown")
        ));
        ui.message("");
        ui.message("Note: To test full MongoDB functionality, start a MongoDB");
        ui.message("server and run this test again.");
    }
}

impl Command for DriverCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = self.provider.driver_report(self.uri())?;
        debug!(
            "Driver report: {} classes probed, manager={}",
            report.classes.len(),
            report.manager
        );

        if self.settings.format == ReportFormat::Json {
            let functional = self.is_functional(&report);
            if functional {
                if let Connectivity::Unreachable(class) = report.connectivity() {
                    info!("Driver ping to {} raised {}", self.uri(), class);
                }
            }
            ui.data(&self.render_json(&report)?);
            return Ok(CommandResult::from_exit_code(if functional { 0 } else { 1 }));
        }

        show_section(ui, "Testing MongoDB Extension");
        ui.message(&format!("PHP Version: {}", report.php_version));
        ui.message("");

        let passed = self.check_loaded(&report, ui)
            && self.check_classes(&report, ui)
            && self.check_instantiation(&report, ui);
        if !passed {
            return Ok(CommandResult::failure(1));
        }

        self.show_success(&report, ui);
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::{ClassPresence, EnvironmentSnapshot, StaticProvider};
    use crate::ui::MockUI;

    fn healthy_report() -> DriverReport {
        DriverReport {
            php_version: "8.3.12".to_string(),
            extensions: vec!["Core".to_string(), "mongodb".to_string()],
            extension_version: Some("1.20.0".to_string()),
            classes: DRIVER_CLASSES
                .iter()
                .map(|c| ClassPresence {
                    name: c.to_string(),
                    exists: true,
                })
                .collect(),
            manager: true,
            object_id: Some("65f0c0ffee0000000000beef".to_string()),
            construct_error: None,
            ping: Some("ok".to_string()),
        }
    }

    fn run(report: DriverReport, ui: &mut MockUI) -> CommandResult {
        let provider =
            StaticProvider::new(EnvironmentSnapshot::new("8.3.12", 80312, vec![])).with_driver(report);
        let settings = Settings::default();
        DriverCommand::new(&provider, &settings, DriverArgs::default())
            .execute(ui)
            .unwrap()
    }

    #[test]
    fn healthy_driver_succeeds() {
        let mut ui = MockUI::new();
        let result = run(healthy_report(), &mut ui);

        assert!(result.success);
        assert!(ui
            .successes()
            .contains(&"PASSED: MongoDB extension loaded".to_string()));
        assert!(ui
            .successes()
            .contains(&"MongoDB\\BSON\\ObjectId created: 65f0c0ffee0000000000beef".to_string()));
        assert!(ui
            .successes()
            .contains(&"Successfully connected to MongoDB server".to_string()));
        assert!(ui.has_message("MongoDB extension version: 1.20.0"));
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn extension_name_matches_case_insensitively() {
        let mut report = healthy_report();
        report.extensions = vec!["MongoDB".to_string()];
        let mut ui = MockUI::new();
        assert!(run(report, &mut ui).success);
    }

    #[test]
    fn missing_extension_lists_available() {
        let mut report = healthy_report();
        report.extensions = vec!["Core".to_string(), "curl".to_string()];
        let mut ui = MockUI::new();
        let result = run(report, &mut ui);

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_failure("MongoDB extension not loaded"));
        assert!(ui.details().contains(&"  - curl".to_string()));
        assert!(!ui.has_message("Test 2"));
    }

    #[test]
    fn first_missing_class_fails() {
        let mut report = healthy_report();
        report.classes[2].exists = false;
        report.classes[3].exists = false;
        let mut ui = MockUI::new();
        let result = run(report, &mut ui);

        assert_eq!(result.exit_code, 1);
        assert_eq!(
            ui.failures(),
            ["FAILED: Class MongoDB\\Driver\\Query not found".to_string()]
        );
        assert_eq!(ui.successes().len(), 3);
    }

    #[test]
    fn class_absent_from_report_fails() {
        let mut report = healthy_report();
        report.classes.pop();
        let mut ui = MockUI::new();
        assert_eq!(run(report, &mut ui).exit_code, 1);
        assert!(ui.has_failure("MongoDB\\BSON\\ObjectId"));
    }

    #[test]
    fn construction_error_fails() {
        let mut report = healthy_report();
        report.manager = false;
        report.object_id = None;
        report.ping = None;
        report.construct_error = Some("Failed to parse MongoDB URI".to_string());
        let mut ui = MockUI::new();
        let result = run(report, &mut ui);

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_failure("FAILED: Failed to parse MongoDB URI"));
    }

    #[test]
    fn ping_timeout_is_advisory() {
        let mut report = healthy_report();
        report.ping = Some("MongoDB\\Driver\\Exception\\ConnectionTimeoutException".to_string());
        let mut ui = MockUI::new();
        let result = run(report, &mut ui);

        assert!(result.success);
        assert!(ui.has_warning("Cannot connect to MongoDB server"));
        assert!(ui.has_message("Connection would work"));
    }

    #[test]
    fn other_ping_failure_is_advisory() {
        let mut report = healthy_report();
        report.ping = Some("MongoDB\\Driver\\Exception\\AuthenticationException".to_string());
        let mut ui = MockUI::new();
        let result = run(report, &mut ui);

        assert!(result.success);
        assert!(ui.has_warning("MongoDB connection test: MongoDB\\Driver\\Exception\\AuthenticationException"));
    }

    fn run_json(report: DriverReport, ui: &mut MockUI) -> CommandResult {
        let provider =
            StaticProvider::new(EnvironmentSnapshot::new("8.3.12", 80312, vec![])).with_driver(report);
        let settings = Settings {
            format: ReportFormat::Json,
            ..Settings::default()
        };
        DriverCommand::new(&provider, &settings, DriverArgs::default())
            .execute(ui)
            .unwrap()
    }

    #[test]
    fn json_format_emits_driver_document() {
        let mut report = healthy_report();
        report.ping = Some("MongoDB\\Driver\\Exception\\ConnectionTimeoutException".to_string());
        let mut ui = MockUI::new();
        let result = run_json(report, &mut ui);

        assert!(result.success);
        assert!(ui.messages().is_empty());
        assert!(ui.warnings().is_empty());
        let doc: serde_json::Value = serde_json::from_str(&ui.documents()[0]).unwrap();
        assert_eq!(doc["success"], true);
        assert_eq!(doc["extension_loaded"], true);
        assert_eq!(doc["missing_class"], serde_json::Value::Null);
        assert_eq!(doc["uri"], "mongodb://localhost:27017");
        assert_eq!(doc["extension_version"], "1.20.0");
    }

    #[test]
    fn json_format_reports_missing_class_and_fails() {
        let mut report = healthy_report();
        report.classes[4].exists = false;
        let mut ui = MockUI::new();
        let result = run_json(report, &mut ui);

        assert_eq!(result.exit_code, 1);
        let doc: serde_json::Value = serde_json::from_str(&ui.documents()[0]).unwrap();
        assert_eq!(doc["success"], false);
        assert_eq!(doc["missing_class"], "MongoDB\\BSON\\ObjectId");
    }

    #[test]
    fn missing_driver_class_follows_required_order() {
        let mut report = healthy_report();
        report.classes.retain(|c| c.name != "MongoDB\\Driver\\Command");
        assert_eq!(
            missing_driver_class(&report),
            Some("MongoDB\\Driver\\Command")
        );
        assert_eq!(missing_driver_class(&healthy_report()), None);
    }

    #[test]
    fn uri_prefers_flag_over_settings() {
        let provider = StaticProvider::new(EnvironmentSnapshot::new("8.3.12", 80312, vec![]));
        let settings = Settings::default();
        let args = DriverArgs {
            uri: Some("mongodb://db:27017".to_string()),
        };
        assert_eq!(
            DriverCommand::new(&provider, &settings, args).uri(),
            "mongodb://db:27017"
        );
        assert_eq!(
            DriverCommand::new(&provider, &settings, DriverArgs::default()).uri(),
            "mongodb://localhost:27017"
        );
    }
}
