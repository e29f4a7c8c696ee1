//! JSON report formatter.

use std::io::Write;

use serde::Serialize;

use super::{ExtensionReport, ReportFormatter};
use crate::requirements::CheckOutcome;

/// Formats the extension report as machine-readable JSON.
#[derive(Debug, Default)]
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonReport<'a> {
    php_version: &'a str,
    version_id: u32,
    success: bool,
    summary: JsonSummary,
    required: Vec<&'a str>,
    found: Vec<&'a str>,
    missing: Vec<&'a str>,
    skipped: &'a [String],
    outcomes: &'a [CheckOutcome],
    extensions: &'a [String],
}

#[derive(Serialize)]
struct JsonSummary {
    required: usize,
    found: usize,
    missing: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(
        &self,
        report: &ExtensionReport<'_>,
        writer: &mut W,
    ) -> std::io::Result<()> {
        let result = report.result;
        let output = JsonReport {
            php_version: report.snapshot.version(),
            version_id: report.snapshot.version_id(),
            success: result.is_success(),
            summary: JsonSummary {
                required: result.required_count(),
                found: result.found_count(),
                missing: result.missing_count(),
            },
            required: result.required(),
            found: result.found(),
            missing: result.missing(),
            skipped: result.skipped(),
            outcomes: result.outcomes(),
            extensions: report.snapshot.extensions(),
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}
