//! Human-readable report formatter.
//!
//! One line per required capability (`✓ name` or `✗ name (MISSING)`), then a
//! summary block with the three counts. On failure the missing names are
//! listed again; on success a preview of the loaded extensions follows.

use std::io::Write;

use super::{ExtensionReport, ReportFormatter};
use crate::requirements::canonical_name;

/// Rule printed around section titles.
pub const RULE: &str = "====================================";

/// Prefix of each entry in the itemized missing list.
pub const MISSING_ITEM_PREFIX: &str = "  - ";

/// How many loaded extensions the success preview lists.
pub const DEFAULT_PREVIEW_LIMIT: usize = 20;

/// Formats the extension report for human consumption.
#[derive(Debug, Clone)]
pub struct HumanFormatter {
    /// Number of loaded extensions to list on success; `None` lists all.
    pub preview_limit: Option<usize>,
}

impl HumanFormatter {
    /// Create a formatter with the default preview limit.
    pub fn new() -> Self {
        Self {
            preview_limit: Some(DEFAULT_PREVIEW_LIMIT),
        }
    }

    /// Create a formatter that lists every loaded extension on success.
    pub fn listing_all() -> Self {
        Self {
            preview_limit: None,
        }
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Write a section title between two rules.
pub fn write_section<W: Write>(writer: &mut W, title: &str) -> std::io::Result<()> {
    writeln!(writer, "{}", RULE)?;
    writeln!(writer, "{}", title)?;
    writeln!(writer, "{}", RULE)
}

/// Comma-separated preview of `names`, lowercased, truncated to `limit`.
pub fn extension_preview(names: &[String], limit: Option<usize>) -> String {
    let lowered: Vec<String> = names.iter().map(|n| canonical_name(n)).collect();
    let shown = limit.unwrap_or(lowered.len()).min(lowered.len());
    let mut preview = lowered[..shown].join(", ");
    if lowered.len() > shown {
        preview.push_str(&format!(", ... (and {} more)", lowered.len() - shown));
    }
    preview
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(
        &self,
        report: &ExtensionReport<'_>,
        writer: &mut W,
    ) -> std::io::Result<()> {
        let snapshot = report.snapshot;
        let result = report.result;

        write_section(writer, "Testing PHP Extensions")?;
        writeln!(writer, "PHP Version: {}", snapshot.version())?;
        writeln!(writer, "Extensions loaded: {}", snapshot.extension_count())?;
        writeln!(writer)?;

        for outcome in result.outcomes() {
            if outcome.status.is_found() {
                writeln!(writer, "✓ {}", outcome.name)?;
            } else {
                writeln!(writer, "✗ {} (MISSING)", outcome.name)?;
            }
        }

        writeln!(writer)?;
        write_section(writer, "Summary")?;
        writeln!(writer, "Required: {}", result.required_count())?;
        writeln!(writer, "Found: {}", result.found_count())?;
        writeln!(writer, "Missing: {}", result.missing_count())?;
        writeln!(writer)?;

        if !result.is_success() {
            writeln!(writer, "✗ FAILED: Missing extensions:")?;
            for name in result.missing() {
                writeln!(writer, "{}{}", MISSING_ITEM_PREFIX, name)?;
            }
            return writeln!(writer);
        }

        writeln!(writer, "✓ SUCCESS: All required extensions loaded")?;
        writeln!(writer)?;
        writeln!(
            writer,
            "All loaded extensions ({}):",
            snapshot.extension_count()
        )?;
        writeln!(
            writer,
            "{}",
            extension_preview(snapshot.extensions(), self.preview_limit)
        )
    }
}
