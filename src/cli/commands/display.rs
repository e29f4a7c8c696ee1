//! Shared display helpers.
//!
//! Formatters render to a buffer with icons inline. These helpers route each
//! rendered line to the matching [`UserInterface`] method so quiet mode and
//! theming apply uniformly.

use crate::report::human::{MISSING_ITEM_PREFIX, RULE};
use crate::ui::UserInterface;

/// Kind of a rendered report line, decided by its leading icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Success,
    Failure,
    Warning,
    Detail,
    Plain,
}

/// Split a rendered line into its kind and the text after the icon.
pub fn classify_line(line: &str) -> (LineKind, &str) {
    if let Some(rest) = line.strip_prefix("✓ ") {
        (LineKind::Success, rest)
    } else if let Some(rest) = line.strip_prefix("✗ ") {
        (LineKind::Failure, rest)
    } else if let Some(rest) = line.strip_prefix("⚠ ") {
        (LineKind::Warning, rest)
    } else if line.starts_with(MISSING_ITEM_PREFIX) {
        (LineKind::Detail, line)
    } else {
        (LineKind::Plain, line)
    }
}

/// Send every line of `rendered` to the UI.
pub fn emit_lines(ui: &mut dyn UserInterface, rendered: &str) {
    for line in rendered.lines() {
        match classify_line(line) {
            (LineKind::Success, text) => ui.success(text),
            (LineKind::Failure, text) => ui.failure(text),
            (LineKind::Warning, text) => ui.warning(text),
            (LineKind::Detail, text) => ui.detail(text),
            (LineKind::Plain, text) => ui.message(text),
        }
    }
}

/// Print a section title between two rules.
pub fn show_section(ui: &mut dyn UserInterface, title: &str) {
    ui.message(RULE);
    ui.message(title);
    ui.message(RULE);
}

/// Print a numbered sub-test heading.
pub fn show_test_heading(ui: &mut dyn UserInterface, heading: &str) {
    ui.message(heading);
    ui.message(&"-".repeat(RULE.len() + 2));
}
