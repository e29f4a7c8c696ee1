//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for real terminal output
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use extcheck::ui::{OutputMode, TerminalUI, UserInterface};
//!
//! let mut ui = TerminalUI::with_colors(OutputMode::Quiet, false);
//! ui.message("hidden in quiet mode");
//! ui.failure("imap (MISSING)");
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, ExtcheckTheme};

/// Trait for user interface interactions.
///
/// Status methods take the text without its icon; implementations add
/// `✓`, `✗` or `⚠` themselves.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display an informational line (hidden in quiet mode).
    fn message(&mut self, msg: &str);

    /// Display a success line (hidden in quiet mode).
    fn success(&mut self, msg: &str);

    /// Display a failure line, e.g. a missing capability.
    fn failure(&mut self, msg: &str);

    /// Display an indented line itemizing the preceding failure.
    ///
    /// Shown in every mode, verbatim.
    fn detail(&mut self, msg: &str);

    /// Display an advisory warning.
    fn warning(&mut self, msg: &str);

    /// Display an error that prevented the check from running.
    fn error(&mut self, msg: &str);

    /// Emit a raw document (e.g. JSON) verbatim.
    fn data(&mut self, text: &str);
}
