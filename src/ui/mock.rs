//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use extcheck::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("curl");
//! ui.failure("imap (MISSING)");
//!
//! assert!(ui.successes().contains(&"curl".to_string()));
//! assert!(ui.has_failure("imap"));
//! ```

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
///
/// Captures every call regardless of output mode, and additionally records
/// the lines a terminal would actually have shown in [`MockUI::transcript`].
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    failures: Vec<String>,
    details: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    documents: Vec<String>,
    transcript: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured failure messages.
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    /// Get all captured failure details.
    pub fn details(&self) -> &[String] {
        &self.details
    }

    /// Get all captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured raw documents.
    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    /// Lines that would have been printed, with icons, in order.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Check if a message containing `text` was displayed.
    pub fn has_message(&self, text: &str) -> bool {
        self.messages.iter().any(|m| m.contains(text))
    }

    /// Check if a failure containing `text` was displayed.
    pub fn has_failure(&self, text: &str) -> bool {
        self.failures.iter().any(|m| m.contains(text))
    }

    /// Check if a warning containing `text` was displayed.
    pub fn has_warning(&self, text: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(text))
    }

    /// Check if an error containing `text` was displayed.
    pub fn has_error(&self, text: &str) -> bool {
        self.errors.iter().any(|m| m.contains(text))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
        if self.mode.shows_status() {
            self.transcript.push(msg.to_string());
        }
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
        if self.mode.shows_status() {
            self.transcript.push(format!("✓ {}", msg));
        }
    }

    fn failure(&mut self, msg: &str) {
        self.failures.push(msg.to_string());
        self.transcript.push(format!("✗ {}", msg));
    }

    fn detail(&mut self, msg: &str) {
        self.details.push(msg.to_string());
        self.transcript.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
        self.transcript.push(format!("⚠ {}", msg));
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn data(&mut self, text: &str) {
        self.documents.push(text.to_string());
    }
}
