//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{ExtcheckTheme, OutputMode, UserInterface};

/// Terminal UI writing the report to stdout and errors to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: ExtcheckTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a terminal UI with an explicit color choice.
    pub fn with_colors(mode: OutputMode, use_colors: bool) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme: ExtcheckTheme::for_colors(use_colors),
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn failure(&mut self, msg: &str) {
        writeln!(self.out, "{}", self.theme.format_failure(msg)).ok();
    }

    fn detail(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.out, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn data(&mut self, text: &str) {
        write!(self.out, "{}", text).ok();
        self.out.flush().ok();
    }
}
