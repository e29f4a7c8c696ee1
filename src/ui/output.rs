//! Output mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show the full report.
    #[default]
    Normal,
    /// Show only missing capabilities, warnings and errors.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows informational lines and found entries.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Normal)
    }
}
