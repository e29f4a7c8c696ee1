//! Visual theme and styling.

use console::Style;

/// extcheck's visual theme.
#[derive(Debug, Clone)]
pub struct ExtcheckTheme {
    /// Style for found capabilities and success lines (green).
    pub success: Style,
    /// Style for missing capabilities and failure lines (red bold).
    pub failure: Style,
    /// Style for advisory warnings (orange).
    pub warning: Style,
    /// Style for errors (red bold).
    pub error: Style,
}

impl Default for ExtcheckTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtcheckTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            failure: Style::new().red().bold(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            failure: Style::new(),
            warning: Style::new(),
            error: Style::new(),
        }
    }

    /// Pick the colored or plain theme.
    pub fn for_colors(use_colors: bool) -> Self {
        if use_colors {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a failure message (icon + text in red bold).
    pub fn format_failure(&self, msg: &str) -> String {
        format!("{}", self.failure.apply_to(format!("✗ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
