//! Visual theme and styling.

use console::Style;

/// Gangway's visual theme.
#[derive(Debug, Clone)]
pub struct GangwayTheme {
    /// Style for the final "ready" line (green).
    pub info: Style,
    /// Style for progress comments (dim).
    pub comment: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for commands shown in output (dim italic).
    pub command: Style,
}

impl Default for GangwayTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl GangwayTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            info: Style::new().green(),
            comment: Style::new().dim(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            command: Style::new().dim().italic(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            info: Style::new(),
            comment: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            command: Style::new(),
        }
    }

    /// Format the success line (icon + text in green).
    pub fn format_info(&self, msg: &str) -> String {
        format!("{}", self.info.apply_to(format!("✓ {}", msg)))
    }

    /// Format a progress comment.
    pub fn format_comment(&self, msg: &str) -> String {
        format!("{}", self.comment.apply_to(format!("  {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error report.
    ///
    /// Multi-line reports get the icon on the first line and the rest indented
    /// so each failure lines up.
    pub fn format_error(&self, msg: &str) -> String {
        let body = msg.lines().collect::<Vec<_>>().join("\n  ");
        format!("{}", self.error.apply_to(format!("✗ {}", body)))
    }

    /// Format a command line.
    pub fn format_command(&self, command: &str) -> String {
        format!("{}", self.command.apply_to(format!("$ {}", command)))
    }
}

/// Check if colors should be used.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
