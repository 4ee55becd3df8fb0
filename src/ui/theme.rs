//! Visual theme and styling.

use console::Style;

/// Sherpa's visual theme.
#[derive(Debug, Clone)]
pub struct SherpaTheme {
    /// Style for success messages (green bold).
    pub success: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for informational text (white).
    pub info: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for shell commands echoed before execution (magenta).
    pub command: Style,
}

impl Default for SherpaTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl SherpaTheme {
    /// Create the default sherpa theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green().bold(),
            error: Style::new().red().bold(),
            info: Style::new(),
            dim: Style::new().dim(),
            command: Style::new().magenta(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            command: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format an informational message.
    pub fn format_info(&self, msg: &str) -> String {
        format!("{}", self.info.apply_to(msg))
    }

    /// Format a shell command echo.
    pub fn format_command(&self, msg: &str) -> String {
        format!("{}", self.command.apply_to(msg))
    }

    /// Format secondary text (separators, de-emphasized notes).
    pub fn format_dim(&self, msg: &str) -> String {
        format!("{}", self.dim.apply_to(msg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_success_includes_icon_and_text() {
        let theme = SherpaTheme::plain();
        assert_eq!(theme.format_success("done"), "✓ done");
    }

    #[test]
    fn format_error_includes_icon_and_text() {
        let theme = SherpaTheme::plain();
        assert_eq!(theme.format_error("broke"), "✗ broke");
    }

    #[test]
    fn plain_theme_passes_text_through() {
        let theme = SherpaTheme::plain();
        assert_eq!(theme.format_info("hello"), "hello");
        assert_eq!(theme.format_command("echo hi"), "echo hi");
        assert_eq!(theme.format_dim("———"), "———");
    }
}
