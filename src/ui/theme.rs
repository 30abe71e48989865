//! Visual theme and styling.

use console::Style;

/// Flutterup's visual theme.
#[derive(Debug, Clone)]
pub struct FlutterupTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for informational elements (magenta).
    pub info: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for headers (bold).
    pub header: Style,
}

impl Default for FlutterupTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl FlutterupTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            error: Style::new().red().bold(),
            info: Style::new().magenta(),
            dim: Style::new().dim(),
            header: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            header: Style::new(),
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

    /// Format a header line.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }

    /// A horizontal rule of `width` characters.
    pub fn rule(&self, width: usize) -> String {
        format!("{}", self.dim.apply_to("=".repeat(width)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let theme = FlutterupTheme::plain();
        let msg = theme.format_success("Download complete");
        assert!(msg.contains("✓"));
        assert!(msg.contains("Download complete"));
    }

    #[test]
    fn theme_formats_error() {
        let theme = FlutterupTheme::plain();
        let msg = theme.format_error("Download failed");
        assert!(msg.contains("✗"));
        assert!(msg.contains("Download failed"));
    }

    #[test]
    fn theme_formats_header() {
        let theme = FlutterupTheme::plain();
        let msg = theme.format_header("Flutter SDK installer");
        assert!(msg.contains("Flutter SDK installer"));
    }

    #[test]
    fn rule_has_requested_width() {
        let theme = FlutterupTheme::plain();
        assert_eq!(theme.rule(50), "=".repeat(50));
    }

    #[test]
    fn default_impl_matches_new() {
        let default = FlutterupTheme::default();
        let new = FlutterupTheme::new();
        assert_eq!(default.format_success("test"), new.format_success("test"));
    }
}
