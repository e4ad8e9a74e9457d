//! Status message functions for terminal output.

use owo_colors::{OwoColorize, Style};

use super::colors_enabled;

pub(crate) fn paint(text: &str, style: Style) -> String {
    if colors_enabled() {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

/// Print a success message to stderr.
///
/// ```no_run
/// use wordpack_cli::ui::success;
///
/// success("Configuration is valid");
/// ```
pub fn success(message: &str) {
    eprintln!("{} {}", paint("✓", Style::new().green().bold()), message);
}

/// Print an info message to stderr.
pub fn info(message: &str) {
    eprintln!("{} {}", paint("ℹ", Style::new().blue().bold()), message);
}

/// Print a warning message to stderr.
pub fn warning(message: &str) {
    eprintln!(
        "{} {}",
        paint("⚠", Style::new().yellow().bold()),
        paint(message, Style::new().yellow())
    );
}
