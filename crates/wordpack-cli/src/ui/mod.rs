//! Terminal output: status lines and color detection.
//!
//! Status lines go to stderr so that stdout stays clean for the composed JSON.
//!
//! ```no_run
//! use wordpack_cli::ui;
//!
//! ui::init_colors(false);
//! ui::info("Loading configuration...");
//! ui::success("Composed 3 build graphs");
//! ```

use std::sync::atomic::{AtomicBool, Ordering};

mod format;
mod messages;

static COLORS: AtomicBool = AtomicBool::new(true);

pub use format::{format_duration, swatch};
pub use messages::{info, success, warning};

/// Check if running in a CI environment.
///
/// Detects common CI variables from GitHub Actions, GitLab CI, CircleCI and
/// Travis CI.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
}

/// Check if color output should be enabled.
///
/// `NO_COLOR` disables colors, `FORCE_COLOR` enables them off a terminal,
/// otherwise stderr must be attended.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::user_attended_stderr()
}

/// Decide once whether status lines are colored.
pub fn init_colors(no_color: bool) {
    COLORS.store(!no_color && should_use_color(), Ordering::Relaxed);
}

/// Whether status lines are colored.
pub fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}

