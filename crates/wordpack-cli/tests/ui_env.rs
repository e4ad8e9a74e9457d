//! Color and CI detection read process-wide environment variables.
//!
//! This file builds into its own test binary so the mutations below never
//! overlap with other tests reading the same variables. Keep it to one test.

use wordpack_cli::ui::{colors_enabled, init_colors, is_ci, should_use_color};

#[test]
fn color_and_ci_detection_follow_env() {
    unsafe {
        std::env::set_var("NO_COLOR", "1");
        std::env::set_var("FORCE_COLOR", "1");
    }
    assert!(!should_use_color());
    init_colors(false);
    assert!(!colors_enabled());

    unsafe { std::env::remove_var("NO_COLOR") };
    assert!(should_use_color());
    init_colors(false);
    assert!(colors_enabled());
    init_colors(true);
    assert!(!colors_enabled());
    unsafe { std::env::remove_var("FORCE_COLOR") };

    for var in ["CI", "GITHUB_ACTIONS", "GITLAB_CI", "CIRCLECI", "TRAVIS"] {
        unsafe { std::env::remove_var(var) };
    }
    assert!(!is_ci());
    unsafe { std::env::set_var("GITLAB_CI", "true") };
    assert!(is_ci());
    unsafe { std::env::remove_var("GITLAB_CI") };
}
