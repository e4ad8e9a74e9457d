//! Logging setup for the WordPack CLI.
//!
//! Events from the config loader and the composer go through `tracing`; this
//! module installs the subscriber that prints them to stderr.
//!
//! # Example
//!
//! ```rust,no_run
//! use wordpack_cli::logger::init_logger;
//! use tracing::{debug, info};
//!
//! init_logger(false, false, false);
//!
//! info!("composing build graphs");
//! debug!(bundle = "admin", "bundle graph");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "wordpack=debug,wordpack_cli=debug,wordpack_config=debug,wordpack_compose=debug";
const QUIET_FILTER: &str = "wordpack=error,wordpack_cli=error,wordpack_config=error,wordpack_compose=error";
const DEFAULT_FILTER: &str = "wordpack=info,wordpack_cli=info,wordpack_config=info,wordpack_compose=info";

/// Initialize the tracing subscriber.
///
/// Call once, before any logging occurs.
///
/// # Verbosity Levels
///
/// The level is picked in this order:
/// 1. `--verbose`: DEBUG for the wordpack crates
/// 2. `--quiet`: ERROR only
/// 3. `RUST_LOG`: custom filter
/// 4. Default: INFO for the wordpack crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(filter_for(verbose, quiet), no_color);
}

/// Initialize the subscriber with an explicit filter.
///
/// ```rust,no_run
/// use wordpack_cli::logger::init_logger_with_filter;
/// use tracing_subscriber::EnvFilter;
///
/// init_logger_with_filter(EnvFilter::new("wordpack_compose=trace"), true);
/// ```
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}
