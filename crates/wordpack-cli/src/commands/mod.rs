//! Command implementations for the WordPack CLI.
//!
//! - [`build`] - compose build graphs
//! - [`check`] - validate the configuration
//! - [`manifest`] - write the PHP manifest
//! - [`color`] - show bundle colors
//!
//! Each command exposes an `execute` function taking its parsed arguments.

pub mod build;
pub mod check;
pub mod color;
pub mod manifest;
pub(crate) mod utils;

// Re-export execute functions for convenience
pub use build::execute as build_execute;
pub use check::execute as check_execute;
pub use color::execute as color_execute;
pub use manifest::execute as manifest_execute;
