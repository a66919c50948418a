//! Subcommand handlers for the `colorized` binary.

pub mod completions;
pub mod config;
pub mod paint;
pub mod palette;
