//! Subcommand implementations for the lext CLI.

pub mod check;
pub mod common;
pub mod config;
pub mod keywords;
pub mod tokens;
pub mod traits;
