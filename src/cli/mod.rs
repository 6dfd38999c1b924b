//! CLI module for spacetune
//!
//! This module contains all CLI command handlers and utilities.

mod commands;
pub mod logging;

pub use commands::{
    collect_setting, describe_spec, extract_block, format_node_text, format_spaces, instantiate_file,
    render, run_command,
};
pub use logging::LogLevel;

// Re-export Cli from config for convenience
pub use crate::config::Cli;
