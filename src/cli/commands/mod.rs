//! CLI command implementations

mod extract;
mod instantiate;
mod space;

#[cfg(test)]
mod tests;

use serde_yaml::Value;

use crate::cli::LogLevel;
use crate::config::{Cli, Command, OutputFormat};
use crate::error::{Error, Result};

pub use extract::extract_block;
pub use instantiate::{collect_setting, instantiate_file};
pub use space::{describe_spec, format_node_text, format_spaces};

/// Render a value as YAML or JSON. `Text` falls back to YAML.
pub fn render(value: &Value, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)
            .map_err(|e| Error::Serialization { message: format!("JSON serialization error: {e}") }),
        OutputFormat::Yaml | OutputFormat::Text => serde_yaml::to_string(value)
            .map_err(|e| Error::Serialization { message: format!("YAML serialization error: {e}") }),
    }
}

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> std::result::Result<(), String> {
    let log_level = LogLevel::from_flags(cli.quiet, cli.verbose);

    match cli.command {
        Command::Extract(args) => extract::run_extract(args, log_level),
        Command::Instantiate(args) => instantiate::run_instantiate(args, log_level),
        Command::Space(args) => space::run_space(args, log_level),
    }
}
