//! Core CLI types - Cli, Command, and argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::OutputFormat;

/// Default top-level key holding the node chain in a template document
pub const DEFAULT_KEY: &str = "node_chain";

/// spacetune: hyperparameter search spaces and node-chain templates
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "spacetune")]
#[command(version)]
#[command(about = "Inspect hyperparameter search spaces and instantiate node-chain templates")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the block under a top-level key of a YAML document
    Extract(ExtractArgs),

    /// Substitute parameters into a node-chain template and print the result
    Instantiate(InstantiateArgs),

    /// Resolve a space manifest and print node search spaces
    Space(SpaceArgs),
}

/// Arguments for the extract command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ExtractArgs {
    /// Path to the YAML document
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Top-level key to extract
    #[arg(short, long, default_value = DEFAULT_KEY)]
    pub key: String,
}

/// Arguments for the instantiate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InstantiateArgs {
    /// Path to the template document
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Extract this top-level key first; the whole file is the template if omitted
    #[arg(short, long)]
    pub key: Option<String>,

    /// YAML file with placeholder -> value entries
    #[arg(short, long)]
    pub params: Option<PathBuf>,

    /// Inline assignment `key=value`, repeatable; overrides --params
    #[arg(short, long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// Output format (yaml, json)
    #[arg(short, long, default_value = "yaml")]
    pub format: OutputFormat,
}

/// Arguments for the space command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct SpaceArgs {
    /// Path to the space manifest
    #[arg(value_name = "MANIFEST")]
    pub manifest: PathBuf,

    /// Only print this node
    #[arg(short, long)]
    pub node: Option<String>,

    /// Output format (text, yaml, json)
    #[arg(short, long, default_value = "yaml")]
    pub format: OutputFormat,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
