//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! spacetune extract experiment.yaml --key node_chain
//! spacetune instantiate experiment.yaml --key node_chain --set _c=0.5 --format json
//! spacetune space nodes.yaml --node SvmNode
//! ```

mod core;
mod types;

pub use core::{parse_args, Cli, Command, ExtractArgs, InstantiateArgs, SpaceArgs, DEFAULT_KEY};
pub use types::OutputFormat;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_extract_default_key() {
        let cli = parse_args(["spacetune", "extract", "exp.yaml"]).unwrap();
        match cli.command {
            Command::Extract(args) => {
                assert_eq!(args.file, PathBuf::from("exp.yaml"));
                assert_eq!(args.key, "node_chain");
            }
            _ => panic!("Expected Extract command"),
        }
    }

    #[test]
    fn test_parse_instantiate_with_assignments() {
        let cli = parse_args([
            "spacetune",
            "instantiate",
            "exp.yaml",
            "--key",
            "node_chain",
            "--set",
            "_c=0.5",
            "-s",
            "~w=10",
            "--params",
            "setting.yaml",
            "--format",
            "json",
        ])
        .unwrap();

        match cli.command {
            Command::Instantiate(args) => {
                assert_eq!(args.key.as_deref(), Some("node_chain"));
                assert_eq!(args.set, vec!["_c=0.5".to_string(), "~w=10".to_string()]);
                assert_eq!(args.params, Some(PathBuf::from("setting.yaml")));
                assert_eq!(args.format, OutputFormat::Json);
            }
            _ => panic!("Expected Instantiate command"),
        }
    }

    #[test]
    fn test_parse_space_command() {
        let cli = parse_args(["spacetune", "-q", "space", "nodes.yaml", "--node", "Svm"]).unwrap();
        assert!(cli.quiet);
        match cli.command {
            Command::Space(args) => {
                assert_eq!(args.node.as_deref(), Some("Svm"));
                assert_eq!(args.format, OutputFormat::Yaml);
            }
            _ => panic!("Expected Space command"),
        }
    }

    #[test]
    fn test_invalid_format_rejected() {
        assert!(parse_args(["spacetune", "space", "n.yaml", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("TEXT".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert_eq!("yml".parse::<OutputFormat>(), Ok(OutputFormat::Yaml));
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert!("csv".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_missing_subcommand_fails() {
        assert!(parse_args(["spacetune"]).is_err());
    }
}
