//! CLI command tests

use super::*;
use crate::cli::LogLevel;
use crate::config::*;
use crate::params::{HyperparameterSpec, ParameterDecorator, SearchSpace};
use std::path::PathBuf;
use tempfile::TempDir;

const TEMPLATE: &str = r"
input_path: data/train
node_chain:
  - node: Standardize
  - node: Svm
    parameters:
      complexity: _c
      kernel: ~kernel
      label: '#_c#'
runs: 2
";

const MANIFEST: &str = r"
nodes:
  - name: Base
    parameters:
      - { kind: choice, name: kernel, choices: [linear, rbf] }
  - name: Svm
    parent: Base
    parameters:
      - { kind: q_normal, name: complexity, mu: 1.0, sigma: 0.5, q: 0.1 }
";

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn instantiate_args(file: PathBuf) -> InstantiateArgs {
    InstantiateArgs {
        file,
        key: Some("node_chain".to_string()),
        params: None,
        set: vec![],
        format: OutputFormat::Yaml,
    }
}

#[test]
fn test_extract_block() {
    let dir = TempDir::new().unwrap();
    let args = ExtractArgs { file: write(&dir, "exp.yaml", TEMPLATE), key: "node_chain".to_string() };

    let block = extract_block(&args, LogLevel::Quiet).unwrap();
    assert!(block.starts_with("  - node: Standardize"));
    assert!(!block.contains("runs"));
}

#[test]
fn test_extract_missing_file() {
    let args = ExtractArgs { file: PathBuf::from("/nonexistent/exp.yaml"), key: "node_chain".into() };
    assert!(extract_block(&args, LogLevel::Quiet).is_err());
}

#[test]
fn test_instantiate_with_set_and_params() {
    let dir = TempDir::new().unwrap();
    let mut args = instantiate_args(write(&dir, "exp.yaml", TEMPLATE));
    args.params = Some(write(&dir, "setting.yaml", "_c: 0.5\n~kernel: linear\n"));
    args.set = vec!["~kernel=rbf".to_string()];

    let output = instantiate_file(&args, LogLevel::Quiet).unwrap();
    let chain: Value = serde_yaml::from_str(&output).unwrap();
    assert_eq!(chain[1]["parameters"]["complexity"].as_f64(), Some(0.5));
    assert_eq!(chain[1]["parameters"]["kernel"], Value::from("rbf"));
    assert_eq!(chain[1]["parameters"]["label"], Value::from("_c"));
}

#[test]
fn test_instantiate_json_output() {
    let dir = TempDir::new().unwrap();
    let mut args = instantiate_args(write(&dir, "exp.yaml", TEMPLATE));
    args.set = vec!["_c=2".to_string(), "~kernel=linear".to_string()];
    args.format = OutputFormat::Json;

    let output = instantiate_file(&args, LogLevel::Quiet).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json[1]["parameters"]["complexity"], serde_json::json!(2));
}

#[test]
fn test_instantiate_whole_file_without_key() {
    let dir = TempDir::new().unwrap();
    let mut args = instantiate_args(write(&dir, "flat.yaml", "threshold: _t\n"));
    args.key = None;
    args.set = vec!["_t=0.25".to_string()];

    let output = instantiate_file(&args, LogLevel::Quiet).unwrap();
    assert_eq!(output.trim(), "threshold: 0.25");
}

#[test]
fn test_instantiate_bad_assignment() {
    let dir = TempDir::new().unwrap();
    let mut args = instantiate_args(write(&dir, "exp.yaml", TEMPLATE));
    args.set = vec!["no-equals-sign".to_string()];
    assert!(collect_setting(&args).is_err());
    assert!(instantiate_file(&args, LogLevel::Quiet).is_err());
}

#[test]
fn test_instantiate_parse_failure_reported() {
    let dir = TempDir::new().unwrap();
    let mut args = instantiate_args(write(&dir, "bad.yaml", "x: [_a\n"));
    args.key = None;
    let err = instantiate_file(&args, LogLevel::Quiet).unwrap_err();
    assert!(err.contains("Failed to parse instantiated template"));
}

#[test]
fn test_space_yaml_output() {
    let dir = TempDir::new().unwrap();
    let args = SpaceArgs {
        manifest: write(&dir, "nodes.yaml", MANIFEST),
        node: Some("Svm".to_string()),
        format: OutputFormat::Yaml,
    };

    let output = format_spaces(&args, LogLevel::Quiet).unwrap();
    let value: Value = serde_yaml::from_str(&output).unwrap();
    assert_eq!(value["Svm"]["kernel"], Value::from(vec!["linear", "rbf"]));
    assert_eq!(value["Svm"]["complexity"]["q"].as_f64(), Some(0.1));
}

#[test]
fn test_space_text_output() {
    let dir = TempDir::new().unwrap();
    let args = SpaceArgs {
        manifest: write(&dir, "nodes.yaml", MANIFEST),
        node: None,
        format: OutputFormat::Text,
    };

    let output = format_spaces(&args, LogLevel::Quiet).unwrap();
    assert!(output.contains("Svm (inherits Base)"));
    assert!(output.contains("kernel: choice[linear, rbf]"));
    assert!(output.contains("complexity: qnormal(mu=1, sigma=0.5) step 0.1"));
}

#[test]
fn test_space_unknown_node() {
    let dir = TempDir::new().unwrap();
    let args = SpaceArgs {
        manifest: write(&dir, "nodes.yaml", MANIFEST),
        node: Some("Missing".to_string()),
        format: OutputFormat::Yaml,
    };
    assert!(format_spaces(&args, LogLevel::Quiet).unwrap_err().contains("Missing"));
}

#[test]
fn test_describe_spec_kinds() {
    let space = SearchSpace::new()
        .apply_all(&[ParameterDecorator::boolean("b"), ParameterDecorator::uniform("u", 0.0, 2.5)])
        .value;
    let lines: Vec<String> = space.iter().map(describe_spec).collect();
    assert_eq!(lines, vec!["b: boolean", "u: uniform(min=0, max=2.5)"]);

    let spec = HyperparameterSpec::new("c", crate::params::ParameterKind::Choice { choices: vec![] });
    assert_eq!(describe_spec(&spec), "c: choice[]");
}

#[test]
fn test_render_formats() {
    let value: Value = serde_yaml::from_str("a: 1").unwrap();
    assert_eq!(render(&value, OutputFormat::Yaml).unwrap(), "a: 1\n");
    assert!(render(&value, OutputFormat::Json).unwrap().contains("\"a\": 1"));
}

#[test]
fn test_run_command_dispatch() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "exp.yaml", TEMPLATE);
    let cli = parse_args(["spacetune", "-q", "extract", file.to_str().unwrap()]).unwrap();
    assert!(run_command(cli).is_ok());
}
