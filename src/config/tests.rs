//! Manifest and setting loading tests

use std::path::Path;

use serde_yaml::Value;
use tempfile::TempDir;

use crate::config::*;
use crate::error::Error;
use crate::params::{Distribution, ParameterDecorator};

const MANIFEST: &str = r#"
nodes:
  - name: SvmNode
    parent: BaseNode
    parameters:
      - { kind: normal, name: complexity, mu: 1.0, sigma: 0.5 }
      - { kind: no_optimization, name: kernel }
  - name: BaseNode
    parameters:
      - { kind: choice, name: kernel, choices: [linear, rbf] }
      - { kind: boolean, name: normalize }
      - kind: q_uniform
        name: window
        min: 10
        max: 100
        q: 5
"#;

#[test]
fn test_parse_manifest_annotations() {
    let manifest = parse_manifest(MANIFEST, Path::new("inline")).unwrap();
    assert_eq!(manifest.nodes.len(), 2);

    let base = &manifest.nodes[1];
    assert_eq!(base.parameters.len(), 3);
    assert_eq!(
        ParameterDecorator::from(&base.parameters[2]),
        ParameterDecorator::q_uniform("window", 10.0, 100.0, 5.0)
    );
    assert_eq!(
        ParameterDecorator::from(&base.parameters[0]),
        ParameterDecorator::choice("kernel", vec!["linear", "rbf"])
    );
}

#[test]
fn test_scalar_choice_is_wrapped() {
    let yaml = "nodes:\n  - name: A\n    parameters:\n      - { kind: choice, name: c, choices: 3 }\n";
    let manifest = parse_manifest(yaml, Path::new("inline")).unwrap();
    let dec = ParameterDecorator::from(&manifest.nodes[0].parameters[0]);
    assert_eq!(dec, ParameterDecorator::choice("c", vec![Value::from(3)]));
}

#[test]
fn test_unknown_kind_is_parse_error() {
    let yaml = "nodes:\n  - name: A\n    parameters:\n      - { kind: lognormal, name: c }\n";
    let err = parse_manifest(yaml, Path::new("bad.yaml")).unwrap_err();
    assert!(matches!(err, Error::ManifestParse { .. }));
    assert!(err.to_string().contains("bad.yaml"));
}

#[test]
fn test_load_registry_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nodes.yaml");
    std::fs::write(&path, MANIFEST).unwrap();

    let outcome = load_registry(&path).unwrap();
    assert!(outcome.warnings.is_empty());
    let registry = outcome.value;

    let svm = registry.search_space("SvmNode").unwrap();
    assert_eq!(svm.names().collect::<Vec<_>>(), vec!["complexity", "normalize", "window"]);
    assert_eq!(
        svm.get("complexity").unwrap().distribution(),
        Some(Distribution::Normal { mu: 1.0, sigma: 0.5 })
    );

    let base = registry.search_space("BaseNode").unwrap();
    assert!(base.contains("kernel"));
    assert!(!base.contains("complexity"));
}

#[test]
fn test_load_registry_duplicate_warns() {
    let yaml = "nodes:\n  - name: A\n    parameters:\n      - { kind: boolean, name: x }\n      - { kind: normal, name: x, mu: 0, sigma: 1 }\n";
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("dup.yaml");
    std::fs::write(&path, yaml).unwrap();

    let outcome = load_registry(&path).unwrap();
    assert_eq!(outcome.warnings.len(), 1);
}

#[test]
fn test_load_manifest_file_not_found() {
    let result = load_manifest(Path::new("/nonexistent/path/nodes.yaml"));
    assert!(matches!(result, Err(Error::Io { .. })));
}

#[test]
fn test_load_setting() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("setting.yaml");
    std::fs::write(&path, "_c: 0.5\n~kernel: rbf\n").unwrap();

    let setting = load_setting(&path).unwrap();
    assert_eq!(setting.get("_c").and_then(Value::as_f64), Some(0.5));
    assert_eq!(setting.get("~kernel"), Some(&Value::from("rbf")));
}

#[test]
fn test_load_empty_setting() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("empty.yaml");
    std::fs::write(&path, "\n").unwrap();
    assert!(load_setting(&path).unwrap().is_empty());
}

#[test]
fn test_load_setting_not_a_mapping() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("list.yaml");
    std::fs::write(&path, "- 1\n- 2\n").unwrap();
    assert!(matches!(load_setting(&path), Err(Error::ManifestParse { .. })));
}
