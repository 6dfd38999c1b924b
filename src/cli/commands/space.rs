//! Space command implementation

use serde_yaml::{Mapping, Value};

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_registry, OutputFormat, SpaceArgs};
use crate::params::{Distribution, HyperparameterSpec, NodeClass, ParameterKind};

use super::render;

fn describe_distribution(dist: &Distribution) -> String {
    match dist {
        Distribution::Normal { mu, sigma } => format!("normal(mu={mu}, sigma={sigma})"),
        Distribution::Uniform { min, max } => format!("uniform(min={min}, max={max})"),
    }
}

/// One-line description of a dimension
pub fn describe_spec(spec: &HyperparameterSpec) -> String {
    let body = match &spec.kind {
        ParameterKind::Choice { choices } => {
            let items: Vec<String> = choices.iter().map(crate::template::plain_text).collect();
            format!("choice[{}]", items.join(", "))
        }
        ParameterKind::Boolean => "boolean".to_string(),
        ParameterKind::Distribution(dist) => describe_distribution(dist),
        ParameterKind::Quantized { base, q } => format!("q{} step {q}", describe_distribution(base)),
    };
    format!("{}: {body}", spec.name)
}

/// Human-readable summary of a node class
pub fn format_node_text(class: &NodeClass) -> String {
    let header = match class.parent() {
        Some(parent) => format!("{} (inherits {parent})", class.name()),
        None => class.name().to_string(),
    };
    let mut lines = vec![header];
    if class.search_space().is_empty() {
        lines.push("  (no hyperparameters)".to_string());
    }
    lines.extend(class.search_space().iter().map(|spec| format!("  {}", describe_spec(spec))));
    lines.join("\n")
}

/// Resolve the manifest and return the rendered output
pub fn format_spaces(args: &SpaceArgs, level: LogLevel) -> Result<String, String> {
    let outcome = load_registry(&args.manifest).map_err(|e| e.to_string())?;
    let registry = outcome.value;
    log(level, LogLevel::Verbose, &format!("Resolved {} node(s)", registry.len()));

    let classes: Vec<&NodeClass> = match &args.node {
        Some(name) => vec![registry.get(name).ok_or_else(|| format!("Unknown node: {name}"))?],
        None => registry.iter().collect(),
    };

    match args.format {
        OutputFormat::Text => {
            Ok(classes.iter().map(|c| format_node_text(c)).collect::<Vec<_>>().join("\n\n"))
        }
        format => {
            let map: Mapping = classes
                .iter()
                .map(|c| (Value::from(c.name()), c.search_space().to_value()))
                .collect();
            render(&Value::Mapping(map), format).map_err(|e| e.to_string())
        }
    }
}

pub fn run_space(args: SpaceArgs, level: LogLevel) -> Result<(), String> {
    let output = format_spaces(&args, level)?;
    println!("{}", output.trim_end());
    Ok(())
}
