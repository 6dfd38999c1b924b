//! Parameter decorators
//!
//! A decorator is one delta applied to a search space: it either declares a
//! dimension (replacing an earlier declaration of the same name) or removes
//! one from optimization.

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use super::spec::{Distribution, HyperparameterSpec, ParameterKind};

/// Search-space delta attached to a node class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterDecorator {
    /// Declare (or redeclare) a dimension
    Declare(HyperparameterSpec),
    /// Remove the named dimension from the search space
    NoOptimization { name: String },
}

impl ParameterDecorator {
    /// Choice among `choices`; a non-sequence value becomes a single-element list.
    pub fn choice(name: impl Into<String>, choices: impl Into<Value>) -> Self {
        let choices = match choices.into() {
            Value::Sequence(items) => items,
            other => vec![other],
        };
        Self::declare(name, ParameterKind::Choice { choices })
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Self::declare(name, ParameterKind::Boolean)
    }

    pub fn normal(name: impl Into<String>, mu: f64, sigma: f64) -> Self {
        Self::declare(name, ParameterKind::Distribution(Distribution::Normal { mu, sigma }))
    }

    pub fn uniform(name: impl Into<String>, min: f64, max: f64) -> Self {
        Self::declare(name, ParameterKind::Distribution(Distribution::Uniform { min, max }))
    }

    pub fn q_normal(name: impl Into<String>, mu: f64, sigma: f64, q: f64) -> Self {
        Self::declare(name, ParameterKind::Quantized { base: Distribution::Normal { mu, sigma }, q })
    }

    pub fn q_uniform(name: impl Into<String>, min: f64, max: f64, q: f64) -> Self {
        Self::declare(name, ParameterKind::Quantized { base: Distribution::Uniform { min, max }, q })
    }

    pub fn no_optimization(name: impl Into<String>) -> Self {
        Self::NoOptimization { name: name.into() }
    }

    fn declare(name: impl Into<String>, kind: ParameterKind) -> Self {
        Self::Declare(HyperparameterSpec::new(name, kind))
    }

    /// Name of the dimension this decorator affects
    pub fn parameter_name(&self) -> &str {
        match self {
            Self::Declare(spec) => &spec.name,
            Self::NoOptimization { name } => name,
        }
    }

    /// Whether applying this decorator removes a dimension
    pub fn is_removal(&self) -> bool {
        matches!(self, Self::NoOptimization { .. })
    }
}

impl From<HyperparameterSpec> for ParameterDecorator {
    fn from(spec: HyperparameterSpec) -> Self {
        Self::Declare(spec)
    }
}
