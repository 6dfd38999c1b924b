//! Hyperparameter spec and distribution types

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

/// Continuous distribution a numeric hyperparameter is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Distribution {
    /// Normal distribution N(mu, sigma)
    Normal { mu: f64, sigma: f64 },
    /// Uniform distribution on [min, max]
    Uniform { min: f64, max: f64 },
}

impl Distribution {
    fn write_fields(&self, map: &mut Mapping) {
        match self {
            Distribution::Normal { mu, sigma } => {
                map.insert("mu".into(), Value::from(*mu));
                map.insert("sigma".into(), Value::from(*sigma));
            }
            Distribution::Uniform { min, max } => {
                map.insert("min".into(), Value::from(*min));
                map.insert("max".into(), Value::from(*max));
            }
        }
    }
}

/// Search-space dimension kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    /// Ordered set of candidate values
    Choice { choices: Vec<Value> },
    /// Choice between `true` and `false`
    Boolean,
    /// Unquantized continuous distribution
    Distribution(Distribution),
    /// Distribution whose samples are rounded to multiples of `q`
    Quantized { base: Distribution, q: f64 },
}

/// One declared search-space dimension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HyperparameterSpec {
    pub name: String,
    pub kind: ParameterKind,
}

impl HyperparameterSpec {
    pub fn new(name: impl Into<String>, kind: ParameterKind) -> Self {
        Self { name: name.into(), kind }
    }

    /// Candidate values for discrete kinds, `None` for distributions
    pub fn choices(&self) -> Option<Vec<Value>> {
        match &self.kind {
            ParameterKind::Choice { choices } => Some(choices.clone()),
            ParameterKind::Boolean => Some(vec![Value::Bool(true), Value::Bool(false)]),
            _ => None,
        }
    }

    /// Underlying distribution for continuous kinds
    pub fn distribution(&self) -> Option<Distribution> {
        match &self.kind {
            ParameterKind::Distribution(d) | ParameterKind::Quantized { base: d, .. } => Some(*d),
            _ => None,
        }
    }

    /// Quantization step, if any
    pub fn quantization(&self) -> Option<f64> {
        match &self.kind {
            ParameterKind::Quantized { q, .. } => Some(*q),
            _ => None,
        }
    }

    /// Render the dimension in the shape external optimizers read.
    ///
    /// Discrete kinds become a list of candidates; continuous kinds become a
    /// mapping `{type: float, mu, sigma}` or `{type: float, min, max}` with an
    /// extra `q` entry when quantized.
    pub fn to_value(&self) -> Value {
        if let Some(choices) = self.choices() {
            return Value::Sequence(choices);
        }
        let mut map = Mapping::new();
        map.insert("type".into(), "float".into());
        if let Some(dist) = self.distribution() {
            dist.write_fields(&mut map);
        }
        if let Some(q) = self.quantization() {
            map.insert("q".into(), Value::from(q));
        }
        Value::Mapping(map)
    }
}
