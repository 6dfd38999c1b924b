//! Hyperparameter search space

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;

use crate::warning::{raise, Outcome, Warning};

use super::decorator::ParameterDecorator;
use super::spec::HyperparameterSpec;

/// Search space of a node class
///
/// Spaces are values: [`SearchSpace::apply`] builds a new space from the
/// current one plus one delta and never touches the receiver, so a subclass
/// space derived from a parent can be annotated freely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchSpace {
    /// Parameter name -> spec mapping
    params: BTreeMap<String, HyperparameterSpec>,
}

impl SearchSpace {
    /// Create an empty search space
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one decorator and return the resulting space.
    ///
    /// Redeclaring an existing name replaces it and raises
    /// [`Warning::DuplicateParameter`]. Removing an absent name is a no-op.
    pub fn apply(&self, decorator: &ParameterDecorator) -> Outcome<SearchSpace> {
        let mut params = self.params.clone();
        let mut warnings = Vec::new();
        match decorator {
            ParameterDecorator::Declare(spec) => {
                if params.insert(spec.name.clone(), spec.clone()).is_some() {
                    raise(&mut warnings, Warning::DuplicateParameter { name: spec.name.clone() });
                }
            }
            ParameterDecorator::NoOptimization { name } => {
                params.remove(name);
            }
        }
        Outcome::new(SearchSpace { params }, warnings)
    }

    /// Apply decorators in order, each building on the previous result
    pub fn apply_all<'a, I>(&self, decorators: I) -> Outcome<SearchSpace>
    where
        I: IntoIterator<Item = &'a ParameterDecorator>,
    {
        let mut warnings = Vec::new();
        let mut space = self.clone();
        for decorator in decorators {
            space = space.apply(decorator).collect_into(&mut warnings);
        }
        Outcome::new(space, warnings)
    }

    /// Build a subclass space from an optional parent space plus decorators
    pub fn inherit(parent: Option<&SearchSpace>, decorators: &[ParameterDecorator]) -> Outcome<SearchSpace> {
        parent.cloned().unwrap_or_default().apply_all(decorators)
    }

    /// Get a parameter spec
    pub fn get(&self, name: &str) -> Option<&HyperparameterSpec> {
        self.params.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    /// Check if space is empty
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Get number of parameters
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Iterate over parameters in name order
    pub fn iter(&self) -> impl Iterator<Item = &HyperparameterSpec> {
        self.params.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.params.keys().map(String::as_str)
    }

    /// Render as the `name -> dimension` mapping external optimizers consume
    pub fn to_value(&self) -> Value {
        let map: Mapping =
            self.params.iter().map(|(name, spec)| (Value::from(name.as_str()), spec.to_value())).collect();
        Value::Mapping(map)
    }
}

impl FromIterator<HyperparameterSpec> for SearchSpace {
    fn from_iter<I: IntoIterator<Item = HyperparameterSpec>>(iter: I) -> Self {
        Self { params: iter.into_iter().map(|spec| (spec.name.clone(), spec)).collect() }
    }
}
