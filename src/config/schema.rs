//! Space manifest schema
//!
//! A manifest declares node classes and their annotations in YAML:
//!
//! ```yaml
//! nodes:
//!   - name: BaseNode
//!     parameters:
//!       - { kind: choice, name: kernel, choices: [linear, rbf] }
//!   - name: SvmNode
//!     parent: BaseNode
//!     parameters:
//!       - { kind: normal, name: complexity, mu: 1.0, sigma: 0.5 }
//!       - { kind: no_optimization, name: kernel }
//! ```

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::params::{NodeDeclaration, ParameterDecorator};

/// Root of a space manifest
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpaceManifest {
    /// Node class declarations, in any order
    #[serde(default)]
    pub nodes: Vec<NodeDecl>,
}

/// One node class declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDecl {
    pub name: String,

    /// Class this node inherits its search space from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    /// Annotations, applied in listed order
    #[serde(default)]
    pub parameters: Vec<AnnotationDecl>,
}

/// One annotation as written in a manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnnotationDecl {
    Choice { name: String, choices: Value },
    Boolean { name: String },
    Normal { name: String, mu: f64, sigma: f64 },
    Uniform { name: String, min: f64, max: f64 },
    QNormal { name: String, mu: f64, sigma: f64, q: f64 },
    QUniform { name: String, min: f64, max: f64, q: f64 },
    NoOptimization { name: String },
}

impl From<&AnnotationDecl> for ParameterDecorator {
    fn from(decl: &AnnotationDecl) -> Self {
        match decl {
            AnnotationDecl::Choice { name, choices } => ParameterDecorator::choice(name, choices.clone()),
            AnnotationDecl::Boolean { name } => ParameterDecorator::boolean(name),
            AnnotationDecl::Normal { name, mu, sigma } => ParameterDecorator::normal(name, *mu, *sigma),
            AnnotationDecl::Uniform { name, min, max } => ParameterDecorator::uniform(name, *min, *max),
            AnnotationDecl::QNormal { name, mu, sigma, q } => {
                ParameterDecorator::q_normal(name, *mu, *sigma, *q)
            }
            AnnotationDecl::QUniform { name, min, max, q } => {
                ParameterDecorator::q_uniform(name, *min, *max, *q)
            }
            AnnotationDecl::NoOptimization { name } => ParameterDecorator::no_optimization(name),
        }
    }
}

impl From<&NodeDecl> for NodeDeclaration {
    fn from(decl: &NodeDecl) -> Self {
        NodeDeclaration {
            name: decl.name.clone(),
            parent: decl.parent.clone(),
            decorators: decl.parameters.iter().map(ParameterDecorator::from).collect(),
        }
    }
}

impl SpaceManifest {
    /// Declarations ready for [`NodeRegistry::from_declarations`](crate::params::NodeRegistry::from_declarations)
    pub fn declarations(&self) -> Vec<NodeDeclaration> {
        self.nodes.iter().map(NodeDeclaration::from).collect()
    }
}
