//! Node classes and their inherited search spaces

use std::collections::{BTreeMap, HashSet};

use crate::error::{Error, Result};
use crate::warning::{Outcome, Warning};

use super::decorator::ParameterDecorator;
use super::space::SearchSpace;

/// Implemented by node types that declare a search space.
///
/// ```ignore
/// struct SvmNode;
///
/// impl Hyperparameterized for SvmNode {
///     fn search_space() -> Outcome<SearchSpace> {
///         SearchSpace::inherit(
///             Some(&BaseNode::search_space().value),
///             &[ParameterDecorator::normal("complexity", 1.0, 0.5)],
///         )
///     }
/// }
/// ```
pub trait Hyperparameterized {
    /// Declared search space; empty for nodes without annotations
    fn search_space() -> Outcome<SearchSpace> {
        Outcome::clean(SearchSpace::new())
    }
}

/// A named node class carrying its own search space
#[derive(Debug, Clone, PartialEq)]
pub struct NodeClass {
    name: String,
    parent: Option<String>,
    space: SearchSpace,
}

impl NodeClass {
    /// Root class with an empty search space
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), parent: None, space: SearchSpace::new() }
    }

    /// Subclass starting from a copy of this class's search space
    pub fn derive(&self, name: impl Into<String>) -> Self {
        Self { name: name.into(), parent: Some(self.name.clone()), space: self.space.clone() }
    }

    /// Apply one decorator, rebinding this class to the new space
    pub fn annotate(self, decorator: &ParameterDecorator) -> Outcome<Self> {
        let Self { name, parent, space } = self;
        space.apply(decorator).map(|space| Self { name, parent, space })
    }

    /// Apply decorators in order
    pub fn annotate_all(self, decorators: &[ParameterDecorator]) -> Outcome<Self> {
        let Self { name, parent, space } = self;
        space.apply_all(decorators).map(|space| Self { name, parent, space })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    pub fn search_space(&self) -> &SearchSpace {
        &self.space
    }
}

/// Declaration of a node class: name, optional parent and annotations
#[derive(Debug, Clone, PartialEq)]
pub struct NodeDeclaration {
    pub name: String,
    pub parent: Option<String>,
    pub decorators: Vec<ParameterDecorator>,
}

/// Resolved node classes keyed by name
#[derive(Debug, Clone, Default)]
pub struct NodeRegistry {
    nodes: BTreeMap<String, NodeClass>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve declarations into classes, parents before children.
    ///
    /// Declaration order does not matter. Fails on duplicate names, unknown
    /// parents and inheritance cycles.
    pub fn from_declarations(declarations: &[NodeDeclaration]) -> Result<Outcome<Self>> {
        let mut by_name = BTreeMap::new();
        for decl in declarations {
            if by_name.insert(decl.name.as_str(), decl).is_some() {
                return Err(Error::DuplicateNode { name: decl.name.clone() });
            }
        }

        let mut registry = Self::new();
        let mut warnings = Vec::new();
        for decl in declarations {
            let mut visiting = HashSet::new();
            registry.resolve(decl, &by_name, &mut visiting, &mut warnings)?;
        }
        Ok(Outcome::new(registry, warnings))
    }

    fn resolve(
        &mut self,
        decl: &NodeDeclaration,
        by_name: &BTreeMap<&str, &NodeDeclaration>,
        visiting: &mut HashSet<String>,
        warnings: &mut Vec<Warning>,
    ) -> Result<()> {
        if self.nodes.contains_key(&decl.name) {
            return Ok(());
        }
        if !visiting.insert(decl.name.clone()) {
            return Err(Error::InheritanceCycle { node: decl.name.clone() });
        }

        let base = match &decl.parent {
            Some(parent) => {
                let parent_decl = by_name.get(parent.as_str()).ok_or_else(|| Error::UnknownParent {
                    node: decl.name.clone(),
                    parent: parent.clone(),
                })?;
                self.resolve(parent_decl, by_name, visiting, warnings)?;
                match self.nodes.get(parent) {
                    Some(parent_class) => parent_class.derive(&decl.name),
                    None => return Err(Error::UnknownNode { name: parent.clone() }),
                }
            }
            None => NodeClass::new(&decl.name),
        };

        let class = base.annotate_all(&decl.decorators).collect_into(warnings);
        self.nodes.insert(decl.name.clone(), class);
        Ok(())
    }

    /// Register an already-built class, replacing any class of the same name
    pub fn insert(&mut self, class: NodeClass) {
        self.nodes.insert(class.name.clone(), class);
    }

    pub fn get(&self, name: &str) -> Option<&NodeClass> {
        self.nodes.get(name)
    }

    /// Search space of the named node
    pub fn search_space(&self, name: &str) -> Result<&SearchSpace> {
        self.get(name)
            .map(NodeClass::search_space)
            .ok_or_else(|| Error::UnknownNode { name: name.to_string() })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over classes in name order
    pub fn iter(&self) -> impl Iterator<Item = &NodeClass> {
        self.nodes.values()
    }
}
