//! Hyperparameter annotation for processing nodes
//!
//! Node classes declare the search-space dimensions an external optimizer
//! may explore. Each annotation is a [`ParameterDecorator`] applied to the
//! class's [`SearchSpace`], producing a new space; subclasses start from a
//! copy of their parent's space, so annotating a subclass never changes the
//! parent.
//!
//! # Example
//!
//! ```
//! use spacetune::params::{NodeClass, ParameterDecorator};
//!
//! let base = NodeClass::new("BaseNode")
//!     .annotate(&ParameterDecorator::choice("kernel", vec!["linear", "rbf"]))
//!     .value;
//! let svm = base
//!     .derive("SvmNode")
//!     .annotate_all(&[
//!         ParameterDecorator::normal("complexity", 1.0, 0.5),
//!         ParameterDecorator::no_optimization("kernel"),
//!     ])
//!     .value;
//!
//! assert!(base.search_space().contains("kernel"));
//! assert!(!svm.search_space().contains("kernel"));
//! ```

mod decorator;
mod node;
mod space;
mod spec;


pub use decorator::ParameterDecorator;
pub use node::{Hyperparameterized, NodeClass, NodeDeclaration, NodeRegistry};
pub use space::SearchSpace;
pub use spec::{Distribution, HyperparameterSpec, ParameterKind};
