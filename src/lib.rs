//! spacetune: hyperparameter search spaces and node-chain templates
//!
//! Two small building blocks for processing-node frameworks whose pipelines
//! are described in YAML and tuned by an external optimizer:
//!
//! - [`params`]: declare the search space of node classes with
//!   [`ParameterDecorator`]s (choice, boolean, normal, uniform, quantized,
//!   no-optimization). Spaces are values: subclasses start from a copy of the
//!   parent's space and redeclaring a name replaces it with a warning.
//! - [`template`]: instantiate node-chain templates by substituting
//!   placeholder keys (`_c`, `~kernel`) with concrete values, either in the
//!   YAML text before parsing or in an already-parsed structure.
//!
//! Convention violations never fail: they are returned as
//! [`Warning`]s next to the result and logged through `tracing`.
//! Only a substituted template that is not valid YAML is an [`Error`].

pub mod cli;
pub mod config;
pub mod error;
pub mod params;
pub mod template;
pub mod warning;

pub use error::{Error, Result};
pub use params::{
    Distribution, HyperparameterSpec, Hyperparameterized, NodeClass, NodeRegistry, ParameterDecorator,
    ParameterKind, SearchSpace,
};
pub use template::{
    extract_key_str, instantiate, replace_parameters, replace_parameters_structural, ParameterSetting,
    TemplateSpec,
};
pub use warning::{Outcome, Warning};
