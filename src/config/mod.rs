//! Configuration: space manifests, parameter settings and CLI arguments

pub mod cli;
mod loader;
mod schema;

pub use cli::{parse_args, Cli, Command, ExtractArgs, InstantiateArgs, OutputFormat, SpaceArgs};
pub use loader::{load_manifest, load_registry, load_setting, parse_manifest, read_document};
pub use schema::{AnnotationDecl, NodeDecl, SpaceManifest};

#[cfg(test)]
mod tests;
