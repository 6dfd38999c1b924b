//! Loading manifests, parameter settings and template documents from disk

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::params::NodeRegistry;
use crate::template::ParameterSetting;
use crate::warning::Outcome;

use super::schema::SpaceManifest;

/// Read a UTF-8 text file
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))
}

/// Parse a space manifest from YAML text. `origin` is only used in errors.
pub fn parse_manifest(yaml: &str, origin: &Path) -> Result<SpaceManifest> {
    serde_yaml::from_str(yaml)
        .map_err(|e| Error::ManifestParse { path: origin.to_path_buf(), message: e.to_string() })
}

/// Load a space manifest from a YAML file
pub fn load_manifest<P: AsRef<Path>>(path: P) -> Result<SpaceManifest> {
    let path = path.as_ref();
    let content = read_document(path)?;
    parse_manifest(&content, path)
}

/// Load a manifest and resolve it into a node registry
pub fn load_registry<P: AsRef<Path>>(path: P) -> Result<Outcome<NodeRegistry>> {
    let manifest = load_manifest(path)?;
    NodeRegistry::from_declarations(&manifest.declarations())
}

/// Load a parameter setting (YAML mapping of key -> value)
pub fn load_setting<P: AsRef<Path>>(path: P) -> Result<ParameterSetting> {
    let path = path.as_ref();
    let content = read_document(path)?;
    if content.trim().is_empty() {
        return Ok(ParameterSetting::new());
    }
    serde_yaml::from_str(&content)
        .map_err(|e| Error::ManifestParse { path: path.to_path_buf(), message: e.to_string() })
}
