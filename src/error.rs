//! Error types with actionable diagnostics.
//!
//! Only structural failures are errors here. Convention violations are
//! reported as [`Warning`](crate::warning::Warning)s and processing continues.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for spacetune operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by template instantiation, manifest loading and the CLI.
#[derive(Debug, Error)]
pub enum Error {
    /// Substituted template text is not valid YAML.
    #[error("Failed to parse instantiated template: {message}\n  → Check that substituted values produce valid YAML")]
    TemplateParse { message: String },

    /// Space manifest has invalid syntax or schema.
    #[error("Invalid space manifest {path}:\n  {message}\n  → Check YAML syntax at the indicated line")]
    ManifestParse { path: PathBuf, message: String },

    /// A node declares a parent that is not declared anywhere.
    #[error("Node '{node}' inherits from unknown node '{parent}'\n  → Declare '{parent}' in the manifest or fix the parent name")]
    UnknownParent { node: String, parent: String },

    /// Parent links form a loop.
    #[error("Inheritance cycle detected at node '{node}'")]
    InheritanceCycle { node: String },

    /// The same node name is declared twice.
    #[error("Node '{name}' is declared more than once")]
    DuplicateNode { name: String },

    /// Lookup of a node that the registry does not know.
    #[error("Unknown node: {name}")]
    UnknownNode { name: String },

    /// A `key=value` assignment could not be parsed.
    #[error("Invalid parameter assignment '{input}'\n  → Use the form key=value, e.g. _lr=0.01")]
    InvalidAssignment { input: String },

    /// IO error with context.
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Serialization of an output value failed.
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl Error {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { context: context.into(), source }
    }

    /// Check if this error is caused by user input rather than the environment.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, Self::Io { .. } | Self::Serialization { .. })
    }

    /// Get the error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::TemplateParse { .. } => "E001",
            Self::ManifestParse { .. } => "E010",
            Self::UnknownParent { .. } => "E011",
            Self::InheritanceCycle { .. } => "E012",
            Self::DuplicateNode { .. } => "E013",
            Self::UnknownNode { .. } => "E014",
            Self::InvalidAssignment { .. } => "E020",
            Self::Io { .. } => "E050",
            Self::Serialization { .. } => "E051",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_unique() {
        let errors = vec![
            Error::TemplateParse { message: "".into() },
            Error::ManifestParse { path: "".into(), message: "".into() },
            Error::UnknownParent { node: "".into(), parent: "".into() },
            Error::InheritanceCycle { node: "".into() },
            Error::DuplicateNode { name: "".into() },
            Error::UnknownNode { name: "".into() },
            Error::InvalidAssignment { input: "".into() },
            Error::io("", std::io::Error::new(std::io::ErrorKind::Other, "x")),
            Error::Serialization { message: "".into() },
        ];

        let codes: Vec<_> = errors.iter().map(|e| e.code()).collect();
        let unique: std::collections::HashSet<_> = codes.iter().collect();
        assert_eq!(unique.len(), codes.len());
        assert!(codes.iter().all(|c| c.starts_with('E')));
    }

    #[test]
    fn test_unknown_parent_is_actionable() {
        let err = Error::UnknownParent { node: "SvmNode".into(), parent: "BaseNode".into() };
        let msg = err.to_string();
        assert!(msg.contains("SvmNode"));
        assert!(msg.contains("BaseNode"));
        assert!(msg.contains("Declare"));
    }

    #[test]
    fn test_io_error_constructor() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::io("reading template", io_err);

        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("reading template"));
        assert!(!err.is_user_error());
    }

    #[test]
    fn test_assignment_error_is_user_error() {
        let err = Error::InvalidAssignment { input: "novalue".into() };
        assert!(err.is_user_error());
        assert!(err.to_string().contains("key=value"));
    }
}
