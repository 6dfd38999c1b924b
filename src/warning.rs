//! Non-fatal diagnostics
//!
//! Every warning is returned to the caller inside an [`Outcome`] and is also
//! emitted through `tracing` at `WARN` level.

use std::fmt;

/// Convention violations detected while annotating or substituting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A parameter was declared again and the new definition replaced the old one.
    DuplicateParameter { name: String },
    /// A placeholder key does not start with `_` or `~`.
    IrregularParameter { key: String },
    /// A value could not be encoded as YAML text and was stringified instead.
    UnrecognizedEncoding { rendered: String },
    /// A non-indented line without `:` appeared inside an extracted block.
    UnexpectedLine { line: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::DuplicateParameter { name } => {
                write!(f, "Hyperparameter '{name}' is defined twice, replacing the earlier definition")
            }
            Warning::IrregularParameter { key } => write!(
                f,
                "The parameter '{key}' is no regular parameter. Better use one starting with '_' or '~'. Replacing despite."
            ),
            Warning::UnrecognizedEncoding { rendered } => {
                write!(f, "Wrong format for yaml conversion of template ({rendered})")
            }
            Warning::UnexpectedLine { line } => write!(f, "Unexpected line occurred: {line}"),
        }
    }
}

impl Warning {
    /// Emit this warning through `tracing`.
    pub fn emit(&self) {
        tracing::warn!(target: "spacetune", "{self}");
    }
}

/// A value produced together with the warnings raised while producing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T> {
    pub value: T,
    pub warnings: Vec<Warning>,
}

impl<T> Outcome<T> {
    /// Outcome without warnings.
    pub fn clean(value: T) -> Self {
        Self { value, warnings: Vec::new() }
    }

    pub fn new(value: T, warnings: Vec<Warning>) -> Self {
        Self { value, warnings }
    }

    /// Whether any warning was raised.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Transform the value, keeping the warnings.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        Outcome { value: f(self.value), warnings: self.warnings }
    }

    /// Move the warnings into `sink` and return the bare value.
    pub fn collect_into(self, sink: &mut Vec<Warning>) -> T {
        sink.extend(self.warnings);
        self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

/// Push a warning into `sink` after emitting it.
pub(crate) fn raise(sink: &mut Vec<Warning>, warning: Warning) {
    warning.emit();
    sink.push(warning);
}
