//! Value-to-text encodings for embedding values in YAML templates
//!
//! Values are rendered in flow style so that a float, list or mapping can be
//! dropped into the middle of a line and read back unchanged after parsing:
//! `2.75` stays `2.75`, `1.0` stays a float and `[1, 2]` stays a list.

use serde_yaml::Value;

use crate::warning::{raise, Outcome, Warning};

/// Characters that end a plain scalar inside a flow collection.
const FLOW_INDICATORS: &[char] = &[',', '[', ']', '{', '}', '#', '\n', '\r'];

#[derive(Debug)]
struct EncodeError(String);

/// YAML-safe text of `value`.
///
/// The value is wrapped in a one-element sequence, rendered compactly and
/// the sequence brackets are stripped. When that fails the value is plainly
/// stringified and [`Warning::UnrecognizedEncoding`] is raised.
pub fn yaml_text(value: &Value) -> Outcome<String> {
    let wrapped = flow(&Value::Sequence(vec![value.clone()]));
    match wrapped {
        Ok(text) if text.len() >= 2 && text.starts_with('[') && text.ends_with(']') => {
            Outcome::clean(text[1..text.len() - 1].to_string())
        }
        Ok(text) => fallback(value, text),
        Err(EncodeError(reason)) => fallback(value, reason),
    }
}

fn fallback(value: &Value, rendered: String) -> Outcome<String> {
    let mut warnings = Vec::new();
    raise(&mut warnings, Warning::UnrecognizedEncoding { rendered });
    Outcome::new(plain_text(value), warnings)
}

/// Literal text of a non-string value, `None` when it has no literal form.
///
/// Tagged values have no literal form; callers fall back to [`yaml_text`].
pub fn literal_text(value: &Value) -> Option<String> {
    if contains_tag(value) {
        return None;
    }
    flow(value).ok()
}

/// Plain stringification used as the last resort
pub fn plain_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => serde_json::to_string(other).unwrap_or_else(|_| format!("{other:?}")),
    }
}

fn contains_tag(value: &Value) -> bool {
    match value {
        Value::Tagged(_) => true,
        Value::Sequence(items) => items.iter().any(contains_tag),
        Value::Mapping(map) => map.iter().any(|(k, v)| contains_tag(k) || contains_tag(v)),
        _ => false,
    }
}

fn flow(value: &Value) -> Result<String, EncodeError> {
    match value {
        Value::Sequence(items) => {
            let parts = items.iter().map(flow).collect::<Result<Vec<_>, _>>()?;
            Ok(format!("[{}]", parts.join(", ")))
        }
        Value::Mapping(map) => {
            let parts = map
                .iter()
                .map(|(k, v)| Ok(format!("{}: {}", flow(k)?, flow(v)?)))
                .collect::<Result<Vec<_>, EncodeError>>()?;
            Ok(format!("{{{}}}", parts.join(", ")))
        }
        Value::Tagged(tagged) => Ok(format!("{} {}", tagged.tag, flow(&tagged.value)?)),
        Value::String(s) => string_scalar(s),
        scalar => block_scalar(scalar),
    }
}

fn block_scalar(value: &Value) -> Result<String, EncodeError> {
    let text = serde_yaml::to_string(value).map_err(|e| EncodeError(e.to_string()))?;
    let text = text.trim_end_matches('\n');
    if text.contains('\n') {
        return Err(EncodeError(format!("multi-line scalar: {text}")));
    }
    Ok(text.to_string())
}

fn string_scalar(s: &str) -> Result<String, EncodeError> {
    let quoted = |s: &str| serde_json::to_string(s).map_err(|e| EncodeError(e.to_string()));
    if s.contains(FLOW_INDICATORS) {
        return quoted(s);
    }
    match block_scalar(&Value::String(s.to_string())) {
        Ok(text) => Ok(text),
        Err(_) => quoted(s),
    }
}
