//! Substitution on already-parsed YAML structures
//!
//! Walks sequences and mappings recursively. A string scalar that exactly
//! equals a name is replaced; mapping keys equal to the name are renamed.

use serde_yaml::{Mapping, Value};

use crate::warning::{raise, Outcome, Warning};

use super::setting::{is_regular_key, ParameterSetting};

fn map_scalars<F>(value: &Value, f: &F) -> Value
where
    F: Fn(&str) -> Option<Value>,
{
    match value {
        Value::String(s) => f(s).unwrap_or_else(|| value.clone()),
        Value::Sequence(items) => Value::Sequence(items.iter().map(|item| map_scalars(item, f)).collect()),
        Value::Mapping(map) => Value::Mapping(map_mapping(map, f)),
        Value::Tagged(tagged) => {
            let mut tagged = tagged.clone();
            tagged.value = map_scalars(&tagged.value, f);
            Value::Tagged(tagged)
        }
        _ => value.clone(),
    }
}

fn map_mapping<F>(map: &Mapping, f: &F) -> Mapping
where
    F: Fn(&str) -> Option<Value>,
{
    map.iter().map(|(k, v)| (map_scalars(k, f), map_scalars(v, f))).collect()
}

/// Replace `name` by `replacement` in every element of `list`, recursively
pub fn replace_in_list(list: &[Value], name: &str, replacement: &Value) -> Vec<Value> {
    let f = |s: &str| (s == name).then(|| replacement.clone());
    list.iter().map(|item| map_scalars(item, &f)).collect()
}

/// Replace `name` by `replacement` in keys and values of `map`, recursively
pub fn replace_in_dict(map: &Mapping, name: &str, replacement: &Value) -> Mapping {
    let f = |s: &str| (s == name).then(|| replacement.clone());
    map_mapping(map, &f)
}

/// Replace `name` by `replacement` anywhere in `value`
pub fn replace_in_value(value: &Value, name: &str, replacement: &Value) -> Value {
    let f = |s: &str| (s == name).then(|| replacement.clone());
    map_scalars(value, &f)
}

/// Apply every key of `setting` to a parsed structure in one pass.
///
/// A scalar `#key#` becomes the literal key and a scalar equal to a key
/// becomes its value. Values are inserted as-is and never re-scanned. Keys
/// without the `_`/`~` prefix raise [`Warning::IrregularParameter`].
pub fn replace_parameters_structural(value: &Value, setting: &ParameterSetting) -> Outcome<Value> {
    let mut warnings = Vec::new();
    for key in setting.keys().filter(|key| !is_regular_key(key)) {
        raise(&mut warnings, Warning::IrregularParameter { key: key.to_string() });
    }
    let f = |s: &str| {
        let guarded = s.strip_prefix('#').and_then(|inner| inner.strip_suffix('#'));
        match guarded {
            Some(key) if setting.get(key).is_some() => Some(Value::String(key.to_string())),
            _ => setting.get(s).cloned(),
        }
    };
    Outcome::new(map_scalars(value, &f), warnings)
}
