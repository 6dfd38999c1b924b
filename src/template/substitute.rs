//! Textual template instantiation

use serde_yaml::Value;
use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::warning::{raise, Outcome, Warning};

use super::encode::{literal_text, yaml_text};
use super::extract::extract_key_str;
use super::lexer::{tokenize, Token};
use super::setting::{is_regular_key, ParameterSetting};
use super::structural::replace_parameters_structural;

/// A node-chain template before or after YAML parsing
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateSpec {
    /// Raw template text
    Text(String),
    /// Already-parsed structure
    Structure(Value),
}

impl From<&str> for TemplateSpec {
    fn from(text: &str) -> Self {
        TemplateSpec::Text(text.to_string())
    }
}

impl From<String> for TemplateSpec {
    fn from(text: String) -> Self {
        TemplateSpec::Text(text)
    }
}

impl From<Value> for TemplateSpec {
    fn from(value: Value) -> Self {
        TemplateSpec::Structure(value)
    }
}

/// Substitution text for one key
fn substitution(key: &str, value: &Value, warnings: &mut Vec<Warning>) -> String {
    if !is_regular_key(key) {
        raise(warnings, Warning::IrregularParameter { key: key.to_string() });
        return yaml_text(value).collect_into(warnings);
    }
    match value {
        Value::String(s) => s.clone(),
        other => match literal_text(other) {
            Some(text) => text,
            None => yaml_text(other).collect_into(warnings),
        },
    }
}

/// Replace every placeholder of `setting` in `text`.
///
/// `#key#` is kept as the literal key text, a bare key becomes its value.
/// Regular keys (`_`/`~` prefix) insert strings verbatim and other values as
/// literals; any other key is YAML-encoded and raises
/// [`Warning::IrregularParameter`]. Substituted values are not re-scanned.
pub fn replace_parameters(text: &str, setting: &ParameterSetting) -> Outcome<String> {
    let mut warnings = Vec::new();
    let rendered: BTreeMap<&str, String> =
        setting.iter().map(|(key, value)| (key, substitution(key, value, &mut warnings))).collect();

    let keys: Vec<&str> = setting.keys().collect();
    let mut out = String::with_capacity(text.len());
    for token in tokenize(text, &keys) {
        match token {
            Token::Text(s) | Token::Guard(s) => out.push_str(s),
            Token::Placeholder(key) => out.push_str(rendered.get(key).map_or(key, String::as_str)),
        }
    }
    Outcome::new(out, warnings)
}

/// Instantiate a template and return the parsed structure.
///
/// Text is substituted then parsed as YAML; a parse failure is the only
/// error. A structure is substituted in place of matching scalars and
/// returned without a parse step.
pub fn instantiate(spec: &TemplateSpec, setting: &ParameterSetting) -> Result<Outcome<Value>> {
    match spec {
        TemplateSpec::Text(text) => instantiate_text(text, setting),
        TemplateSpec::Structure(value) => Ok(replace_parameters_structural(value, setting)),
    }
}

/// Substitute `setting` into `text` and parse the result
pub fn instantiate_text(text: &str, setting: &ParameterSetting) -> Result<Outcome<Value>> {
    let Outcome { value: substituted, warnings } = replace_parameters(text, setting);
    let parsed: Value = serde_yaml::from_str(&substituted)
        .map_err(|e| Error::TemplateParse { message: e.to_string() })?;
    Ok(Outcome::new(parsed, warnings))
}

/// Extract the block under `keyword` from a full document, then instantiate it
pub fn instantiate_document(
    document: &str,
    keyword: &str,
    setting: &ParameterSetting,
) -> Result<Outcome<Value>> {
    let mut warnings = Vec::new();
    let block = extract_key_str(document, keyword).collect_into(&mut warnings);
    let parsed = instantiate_text(&block, setting)?.collect_into(&mut warnings);
    Ok(Outcome::new(parsed, warnings))
}
