//! Placeholder tokenizer
//!
//! Splits template text into literal runs, guarded keys (`#key#`) and bare
//! placeholders in a single left-to-right pass over all keys at once. At a
//! given position a guard wins over a bare key and longer keys win over
//! shorter ones, so `_a` never matches inside `_ab` when both are keys.

/// One lexical unit of a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Literal text, copied unchanged
    Text(&'a str),
    /// `#key#`, rendered as the bare key text
    Guard(&'a str),
    /// Bare key, rendered as its substitution
    Placeholder(&'a str),
}

/// Tokenize `text` against `keys`. Empty keys are ignored.
pub fn tokenize<'a>(text: &'a str, keys: &[&'a str]) -> Vec<Token<'a>> {
    let mut keys: Vec<&'a str> = keys.iter().copied().filter(|k| !k.is_empty()).collect();
    keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let mut tokens = Vec::new();
    let mut run_start = 0;
    let mut pos = 0;
    while pos < text.len() {
        let rest = &text[pos..];
        let matched = match_guard(rest, &keys)
            .map(|(key, len)| (Token::Guard(key), len))
            .or_else(|| {
                keys.iter().find(|k| rest.starts_with(**k)).map(|k| (Token::Placeholder(*k), k.len()))
            });

        match matched {
            Some((token, len)) => {
                if run_start < pos {
                    tokens.push(Token::Text(&text[run_start..pos]));
                }
                tokens.push(token);
                pos += len;
                run_start = pos;
            }
            None => {
                pos += rest.chars().next().map_or(1, char::len_utf8);
            }
        }
    }
    if run_start < text.len() {
        tokens.push(Token::Text(&text[run_start..]));
    }
    tokens
}

fn match_guard<'a>(rest: &str, keys: &[&'a str]) -> Option<(&'a str, usize)> {
    let inner = rest.strip_prefix('#')?;
    keys.iter()
        .find(|k| inner.strip_prefix(**k).is_some_and(|after| after.starts_with('#')))
        .map(|k| (*k, k.len() + 2))
}
