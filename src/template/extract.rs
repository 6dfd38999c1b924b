//! Extraction of a top-level block from a line-oriented YAML document

use crate::warning::{raise, Outcome, Warning};

/// Return the indented lines below the first line starting with `keyword`.
///
/// Blank and comment lines inside the block are skipped. The block ends at
/// the first non-indented line containing `:`; any other non-indented line
/// is kept and raises [`Warning::UnexpectedLine`].
///
/// ```
/// use spacetune::template::extract_key_str;
///
/// let block = extract_key_str("node_chain:\n  - a\n  - b\nother_key: 1", "node_chain");
/// assert_eq!(block.value, "  - a\n  - b");
/// ```
pub fn extract_key_str(document: &str, keyword: &str) -> Outcome<String> {
    let mut warnings = Vec::new();
    let mut found = false;
    let mut lines = Vec::new();

    for line in document.split('\n') {
        if !found {
            found = line.starts_with(keyword);
            continue;
        }
        let short = line.trim();
        if short.is_empty() || short.starts_with('#') {
            continue;
        } else if line.starts_with([' ', '\t']) {
            lines.push(line);
        } else if line.contains(':') {
            break;
        } else {
            raise(&mut warnings, Warning::UnexpectedLine { line: line.to_string() });
            lines.push(line);
        }
    }
    Outcome::new(lines.join("\n"), warnings)
}
