use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::generator::DEFAULT_SEPARATOR;

lazy_static! {
    static ref NUMERIC_SUFFIX: Regex = Regex::new(r"^[0-9]+$").expect("valid suffix pattern");
}

/// An ID split back into its word components and optional numeric suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedId {
    pub components: Vec<String>,
    pub suffix: Option<String>,
}

/// Splits `id` on `separator` (`"-"` when empty).
///
/// A final part made only of ASCII digits is treated as the suffix. This is a
/// heuristic: non-numeric suffixes such as hex or letters stay in
/// `components`, and an all-digit word would be misread as a suffix.
///
/// ```
/// use memorable_ids::parse;
///
/// let parsed = parse("cute-rabbit-042", "-");
/// assert_eq!(parsed.components, vec!["cute", "rabbit"]);
/// assert_eq!(parsed.suffix.as_deref(), Some("042"));
/// ```
pub fn parse(id: &str, separator: &str) -> ParsedId {
    let separator = if separator.is_empty() {
        DEFAULT_SEPARATOR
    } else {
        separator
    };

    let mut components: Vec<String> = id.split(separator).map(str::to_string).collect();

    let suffix = match components.last() {
        Some(last) if NUMERIC_SUFFIX.is_match(last) => components.pop(),
        _ => None,
    };

    ParsedId { components, suffix }
}
