//! Link extraction - finds `[[Name]]` cross-references in free text.

use std::sync::LazyLock;

use campaign_records::Entity;
use regex::Regex;

/// `[[` + a name without brackets + `]]`. A name containing a bracket is
/// malformed and never matches, so an unterminated `[[` cannot swallow the
/// marker that follows it.
const WIKI_LINK_PATTERN: &str = r"\[\[([^\[\]]+)\]\]";

static WIKI_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(WIKI_LINK_PATTERN).unwrap_or_else(|_| panic!("Invalid Regex")));

/// Extract link target names from a text value, in order of appearance.
///
/// Duplicates are kept. Absent or empty text yields an empty list.
pub fn extract_links(text: Option<&str>) -> Vec<String> {
    let Some(text) = text else {
        return Vec::new();
    };

    WIKI_LINK_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Extract link targets across every text field of an entity, in field order.
pub fn extract_entity_links(entity: &Entity) -> Vec<String> {
    entity
        .text_fields()
        .into_iter()
        .flat_map(|field| extract_links(Some(field)))
        .collect()
}
