use crate::event::Headers;
use std::collections::BTreeSet;

/// Keeps the headers whose name matches one of `wanted`, ignoring ASCII case.
///
/// Output follows the order of `headers`. Case variants of one name are matched
/// independently and kept as separate entries.
pub fn filter_headers(headers: &Headers, wanted: &BTreeSet<String>) -> Headers {
    if wanted.is_empty() {
        return Headers::new();
    }

    headers
        .iter()
        .filter(|(name, _)| wanted.iter().any(|w| w.eq_ignore_ascii_case(name)))
        .collect()
}
