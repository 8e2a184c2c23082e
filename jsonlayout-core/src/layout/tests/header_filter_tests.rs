use crate::event::Headers;
use crate::layout::filter_headers;
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;

fn wanted(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn source() -> Headers {
    [
        ("Host", "example.com"),
        ("user-agent", "curl/7.0"),
        ("Accept", "*/*"),
        ("USER-AGENT", "shouting"),
    ]
    .into_iter()
    .collect()
}

#[test]
fn empty_wanted_set_yields_empty_headers() {
    assert!(filter_headers(&source(), &wanted(&[])).is_empty());
}

#[test]
fn matching_ignores_case() {
    let out = filter_headers(&source(), &wanted(&["User-Agent"]));

    let pairs: Vec<_> = out.iter().collect();
    assert_eq!(
        pairs,
        vec![("user-agent", "curl/7.0"), ("USER-AGENT", "shouting")]
    );
}

#[test]
fn output_follows_source_order() {
    let out = filter_headers(&source(), &wanted(&["accept", "host"]));

    let names: Vec<_> = out.iter().map(|(k, _)| k).collect();
    assert_eq!(names, vec!["Host", "Accept"]);
}

#[test]
fn unknown_names_match_nothing() {
    assert!(filter_headers(&source(), &wanted(&["X-Request-Id"])).is_empty());
}
