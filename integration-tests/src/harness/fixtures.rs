use jsonlayout_core::cli::stream::{EventKind, StreamSummary, process_stream};
use jsonlayout_core::conf::load_layouts;
use jsonlayout_core::layout::LayoutHandle;
use jsonlayout_core::runtime::{Layouts, build_layouts};
use serde_json::Value;
use std::path::PathBuf;

pub fn fixture_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(file)
}

pub fn load_fixture(file: &str) -> LayoutHandle<Layouts> {
    let cfg = load_layouts(&fixture_path(file)).expect("failed to load fixture config");
    let layouts = build_layouts(&cfg).expect("failed to build fixture layouts");
    LayoutHandle::new(layouts)
}

/// Runs JSON-lines `input` through the stream processor and decodes every output line.
pub fn project(
    kind: EventKind,
    handle: &LayoutHandle<Layouts>,
    input: &str,
) -> (Vec<Value>, StreamSummary) {
    let mut out = Vec::new();
    let summary =
        process_stream(kind, handle, input.as_bytes(), &mut out).expect("stream processing failed");

    let text = String::from_utf8(out).expect("output is not UTF-8");
    let docs = text
        .lines()
        .map(|line| serde_json::from_str(line).expect("output line is not JSON"))
        .collect();

    (docs, summary)
}
