use crate::event::ExtractionError;
use crate::layout::{ExtractionStats, LayoutSettings, MapBuilder, TimestampFormatter};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn keys(doc: &crate::layout::Document) -> Vec<&str> {
    doc.keys().map(String::as_str).collect()
}

#[test]
fn fields_keep_insertion_order() {
    let settings = LayoutSettings::default();
    let stats = ExtractionStats::new();

    let doc = MapBuilder::new(&settings, &stats, 4)
        .add("zeta", true, 1)
        .add("alpha", true, 2)
        .add("mid", true, 3)
        .build();

    assert_eq!(keys(&doc), vec!["zeta", "alpha", "mid"]);
}

#[test]
fn false_gate_is_a_no_op() {
    let settings = LayoutSettings::default();
    let stats = ExtractionStats::new();
    let mut called = false;

    let doc = MapBuilder::new(&settings, &stats, 2)
        .add("a", false, "x")
        .add_with("b", false, || {
            called = true;
            Ok("y")
        })
        .build();

    assert!(doc.is_empty());
    assert!(!called);
}

#[test]
fn null_values_are_still_written() {
    let settings = LayoutSettings::default();
    let stats = ExtractionStats::new();

    let doc = MapBuilder::new(&settings, &stats, 1)
        .add("remoteUser", true, Value::Null)
        .build();

    assert_eq!(doc.get("remoteUser"), Some(&Value::Null));
}

#[test]
fn custom_field_names_rename_emitted_fields() {
    let settings = LayoutSettings::default().with_custom_field_name("message", "msg");
    let stats = ExtractionStats::new();

    let doc = MapBuilder::new(&settings, &stats, 2)
        .add("level", true, "INFO")
        .add("message", true, "hi")
        .build();

    assert_eq!(keys(&doc), vec!["level", "msg"]);
}

#[test]
fn override_for_disabled_field_has_no_effect() {
    let settings = LayoutSettings::default().with_custom_field_name("message", "msg");
    let stats = ExtractionStats::new();

    let doc = MapBuilder::new(&settings, &stats, 2)
        .add("level", true, "INFO")
        .add("message", false, "hi")
        .build();

    assert_eq!(Value::Object(doc), json!({"level": "INFO"}));
}

#[test]
fn additional_fields_come_last_and_win_collisions() {
    let settings = LayoutSettings::default()
        .with_additional_field("service", "billing")
        .with_additional_field("level", "OVERRIDDEN");
    let stats = ExtractionStats::new();

    let doc = MapBuilder::new(&settings, &stats, 2)
        .add("level", true, "INFO")
        .add("message", true, "hi")
        .build();

    assert_eq!(keys(&doc), vec!["level", "message", "service"]);
    assert_eq!(doc["level"], json!("OVERRIDDEN"));
}

#[test]
fn additional_fields_appear_with_nothing_included() {
    let settings = LayoutSettings::default().with_additional_field("env", "prod");
    let stats = ExtractionStats::new();

    let doc = MapBuilder::new(&settings, &stats, 1)
        .add("level", false, "INFO")
        .build();

    assert_eq!(Value::Object(doc), json!({"env": "prod"}));
}

#[test]
fn timestamps_go_through_the_formatter() {
    let settings = LayoutSettings::default().with_timestamp_formatter(
        TimestampFormatter::new(Some("yyyy-MM-dd"), "UTC").unwrap(),
    );
    let stats = ExtractionStats::new();

    let doc = MapBuilder::new(&settings, &stats, 2)
        .add_timestamp("timestamp", true, 1513956631000)
        .add_timestamp("skipped", false, 0)
        .build();

    assert_eq!(Value::Object(doc), json!({"timestamp": "2017-12-22"}));
}

#[test]
fn extraction_failure_omits_field_and_is_counted() {
    let settings = LayoutSettings::default();
    let stats = ExtractionStats::new();

    let doc = MapBuilder::new(&settings, &stats, 3)
        .add("before", true, 1)
        .add_with::<String, _>("broken", true, || {
            Err(ExtractionError::Unavailable {
                attribute: "broken",
            })
        })
        .add_timestamp_with("ts", true, || {
            Err(ExtractionError::malformed("timestamp", "clock skew"))
        })
        .add("after", true, 2)
        .build();

    assert_eq!(keys(&doc), vec!["before", "after"]);
    assert_eq!(stats.failures(), 2);
}

#[test]
fn unrepresentable_values_are_contained() {
    use std::collections::HashMap;

    let settings = LayoutSettings::default();
    let stats = ExtractionStats::new();
    let mut bad_keys = HashMap::new();
    bad_keys.insert((1, 2), "tuple keys are not JSON");

    let doc = MapBuilder::new(&settings, &stats, 1)
        .add_with("bad", true, || Ok(&bad_keys))
        .build();

    assert!(doc.is_empty());
    assert_eq!(stats.failures(), 1);
}
