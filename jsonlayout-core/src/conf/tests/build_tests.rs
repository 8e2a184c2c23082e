use crate::attribute::{AccessAttribute, AttributeSet, EventAttribute};
use crate::conf::{AccessLayoutConfig, ConfigError, EventLayoutConfig};
use crate::event::{Level, LogRecord};
use crate::layout::JsonLayout;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn defaults_build_default_layouts() {
    let event = EventLayoutConfig::default().build().unwrap();
    let access = AccessLayoutConfig::default().build().unwrap();

    assert_eq!(event.includes(), AttributeSet::<EventAttribute>::default());
    assert_eq!(access.includes(), AttributeSet::<AccessAttribute>::default());
    assert!(access.request_headers().is_empty());
    assert_eq!(event.settings().timestamp_formatter.pattern(), None);
}

#[test]
fn explicit_empty_includes_disable_everything() {
    let cfg = EventLayoutConfig {
        includes: Some(Vec::new()),
        ..Default::default()
    };

    let layout = cfg.build().unwrap();

    assert!(layout.includes().is_empty());
}

#[test]
fn build_applies_every_setting() {
    let mut cfg = EventLayoutConfig {
        timestamp_format: Some("yyyy".into()),
        includes: Some(vec![EventAttribute::Timestamp, EventAttribute::Message]),
        json_protocol_version: Some("2".into()),
        append_line_separator: false,
        ..Default::default()
    };
    cfg.custom_field_names.insert("message".into(), "msg".into());
    cfg.additional_fields.insert("env".into(), json!("prod"));

    let layout = cfg.build().unwrap();
    let mut record = LogRecord::new(Level::Info, "app", "hi");
    record.timestamp = 1513956631000;

    assert_eq!(
        layout.do_layout(&record).unwrap(),
        r#"{"timestamp":"2017","msg":"hi","version":"2","env":"prod"}"#
    );
}

#[test]
fn validation_reports_all_problems() {
    let mut cfg = AccessLayoutConfig {
        timestamp_format: Some("yyyy qq".into()),
        time_zone: "Nowhere/Land".into(),
        ..Default::default()
    };
    cfg.custom_field_names.insert("status".into(), " ".into());
    cfg.additional_fields.insert("nested".into(), json!({"a": 1}));

    let err = cfg.build().unwrap_err();

    let ConfigError::Validation { validation_errors } = err else {
        panic!("expected validation error, got {err:?}");
    };
    // Zone failure short-circuits the pattern check inside the formatter.
    assert_eq!(validation_errors.0.len(), 3);
    assert!(validation_errors
        .0
        .iter()
        .any(|e| matches!(e, ConfigError::InvalidTimeZone { .. })));
    assert!(validation_errors
        .0
        .iter()
        .any(|e| matches!(e, ConfigError::InvalidFieldName { .. })));
    assert!(validation_errors
        .0
        .iter()
        .any(|e| matches!(e, ConfigError::InvalidAdditionalField { .. })));
}

#[test]
fn invalid_pattern_fails_build() {
    let cfg = EventLayoutConfig {
        timestamp_format: Some("HH:mm 'unterminated".into()),
        ..Default::default()
    };

    let err = cfg.build().unwrap_err();

    assert!(err.to_string().contains("unterminated"));
}
