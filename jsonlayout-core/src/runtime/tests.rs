use crate::conf::{ConfigError, parse_layouts};
use crate::event::{Level, LogRecord};
use crate::layout::{JsonLayout, LayoutHandle};
use crate::runtime::{Layouts, build_layouts, reload_layouts};
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use tempfile::tempdir;

#[test]
fn build_layouts_builds_configured_kinds_only() {
    let cfg = parse_layouts(
        r#"
access_layout = {
  request_headers = ["User-Agent"]
}
"#,
        Path::new("inline.hcl"),
    )
    .unwrap();

    let layouts = build_layouts(&cfg).unwrap();

    assert!(layouts.event.is_none());
    assert!(layouts.access.is_some());
}

#[test]
fn reload_swaps_whole_layouts() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("layouts.hcl");
    fs::write(&path, "event_layout = {}\n").unwrap();

    let handle = LayoutHandle::new(Layouts::default());
    let record = LogRecord::new(Level::Info, "app", "hello");

    // Act
    reload_layouts(&path, &handle).unwrap();
    let before = handle.load();

    fs::write(
        &path,
        r#"
event_layout = {
  includes = ["message"]
  additional_fields = { env = "prod" }
}
"#,
    )
    .unwrap();
    reload_layouts(&path, &handle).unwrap();
    let after = handle.load();

    // Assert
    let old_doc = before.event.as_ref().unwrap().to_json_map(&record);
    let new_doc = after.event.as_ref().unwrap().to_json_map(&record);
    assert!(old_doc.contains_key("level"));
    assert!(!old_doc.contains_key("env"));
    assert_eq!(new_doc.keys().collect::<Vec<_>>(), vec!["message", "env"]);
}

#[test]
fn failed_reload_keeps_current_layouts() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("layouts.hcl");
    fs::write(&path, "event_layout = {}\n").unwrap();
    let handle = LayoutHandle::new(Layouts::default());
    reload_layouts(&path, &handle).unwrap();

    fs::write(
        &path,
        r#"
event_layout = {
  time_zone = "Mars/Olympus"
}
"#,
    )
    .unwrap();

    // Act
    let err = reload_layouts(&path, &handle).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::Validation { .. }));
    assert!(handle.load().event.is_some());
}

#[test]
fn readers_see_whole_layouts_during_reloads() {
    // Arrange
    let dir = tempdir().unwrap();
    let full = dir.path().join("full.hcl");
    let slim = dir.path().join("slim.hcl");
    fs::write(&full, "event_layout = {}\n").unwrap();
    fs::write(
        &slim,
        r#"
event_layout = {
  includes = ["message"]
  additional_fields = { env = "prod" }
}
"#,
    )
    .unwrap();

    let handle = LayoutHandle::new(Layouts::default());
    reload_layouts(&full, &handle).unwrap();
    let record = LogRecord::new(Level::Info, "app", "hello");
    let done = AtomicBool::new(false);

    let full_keys = ["timestamp", "level", "thread", "mdc", "logger", "message"];
    let slim_keys = ["message", "env"];
    let (handle_ref, record_ref, done_ref) = (&handle, &record, &done);

    // Act
    thread::scope(|s| {
        let readers: Vec<_> = (0..4)
            .map(move |_| {
                s.spawn(move || {
                    let mut projected = 0u64;
                    while !done_ref.load(Ordering::Relaxed) || projected == 0 {
                        let layouts = handle_ref.load();
                        let doc = layouts.event.as_ref().unwrap().to_json_map(record_ref);
                        let keys: Vec<&str> = doc.keys().map(String::as_str).collect();

                        // Assert
                        assert!(
                            keys == full_keys || keys == slim_keys,
                            "mixed layout observed: {keys:?}"
                        );
                        projected += 1;
                    }
                    projected
                })
            })
            .collect();

        for i in 0..50 {
            let path = if i % 2 == 0 { &slim } else { &full };
            reload_layouts(path, &handle).unwrap();
        }
        done.store(true, Ordering::Relaxed);

        for reader in readers {
            assert!(reader.join().unwrap() > 0);
        }
    });
}
