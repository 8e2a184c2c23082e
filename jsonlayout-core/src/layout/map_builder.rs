use crate::event::{Extracted, ExtractionError};
use crate::layout::{Document, ExtractionStats, LayoutSettings};
use serde::Serialize;
use serde_json::Value;

/// Accumulates one event's fields in emission order.
///
/// Every `add*` call is gated by a boolean; a `false` gate is a no-op and never
/// touches the value. The `*_with` variants defer extraction to a closure so that
/// disabled fields cost nothing. Names go through the configured overrides, and
/// [`MapBuilder::build`] appends the additional fields last.
pub struct MapBuilder<'a> {
    settings: &'a LayoutSettings,
    stats: &'a ExtractionStats,
    map: Document,
}

impl<'a> MapBuilder<'a> {
    pub fn new(settings: &'a LayoutSettings, stats: &'a ExtractionStats, capacity: usize) -> Self {
        Self {
            settings,
            stats,
            map: Document::with_capacity(capacity + settings.additional_fields.len()),
        }
    }

    pub fn add(mut self, field: &str, include: bool, value: impl Into<Value>) -> Self {
        if include {
            self.insert(field, value.into());
        }
        self
    }

    pub fn add_with<T, F>(mut self, field: &str, include: bool, extract: F) -> Self
    where
        T: Serialize,
        F: FnOnce() -> Extracted<T>,
    {
        if !include {
            return self;
        }

        let value = extract()
            .and_then(|v| serde_json::to_value(v).map_err(ExtractionError::NotRepresentable));

        match value {
            Ok(value) => self.insert(field, value),
            Err(err) => self.stats.record(field, &err),
        }
        self
    }

    pub fn add_timestamp(self, field: &str, include: bool, epoch_millis: i64) -> Self {
        self.add_timestamp_with(field, include, || Ok(epoch_millis))
    }

    pub fn add_timestamp_with<F>(mut self, field: &str, include: bool, extract: F) -> Self
    where
        F: FnOnce() -> Extracted<i64>,
    {
        if !include {
            return self;
        }

        match extract() {
            Ok(ms) => {
                let formatted = self.settings.timestamp_formatter.format(ms);
                self.insert(field, formatted.into());
            }
            Err(err) => self.stats.record(field, &err),
        }
        self
    }

    /// Appends the additional fields, replacing any attribute field of the same name.
    pub fn build(mut self) -> Document {
        for (name, value) in &self.settings.additional_fields {
            self.map.insert(name.clone(), value.clone());
        }
        self.map
    }

    fn insert(&mut self, field: &str, value: Value) {
        let name = self
            .settings
            .custom_field_names
            .get(field)
            .map_or(field, String::as_str);
        self.map.insert(name.to_string(), value);
    }
}
