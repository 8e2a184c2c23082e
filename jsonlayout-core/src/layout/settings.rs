use crate::layout::{JsonFormatter, TimestampFormatter};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Settings shared by every layout kind.
///
/// Built once at configuration time and only read while events are projected.
#[derive(Debug, Clone, Default)]
pub struct LayoutSettings {
    pub timestamp_formatter: TimestampFormatter,

    /// Default field name to replacement name.
    pub custom_field_names: HashMap<String, String>,

    /// Static fields appended to every document, in configured order.
    pub additional_fields: Map<String, Value>,

    pub json_protocol_version: Option<String>,

    pub formatter: JsonFormatter,
}

impl LayoutSettings {
    pub fn with_timestamp_formatter(mut self, formatter: TimestampFormatter) -> Self {
        self.timestamp_formatter = formatter;
        self
    }

    pub fn with_custom_field_name(mut self, field: &str, name: &str) -> Self {
        self.custom_field_names
            .insert(field.to_string(), name.to_string());
        self
    }

    pub fn with_additional_field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.additional_fields.insert(name.to_string(), value.into());
        self
    }

    pub fn with_json_protocol_version(mut self, version: &str) -> Self {
        self.json_protocol_version = Some(version.to_string());
        self
    }

    pub fn with_formatter(mut self, formatter: JsonFormatter) -> Self {
        self.formatter = formatter;
        self
    }
}
