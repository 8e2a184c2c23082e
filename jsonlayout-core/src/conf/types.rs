use crate::attribute::{AccessAttribute, AttributeSet, EventAttribute};
use crate::conf::ConfigError;
use crate::conf::validation::{
    ValidationCtx, validate_additional_fields, validate_custom_field_names,
};
use crate::layout::{
    AccessJsonLayout, EventJsonLayout, JsonFormatter, LayoutSettings, RootCauseFirstConverter,
    TimestampFormatter,
};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Top-level layout file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutsConfig {
    pub event_layout: Option<EventLayoutConfig>,
    pub access_layout: Option<AccessLayoutConfig>,
}

/// Layout for application log events.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventLayoutConfig {
    /// Date-time pattern for `timestamp`; absent means epoch milliseconds.
    #[serde(default)]
    pub timestamp_format: Option<String>,

    #[serde(default = "default_time_zone")]
    pub time_zone: String,

    /// Replaces the default inclusion set when present.
    #[serde(default)]
    pub includes: Option<Vec<EventAttribute>>,

    #[serde(default)]
    pub custom_field_names: HashMap<String, String>,

    #[serde(default)]
    pub additional_fields: Map<String, Value>,

    #[serde(default)]
    pub json_protocol_version: Option<String>,

    #[serde(default)]
    pub pretty_print: bool,

    #[serde(default = "default_true")]
    pub append_line_separator: bool,

    /// Stack frames printed per throwable; all when absent.
    #[serde(default)]
    pub max_exception_frames: Option<usize>,
}

/// Layout for HTTP access events.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccessLayoutConfig {
    #[serde(default)]
    pub timestamp_format: Option<String>,

    #[serde(default = "default_time_zone")]
    pub time_zone: String,

    #[serde(default)]
    pub includes: Option<Vec<AccessAttribute>>,

    /// Request headers surfaced under `headers`, matched ignoring case.
    #[serde(default)]
    pub request_headers: Vec<String>,

    /// Response headers surfaced under `responseHeaders`, matched ignoring case.
    #[serde(default)]
    pub response_headers: Vec<String>,

    #[serde(default)]
    pub custom_field_names: HashMap<String, String>,

    #[serde(default)]
    pub additional_fields: Map<String, Value>,

    #[serde(default)]
    pub json_protocol_version: Option<String>,

    #[serde(default)]
    pub pretty_print: bool,

    #[serde(default = "default_true")]
    pub append_line_separator: bool,
}

fn default_time_zone() -> String {
    "UTC".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for EventLayoutConfig {
    fn default() -> Self {
        Self {
            timestamp_format: None,
            time_zone: default_time_zone(),
            includes: None,
            custom_field_names: HashMap::new(),
            additional_fields: Map::new(),
            json_protocol_version: None,
            pretty_print: false,
            append_line_separator: true,
            max_exception_frames: None,
        }
    }
}

impl Default for AccessLayoutConfig {
    fn default() -> Self {
        Self {
            timestamp_format: None,
            time_zone: default_time_zone(),
            includes: None,
            request_headers: Vec::new(),
            response_headers: Vec::new(),
            custom_field_names: HashMap::new(),
            additional_fields: Map::new(),
            json_protocol_version: None,
            pretty_print: false,
            append_line_separator: true,
        }
    }
}

//-----------------------------------------------------------------------------
// Building
//-----------------------------------------------------------------------------

struct SettingsParts<'a> {
    timestamp_format: Option<&'a str>,
    time_zone: &'a str,
    custom_field_names: &'a HashMap<String, String>,
    additional_fields: &'a Map<String, Value>,
    json_protocol_version: Option<&'a str>,
    formatter: JsonFormatter,
}

impl SettingsParts<'_> {
    /// Validates every part, reporting all problems at once.
    fn build(self) -> Result<LayoutSettings, ConfigError> {
        let mut ctx = ValidationCtx::default();

        let timestamp_formatter =
            ctx.check(TimestampFormatter::new(self.timestamp_format, self.time_zone));
        validate_custom_field_names(self.custom_field_names, &mut ctx);
        validate_additional_fields(self.additional_fields, &mut ctx);
        ctx.into_result()?;

        Ok(LayoutSettings {
            timestamp_formatter: timestamp_formatter.unwrap_or_default(),
            custom_field_names: self.custom_field_names.clone(),
            additional_fields: self.additional_fields.clone(),
            json_protocol_version: self.json_protocol_version.map(str::to_string),
            formatter: self.formatter,
        })
    }
}

impl EventLayoutConfig {
    pub fn build(&self) -> Result<EventJsonLayout, ConfigError> {
        let settings = SettingsParts {
            timestamp_format: self.timestamp_format.as_deref(),
            time_zone: &self.time_zone,
            custom_field_names: &self.custom_field_names,
            additional_fields: &self.additional_fields,
            json_protocol_version: self.json_protocol_version.as_deref(),
            formatter: JsonFormatter {
                pretty_print: self.pretty_print,
                append_line_separator: self.append_line_separator,
            },
        }
        .build()?;

        let mut converter = RootCauseFirstConverter::new();
        if let Some(max) = self.max_exception_frames {
            converter = converter.with_max_frames(max);
        }

        let includes = match &self.includes {
            Some(attrs) => attrs.iter().copied().collect(),
            None => AttributeSet::default(),
        };

        Ok(EventJsonLayout::with_converter(settings, Box::new(converter))?.with_includes(includes))
    }
}

impl AccessLayoutConfig {
    pub fn build(&self) -> Result<AccessJsonLayout, ConfigError> {
        let settings = SettingsParts {
            timestamp_format: self.timestamp_format.as_deref(),
            time_zone: &self.time_zone,
            custom_field_names: &self.custom_field_names,
            additional_fields: &self.additional_fields,
            json_protocol_version: self.json_protocol_version.as_deref(),
            formatter: JsonFormatter {
                pretty_print: self.pretty_print,
                append_line_separator: self.append_line_separator,
            },
        }
        .build()?;

        let includes = match &self.includes {
            Some(attrs) => attrs.iter().copied().collect(),
            None => AttributeSet::default(),
        };

        Ok(AccessJsonLayout::new(settings)
            .with_includes(includes)
            .with_request_headers(self.request_headers.iter().cloned())
            .with_response_headers(self.response_headers.iter().cloned()))
    }
}
