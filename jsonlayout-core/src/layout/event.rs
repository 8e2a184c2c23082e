use crate::attribute::{Attribute, AttributeSet, EventAttribute};
use crate::conf::ConfigError;
use crate::event::LoggingEvent;
use crate::layout::{
    Document, ExtractionStats, JsonFormatter, JsonLayout, LayoutSettings, MapBuilder,
    RootCauseFirstConverter, StartedConverter, ThrowableConverter,
};

use EventAttribute::*;

/// Projects application log events.
///
/// Owns a started [`ThrowableConverter`]; it is stopped when the layout is dropped.
#[derive(Debug)]
pub struct EventJsonLayout {
    settings: LayoutSettings,
    includes: AttributeSet<EventAttribute>,
    converter: StartedConverter,
    stats: ExtractionStats,
}

impl EventJsonLayout {
    pub fn new(settings: LayoutSettings) -> Result<Self, ConfigError> {
        Self::with_converter(settings, Box::new(RootCauseFirstConverter::new()))
    }

    pub fn with_converter(
        settings: LayoutSettings,
        converter: Box<dyn ThrowableConverter>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            settings,
            includes: EventAttribute::default_includes(),
            converter: StartedConverter::start(converter)?,
            stats: ExtractionStats::new(),
        })
    }

    pub fn with_includes(mut self, includes: AttributeSet<EventAttribute>) -> Self {
        self.includes = includes;
        self
    }

    pub fn includes(&self) -> AttributeSet<EventAttribute> {
        self.includes
    }

    pub fn settings(&self) -> &LayoutSettings {
        &self.settings
    }

    /// Fields dropped so far because extraction failed.
    pub fn extraction_failures(&self) -> u64 {
        self.stats.failures()
    }

    fn is_included(&self, attr: EventAttribute) -> bool {
        self.includes.contains(attr)
    }
}

impl<E: LoggingEvent + ?Sized> JsonLayout<E> for EventJsonLayout {
    fn to_json_map(&self, event: &E) -> Document {
        let version = self.settings.json_protocol_version.as_deref();
        let throwable = event
            .throwable()
            .filter(|_| self.is_included(Exception));

        MapBuilder::new(&self.settings, &self.stats, 16)
            .add_timestamp_with(Timestamp.field_name(), self.is_included(Timestamp), || {
                event.timestamp()
            })
            .add_with(Level.field_name(), self.is_included(Level), || {
                event.level().map(|l| l.as_str())
            })
            .add_with(ThreadName.field_name(), self.is_included(ThreadName), || {
                event.thread_name()
            })
            .add_with(Mdc.field_name(), self.is_included(Mdc), || event.mdc())
            .add_with(LoggerName.field_name(), self.is_included(LoggerName), || {
                event.logger_name()
            })
            .add_with(Message.field_name(), self.is_included(Message), || {
                event.formatted_message()
            })
            .add_with(
                ContextName.field_name(),
                self.is_included(ContextName),
                || event.context_name(),
            )
            .add("version", version.is_some(), version)
            .add_with(Exception.field_name(), throwable.is_some(), || {
                Ok(throwable.map(|t| self.converter.convert(t)))
            })
            .build()
    }

    fn formatter(&self) -> &JsonFormatter {
        &self.settings.formatter
    }
}
