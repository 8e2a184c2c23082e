use crate::attribute::{Attribute, AttributeSet};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Attributes of an application log event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum EventAttribute {
    Timestamp,
    Level,
    ThreadName,
    Mdc,
    LoggerName,
    Message,
    ContextName,
    Exception,
}

impl Attribute for EventAttribute {
    const KIND: &'static str = "event";

    const ALL: &'static [Self] = &[
        Self::Timestamp,
        Self::Level,
        Self::ThreadName,
        Self::Mdc,
        Self::LoggerName,
        Self::Message,
        Self::ContextName,
        Self::Exception,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn symbol(self) -> &'static str {
        match self {
            Self::Timestamp => "timestamp",
            Self::Level => "level",
            Self::ThreadName => "threadName",
            Self::Mdc => "mdc",
            Self::LoggerName => "loggerName",
            Self::Message => "message",
            Self::ContextName => "contextName",
            Self::Exception => "exception",
        }
    }

    fn field_name(self) -> &'static str {
        match self {
            Self::Timestamp => "timestamp",
            Self::Level => "level",
            Self::ThreadName => "thread",
            Self::Mdc => "mdc",
            Self::LoggerName => "logger",
            Self::Message => "message",
            Self::ContextName => "context",
            Self::Exception => "exception",
        }
    }

    // Context name is opt-in.
    fn default_includes() -> AttributeSet<Self> {
        AttributeSet::of(&[
            Self::Level,
            Self::ThreadName,
            Self::Mdc,
            Self::LoggerName,
            Self::Message,
            Self::Exception,
            Self::Timestamp,
        ])
    }
}

impl FromStr for EventAttribute {
    type Err = crate::conf::ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_symbol(s)
    }
}

impl TryFrom<String> for EventAttribute {
    type Error = crate::conf::ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for EventAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
