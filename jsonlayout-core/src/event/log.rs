use crate::event::{Extracted, ThrowableInfo};
use serde::Deserialize;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

/// Mapped diagnostic context attached to a log event.
pub type Mdc = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read access to one application log event.
pub trait LoggingEvent {
    /// Epoch milliseconds at which the event was created.
    fn timestamp(&self) -> Extracted<i64>;

    fn level(&self) -> Extracted<Level>;

    fn thread_name(&self) -> Extracted<&str>;

    fn mdc(&self) -> Extracted<&Mdc>;

    fn logger_name(&self) -> Extracted<&str>;

    /// The message with its arguments applied.
    fn formatted_message(&self) -> Extracted<Cow<'_, str>>;

    fn context_name(&self) -> Extracted<&str>;

    fn throwable(&self) -> Option<&ThrowableInfo>;
}

/// A log event as decoded from a JSON line.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    pub timestamp: i64,
    pub level: Level,
    #[serde(alias = "thread")]
    pub thread_name: String,
    #[serde(alias = "logger")]
    pub logger_name: String,
    pub message: String,
    #[serde(default)]
    pub arguments: Vec<String>,
    #[serde(default)]
    pub mdc: Mdc,
    #[serde(default = "default_context_name", alias = "context")]
    pub context_name: String,
    #[serde(default)]
    pub throwable: Option<ThrowableInfo>,
}

fn default_context_name() -> String {
    "default".to_string()
}

impl LogRecord {
    pub fn new(level: Level, logger_name: &str, message: &str) -> Self {
        Self {
            timestamp: 0,
            level,
            thread_name: "main".to_string(),
            logger_name: logger_name.to_string(),
            message: message.to_string(),
            arguments: Vec::new(),
            mdc: Mdc::new(),
            context_name: default_context_name(),
            throwable: None,
        }
    }
}

impl LoggingEvent for LogRecord {
    fn timestamp(&self) -> Extracted<i64> {
        Ok(self.timestamp)
    }

    fn level(&self) -> Extracted<Level> {
        Ok(self.level)
    }

    fn thread_name(&self) -> Extracted<&str> {
        Ok(&self.thread_name)
    }

    fn mdc(&self) -> Extracted<&Mdc> {
        Ok(&self.mdc)
    }

    fn logger_name(&self) -> Extracted<&str> {
        Ok(&self.logger_name)
    }

    fn formatted_message(&self) -> Extracted<Cow<'_, str>> {
        Ok(format_message(&self.message, &self.arguments))
    }

    fn context_name(&self) -> Extracted<&str> {
        Ok(&self.context_name)
    }

    fn throwable(&self) -> Option<&ThrowableInfo> {
        self.throwable.as_ref()
    }
}

/// Substitutes `{}` placeholders with `args` in order. `\{}` is a literal `{}`.
pub(crate) fn format_message<'a>(template: &'a str, args: &[String]) -> Cow<'a, str> {
    if args.is_empty() && !template.contains("\\{}") {
        return Cow::Borrowed(template);
    }

    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut rest = template;

    while let Some(pos) = rest.find("{}") {
        let (before, after) = rest.split_at(pos);
        rest = &after[2..];

        if let Some(stripped) = before.strip_suffix('\\') {
            out.push_str(stripped);
            out.push_str("{}");
            continue;
        }

        out.push_str(before);
        match args.next() {
            Some(arg) => out.push_str(arg),
            None => out.push_str("{}"),
        }
    }

    out.push_str(rest);
    Cow::Owned(out)
}
