//! Input events handed to the layouts.
//!
//! The layouts only see the [`AccessEvent`] and [`LoggingEvent`] traits. The concrete
//! [`HttpAccessEvent`] and [`LogRecord`] types are what the CLI decodes from JSON lines.

mod access;
mod error;
mod headers;
mod log;
#[cfg(test)]
mod tests;
mod throwable;

pub use access::{AccessEvent, HttpAccessEvent, RequestParameters};
pub use error::{Extracted, ExtractionError};
pub use headers::Headers;
pub use log::{Level, LogRecord, LoggingEvent, Mdc};
pub use throwable::ThrowableInfo;
