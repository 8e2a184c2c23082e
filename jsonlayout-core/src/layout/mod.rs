//! The event-to-JSON projection engine.
//!
//! A layout projects one event into a [`Document`]: an insertion-ordered map whose
//! field order is fixed by the attribute catalogue, followed by the additional
//! fields. [`JsonFormatter`] then turns the document into one line of JSON.

mod access;
mod event;
mod formatter;
mod handle;
mod headers;
mod map_builder;
mod settings;
mod stats;
#[cfg(test)]
mod tests;
mod throwable;
mod timestamp;

pub use access::AccessJsonLayout;
pub use event::EventJsonLayout;
pub use formatter::JsonFormatter;
pub use handle::LayoutHandle;
pub use headers::filter_headers;
pub use map_builder::MapBuilder;
pub use settings::LayoutSettings;
pub use stats::ExtractionStats;
pub use throwable::{RootCauseFirstConverter, StartedConverter, ThrowableConverter};
pub use timestamp::{FormattedTimestamp, TimestampFormatter, Zone};

use thiserror::Error;

/// One projected event. Iteration order is emission order.
pub type Document = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Projects events of type `E` into JSON documents.
pub trait JsonLayout<E: ?Sized>: Send + Sync {
    fn to_json_map(&self, event: &E) -> Document;

    fn formatter(&self) -> &JsonFormatter;

    /// Projects and serializes one event.
    fn do_layout(&self, event: &E) -> Result<String, LayoutError> {
        let doc = self.to_json_map(event);
        Ok(self.formatter().to_json(&doc)?)
    }
}
