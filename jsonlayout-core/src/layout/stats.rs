use crate::event::ExtractionError;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counts fields dropped because their attribute could not be extracted.
#[derive(Debug, Default)]
pub struct ExtractionStats {
    failures: AtomicU64,
}

impl ExtractionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&self, field: &str, err: &ExtractionError) {
        let total = self.failures.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::warn!(
            field = field,
            error = %err,
            failures = total,
            "attribute extraction failed, field omitted"
        );
    }

    pub fn failures(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }
}
