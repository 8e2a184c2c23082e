use arc_swap::{ArcSwap, Guard};
use std::sync::Arc;

/// Shared access to a layout that can be replaced while events are in flight.
///
/// Readers get a snapshot for the duration of one projection; a replacement swaps the
/// whole layout at once, so no reader ever sees a half-applied configuration.
pub struct LayoutHandle<L> {
    current: ArcSwap<L>,
}

impl<L> LayoutHandle<L> {
    pub fn new(layout: L) -> Self {
        Self {
            current: ArcSwap::from_pointee(layout),
        }
    }

    pub fn load(&self) -> Guard<Arc<L>> {
        self.current.load()
    }

    /// Installs `layout` and returns the one it replaced.
    pub fn replace(&self, layout: L) -> Arc<L> {
        self.current.swap(Arc::new(layout))
    }
}
