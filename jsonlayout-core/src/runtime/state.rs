use crate::conf::{ConfigError, LayoutsConfig, load_layouts};
use crate::layout::{AccessJsonLayout, EventJsonLayout, LayoutHandle};
use std::path::Path;

/// The layouts built from one configuration file.
#[derive(Debug, Default)]
pub struct Layouts {
    pub event: Option<EventJsonLayout>,
    pub access: Option<AccessJsonLayout>,
}

pub fn build_layouts(cfg: &LayoutsConfig) -> Result<Layouts, ConfigError> {
    let event = cfg.event_layout.as_ref().map(|c| c.build()).transpose()?;
    let access = cfg.access_layout.as_ref().map(|c| c.build()).transpose()?;

    tracing::debug!(
        event = event.is_some(),
        access = access.is_some(),
        "layouts built"
    );

    Ok(Layouts { event, access })
}

/// Rebuilds the layouts from `config_path` and swaps them in as a whole.
///
/// On error the current layouts stay in place.
pub fn reload_layouts(
    config_path: &Path,
    handle: &LayoutHandle<Layouts>,
) -> Result<(), ConfigError> {
    // Parse, validate and build OFFLINE.
    let cfg = load_layouts(config_path)?;
    let new_layouts = build_layouts(&cfg)?;

    let old = handle.load();
    tracing::info!(
        old_event = old.event.is_some(),
        old_access = old.access.is_some(),
        new_event = new_layouts.event.is_some(),
        new_access = new_layouts.access.is_some(),
        "layouts reloaded"
    );
    drop(old);

    // Atomic swap (point of no return).
    handle.replace(new_layouts);

    Ok(())
}
