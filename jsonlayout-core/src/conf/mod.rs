mod error;
mod loader;
#[cfg(test)]
mod tests;
mod types;
mod validation;

pub use error::{ConfigError, ValidationErrors};
pub use loader::{load_layouts, parse_layouts};
pub use types::{AccessLayoutConfig, EventLayoutConfig, LayoutsConfig};
