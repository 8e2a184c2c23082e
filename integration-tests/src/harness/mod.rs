pub mod fixtures;
pub mod tracing;

pub use fixtures::{fixture_path, load_fixture, project};
pub use tracing::{CapturedEvent, capture_events};
