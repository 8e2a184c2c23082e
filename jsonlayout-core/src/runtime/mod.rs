mod state;
#[cfg(test)]
mod tests;

pub use state::{Layouts, build_layouts, reload_layouts};
