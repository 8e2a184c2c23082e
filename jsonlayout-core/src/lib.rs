pub mod attribute;
pub mod cli;
pub mod conf;
pub mod event;
pub mod layout;
pub mod logging;
pub mod runtime;
