//! Platform and process-level utilities

pub mod logging;

pub use logging::init_logging;
