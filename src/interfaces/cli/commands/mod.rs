//! CLI command implementations

mod migrate;
mod report;

pub use migrate::run_migrate;
pub use report::{format_count, format_day, format_percent, generate_report, render_bundle};
