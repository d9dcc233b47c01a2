pub mod config;
pub mod error;
pub mod format;
pub mod tracing;
pub mod types;

pub use types::CHART_DAYS;
