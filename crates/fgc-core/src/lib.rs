pub mod about;
pub mod config;
pub mod currency;
pub mod error;
pub mod guarantee;
pub mod session;
pub mod types;

#[cfg(feature = "report")]
pub mod report;

#[cfg(feature = "chart")]
pub mod chart;

pub use config::{CoverageConfig, DEFAULT_COVERAGE_CEILING};
pub use error::FgcError;
pub use types::*;

/// Standard result type for all guarantee operations
pub type FgcResult<T> = Result<T, FgcError>;
