//! CLI command implementations

pub mod analyze;
pub mod classify;
pub mod review;

pub use analyze::AnalyzeArgs;
pub use classify::ClassifyArgs;
pub use review::ReviewArgs;
