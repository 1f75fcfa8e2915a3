// Core algorithm exports
pub mod estimator;
pub mod matcher;
pub mod measurement;
pub mod range;
pub mod scoring;

pub use estimator::estimate;
pub use matcher::{fit_level, recommend, SizeMatcher};
pub use measurement::resolve_measurement;
pub use range::{classify, parse_center, ChartValue};
pub use scoring::{score_size, SizeScore};
