//! Provador Algo - size recommendation engine for the virtual try-on
//!
//! Two pure stages:
//! - the estimator turns sex, height, weight and age into bust, waist and hips;
//! - the matcher scores those measurements against a merchant size chart and
//!   recommends a size, with a comparison table and a near-tie alternative.
//!
//! [`session`] sequences the two for an interactive front end.

pub mod config;
pub mod core;
pub mod models;
pub mod session;

// Re-export commonly used types
pub use crate::core::{estimate, recommend, SizeMatcher};
pub use models::{FitLevel, FitStatus, Gender, SizeChart, SizeRecommendation, UserBasicData, UserMeasurements};
pub use session::{SessionError, TryOnSession, TryOnStep};
