// Model exports
pub mod chart;
pub mod domain;
pub mod responses;

pub use chart::{ChartError, SizeChart, SizeEntry};
pub use domain::{BodyMeasurement, FitLevel, FitStatus, Gender, MeasurementComparison, MeasurementWeights, SizeRecommendation, UserBasicData, UserMeasurements};
pub use responses::{FitResponse, RecommendationResponse, NO_RECOMMENDATION_MESSAGE};
