use serde::{Deserialize, Serialize};
use crate::models::domain::{SizeRecommendation, UserMeasurements};

/// Shown when no size in the chart has a usable measurement
pub const NO_RECOMMENDATION_MESSAGE: &str = "We couldn't determine a size for this chart";

/// Output of the recommend step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub recommendation: Option<SizeRecommendation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<Option<SizeRecommendation>> for RecommendationResponse {
    fn from(recommendation: Option<SizeRecommendation>) -> Self {
        let message = recommendation
            .is_none()
            .then(|| NO_RECOMMENDATION_MESSAGE.to_string());
        Self { recommendation, message }
    }
}

/// Output of a full estimate + recommend run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitResponse {
    pub measurements: UserMeasurements,
    #[serde(flatten)]
    pub result: RecommendationResponse,
}
