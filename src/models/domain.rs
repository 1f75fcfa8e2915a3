use serde::{Deserialize, Serialize};
use validator::Validate;

/// Sex used to pick the estimator coefficients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[serde(alias = "female")]
    Feminino,
    #[serde(alias = "male")]
    Masculino,
}

/// Coarse attributes collected in the first step of the try-on
///
/// The validation ranges are enforced by callers (see [`crate::session`]);
/// the estimator itself accepts any value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct UserBasicData {
    pub gender: Gender,
    /// Height in centimeters
    #[validate(range(min = 100.0, max = 250.0))]
    pub height: f64,
    /// Weight in kilograms
    #[validate(range(min = 30.0, max = 200.0))]
    pub weight: f64,
    /// Age in years
    #[validate(range(min = 10, max = 120))]
    pub age: u8,
}

/// Body circumferences in centimeters, estimated or entered by the user
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct UserMeasurements {
    #[validate(range(exclusive_min = 0.0))]
    pub bust: f64,
    #[validate(range(exclusive_min = 0.0))]
    pub waist: f64,
    #[validate(range(exclusive_min = 0.0))]
    pub hips: f64,
}

impl UserMeasurements {
    pub fn new(bust: f64, waist: f64, hips: f64) -> Self {
        Self { bust, waist, hips }
    }

    /// Value of one canonical measurement
    #[inline]
    pub fn get(&self, measurement: BodyMeasurement) -> f64 {
        match measurement {
            BodyMeasurement::Bust => self.bust,
            BodyMeasurement::Waist => self.waist,
            BodyMeasurement::Hips => self.hips,
        }
    }
}

/// The three measurements the matcher knows how to score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyMeasurement {
    Bust,
    Waist,
    Hips,
}

/// Weights applied to each measurement's dampened difference
///
/// Waist weighs more because it is the dimension where a wrong size fails first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementWeights {
    pub bust: f64,
    pub waist: f64,
    pub hips: f64,
}

impl MeasurementWeights {
    #[inline]
    pub fn get(&self, measurement: BodyMeasurement) -> f64 {
        match measurement {
            BodyMeasurement::Bust => self.bust,
            BodyMeasurement::Waist => self.waist,
            BodyMeasurement::Hips => self.hips,
        }
    }
}

impl Default for MeasurementWeights {
    fn default() -> Self {
        Self {
            bust: 1.0,
            waist: 1.3,
            hips: 1.0,
        }
    }
}

/// Discretized confidence of a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitLevel {
    Excellent,
    Good,
    Approximate,
}

/// How the user's value sits against one chart cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitStatus {
    Ok,
    /// User value is below the chart value: the garment will be tight
    Tight,
    /// User value is above the chart value: the garment will be loose
    Loose,
}

/// Per-measurement detail shown in the comparison table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementComparison {
    /// Measurement name as written in the chart ("Busto", "Waist", ...)
    pub measurement: String,
    #[serde(rename = "userValue")]
    pub user_value: f64,
    /// Original cell text, untouched
    #[serde(rename = "chartRange")]
    pub chart_range: String,
    #[serde(rename = "chartCenter")]
    pub chart_center: f64,
    /// Absolute difference before dampening
    pub difference: f64,
    pub status: FitStatus,
}

/// Best size for a user against one size chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeRecommendation {
    pub size: String,
    #[serde(rename = "fitLevel")]
    pub fit_level: FitLevel,
    /// Weighted distance, lower is better. Only comparable within one chart.
    pub score: f64,
    pub comparison: Vec<MeasurementComparison>,
    #[serde(
        rename = "alternativeSize",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub alternative_size: Option<String>,
}
