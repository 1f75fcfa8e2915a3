use crate::core::scoring::{score_size, SizeScore};
use crate::models::{FitLevel, MeasurementWeights, SizeChart, SizeRecommendation, UserMeasurements};

/// Best scores below this are an excellent fit
pub const EXCELLENT_FIT_BELOW: f64 = 4.0;

/// Best scores below this (and not excellent) are a good fit
pub const GOOD_FIT_BELOW: f64 = 12.0;

/// A runner-up closer than this to the best size is offered as an alternative
pub const ALTERNATIVE_SIZE_MARGIN: f64 = 4.0;

/// Size matching orchestrator
///
/// # Pipeline Stages
/// 1. Score every size in the chart (sizes with no recognizable measurement drop out)
/// 2. Rank by score, ascending, keeping chart order on ties
/// 3. Pick the best size, derive its fit level and a near-tie alternative
#[derive(Debug, Clone)]
pub struct SizeMatcher {
    weights: MeasurementWeights,
}

impl SizeMatcher {
    pub fn new(weights: MeasurementWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: MeasurementWeights::default(),
        }
    }

    pub fn weights(&self) -> &MeasurementWeights {
        &self.weights
    }

    /// Score and rank every usable size in the chart
    pub fn rank(&self, measurements: &UserMeasurements, chart: &SizeChart) -> Vec<SizeScore> {
        let mut ranked: Vec<SizeScore> = chart
            .sizes()
            .iter()
            .filter_map(|entry| score_size(entry, measurements, &self.weights))
            .collect();

        // Stable: equal scores keep the merchant's order
        ranked.sort_by(|a, b| {
            a.score
                .partial_cmp(&b.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        for size in &ranked {
            tracing::debug!("Size {} scored {:.2}", size.label, size.score);
        }

        ranked
    }

    /// Recommend a size for the given measurements
    ///
    /// Returns `None` when no size in the chart has a measurement the matcher
    /// recognizes. That is a normal outcome, not an error.
    pub fn recommend(
        &self,
        measurements: &UserMeasurements,
        chart: &SizeChart,
    ) -> Option<SizeRecommendation> {
        let mut ranked = self.rank(measurements, chart).into_iter();

        let Some(best) = ranked.next() else {
            tracing::debug!("No size in a {}-size chart has a usable measurement", chart.len());
            return None;
        };

        // When ambiguous the tighter (best) size stays primary
        let alternative_size = ranked
            .next()
            .filter(|second| (best.score - second.score).abs() < ALTERNATIVE_SIZE_MARGIN)
            .map(|second| second.label);

        let fit_level = fit_level(best.score);

        tracing::debug!(
            "Recommending size {} ({:?}, score {:.2}, alternative {:?})",
            best.label,
            fit_level,
            best.score,
            alternative_size
        );

        Some(SizeRecommendation {
            size: best.label,
            fit_level,
            score: best.score,
            comparison: best.comparison,
            alternative_size,
        })
    }
}

impl Default for SizeMatcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Discretize the best score into a fit level
#[inline]
pub fn fit_level(score: f64) -> FitLevel {
    if score < EXCELLENT_FIT_BELOW {
        FitLevel::Excellent
    } else if score < GOOD_FIT_BELOW {
        FitLevel::Good
    } else {
        FitLevel::Approximate
    }
}

/// Recommend a size with the default weights
pub fn recommend(measurements: &UserMeasurements, chart: &SizeChart) -> Option<SizeRecommendation> {
    SizeMatcher::with_default_weights().recommend(measurements, chart)
}
