use crate::core::{measurement::resolve_measurement, range::ChartValue};
use crate::models::{MeasurementComparison, MeasurementWeights, SizeEntry, UserMeasurements};

/// Differences up to this many centimeters are halved before weighting
pub const DAMPENING_THRESHOLD_CM: f64 = 2.0;

/// Score of one size against the user's measurements
#[derive(Debug, Clone, PartialEq)]
pub struct SizeScore {
    pub label: String,
    /// Sum of weighted, dampened differences. Lower is better.
    pub score: f64,
    /// One entry per recognized measurement, in chart order
    pub comparison: Vec<MeasurementComparison>,
}

/// Score a single size chart entry
///
/// Scoring formula, summed over every recognized measurement:
/// ```text
/// difference = |user - center(cell)|
/// score     += weight(measurement) * (difference <= 2 ? difference / 2 : difference)
/// ```
///
/// Unrecognized measurement names are skipped. Returns `None` when nothing in
/// the entry could be recognized, which removes the size from the ranking.
pub fn score_size(
    entry: &SizeEntry,
    measurements: &UserMeasurements,
    weights: &MeasurementWeights,
) -> Option<SizeScore> {
    let mut score = 0.0;
    let mut comparison = Vec::with_capacity(entry.measurements.len());

    for (name, cell) in &entry.measurements {
        let Some(measurement) = resolve_measurement(name) else {
            continue;
        };

        let user_value = measurements.get(measurement);
        let chart_value = ChartValue::parse(cell);
        let center = chart_value.center();
        let difference = (user_value - center).abs();

        score += weights.get(measurement) * dampen(difference);

        tracing::trace!(
            "Size {} {} ({:?}): user={} center={} diff={}",
            entry.label,
            name,
            measurement,
            user_value,
            center,
            difference
        );

        comparison.push(MeasurementComparison {
            measurement: name.clone(),
            user_value,
            chart_range: cell.clone(),
            chart_center: center,
            difference,
            status: chart_value.classify(user_value),
        });
    }

    if comparison.is_empty() {
        return None;
    }

    Some(SizeScore {
        label: entry.label.clone(),
        score,
        comparison,
    })
}

/// Small differences are nearly free
#[inline]
fn dampen(difference: f64) -> f64 {
    if difference <= DAMPENING_THRESHOLD_CM {
        difference / 2.0
    } else {
        difference
    }
}
