use crate::models::BodyMeasurement;

/// Lowercase fragments that identify each measurement in a chart header.
///
/// Checked in order; the first measurement with a matching fragment wins.
const SYNONYMS: &[(BodyMeasurement, &[&str])] = &[
    (BodyMeasurement::Bust, &["busto", "bust"]),
    (BodyMeasurement::Waist, &["cintura", "waist"]),
    (BodyMeasurement::Hips, &["quadril", "hips"]),
];

/// Map a free-form chart measurement name to the measurement it describes
///
/// Case-insensitive substring match, so "Busto (cm)" and "BUST" both resolve
/// to [`BodyMeasurement::Bust`]. Returns `None` for names the matcher ignores.
pub fn resolve_measurement(name: &str) -> Option<BodyMeasurement> {
    let name = name.to_lowercase();
    SYNONYMS
        .iter()
        .find(|(_, fragments)| fragments.iter().any(|f| name.contains(f)))
        .map(|(measurement, _)| *measurement)
}
