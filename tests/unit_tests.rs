// Unit tests for Provador Algo

use provador_algo::core::{
    classify, estimate, parse_center, recommend, resolve_measurement, score_size, SizeMatcher,
};
use provador_algo::models::{
    BodyMeasurement, FitLevel, FitStatus, Gender, MeasurementWeights, SizeChart, SizeEntry,
    UserBasicData, UserMeasurements,
};
use proptest::prelude::*;

fn reference_chart() -> SizeChart {
    SizeChart::new()
        .with_size("P", [("Busto", "84 - 88"), ("Cintura", "66 - 70"), ("Quadril", "90 - 94")])
        .with_size("M", [("Busto", "92 - 96"), ("Cintura", "74 - 78"), ("Quadril", "102 - 106")])
        .with_size("G", [("Busto", "100 - 104"), ("Cintura", "82 - 86"), ("Quadril", "110 - 114")])
}

#[test]
fn test_estimate_feminino_age_30() {
    let m = estimate(&UserBasicData {
        gender: Gender::Feminino,
        height: 165.0,
        weight: 65.0,
        age: 30,
    });

    assert!(m.bust > 0.0 && m.waist > 0.0 && m.hips > 0.0);
    // No age correction: exactly the rounded formulas
    assert_eq!(m.bust, (0.52_f64 * 165.0 + 0.15 * 65.0).round());
    assert_eq!(m.hips, (0.54_f64 * 165.0 + 0.18 * 65.0).round());
}

#[test]
fn test_recommend_reference_chart_picks_m() {
    let rec = recommend(&UserMeasurements::new(92.0, 70.0, 99.0), &reference_chart())
        .expect("a recommendation");

    assert_eq!(rec.size, "M");
    assert!(!rec.comparison.is_empty());
    assert!(matches!(
        rec.fit_level,
        FitLevel::Excellent | FitLevel::Good | FitLevel::Approximate
    ));
}

#[test]
fn test_small_user_against_large_size() {
    let chart = SizeChart::new()
        .with_size("G", [("Busto", "100 - 104"), ("Cintura", "82 - 86"), ("Quadril", "110 - 114")]);

    let rec = recommend(&UserMeasurements::new(50.0, 40.0, 50.0), &chart);

    if let Some(rec) = rec {
        assert_eq!(rec.fit_level, FitLevel::Approximate);
    }
}

#[test]
fn test_parse_center_examples() {
    assert_eq!(parse_center("92 - 96"), 94.0);
    assert_eq!(parse_center("92"), 92.0);
    assert_eq!(parse_center(" 92-96 "), parse_center("92 - 96"));
}

#[test]
fn test_classify_boundaries() {
    assert_eq!(classify(66.0, "66 - 70"), FitStatus::Ok);
    assert_eq!(classify(65.0, "66 - 70"), FitStatus::Tight);
    assert_eq!(classify(71.0, "66 - 70"), FitStatus::Loose);
    assert_eq!(classify(94.0, "92"), FitStatus::Ok);
    assert_eq!(classify(95.0, "92"), FitStatus::Loose);
}

#[test]
fn test_alternative_size_near_tie() {
    let user = UserMeasurements::new(92.0, 70.0, 99.0);

    // A scores 0, B scores 3
    let near = SizeChart::new()
        .with_size("A", [("Bust", "92")])
        .with_size("B", [("Bust", "95")]);
    assert_eq!(recommend(&user, &near).unwrap().alternative_size.as_deref(), Some("B"));

    // A scores 0, B scores 5
    let far = SizeChart::new()
        .with_size("A", [("Bust", "92")])
        .with_size("B", [("Bust", "97")]);
    assert_eq!(recommend(&user, &far).unwrap().alternative_size, None);
}

#[test]
fn test_comparison_follows_chart_order() {
    let chart = SizeChart::new().with_size(
        "M",
        [("Quadril", "102 - 106"), ("Busto", "92 - 96"), ("Cintura", "74 - 78")],
    );

    let rec = recommend(&UserMeasurements::new(92.0, 70.0, 99.0), &chart).unwrap();
    let names: Vec<&str> = rec.comparison.iter().map(|c| c.measurement.as_str()).collect();

    assert_eq!(names, vec!["Quadril", "Busto", "Cintura"]);
}

#[test]
fn test_resolve_measurement_synonyms() {
    assert_eq!(resolve_measurement("BUSTO"), Some(BodyMeasurement::Bust));
    assert_eq!(resolve_measurement("cintura"), Some(BodyMeasurement::Waist));
    assert_eq!(resolve_measurement("Hips"), Some(BodyMeasurement::Hips));
    assert_eq!(resolve_measurement("Chest"), None);
}

#[test]
fn test_matcher_with_default_weights() {
    let matcher = SizeMatcher::default();
    assert_eq!(*matcher.weights(), MeasurementWeights::default());
    assert_eq!(matcher.weights().get(BodyMeasurement::Waist), 1.3);
}

fn size_entry(label: &str, cells: &[(&str, String)]) -> SizeEntry {
    SizeEntry {
        label: label.to_string(),
        measurements: cells
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect(),
    }
}

proptest! {
    #[test]
    fn prop_recommend_is_deterministic(
        bust in 40.0f64..160.0,
        waist in 40.0f64..160.0,
        hips in 40.0f64..160.0,
    ) {
        let user = UserMeasurements::new(bust, waist, hips);
        let chart = reference_chart();

        prop_assert_eq!(recommend(&user, &chart), recommend(&user, &chart));
    }

    #[test]
    fn prop_estimate_is_deterministic(
        height in 100.0f64..250.0,
        weight in 30.0f64..200.0,
        age in 10u8..=120,
        feminine in any::<bool>(),
    ) {
        let gender = if feminine { Gender::Feminino } else { Gender::Masculino };
        let data = UserBasicData { gender, height, weight, age };

        let first = estimate(&data);
        let second = estimate(&data);
        prop_assert_eq!(first.bust.to_bits(), second.bust.to_bits());
        prop_assert_eq!(first.waist.to_bits(), second.waist.to_bits());
        prop_assert_eq!(first.hips.to_bits(), second.hips.to_bits());
    }

    #[test]
    fn prop_score_ignores_key_order(
        user_bust in 40.0f64..160.0,
        user_waist in 40.0f64..160.0,
        user_hips in 40.0f64..160.0,
        bust in 40u32..160,
        waist in 40u32..160,
        hips in 40u32..160,
        width in 0u32..8,
    ) {
        let user = UserMeasurements::new(user_bust, user_waist, user_hips);
        let cells = [
            ("Busto", format!("{} - {}", bust, bust + width)),
            ("Cintura", format!("{} - {}", waist, waist + width)),
            ("Quadril", format!("{} - {}", hips, hips + width)),
            ("Comprimento", "70".to_string()),
        ];
        let mut reversed = cells.clone();
        reversed.reverse();

        let weights = MeasurementWeights::default();
        let forward = score_size(&size_entry("M", &cells), &user, &weights).unwrap();
        let backward = score_size(&size_entry("M", &reversed), &user, &weights).unwrap();

        prop_assert!((forward.score - backward.score).abs() < 1e-9);
        prop_assert_eq!(forward.comparison.len(), 3);
        prop_assert_eq!(forward.comparison[0].measurement.as_str(), "Busto");
        prop_assert_eq!(backward.comparison[0].measurement.as_str(), "Quadril");
    }
}
