use crate::models::{Gender, UserBasicData, UserMeasurements};

/// Ages strictly above this get the age correction
const AGE_CORRECTION_AFTER: u8 = 30;

/// `value = height * height_coef + weight * weight_coef`
#[derive(Debug, Clone, Copy)]
struct Regression {
    height: f64,
    weight: f64,
}

impl Regression {
    #[inline]
    fn apply(&self, height: f64, weight: f64) -> f64 {
        self.height * height + self.weight * weight
    }
}

/// Coefficients and age multipliers for one sex
#[derive(Debug, Clone, Copy)]
struct BodyModel {
    bust: Regression,
    waist: Regression,
    hips: Regression,
    /// Multipliers for (bust, waist, hips) once past the age threshold
    age_factors: (f64, f64, f64),
}

const FEMININO: BodyModel = BodyModel {
    bust: Regression { height: 0.52, weight: 0.15 },
    waist: Regression { height: 0.38, weight: 0.12 },
    hips: Regression { height: 0.54, weight: 0.18 },
    age_factors: (1.02, 1.03, 1.02),
};

const MASCULINO: BodyModel = BodyModel {
    bust: Regression { height: 0.50, weight: 0.20 },
    waist: Regression { height: 0.40, weight: 0.15 },
    hips: Regression { height: 0.48, weight: 0.12 },
    age_factors: (1.0, 1.05, 1.0),
};

impl Gender {
    fn body_model(self) -> &'static BodyModel {
        match self {
            Gender::Feminino => &FEMININO,
            Gender::Masculino => &MASCULINO,
        }
    }
}

/// Estimate bust, waist and hips from height, weight, sex and age
///
/// These are coarse anthropometric approximations meant as a starting point
/// the user corrects afterwards. No validation happens here: out-of-range
/// input produces out-of-range (even negative) output, unclamped.
///
/// Each value is rounded to the nearest centimeter after the age correction.
pub fn estimate(data: &UserBasicData) -> UserMeasurements {
    let model = data.gender.body_model();

    let mut bust = model.bust.apply(data.height, data.weight);
    let mut waist = model.waist.apply(data.height, data.weight);
    let mut hips = model.hips.apply(data.height, data.weight);

    if data.age > AGE_CORRECTION_AFTER {
        let (bust_factor, waist_factor, hips_factor) = model.age_factors;
        bust *= bust_factor;
        waist *= waist_factor;
        hips *= hips_factor;
    }

    UserMeasurements {
        bust: round_half_up(bust),
        waist: round_half_up(waist),
        hips: round_half_up(hips),
    }
}

/// Round to the nearest integer, ties toward positive infinity
///
/// `f64::round` sends ties away from zero, which differs for negative halves.
#[inline]
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
