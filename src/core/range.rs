use crate::models::FitStatus;

/// A single chart value within this many centimeters still counts as a fit
pub const SINGLE_VALUE_TOLERANCE_CM: f64 = 2.0;

/// A size chart cell once parsed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartValue {
    /// `"92 - 96"`; `"92 -"` reuses the lower bound as the upper one
    Range { min: f64, max: f64 },
    /// `"92"`
    Single(f64),
    /// Nothing numeric could be read; behaves as a single value of 0
    Malformed,
}

impl ChartValue {
    /// Parse a cell such as `"92 - 96"`, `" 92-96 "` or `"92"`
    pub fn parse(text: &str) -> Self {
        let text = text.trim();

        if text.contains('-') {
            let mut parts = text.split('-');
            let min = parts.next().and_then(leading_number);
            let max = match parts.next().map(str::trim) {
                Some(part) if !part.is_empty() => leading_number(part),
                _ => min,
            };

            return match (min, max) {
                (Some(min), Some(max)) => ChartValue::Range { min, max },
                _ => ChartValue::Malformed,
            };
        }

        match leading_number(text) {
            Some(value) => ChartValue::Single(value),
            None => ChartValue::Malformed,
        }
    }

    /// Representative value: the midpoint of a range, the value itself, or 0
    pub fn center(&self) -> f64 {
        match *self {
            ChartValue::Range { min, max } => (min + max) / 2.0,
            ChartValue::Single(value) => value,
            ChartValue::Malformed => 0.0,
        }
    }

    /// Where a user's value falls against this cell
    pub fn classify(&self, user_value: f64) -> FitStatus {
        match *self {
            ChartValue::Range { min, max } => {
                if user_value < min {
                    FitStatus::Tight
                } else if user_value > max {
                    FitStatus::Loose
                } else {
                    FitStatus::Ok
                }
            }
            ChartValue::Single(target) => classify_single(user_value, target),
            ChartValue::Malformed => classify_single(user_value, 0.0),
        }
    }
}

#[inline]
fn classify_single(user_value: f64, target: f64) -> FitStatus {
    let delta = user_value - target;
    if delta.abs() <= SINGLE_VALUE_TOLERANCE_CM {
        FitStatus::Ok
    } else if delta < 0.0 {
        FitStatus::Tight
    } else {
        FitStatus::Loose
    }
}

/// Center value of a chart cell; malformed cells give 0
pub fn parse_center(text: &str) -> f64 {
    ChartValue::parse(text).center()
}

/// Classify a user value against a chart cell
pub fn classify(user_value: f64, text: &str) -> FitStatus {
    ChartValue::parse(text).classify(user_value)
}

/// Read the longest numeric prefix, so `"92cm"` reads as 92
fn leading_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        start + bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count()
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+')) {
        end = 1;
    }

    let int_end = digits_from(end);
    let mut has_digits = int_end > end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        if has_digits || frac_end > end + 1 {
            has_digits = true;
            end = frac_end;
        }
    }

    if !has_digits {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_end = digits_from(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    text[..end].parse().ok()
}
