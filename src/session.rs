//! Step sequencing for the virtual try-on.
//!
//! The estimator and matcher know nothing about steps; this module owns the
//! "where is the user" state so a front end can drive the flow:
//!
//! 1. [`TryOnStep::BasicData`]: collect sex, height, weight and age
//! 2. [`TryOnStep::Measurements`]: show the estimate, let the user adjust it
//! 3. [`TryOnStep::Result`]: show the recommendation (or that none was found)
//!
//! A session is plain data and serializes with serde, so the host application
//! can persist and restore it however it likes.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::core::{estimate, SizeMatcher};
use crate::models::{SizeChart, SizeRecommendation, UserBasicData, UserMeasurements};

/// Errors returned by session transitions
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Expected the {expected:?} step, session is at {actual:?}")]
    WrongStep {
        expected: TryOnStep,
        actual: TryOnStep,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TryOnStep {
    #[default]
    BasicData,
    Measurements,
    Result,
}

impl TryOnStep {
    fn previous(self) -> Self {
        match self {
            TryOnStep::BasicData | TryOnStep::Measurements => TryOnStep::BasicData,
            TryOnStep::Result => TryOnStep::Measurements,
        }
    }
}

/// State of one user's try-on flow
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TryOnSession {
    step: TryOnStep,
    #[serde(rename = "basicData", default)]
    basic_data: Option<UserBasicData>,
    #[serde(default)]
    measurements: Option<UserMeasurements>,
    #[serde(default)]
    recommendation: Option<SizeRecommendation>,
}

impl TryOnSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> TryOnStep {
        self.step
    }

    pub fn basic_data(&self) -> Option<&UserBasicData> {
        self.basic_data.as_ref()
    }

    pub fn measurements(&self) -> Option<&UserMeasurements> {
        self.measurements.as_ref()
    }

    /// Recommendation of the last matching run; `None` at the result step
    /// means no size could be determined
    pub fn recommendation(&self) -> Option<&SizeRecommendation> {
        self.recommendation.as_ref()
    }

    /// Validate basic data, estimate measurements and move on to adjusting them
    ///
    /// Accepted from any step: resubmitting restarts the flow from new data.
    pub fn submit_basic_data(&mut self, data: UserBasicData) -> Result<UserMeasurements, SessionError> {
        data.validate()?;

        let estimated = estimate(&data);
        self.basic_data = Some(data);
        self.measurements = Some(estimated);
        self.recommendation = None;
        self.go_to(TryOnStep::Measurements);

        Ok(estimated)
    }

    /// Replace the measurements with the user's own values
    ///
    /// Any previous recommendation is dropped since it no longer applies.
    pub fn adjust_measurements(&mut self, measurements: UserMeasurements) -> Result<(), SessionError> {
        if self.step == TryOnStep::BasicData {
            return Err(SessionError::WrongStep {
                expected: TryOnStep::Measurements,
                actual: self.step,
            });
        }
        measurements.validate()?;

        self.measurements = Some(measurements);
        self.recommendation = None;
        self.go_to(TryOnStep::Measurements);
        Ok(())
    }

    /// Match the current measurements against a chart with the default weights
    pub fn recommend(&mut self, chart: &SizeChart) -> Result<Option<&SizeRecommendation>, SessionError> {
        self.recommend_with(&SizeMatcher::with_default_weights(), chart)
    }

    /// Match the current measurements against a chart and show the result
    pub fn recommend_with(
        &mut self,
        matcher: &SizeMatcher,
        chart: &SizeChart,
    ) -> Result<Option<&SizeRecommendation>, SessionError> {
        let measurements = match (self.step, self.measurements) {
            (TryOnStep::Measurements | TryOnStep::Result, Some(m)) => m,
            _ => {
                return Err(SessionError::WrongStep {
                    expected: TryOnStep::Measurements,
                    actual: self.step,
                })
            }
        };

        self.recommendation = matcher.recommend(&measurements, chart);
        self.go_to(TryOnStep::Result);
        Ok(self.recommendation.as_ref())
    }

    /// Go one step back, keeping everything entered so far
    pub fn back(&mut self) {
        self.go_to(self.step.previous());
    }

    /// Forget everything and start over
    pub fn reset(&mut self) {
        tracing::debug!("Try-on session reset");
        *self = Self::default();
    }

    fn go_to(&mut self, step: TryOnStep) {
        if self.step != step {
            tracing::debug!("Try-on step {:?} -> {:?}", self.step, step);
        }
        self.step = step;
    }
}
