//! Iterative weight forecasting under simulated habit changes

use crate::error::{ForecastError, Result};
use crate::features::{Adjustments, FeatureVector};
use crate::predictor::Predictor;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Number of future days the tracker forecasts.
pub const DEFAULT_HORIZON: usize = 7;

/// One forecast day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Calendar date of the prediction
    pub date: NaiveDate,
    /// Predicted smoothed body weight (kg)
    pub predicted_weight: f64,
}

/// Ordered result of one forecast run.
///
/// Dates are consecutive calendar days starting at the run's `start_date`,
/// one point per forecast day. Built fresh each run and handed to the
/// rendering layer as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastReport {
    points: Vec<ForecastPoint>,
}

impl ForecastReport {
    /// Get the forecast points
    pub fn points(&self) -> &[ForecastPoint] {
        &self.points
    }

    /// Get the predicted weights in date order
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.predicted_weight).collect()
    }

    /// Get the forecast dates in order
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    /// Number of forecast days
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check whether the report holds no forecast days
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Serialize the report to JSON for the rendering layer
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Roll the predictor forward `horizon` days from the latest known state.
///
/// Day 0 is always predicted from the unmodified `initial` state; after each
/// day's prediction the three adjustable features move by `delta / horizon`,
/// so day `k` reflects `k` increments, a cumulative `k / horizon` share of
/// the full daily delta. The caller's `initial` state is never mutated: the
/// engine works on its own copy, and independent runs share nothing.
///
/// Iterations are strictly sequential; each day's input is the previous
/// day's updated state.
///
/// # Errors
///
/// * [`ForecastError::InvalidParameter`] if any adjustment delta is non-finite
/// * [`ForecastError::MissingFeature`] if the initial state has a non-finite field
/// * [`ForecastError::PredictionFailure`] if the predictor fails or returns a
///   non-finite value on any day; the run aborts with no partial report
pub fn run_forecast(
    initial: &FeatureVector,
    predictor: &dyn Predictor,
    adjustments: &Adjustments,
    horizon: usize,
    start_date: NaiveDate,
) -> Result<ForecastReport> {
    adjustments.validate()?;
    initial.validate()?;

    let mut state = initial.clone();
    let mut points = Vec::with_capacity(horizon);

    for day in 0..horizon {
        let predicted_weight = predictor.predict(&state).map_err(|err| match err {
            failure @ ForecastError::PredictionFailure(_) => failure,
            other => ForecastError::PredictionFailure(other.to_string()),
        })?;

        if !predicted_weight.is_finite() {
            return Err(ForecastError::PredictionFailure(format!(
                "model '{}' returned a non-finite value on day {}",
                predictor.name(),
                day
            )));
        }

        points.push(ForecastPoint {
            date: start_date + Duration::days(day as i64),
            predicted_weight,
        });

        state = adjustments.step(&state, horizon);
    }

    Ok(ForecastReport { points })
}
