//! Feature vector state model and the per-day adjustment rule

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};

/// Canonical feature order, established when the weight model was trained.
///
/// The regression model consumes features in exactly this order; the order
/// here and the field order of [`FeatureVector::values`] must never diverge.
pub const FEATURE_NAMES: [&str; 7] = [
    "calories_roll_7",
    "protein_roll_7",
    "carbs_roll_7",
    "fat_roll_7",
    "activity_minutes_roll_7",
    "steps_roll_7",
    "sleep_hours_roll_7",
];

/// Rolling 7-day averages of the covariates the weight model was trained on.
///
/// Exactly one of these is live during a forecast run: it is copied from the
/// most recent historical record and evolved day by day by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Caloric intake (kcal)
    pub calories_roll_7: f64,
    /// Protein intake (g)
    pub protein_roll_7: f64,
    /// Carbohydrate intake (g)
    pub carbs_roll_7: f64,
    /// Fat intake (g)
    pub fat_roll_7: f64,
    /// Active minutes
    pub activity_minutes_roll_7: f64,
    /// Step count
    pub steps_roll_7: f64,
    /// Sleep duration (hours)
    pub sleep_hours_roll_7: f64,
}

impl FeatureVector {
    /// Extract the feature values in [`FEATURE_NAMES`] order.
    pub fn values(&self) -> [f64; 7] {
        [
            self.calories_roll_7,
            self.protein_roll_7,
            self.carbs_roll_7,
            self.fat_roll_7,
            self.activity_minutes_roll_7,
            self.steps_roll_7,
            self.sleep_hours_roll_7,
        ]
    }

    /// Look up a feature value by its schema name.
    pub fn get(&self, name: &str) -> Option<f64> {
        FEATURE_NAMES
            .iter()
            .position(|&n| n == name)
            .map(|idx| self.values()[idx])
    }

    /// Check that every feature is a finite number.
    ///
    /// The engine refuses to start a run from a state that fails this check;
    /// a NaN fed into the regression model would silently poison the whole
    /// trajectory.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in FEATURE_NAMES.iter().zip(self.values()) {
            if !value.is_finite() {
                return Err(ForecastError::MissingFeature(format!(
                    "feature '{}' is not a finite number",
                    name
                )));
            }
        }
        Ok(())
    }
}

/// Sustained daily behavior changes to simulate over a forecast horizon.
///
/// Each delta is a constant daily rate of change. Zero and negative values
/// are legal; zero deltas leave the state untouched across the whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Adjustments {
    /// Daily calorie change (kcal/day)
    pub calorie_delta: f64,
    /// Daily step change (steps/day)
    pub step_delta: f64,
    /// Daily sleep change (hours/day)
    pub sleep_delta: f64,
}

impl Adjustments {
    /// Create validated adjustments.
    pub fn new(calorie_delta: f64, step_delta: f64, sleep_delta: f64) -> Result<Self> {
        let adjustments = Self {
            calorie_delta,
            step_delta,
            sleep_delta,
        };
        adjustments.validate()?;
        Ok(adjustments)
    }

    /// Check that every delta is a finite number.
    pub fn validate(&self) -> Result<()> {
        let deltas = [
            ("calorie_delta", self.calorie_delta),
            ("step_delta", self.step_delta),
            ("sleep_delta", self.sleep_delta),
        ];

        for (name, value) in deltas {
            if !value.is_finite() {
                return Err(ForecastError::InvalidParameter(format!(
                    "{} must be a finite number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Advance the state by one forecast day.
    ///
    /// Each adjustable rolling average moves by `delta / horizon`, so the
    /// full daily delta ramps in linearly over the horizon. Protein, carbs,
    /// fat, and activity minutes are deliberately held constant; the model
    /// does not re-estimate them.
    ///
    /// Total for finite inputs: a zero horizon returns the state unchanged.
    pub fn step(&self, state: &FeatureVector, horizon: usize) -> FeatureVector {
        let mut next = state.clone();
        if horizon == 0 {
            return next;
        }

        let days = horizon as f64;
        next.calories_roll_7 += self.calorie_delta / days;
        next.steps_roll_7 += self.step_delta / days;
        next.sleep_hours_roll_7 += self.sleep_delta / days;
        next
    }
}
