//! Weight predictors over the shared feature schema

use crate::error::{ForecastError, Result};
use crate::features::{FeatureVector, FEATURE_NAMES};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Debug;
use std::fs::File;
use std::path::Path;

/// Trained regression model mapping a feature vector to a predicted weight.
///
/// Implementations must be pure and deterministic: identical input produces
/// identical output, with no internal state and no randomness. The engine
/// relies on this to skip retries entirely.
pub trait Predictor: Debug {
    /// Predict the smoothed body weight for one feature vector.
    fn predict(&self, features: &FeatureVector) -> Result<f64>;

    /// Name of the model
    fn name(&self) -> &str;
}

/// Serialized form of a linear weight model, coefficients keyed by feature name.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LinearModelSpec {
    intercept: f64,
    coefficients: HashMap<String, f64>,
}

/// Linear regression over the seven rolling features.
///
/// The artifact stores coefficients keyed by feature NAME rather than by
/// position, and loading fails unless the key set matches [`FEATURE_NAMES`]
/// exactly. A model trained against a different schema can therefore never
/// be silently applied to this state.
#[derive(Debug, Clone)]
pub struct LinearModel {
    name: String,
    intercept: f64,
    /// Coefficients in FEATURE_NAMES order
    weights: [f64; 7],
}

impl LinearModel {
    /// Build a model from an intercept and named coefficients.
    pub fn new(intercept: f64, coefficients: &HashMap<String, f64>) -> Result<Self> {
        for key in coefficients.keys() {
            if !FEATURE_NAMES.contains(&key.as_str()) {
                return Err(ForecastError::SchemaMismatch(format!(
                    "model coefficient '{}' is not a known feature",
                    key
                )));
            }
        }

        let mut weights = [0.0; 7];
        for (idx, name) in FEATURE_NAMES.iter().enumerate() {
            let coefficient = coefficients.get(*name).ok_or_else(|| {
                ForecastError::SchemaMismatch(format!(
                    "model has no coefficient for feature '{}'",
                    name
                ))
            })?;
            if !coefficient.is_finite() {
                return Err(ForecastError::InvalidParameter(format!(
                    "coefficient for '{}' must be a finite number, got {}",
                    name, coefficient
                )));
            }
            weights[idx] = *coefficient;
        }

        if !intercept.is_finite() {
            return Err(ForecastError::InvalidParameter(format!(
                "intercept must be a finite number, got {}",
                intercept
            )));
        }

        Ok(Self {
            name: format!("Linear weight model ({} features)", FEATURE_NAMES.len()),
            intercept,
            weights,
        })
    }

    /// Load a model artifact from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let spec: LinearModelSpec = serde_json::from_str(json)?;
        Self::new(spec.intercept, &spec.coefficients)
    }

    /// Load a model artifact from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let spec: LinearModelSpec = serde_json::from_reader(file)?;
        Self::new(spec.intercept, &spec.coefficients)
    }

    /// The model intercept.
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Coefficients in [`FEATURE_NAMES`] order.
    pub fn weights(&self) -> &[f64; 7] {
        &self.weights
    }
}

impl Predictor for LinearModel {
    fn predict(&self, features: &FeatureVector) -> Result<f64> {
        features.validate()?;

        let dot: f64 = self
            .weights
            .iter()
            .zip(features.values())
            .map(|(weight, value)| weight * value)
            .sum();

        Ok(self.intercept + dot)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
