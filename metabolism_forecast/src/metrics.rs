//! Accuracy of the model's historical predictions

use crate::data::History;
use crate::error::{ForecastError, Result};
use serde::Serialize;

/// Error metrics comparing predicted weights against actuals
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AccuracyMetrics {
    /// Mean absolute error
    pub mae: f64,
    /// Mean squared error
    pub mse: f64,
    /// Root mean squared error
    pub rmse: f64,
}

/// Compare a predicted series against actual values over the same dates.
pub fn prediction_accuracy(predicted: &[f64], actual: &[f64]) -> Result<AccuracyMetrics> {
    if predicted.len() != actual.len() || predicted.is_empty() {
        return Err(ForecastError::InvalidParameter(
            "predicted and actual series must have the same non-zero length".to_string(),
        ));
    }

    let n = predicted.len() as f64;
    let errors: Vec<f64> = predicted
        .iter()
        .zip(actual.iter())
        .map(|(p, a)| a - p)
        .collect();

    let mae = errors.iter().map(|e| e.abs()).sum::<f64>() / n;
    let mse = errors.iter().map(|e| e.powi(2)).sum::<f64>() / n;

    Ok(AccuracyMetrics {
        mae,
        mse,
        rmse: mse.sqrt(),
    })
}

/// How well the model tracked measured weight over a history snapshot.
///
/// Only rows that carry a historical prediction participate.
pub fn history_accuracy(history: &History) -> Result<AccuracyMetrics> {
    let mut predicted = Vec::new();
    let mut actual = Vec::new();

    for record in history.records() {
        if let Some(prediction) = record.predicted_weight_roll_7 {
            predicted.push(prediction);
            actual.push(record.weight_roll_7);
        }
    }

    if predicted.is_empty() {
        return Err(ForecastError::DataError(
            "history holds no rows with a recorded prediction".to_string(),
        ));
    }

    prediction_accuracy(&predicted, &actual)
}
