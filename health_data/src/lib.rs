//! # Health Data
//!
//! `health_data` provides the typed daily records shared by the metabolism
//! tracking tools. Each record holds one calendar day of smoothed (7-day
//! rolling average) measurements: nutrition intake, activity, sleep, and
//! weight, plus the model's historical weight prediction where available.
//!
//! ## Usage Example
//!
//! ```
//! use chrono::NaiveDate;
//! use health_data::utils::generate_test_data;
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let records = generate_test_data(30, start);
//!
//! assert_eq!(records.len(), 30);
//! for record in &records {
//!     assert!(record.validate().is_ok());
//! }
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Utility functions
pub mod utils;

/// Errors that can occur when handling tracker records
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Insufficient data: {0}")]
    InsufficientData(String),
}

/// One calendar day of smoothed tracker measurements.
///
/// All measurement fields are trailing 7-day rolling averages, matching the
/// columns of the tracker's `metabolism_data` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// Date of the record
    pub date: NaiveDate,
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
    /// Measured body weight (kg)
    pub weight_roll_7: f64,
    /// Weight predicted by the regression model for this day, if recorded
    #[serde(default)]
    pub predicted_weight_roll_7: Option<f64>,
}

impl DailyRecord {
    /// Check that every measurement is a finite number.
    pub fn validate(&self) -> Result<(), TrackerError> {
        let measurements = [
            ("calories_roll_7", self.calories_roll_7),
            ("protein_roll_7", self.protein_roll_7),
            ("carbs_roll_7", self.carbs_roll_7),
            ("fat_roll_7", self.fat_roll_7),
            ("activity_minutes_roll_7", self.activity_minutes_roll_7),
            ("steps_roll_7", self.steps_roll_7),
            ("sleep_hours_roll_7", self.sleep_hours_roll_7),
            ("weight_roll_7", self.weight_roll_7),
        ];

        for (name, value) in measurements {
            if !value.is_finite() {
                return Err(TrackerError::InvalidRecord(format!(
                    "{} is not finite on {}",
                    name, self.date
                )));
            }
        }

        if let Some(predicted) = self.predicted_weight_roll_7 {
            if !predicted.is_finite() {
                return Err(TrackerError::InvalidRecord(format!(
                    "predicted_weight_roll_7 is not finite on {}",
                    self.date
                )));
            }
        }

        Ok(())
    }
}
