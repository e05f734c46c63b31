//! Historical snapshot handling
//!
//! The tracker's tabular store is external; this module only reads a
//! snapshot of its rows, filters them to the user's date range, and hands
//! the most recent state to the forecast engine.

use crate::error::{ForecastError, Result};
use crate::features::FeatureVector;
use chrono::{Duration, NaiveDate};
use health_data::DailyRecord;
use serde::Serialize;
use std::fs::File;
use std::path::Path;

/// Snapshot of historical daily records, ordered by date.
#[derive(Debug, Clone)]
pub struct History {
    records: Vec<DailyRecord>,
}

/// Descriptive statistics for one measurement column
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

/// Overview of nutrition intake over the selected range
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NutritionSummary {
    pub calories: ColumnSummary,
    pub protein: ColumnSummary,
    pub carbs: ColumnSummary,
    pub fat: ColumnSummary,
}

impl History {
    /// Build a history from in-memory records.
    ///
    /// Records are validated and sorted by date; any non-finite measurement
    /// rejects the whole snapshot.
    pub fn from_records(mut records: Vec<DailyRecord>) -> Result<Self> {
        for record in &records {
            record
                .validate()
                .map_err(|err| ForecastError::DataError(err.to_string()))?;
        }
        records.sort_by_key(|record| record.date);
        Ok(Self { records })
    }

    /// Load a history snapshot from a CSV file.
    ///
    /// The header must carry the record's column names; `*_roll_7` values
    /// are matched by name, never by position.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let mut reader = csv::Reader::from_reader(file);

        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: DailyRecord = row?;
            records.push(record);
        }

        Self::from_records(records)
    }

    /// Get the records in date order
    pub fn records(&self) -> &[DailyRecord] {
        &self.records
    }

    /// Number of records in the snapshot
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the snapshot holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Restrict the history to records within `[start, end]`, inclusive.
    pub fn filter_range(&self, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            records: self
                .records
                .iter()
                .filter(|record| record.date >= start && record.date <= end)
                .cloned()
                .collect(),
        }
    }

    /// Date of the most recent record, if any
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.records.last().map(|record| record.date)
    }

    /// First day of a forecast: the day after the most recent record.
    pub fn forecast_start_date(&self) -> Result<NaiveDate> {
        self.last_date()
            .map(|date| date + Duration::days(1))
            .ok_or_else(|| {
                ForecastError::MissingFeature(
                    "no records in the selected date range".to_string(),
                )
            })
    }

    /// Feature vector of the most recent record.
    ///
    /// This is the initial state of a forecast run.
    pub fn latest_features(&self) -> Result<FeatureVector> {
        let latest = self.records.last().ok_or_else(|| {
            ForecastError::MissingFeature("no records in the selected date range".to_string())
        })?;

        Ok(FeatureVector {
            calories_roll_7: latest.calories_roll_7,
            protein_roll_7: latest.protein_roll_7,
            carbs_roll_7: latest.carbs_roll_7,
            fat_roll_7: latest.fat_roll_7,
            activity_minutes_roll_7: latest.activity_minutes_roll_7,
            steps_roll_7: latest.steps_roll_7,
            sleep_hours_roll_7: latest.sleep_hours_roll_7,
        })
    }

    /// Measured weight by date, for the trend chart
    pub fn weight_series(&self) -> Vec<(NaiveDate, f64)> {
        self.records
            .iter()
            .map(|record| (record.date, record.weight_roll_7))
            .collect()
    }

    /// Historical model predictions by date, where recorded
    pub fn predicted_weight_series(&self) -> Vec<(NaiveDate, f64)> {
        self.records
            .iter()
            .filter_map(|record| {
                record
                    .predicted_weight_roll_7
                    .map(|predicted| (record.date, predicted))
            })
            .collect()
    }

    /// Describe the nutrition columns over the selected range.
    pub fn nutrition_summary(&self) -> Result<NutritionSummary> {
        if self.records.is_empty() {
            return Err(ForecastError::DataError(
                "cannot summarize an empty history".to_string(),
            ));
        }

        let column = |extract: fn(&DailyRecord) -> f64| -> ColumnSummary {
            summarize(&self.records.iter().map(extract).collect::<Vec<f64>>())
        };

        Ok(NutritionSummary {
            calories: column(|r| r.calories_roll_7),
            protein: column(|r| r.protein_roll_7),
            carbs: column(|r| r.carbs_roll_7),
            fat: column(|r| r.fat_roll_7),
        })
    }
}

fn summarize(values: &[f64]) -> ColumnSummary {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / n;

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    ColumnSummary {
        mean,
        std_dev: variance.sqrt(),
        min,
        max,
    }
}
