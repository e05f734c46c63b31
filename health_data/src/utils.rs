//! Utility functions for producing synthetic tracker data
//!
//! Used by tests and examples that need a plausible run of daily records
//! without a real tracker database behind them.

use crate::DailyRecord;
use chrono::{Duration, NaiveDate};
use rand::{thread_rng, Rng};

/// Generate consecutive daily records for testing purposes
///
/// Values drift day to day the way rolling averages do: weight follows a
/// slow random walk and every other measurement wobbles around a typical
/// adult baseline.
///
/// # Arguments
/// * `num_days` - Number of consecutive daily records to generate
/// * `start_date` - Date of the first record
///
/// # Returns
/// * Vector of `DailyRecord` ordered by date
pub fn generate_test_data(num_days: usize, start_date: NaiveDate) -> Vec<DailyRecord> {
    let mut rng = thread_rng();
    let mut weight = 80.0 + rng.gen_range(-5.0..5.0);
    let mut records = Vec::with_capacity(num_days);

    for day in 0..num_days {
        weight += rng.gen_range(-0.15..0.15);

        records.push(DailyRecord {
            date: start_date + Duration::days(day as i64),
            calories_roll_7: 2100.0 + rng.gen_range(-250.0..250.0),
            protein_roll_7: 85.0 + rng.gen_range(-15.0..15.0),
            carbs_roll_7: 220.0 + rng.gen_range(-40.0..40.0),
            fat_roll_7: 70.0 + rng.gen_range(-15.0..15.0),
            activity_minutes_roll_7: 35.0 + rng.gen_range(-15.0..25.0),
            steps_roll_7: 7000.0 + rng.gen_range(-2000.0..2000.0),
            sleep_hours_roll_7: 7.0 + rng.gen_range(-1.0..1.0),
            weight_roll_7: weight,
            predicted_weight_roll_7: Some(weight + rng.gen_range(-0.4..0.4)),
        });
    }

    records
}
