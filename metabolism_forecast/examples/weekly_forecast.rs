//! Forecast a week of weight under adjusted habits.
//!
//! Generates a synthetic tracker history, loads a linear weight model, and
//! prints the 7-day trajectory plus the rule-based recommendations.

use chrono::NaiveDate;
use health_data::utils::generate_test_data;
use metabolism_forecast::{
    recommend, run_forecast, Adjustments, History, LinearModel, DEFAULT_HORIZON,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let history = History::from_records(generate_test_data(60, start))?;

    // The artifact would normally sit next to the tracker database; a small
    // hand-written model keeps the example self-contained.
    let model = LinearModel::from_json(
        r#"{
            "intercept": 86.0,
            "coefficients": {
                "calories_roll_7": 0.004,
                "protein_roll_7": -0.01,
                "carbs_roll_7": 0.002,
                "fat_roll_7": 0.003,
                "activity_minutes_roll_7": -0.02,
                "steps_roll_7": -0.0012,
                "sleep_hours_roll_7": -0.25
            }
        }"#,
    )?;

    // Eat 250 kcal less, walk 1500 steps more, sleep half an hour longer.
    let adjustments = Adjustments::new(-250.0, 1500.0, 0.5)?;
    let initial = history.latest_features()?;
    let report = run_forecast(
        &initial,
        &model,
        &adjustments,
        DEFAULT_HORIZON,
        history.forecast_start_date()?,
    )?;

    println!("Forecasted weight, next {} days:", report.len());
    for point in report.points() {
        println!("  {}  {:6.2} kg", point.date, point.predicted_weight);
    }

    let latest = history.records().last().unwrap();
    let recommendations = recommend(latest);
    if recommendations.is_empty() {
        println!("\nEverything looks on track!");
    } else {
        println!("\nRecommendations:");
        for recommendation in recommendations {
            println!("  - {}", recommendation.message());
        }
    }

    Ok(())
}
