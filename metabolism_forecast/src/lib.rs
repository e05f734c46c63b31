//! # Metabolism Forecast
//!
//! A Rust library for forecasting body weight from daily health metrics
//! under simulated habit changes.
//!
//! ## Features
//!
//! - Typed history snapshots of daily 7-day rolling averages (CSV ingestion,
//!   date-range filtering, nutrition summaries)
//! - A named-field feature schema shared between the state model and the
//!   regression artifact, validated at model load time
//! - An autoregressive forecast engine: repeated one-step prediction with a
//!   deterministic per-day state update, ramping user-chosen calorie, step,
//!   and sleep deltas in linearly over the horizon
//! - Historical prediction accuracy metrics and rule-based habit
//!   recommendations
//!
//! ## Quick Start
//!
//! ```no_run
//! use metabolism_forecast::{
//!     run_forecast, Adjustments, History, LinearModel, DEFAULT_HORIZON,
//! };
//!
//! # fn main() -> metabolism_forecast::Result<()> {
//! // Load a snapshot of tracker rows and the trained model artifact
//! let history = History::from_csv("metabolism_data.csv")?;
//! let model = LinearModel::from_file("weight_model.json")?;
//!
//! // Forecast a week of eating 250 kcal less and walking 1500 steps more
//! let initial = history.latest_features()?;
//! let adjustments = Adjustments::new(-250.0, 1500.0, 0.0)?;
//! let report = run_forecast(
//!     &initial,
//!     &model,
//!     &adjustments,
//!     DEFAULT_HORIZON,
//!     history.forecast_start_date()?,
//! )?;
//!
//! for point in report.points() {
//!     println!("{}: {:.2} kg", point.date, point.predicted_weight);
//! }
//! # Ok(())
//! # }
//! ```

pub mod data;
pub mod engine;
pub mod error;
pub mod features;
pub mod metrics;
pub mod predictor;
pub mod recommendations;

// Re-export commonly used types
pub use crate::data::{History, NutritionSummary};
pub use crate::engine::{run_forecast, ForecastPoint, ForecastReport, DEFAULT_HORIZON};
pub use crate::error::{ForecastError, Result};
pub use crate::features::{Adjustments, FeatureVector, FEATURE_NAMES};
pub use crate::predictor::{LinearModel, Predictor};
pub use crate::recommendations::{recommend, Recommendation};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
