//! Rule-based habit recommendations from the latest record
//!
//! Simple threshold checks against the most recent 7-day averages. These are
//! static rules, independent of the forecast engine; the rendering layer
//! decides how to display them.

use health_data::DailyRecord;

const LOW_CALORIES: f64 = 1800.0;
const HIGH_CALORIES: f64 = 2500.0;
const LOW_SLEEP_HOURS: f64 = 6.0;
const LOW_STEPS: f64 = 5000.0;
const LOW_PROTEIN: f64 = 50.0;

/// Advice derived from the latest 7-day averages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recommendation {
    /// Average intake is below a maintenance level
    IncreaseCalories,
    /// Average intake is high for a weight-loss goal
    ModerateCalories,
    /// Average sleep is short
    SleepMore,
    /// Average step count is low
    MoveMore,
    /// Average protein intake is low
    IncreaseProtein,
}

impl Recommendation {
    /// User-facing message for this recommendation
    pub fn message(&self) -> &'static str {
        match self {
            Recommendation::IncreaseCalories => {
                "You might need to increase your calorie intake for maintenance."
            }
            Recommendation::ModerateCalories => {
                "Your average calorie intake is high; consider moderating it if weight loss is your goal."
            }
            Recommendation::SleepMore => {
                "Try to get at least 7-8 hours of sleep for better metabolism."
            }
            Recommendation::MoveMore => {
                "Increase daily movement; consider walking more to improve fat burn."
            }
            Recommendation::IncreaseProtein => {
                "You may want to increase your protein intake to support muscle maintenance."
            }
        }
    }
}

/// Evaluate all threshold rules against the latest record.
///
/// An on-track record yields an empty vector.
pub fn recommend(latest: &DailyRecord) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if latest.calories_roll_7 < LOW_CALORIES {
        recommendations.push(Recommendation::IncreaseCalories);
    } else if latest.calories_roll_7 > HIGH_CALORIES {
        recommendations.push(Recommendation::ModerateCalories);
    }

    if latest.sleep_hours_roll_7 < LOW_SLEEP_HOURS {
        recommendations.push(Recommendation::SleepMore);
    }

    if latest.steps_roll_7 < LOW_STEPS {
        recommendations.push(Recommendation::MoveMore);
    }

    if latest.protein_roll_7 < LOW_PROTEIN {
        recommendations.push(Recommendation::IncreaseProtein);
    }

    recommendations
}
