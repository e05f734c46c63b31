use chrono::NaiveDate;
use health_data::DailyRecord;
use metabolism_forecast::recommendations::{recommend, Recommendation};
use rstest::rstest;

fn on_track_record() -> DailyRecord {
    DailyRecord {
        date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        calories_roll_7: 2200.0,
        protein_roll_7: 90.0,
        carbs_roll_7: 230.0,
        fat_roll_7: 75.0,
        activity_minutes_roll_7: 40.0,
        steps_roll_7: 8000.0,
        sleep_hours_roll_7: 7.5,
        weight_roll_7: 78.0,
        predicted_weight_roll_7: Some(78.1),
    }
}

#[test]
fn on_track_record_yields_no_recommendations() {
    assert!(recommend(&on_track_record()).is_empty());
}

#[test]
fn low_calories_suggest_eating_more() {
    let mut record = on_track_record();
    record.calories_roll_7 = 1799.9;

    assert_eq!(
        recommend(&record),
        vec![Recommendation::IncreaseCalories]
    );
}

#[test]
fn high_calories_suggest_moderation() {
    let mut record = on_track_record();
    record.calories_roll_7 = 2500.1;

    assert_eq!(
        recommend(&record),
        vec![Recommendation::ModerateCalories]
    );
}

// The thresholds are strict comparisons: a value sitting exactly on one
// raises nothing.
#[rstest]
#[case(1800.0)]
#[case(2500.0)]
fn boundary_calories_are_on_track(#[case] calories: f64) {
    let mut record = on_track_record();
    record.calories_roll_7 = calories;

    assert!(recommend(&record).is_empty());
}

#[test]
fn short_sleep_suggests_sleeping_more() {
    let mut record = on_track_record();
    record.sleep_hours_roll_7 = 5.9;

    assert_eq!(recommend(&record), vec![Recommendation::SleepMore]);
}

#[test]
fn low_steps_suggest_moving_more() {
    let mut record = on_track_record();
    record.steps_roll_7 = 4999.0;

    assert_eq!(recommend(&record), vec![Recommendation::MoveMore]);
}

#[test]
fn low_protein_suggests_eating_protein() {
    let mut record = on_track_record();
    record.protein_roll_7 = 49.0;

    assert_eq!(recommend(&record), vec![Recommendation::IncreaseProtein]);
}

#[test]
fn rules_stack_in_a_fixed_order() {
    let mut record = on_track_record();
    record.calories_roll_7 = 1500.0;
    record.sleep_hours_roll_7 = 5.0;
    record.steps_roll_7 = 3000.0;
    record.protein_roll_7 = 40.0;

    assert_eq!(
        recommend(&record),
        vec![
            Recommendation::IncreaseCalories,
            Recommendation::SleepMore,
            Recommendation::MoveMore,
            Recommendation::IncreaseProtein,
        ]
    );
}

#[test]
fn every_recommendation_has_a_message() {
    let recommendations = [
        Recommendation::IncreaseCalories,
        Recommendation::ModerateCalories,
        Recommendation::SleepMore,
        Recommendation::MoveMore,
        Recommendation::IncreaseProtein,
    ];

    for recommendation in recommendations {
        assert!(!recommendation.message().is_empty());
    }
}
