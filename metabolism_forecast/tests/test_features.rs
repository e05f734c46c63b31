use assert_approx_eq::assert_approx_eq;
use metabolism_forecast::error::ForecastError;
use metabolism_forecast::features::{Adjustments, FeatureVector, FEATURE_NAMES};

fn baseline_state() -> FeatureVector {
    FeatureVector {
        calories_roll_7: 2000.0,
        protein_roll_7: 80.0,
        carbs_roll_7: 200.0,
        fat_roll_7: 70.0,
        activity_minutes_roll_7: 30.0,
        steps_roll_7: 6000.0,
        sleep_hours_roll_7: 7.0,
    }
}

#[test]
fn values_follow_the_schema_order() {
    let state = baseline_state();
    let values = state.values();

    assert_eq!(FEATURE_NAMES.len(), values.len());
    for (name, value) in FEATURE_NAMES.iter().zip(values) {
        assert_eq!(state.get(name), Some(value));
    }

    // The training schema starts with calories and ends with sleep.
    assert_eq!(FEATURE_NAMES[0], "calories_roll_7");
    assert_eq!(FEATURE_NAMES[6], "sleep_hours_roll_7");
    assert_approx_eq!(values[0], 2000.0);
    assert_approx_eq!(values[6], 7.0);
}

#[test]
fn get_rejects_unknown_names() {
    assert_eq!(baseline_state().get("weight_roll_7"), None);
}

#[test]
fn validate_names_the_offending_feature() {
    let mut state = baseline_state();
    state.fat_roll_7 = f64::NAN;

    let error = state.validate().unwrap_err();
    assert!(matches!(error, ForecastError::MissingFeature(_)));
    assert!(error.to_string().contains("fat_roll_7"));
}

#[test]
fn step_moves_only_the_adjustable_fields() {
    let state = baseline_state();
    let adjustments = Adjustments::new(350.0, 700.0, -0.7).unwrap();

    let next = adjustments.step(&state, 7);

    assert_approx_eq!(next.calories_roll_7, 2050.0, 1e-9);
    assert_approx_eq!(next.steps_roll_7, 6100.0, 1e-9);
    assert_approx_eq!(next.sleep_hours_roll_7, 6.9, 1e-9);

    // The four non-adjustable features never move.
    assert_eq!(next.protein_roll_7, state.protein_roll_7);
    assert_eq!(next.carbs_roll_7, state.carbs_roll_7);
    assert_eq!(next.fat_roll_7, state.fat_roll_7);
    assert_eq!(next.activity_minutes_roll_7, state.activity_minutes_roll_7);
}

#[test]
fn step_leaves_the_input_state_untouched() {
    let state = baseline_state();
    let before = state.clone();

    let _ = Adjustments::new(500.0, 2000.0, 2.0).unwrap().step(&state, 7);

    assert_eq!(state, before);
}

#[test]
fn step_with_zero_horizon_is_identity() {
    let state = baseline_state();
    let adjustments = Adjustments::new(350.0, 700.0, 1.0).unwrap();

    assert_eq!(adjustments.step(&state, 0), state);
}

#[test]
fn zero_adjustments_step_is_identity() {
    let state = baseline_state();

    assert_eq!(Adjustments::default().step(&state, 7), state);
}

#[test]
fn negative_deltas_are_legal() {
    let adjustments = Adjustments::new(-500.0, -2000.0, -2.0).unwrap();
    let next = adjustments.step(&baseline_state(), 7);

    assert!(next.calories_roll_7 < 2000.0);
    assert!(next.steps_roll_7 < 6000.0);
    assert!(next.sleep_hours_roll_7 < 7.0);
}

#[test]
fn non_finite_deltas_are_rejected() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(matches!(
            Adjustments::new(bad, 0.0, 0.0),
            Err(ForecastError::InvalidParameter(_))
        ));
        assert!(matches!(
            Adjustments::new(0.0, bad, 0.0),
            Err(ForecastError::InvalidParameter(_))
        ));
        assert!(matches!(
            Adjustments::new(0.0, 0.0, bad),
            Err(ForecastError::InvalidParameter(_))
        ));
    }
}
