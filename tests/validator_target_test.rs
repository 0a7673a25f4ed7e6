// ABOUTME: Integration tests for the target semantics invariant family
// ABOUTME: Zone indices, range pairing, percent flags and swim target restrictions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coaching
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{assert_has_issue, run_workout, swim_workout};
use stride_workout_compiler::models::{
    SecondaryTargetType, Step, TargetType, ValueType, WorkoutStep,
};
use stride_workout_compiler::validation::validate;

fn first_step(workout: &mut stride_workout_compiler::Workout) -> &mut Step {
    match &mut workout.segments[0].steps[0] {
        WorkoutStep::Single(step) => step,
        WorkoutStep::Repeat(_) => panic!("expected a leaf step"),
    }
}

#[test]
fn test_heart_rate_zone_must_be_one_to_five() {
    let mut workout = run_workout();
    {
        let step = first_step(&mut workout);
        step.target_type = Some(TargetType::HeartRate);
        step.target_value = Some(6.0);
    }
    let issues = validate(&workout).unwrap_err();
    assert_has_issue(&issues, "steps[0].targetValue", "between 1 and 5");

    first_step(&mut workout).target_value = Some(3.0);
    assert!(validate(&workout).is_ok());
}

#[test]
fn test_power_zone_must_be_one_to_seven() {
    let mut workout = run_workout();
    {
        let step = first_step(&mut workout);
        step.target_type = Some(TargetType::Power);
        step.target_value = Some(8.0);
    }
    let issues = validate(&workout).unwrap_err();
    assert_has_issue(&issues, "steps[0].targetValue", "between 1 and 7");

    first_step(&mut workout).target_value = Some(7.0);
    assert!(validate(&workout).is_ok());
}

#[test]
fn test_zone_value_and_range_are_mutually_exclusive() {
    let mut workout = run_workout();
    {
        let step = first_step(&mut workout);
        step.target_type = Some(TargetType::HeartRate);
        step.target_value = Some(3.0);
        step.target_value_low = Some(60.0);
        step.target_value_high = Some(70.0);
        step.target_value_type = Some(ValueType::Percent);
    }

    let issues = validate(&workout).unwrap_err();
    assert_has_issue(&issues, "steps[0].targetValue", "mutually exclusive");
}

#[test]
fn test_range_bounds_must_be_ordered() {
    let mut workout = run_workout();
    {
        let step = first_step(&mut workout);
        step.target_type = Some(TargetType::Cadence);
        step.target_value_low = Some(95.0);
        step.target_value_high = Some(85.0);
    }

    let issues = validate(&workout).unwrap_err();
    assert_has_issue(&issues, "steps[0].targetValueLow", "must be less than");
}

#[test]
fn test_one_sided_range_is_rejected() {
    let mut workout = run_workout();
    {
        let step = first_step(&mut workout);
        step.target_type = Some(TargetType::Cadence);
        step.target_value_low = Some(85.0);
    }

    let issues = validate(&workout).unwrap_err();
    assert_has_issue(&issues, "steps[0].targetValueLow", "set together");
}

#[test]
fn test_heart_rate_range_requires_percent_flag() {
    let mut workout = run_workout();
    {
        let step = first_step(&mut workout);
        step.target_type = Some(TargetType::HeartRate);
        step.target_value_low = Some(65.0);
        step.target_value_high = Some(75.0);
    }
    let issues = validate(&workout).unwrap_err();
    assert_has_issue(&issues, "steps[0].targetValueType", "PERCENT");

    first_step(&mut workout).target_value_type = Some(ValueType::Percent);
    assert!(validate(&workout).is_ok());
}

#[test]
fn test_open_target_forbids_values() {
    let mut workout = run_workout();
    {
        let step = first_step(&mut workout);
        step.target_type = Some(TargetType::Open);
        step.target_value = Some(150.0);
    }

    let issues = validate(&workout).unwrap_err();
    assert_has_issue(&issues, "steps[0].targetValue", "OPEN target forbids");
}

#[test]
fn test_secondary_type_must_differ_from_primary() {
    let mut workout = run_workout();
    {
        let step = first_step(&mut workout);
        step.target_type = Some(TargetType::Power);
        step.target_value = Some(3.0);
        step.secondary_target_type = Some(SecondaryTargetType::Power);
        step.secondary_target_value = Some(4.0);
    }

    let issues = validate(&workout).unwrap_err();
    assert_has_issue(
        &issues,
        "steps[0].secondaryTargetType",
        "must differ from the primary",
    );
}

#[test]
fn test_swim_only_secondary_type_is_rejected_on_land() {
    let mut workout = run_workout();
    first_step(&mut workout).secondary_target_type = Some(SecondaryTargetType::PaceZone);

    let issues = validate(&workout).unwrap_err();
    assert_has_issue(
        &issues,
        "steps[0].secondaryTargetType",
        "only valid on LAP_SWIMMING",
    );
}

#[test]
fn test_swim_step_rejects_primary_target() {
    let mut workout = swim_workout();
    if let WorkoutStep::Single(step) = &mut workout.segments[0].steps[0] {
        step.target_type = Some(TargetType::Pace);
        step.target_value_low = Some(95.0);
        step.target_value_high = Some(105.0);
    }

    let issues = validate(&workout).unwrap_err();
    assert_has_issue(
        &issues,
        "steps[0].targetType",
        "swim steps must not set a primary targetType",
    );
}

#[test]
fn test_swim_secondary_restricted_to_swim_variants() {
    let mut workout = swim_workout();
    if let WorkoutStep::Single(step) = &mut workout.segments[0].steps[0] {
        step.secondary_target_type = Some(SecondaryTargetType::Cadence);
        step.secondary_target_value = Some(30.0);
    }
    let issues = validate(&workout).unwrap_err();
    assert_has_issue(
        &issues,
        "steps[0].secondaryTargetType",
        "PACE_ZONE, SWIM_INSTRUCTION or SWIM_CSS_OFFSET",
    );

    if let WorkoutStep::Single(step) = &mut workout.segments[0].steps[0] {
        step.secondary_target_type = Some(SecondaryTargetType::SwimInstruction);
        step.secondary_target_value = Some(1.0);
    }
    assert!(validate(&workout).is_ok());
}
