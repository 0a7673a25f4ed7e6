// ABOUTME: Integration tests for the sport consistency invariant family
// ABOUTME: Mono/multi-sport structure, multi-sport bounds and pool length rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coaching
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{
    assert_has_issue, multi_sport_workout, run_workout, segment, swim_workout, timed_step,
};
use stride_workout_compiler::models::{PoolLengthUnit, Sport, WorkoutStep};
use stride_workout_compiler::validation::validate;

#[test]
fn test_valid_multi_sport_workout_passes() {
    assert!(validate(&multi_sport_workout(3)).is_ok());
}

#[test]
fn test_mono_sport_workout_needs_exactly_one_segment() {
    let mut workout = run_workout();
    workout.segments.push(segment(
        2,
        Sport::Running,
        vec![WorkoutStep::Single(timed_step(1, 300.0))],
    ));

    let issues = validate(&workout).unwrap_err();
    assert_has_issue(&issues, "segments", "exactly one segment");
}

#[test]
fn test_segment_sport_must_match_workout_sport() {
    let mut workout = run_workout();
    workout.segments[0].sport = Some(Sport::Cycling);

    let issues = validate(&workout).unwrap_err();
    assert_has_issue(&issues, "segments[0].sport", "must match the workout sport");
}

#[test]
fn test_missing_workout_sport_is_rejected() {
    let mut workout = run_workout();
    workout.sport = None;

    let issues = validate(&workout).unwrap_err();
    assert_has_issue(&issues, "sport", "sport is required");
}

#[test]
fn test_multi_sport_with_26_segments_is_rejected() {
    let workout = multi_sport_workout(26);

    let issues = validate(&workout).unwrap_err();
    assert_has_issue(&issues, "segments", "between 1 and 25 segments");
}

#[test]
fn test_multi_sport_step_limit_is_enforced() {
    let mut workout = multi_sport_workout(25);
    // 25 segments of 11 steps each: 275 leaf steps, over the 250 cap
    for seg in &mut workout.segments {
        seg.steps = (1..=11)
            .map(|order| WorkoutStep::Single(timed_step(order, 60.0)))
            .collect();
    }

    let issues = validate(&workout).unwrap_err();
    assert_has_issue(&issues, "segments", "at most 250 steps");
}

#[test]
fn test_multi_sport_requires_session_transition_flag() {
    let mut workout = multi_sport_workout(2);
    workout.is_session_transition_enabled = Some(false);

    let issues = validate(&workout).unwrap_err();
    assert_has_issue(
        &issues,
        "isSessionTransitionEnabled",
        "requires isSessionTransitionEnabled = true",
    );

    workout.is_session_transition_enabled = None;
    let issues = validate(&workout).unwrap_err();
    assert_has_issue(
        &issues,
        "isSessionTransitionEnabled",
        "requires isSessionTransitionEnabled = true",
    );
}

#[test]
fn test_multi_sport_segment_cannot_be_multi_sport() {
    let mut workout = multi_sport_workout(2);
    workout.segments[1].sport = Some(Sport::MultiSport);

    let issues = validate(&workout).unwrap_err();
    assert_has_issue(&issues, "segments[1].sport", "not MULTI_SPORT");
}

#[test]
fn test_pool_length_is_swim_only() {
    let mut workout = run_workout();
    workout.segments[0].pool_length = Some(25.0);
    workout.segments[0].pool_length_unit = Some(PoolLengthUnit::Meter);

    let issues = validate(&workout).unwrap_err();
    assert_has_issue(&issues, "segments[0].poolLength", "only valid on LAP_SWIMMING");
    assert_has_issue(
        &issues,
        "segments[0].poolLengthUnit",
        "only valid on LAP_SWIMMING",
    );
}

#[test]
fn test_segment_pool_length_must_agree_with_workout() {
    let mut workout = swim_workout();
    workout.pool_length = Some(50.0);
    workout.pool_length_unit = Some(PoolLengthUnit::Meter);

    let issues = validate(&workout).unwrap_err();
    assert_has_issue(
        &issues,
        "segments[0].poolLength",
        "does not match the workout poolLength",
    );
}

#[test]
fn test_agreeing_pool_lengths_pass() {
    let mut workout = swim_workout();
    workout.pool_length = Some(25.0);
    workout.pool_length_unit = Some(PoolLengthUnit::Meter);

    assert!(validate(&workout).is_ok());
}

#[test]
fn test_unrecognized_sport_string_is_reported_not_fatal() {
    let json = r#"{
        "sport": "PARKOUR",
        "segments": [{
            "segmentOrder": 1,
            "sport": "RUNNING",
            "steps": [{
                "stepOrder": 1,
                "intensity": "ACTIVE",
                "durationType": "TIME",
                "durationValue": 600
            }]
        }]
    }"#;

    let workout = stride_workout_compiler::Workout::from_json_str(json).unwrap();
    let issues = validate(&workout).unwrap_err();
    assert_has_issue(&issues, "sport", "unrecognized sport");
}
