// ABOUTME: Integration tests for the ordering invariant family
// ABOUTME: Contiguous segment/step order sequences and non-empty lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coaching
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{assert_has_issue, multi_sport_workout, repeat_group, run_workout, timed_step};
use stride_workout_compiler::models::{Sport, Workout, WorkoutStep};
use stride_workout_compiler::validation::validate;

#[test]
fn test_valid_workout_passes() {
    assert!(validate(&run_workout()).is_ok());
}

#[test]
fn test_workout_without_segments_is_rejected() {
    let workout = Workout {
        sport: Some(Sport::Running),
        ..Workout::default()
    };

    let issues = validate(&workout).unwrap_err();
    assert_has_issue(&issues, "segments", "at least one segment");
}

#[test]
fn test_step_order_gap_is_rejected() {
    let mut workout = run_workout();
    if let WorkoutStep::Single(step) = &mut workout.segments[0].steps[1] {
        step.step_order = Some(3.0);
    }

    let issues = validate(&workout).unwrap_err();
    assert_has_issue(&issues, "segments[0].steps[1].stepOrder", "contiguous");
}

#[test]
fn test_duplicate_step_order_is_rejected() {
    let mut workout = run_workout();
    if let WorkoutStep::Single(step) = &mut workout.segments[0].steps[1] {
        step.step_order = Some(1.0);
    }

    let issues = validate(&workout).unwrap_err();
    assert_has_issue(&issues, "segments[0].steps[1].stepOrder", "contiguous");
}

#[test]
fn test_fractional_step_order_is_rejected() {
    let mut workout = run_workout();
    if let WorkoutStep::Single(step) = &mut workout.segments[0].steps[0] {
        step.step_order = Some(1.5);
    }

    let issues = validate(&workout).unwrap_err();
    assert_has_issue(&issues, "steps[0].stepOrder", "positive integer");
}

#[test]
fn test_missing_segment_order_is_rejected() {
    let mut workout = run_workout();
    workout.segments[0].segment_order = None;

    let issues = validate(&workout).unwrap_err();
    assert_has_issue(&issues, "segments[0].segmentOrder", "required");
}

#[test]
fn test_segment_order_must_start_at_one() {
    let mut workout = multi_sport_workout(2);
    workout.segments[0].segment_order = Some(2.0);
    workout.segments[1].segment_order = Some(3.0);

    let issues = validate(&workout).unwrap_err();
    assert_has_issue(&issues, "segments[0].segmentOrder", "expected 1");
}

#[test]
fn test_empty_segment_is_rejected() {
    let mut workout = run_workout();
    workout.segments[0].steps.clear();

    let issues = validate(&workout).unwrap_err();
    assert_has_issue(&issues, "segments[0].steps", "at least one step");
}

#[test]
fn test_repeat_children_restart_at_one() {
    let mut workout = run_workout();
    workout.segments[0].steps = vec![
        WorkoutStep::Single(timed_step(1, 600.0)),
        WorkoutStep::Repeat(repeat_group(
            2,
            4.0,
            vec![timed_step(1, 300.0), timed_step(2, 60.0)],
        )),
    ];

    assert!(validate(&workout).is_ok());
}

#[test]
fn test_repeat_children_continuing_parent_sequence_are_rejected() {
    let mut workout = run_workout();
    workout.segments[0].steps = vec![
        WorkoutStep::Single(timed_step(1, 600.0)),
        WorkoutStep::Repeat(repeat_group(
            2,
            4.0,
            // Child order must restart at 1 inside the group
            vec![timed_step(3, 300.0), timed_step(4, 60.0)],
        )),
    ];

    let issues = validate(&workout).unwrap_err();
    assert_has_issue(&issues, "steps[1].steps[0].stepOrder", "contiguous");
}

#[test]
fn test_empty_repeat_group_is_rejected() {
    let mut workout = run_workout();
    workout.segments[0].steps = vec![WorkoutStep::Repeat(repeat_group(1, 4.0, Vec::new()))];

    let issues = validate(&workout).unwrap_err();
    assert_has_issue(&issues, "segments[0].steps[0].steps", "at least one child step");
}
