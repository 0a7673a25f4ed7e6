// ABOUTME: Shared builders for workout document integration tests
// ABOUTME: Minimal valid workouts per sport plus issue-assertion helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coaching
#![allow(dead_code, clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use stride_workout_compiler::models::{
    DurationType, Intensity, PoolLengthUnit, RepeatStep, RepeatType, Segment, Sport, Step,
    Workout, WorkoutStep,
};
use stride_workout_compiler::validation::Issue;

/// A timed active step at the given order
pub fn timed_step(order: u32, seconds: f64) -> Step {
    Step {
        step_order: Some(f64::from(order)),
        intensity: Some(Intensity::Active),
        duration_type: Some(DurationType::Time),
        duration_value: Some(seconds),
        ..Step::default()
    }
}

/// A repeat group of timed children with contiguous child orders
pub fn repeat_group(order: u32, repeat_count: f64, children: Vec<Step>) -> RepeatStep {
    RepeatStep {
        step_order: Some(f64::from(order)),
        intensity: Some(Intensity::Active),
        repeat_type: Some(RepeatType::RepeatUntilStepsCmplt),
        repeat_count: Some(repeat_count),
        skip_last_rest_step: Some(false),
        steps: children,
    }
}

/// A segment with the given order and sport over the given step list
pub fn segment(order: u32, sport: Sport, steps: Vec<WorkoutStep>) -> Segment {
    Segment {
        segment_order: Some(f64::from(order)),
        sport: Some(sport),
        pool_length: None,
        pool_length_unit: None,
        steps,
    }
}

/// Minimal valid running workout: one segment, two timed steps
pub fn run_workout() -> Workout {
    Workout {
        workout_name: Some("Easy run".to_owned()),
        sport: Some(Sport::Running),
        segments: vec![segment(
            1,
            Sport::Running,
            vec![
                WorkoutStep::Single(timed_step(1, 600.0)),
                WorkoutStep::Single(timed_step(2, 1200.0)),
            ],
        )],
        ..Workout::default()
    }
}

/// Minimal valid swim workout with a pool length on the segment
pub fn swim_workout() -> Workout {
    let mut step = timed_step(1, 900.0);
    step.intensity = Some(Intensity::Main);

    let mut swim_segment = segment(1, Sport::LapSwimming, vec![WorkoutStep::Single(step)]);
    swim_segment.pool_length = Some(25.0);
    swim_segment.pool_length_unit = Some(PoolLengthUnit::Meter);

    Workout {
        workout_name: Some("Swim set".to_owned()),
        sport: Some(Sport::LapSwimming),
        segments: vec![swim_segment],
        ..Workout::default()
    }
}

/// Minimal valid strength workout with a cataloged exercise
pub fn strength_workout() -> Workout {
    let step = Step {
        step_order: Some(1.0),
        intensity: Some(Intensity::Active),
        duration_type: Some(DurationType::Reps),
        duration_value: Some(10.0),
        exercise_category: Some("SQUAT".to_owned()),
        exercise_name: Some("GOBLET_SQUAT".to_owned()),
        ..Step::default()
    };

    Workout {
        workout_name: Some("Leg day".to_owned()),
        sport: Some(Sport::StrengthTraining),
        segments: vec![segment(
            1,
            Sport::StrengthTraining,
            vec![WorkoutStep::Single(step)],
        )],
        ..Workout::default()
    }
}

/// Valid multi-sport workout with the given number of single-step
/// segments, alternating running and cycling
pub fn multi_sport_workout(segment_count: u32) -> Workout {
    let segments = (1..=segment_count)
        .map(|order| {
            let sport = if order % 2 == 0 {
                Sport::Cycling
            } else {
                Sport::Running
            };
            segment(order, sport, vec![WorkoutStep::Single(timed_step(1, 600.0))])
        })
        .collect();

    Workout {
        workout_name: Some("Brick session".to_owned()),
        sport: Some(Sport::MultiSport),
        is_session_transition_enabled: Some(true),
        segments,
        ..Workout::default()
    }
}

/// Assert that some issue matches both the path fragment and the message
/// fragment
pub fn assert_has_issue(issues: &[Issue], path_fragment: &str, message_fragment: &str) {
    assert!(
        issues
            .iter()
            .any(|issue| issue.path.contains(path_fragment)
                && issue.message.contains(message_fragment)),
        "no issue matching path ~ {path_fragment:?} and message ~ {message_fragment:?} in {issues:#?}"
    );
}
