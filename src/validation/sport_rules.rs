// ABOUTME: Sport consistency invariant family
// ABOUTME: Mono/multi-sport segment rules, multi-sport bounds and pool length agreement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coaching

use super::issue::Issue;
use crate::constants::limits;
use crate::models::{Sport, Workout};

/// Check sport consistency across the workout and its segments, the
/// multi-sport structural bounds, and pool length legality.
pub fn check(workout: &Workout) -> Vec<Issue> {
    let mut issues = Vec::new();

    match workout.sport {
        None => issues.push(Issue::new("sport", "sport is required")),
        Some(Sport::Unknown) => issues.push(Issue::new("sport", "unrecognized sport")),
        Some(Sport::MultiSport) => check_multi_sport(workout, &mut issues),
        Some(sport) => check_mono_sport(workout, sport, &mut issues),
    }

    for (seg_idx, segment) in workout.segments.iter().enumerate() {
        match segment.sport {
            None => issues.push(Issue::new(
                format!("segments[{seg_idx}].sport"),
                "segment sport is required",
            )),
            Some(Sport::Unknown) => issues.push(Issue::new(
                format!("segments[{seg_idx}].sport"),
                "unrecognized segment sport",
            )),
            Some(_) => {}
        }

        check_pool_length(workout, seg_idx, &mut issues);
    }

    issues
}

fn check_multi_sport(workout: &Workout, issues: &mut Vec<Issue>) {
    let segment_count = workout.segments.len();
    if segment_count < limits::MIN_MULTI_SPORT_SEGMENTS
        || segment_count > limits::MAX_MULTI_SPORT_SEGMENTS
    {
        issues.push(Issue::new(
            "segments",
            format!(
                "multi-sport workout must contain between {} and {} segments, found {segment_count}",
                limits::MIN_MULTI_SPORT_SEGMENTS,
                limits::MAX_MULTI_SPORT_SEGMENTS
            ),
        ));
    }

    let leaf_steps = workout.total_leaf_steps();
    if leaf_steps > limits::MAX_MULTI_SPORT_LEAF_STEPS {
        issues.push(Issue::new(
            "segments",
            format!(
                "multi-sport workout must contain at most {} steps across all segments, found {leaf_steps}",
                limits::MAX_MULTI_SPORT_LEAF_STEPS
            ),
        ));
    }

    if workout.is_session_transition_enabled != Some(true) {
        issues.push(Issue::new(
            "isSessionTransitionEnabled",
            "multi-sport workout requires isSessionTransitionEnabled = true",
        ));
    }

    for (seg_idx, segment) in workout.segments.iter().enumerate() {
        if segment.sport == Some(Sport::MultiSport) {
            issues.push(Issue::new(
                format!("segments[{seg_idx}].sport"),
                "multi-sport workout segments must each carry a single sport, not MULTI_SPORT",
            ));
        }
    }
}

fn check_mono_sport(workout: &Workout, sport: Sport, issues: &mut Vec<Issue>) {
    let segment_count = workout.segments.len();
    if segment_count != 1 {
        issues.push(Issue::new(
            "segments",
            format!("single-sport workout must contain exactly one segment, found {segment_count}"),
        ));
    }

    for (seg_idx, segment) in workout.segments.iter().enumerate() {
        if let Some(segment_sport) = segment.sport {
            if segment_sport != Sport::Unknown && segment_sport != sport {
                issues.push(Issue::new(
                    format!("segments[{seg_idx}].sport"),
                    format!(
                        "segment sport {segment_sport} must match the workout sport {sport}"
                    ),
                ));
            }
        }
    }
}

fn check_pool_length(workout: &Workout, seg_idx: usize, issues: &mut Vec<Issue>) {
    let segment = &workout.segments[seg_idx];
    let is_swim = segment.sport.is_some_and(|sport| sport.is_swim());

    if !is_swim {
        if segment.pool_length.is_some() {
            issues.push(Issue::new(
                format!("segments[{seg_idx}].poolLength"),
                "poolLength is only valid on LAP_SWIMMING segments",
            ));
        }
        if segment.pool_length_unit.is_some() {
            issues.push(Issue::new(
                format!("segments[{seg_idx}].poolLengthUnit"),
                "poolLengthUnit is only valid on LAP_SWIMMING segments",
            ));
        }
        return;
    }

    if let Some(length) = segment.pool_length {
        if length <= 0.0 {
            issues.push(Issue::new(
                format!("segments[{seg_idx}].poolLength"),
                format!("poolLength must be positive, found {length}"),
            ));
        }

        // Segment-level pool settings must agree with the workout level
        // when both are present.
        if let Some(workout_length) = workout.pool_length {
            if (length - workout_length).abs() > f64::EPSILON {
                issues.push(Issue::new(
                    format!("segments[{seg_idx}].poolLength"),
                    format!(
                        "segment poolLength {length} does not match the workout poolLength {workout_length}"
                    ),
                ));
            }
        }
    }

    if let (Some(segment_unit), Some(workout_unit)) =
        (segment.pool_length_unit, workout.pool_length_unit)
    {
        if segment_unit != workout_unit {
            issues.push(Issue::new(
                format!("segments[{seg_idx}].poolLengthUnit"),
                format!(
                    "segment poolLengthUnit {segment_unit} does not match the workout poolLengthUnit {workout_unit}"
                ),
            ));
        }
    }
}
