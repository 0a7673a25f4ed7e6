// ABOUTME: Ordering invariant family - contiguous 1..n order sequences
// ABOUTME: Segment order, step order and repeat-child order plus non-empty lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coaching

use super::issue::Issue;
use super::is_positive_integer;
use crate::models::{Workout, WorkoutStep};

/// Check ordering invariants: every order sequence is exactly `1..=n`
/// within its container, and no step or segment list is empty.
pub fn check(workout: &Workout) -> Vec<Issue> {
    let mut issues = Vec::new();

    if workout.segments.is_empty() {
        issues.push(Issue::new(
            "segments",
            "workout must contain at least one segment",
        ));
    }

    for (seg_idx, segment) in workout.segments.iter().enumerate() {
        check_order_field(
            segment.segment_order,
            seg_idx + 1,
            &format!("segments[{seg_idx}].segmentOrder"),
            "segmentOrder",
            &mut issues,
        );

        if segment.steps.is_empty() {
            issues.push(Issue::new(
                format!("segments[{seg_idx}].steps"),
                "segment must contain at least one step",
            ));
        }

        for (pos_idx, position) in segment.steps.iter().enumerate() {
            check_order_field(
                position.step_order(),
                pos_idx + 1,
                &format!("segments[{seg_idx}].steps[{pos_idx}].stepOrder"),
                "stepOrder",
                &mut issues,
            );

            if let WorkoutStep::Repeat(repeat) = position {
                if repeat.steps.is_empty() {
                    issues.push(Issue::new(
                        format!("segments[{seg_idx}].steps[{pos_idx}].steps"),
                        "repeat group must contain at least one child step",
                    ));
                }

                // Child order restarts at 1 inside each repeat group
                for (child_idx, child) in repeat.steps.iter().enumerate() {
                    check_order_field(
                        child.step_order,
                        child_idx + 1,
                        &format!(
                            "segments[{seg_idx}].steps[{pos_idx}].steps[{child_idx}].stepOrder"
                        ),
                        "stepOrder",
                        &mut issues,
                    );
                }
            }
        }
    }

    issues
}

fn check_order_field(
    actual: Option<f64>,
    expected: usize,
    path: &str,
    label: &str,
    issues: &mut Vec<Issue>,
) {
    match actual {
        None => issues.push(Issue::new(path, format!("{label} is required"))),
        Some(value) if !is_positive_integer(value) => issues.push(Issue::new(
            path,
            format!("{label} must be a positive integer, found {value}"),
        )),
        Some(value) if value as usize != expected => issues.push(Issue::new(
            path,
            format!("{label} {value} breaks the contiguous sequence (expected {expected})"),
        )),
        Some(_) => {}
    }
}
