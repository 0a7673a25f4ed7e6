// ABOUTME: Duration semantics invariant family
// ABOUTME: Per-duration-type value legality for every leaf step
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coaching

use super::issue::Issue;
use super::{for_each_leaf_step, is_positive_integer};
use crate::constants::limits;
use crate::models::{DurationType, Step, ValueType, Workout};

/// Check that every leaf step's duration value matches the semantics of
/// its duration type.
pub fn check(workout: &Workout) -> Vec<Issue> {
    let mut issues = Vec::new();

    for_each_leaf_step(workout, |step, _sport, path| {
        check_step(step, path, &mut issues);
    });

    issues
}

fn check_step(step: &Step, path: &str, issues: &mut Vec<Issue>) {
    let Some(duration_type) = step.duration_type else {
        issues.push(Issue::new(
            format!("{path}.durationType"),
            "durationType is required",
        ));
        return;
    };

    match duration_type {
        DurationType::Unknown => {
            issues.push(Issue::new(
                format!("{path}.durationType"),
                "unrecognized durationType",
            ));
        }
        DurationType::Open => {
            if step.duration_value.is_some() {
                issues.push(Issue::new(
                    format!("{path}.durationValue"),
                    "OPEN duration requires a null durationValue",
                ));
            }
        }
        DurationType::RepetitionSwimCssOffset => match step.duration_value {
            None => issues.push(Issue::new(
                format!("{path}.durationValue"),
                format!("durationType {duration_type} requires a durationValue"),
            )),
            Some(value)
                if !(limits::MIN_SWIM_CSS_OFFSET..=limits::MAX_SWIM_CSS_OFFSET)
                    .contains(&value) =>
            {
                issues.push(Issue::new(
                    format!("{path}.durationValue"),
                    format!(
                        "{duration_type} durationValue must be between {} and {}, found {value}",
                        limits::MIN_SWIM_CSS_OFFSET,
                        limits::MAX_SWIM_CSS_OFFSET
                    ),
                ));
            }
            Some(_) => {}
        },
        _ if duration_type.requires_percent_value() => {
            if step.duration_value.is_none() {
                issues.push(Issue::new(
                    format!("{path}.durationValue"),
                    format!("durationType {duration_type} requires a durationValue"),
                ));
            }
            if step.duration_value_type != Some(ValueType::Percent) {
                issues.push(Issue::new(
                    format!("{path}.durationValueType"),
                    format!(
                        "durationType {duration_type} requires a percent-flagged value (durationValueType = PERCENT)"
                    ),
                ));
            }
        }
        _ if duration_type.requires_positive_integer() => match step.duration_value {
            None => issues.push(Issue::new(
                format!("{path}.durationValue"),
                format!("durationType {duration_type} requires a durationValue"),
            )),
            Some(value) if !is_positive_integer(value) => issues.push(Issue::new(
                format!("{path}.durationValue"),
                format!(
                    "durationValue must be a positive integer for {duration_type}, found {value}"
                ),
            )),
            Some(_) => {}
        },
        _ => {}
    }
}
