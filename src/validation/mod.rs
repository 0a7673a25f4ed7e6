// ABOUTME: Workout document validator - exhaustive, path-addressed rule evaluation
// ABOUTME: Runs an ordered list of independent invariant-family rules in one pass
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coaching

//! # Workout Document Validator
//!
//! Walks a candidate [`Workout`] tree and produces either `Ok(())` or the
//! exhaustive list of [`Issue`]s found. Each invariant family lives in its
//! own rule function so it stays independently testable; the validator
//! concatenates their reports and never stops at the first violation.
//!
//! The validator is purely functional over its input: no mutation, no
//! side effects, and it never panics on malformed structure - absent or
//! wrong-shaped fields are findings, not crashes.

mod duration_rules;
mod issue;
mod ordering;
mod sport_rules;
mod step_rules;
mod target_rules;

pub use issue::Issue;

use crate::models::{RepeatStep, Sport, Step, Workout, WorkoutStep};

/// A single invariant family evaluated over the whole document
pub struct ValidationRule {
    /// Rule family name, for diagnostics and tests
    pub name: &'static str,
    /// Rule body; returns every violation it finds
    pub check: fn(&Workout) -> Vec<Issue>,
}

/// Validator over candidate workout documents
pub struct WorkoutValidator {
    rules: Vec<ValidationRule>,
}

impl WorkoutValidator {
    /// Create a validator with the full vendor rule set
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: vec![
                ValidationRule {
                    name: "ordering",
                    check: ordering::check,
                },
                ValidationRule {
                    name: "sport_consistency",
                    check: sport_rules::check,
                },
                ValidationRule {
                    name: "duration_semantics",
                    check: duration_rules::check,
                },
                ValidationRule {
                    name: "target_semantics",
                    check: target_rules::check,
                },
                ValidationRule {
                    name: "step_legality",
                    check: step_rules::check,
                },
            ],
        }
    }

    /// Judge a candidate document against every rule family.
    ///
    /// # Errors
    /// Returns the full, ordered list of violations when any rule family
    /// reports one.
    pub fn validate(&self, workout: &Workout) -> Result<(), Vec<Issue>> {
        let issues: Vec<Issue> = self
            .rules
            .iter()
            .flat_map(|rule| (rule.check)(workout))
            .collect();

        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }
}

impl Default for WorkoutValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Judge a candidate document with the full vendor rule set.
///
/// # Errors
/// Returns the full list of violations when the document breaks the
/// contract.
pub fn validate(workout: &Workout) -> Result<(), Vec<Issue>> {
    WorkoutValidator::new().validate(workout)
}

/// Visit every leaf step with its owning segment's sport and its
/// structural path. Repeat-group children are visited with the same sport
/// context as their parent.
pub(crate) fn for_each_leaf_step<F>(workout: &Workout, mut visit: F)
where
    F: FnMut(&Step, Option<Sport>, &str),
{
    for (seg_idx, segment) in workout.segments.iter().enumerate() {
        for (pos_idx, position) in segment.steps.iter().enumerate() {
            match position {
                WorkoutStep::Single(step) => {
                    let path = format!("segments[{seg_idx}].steps[{pos_idx}]");
                    visit(step, segment.sport, &path);
                }
                WorkoutStep::Repeat(repeat) => {
                    for (child_idx, child) in repeat.steps.iter().enumerate() {
                        let path =
                            format!("segments[{seg_idx}].steps[{pos_idx}].steps[{child_idx}]");
                        visit(child, segment.sport, &path);
                    }
                }
            }
        }
    }
}

/// Visit every repeat group with its structural path
pub(crate) fn for_each_repeat_step<F>(workout: &Workout, mut visit: F)
where
    F: FnMut(&RepeatStep, &str),
{
    for (seg_idx, segment) in workout.segments.iter().enumerate() {
        for (pos_idx, position) in segment.steps.iter().enumerate() {
            if let WorkoutStep::Repeat(repeat) = position {
                let path = format!("segments[{seg_idx}].steps[{pos_idx}]");
                visit(repeat, &path);
            }
        }
    }
}

/// Whether a wire numeric is a positive integer
pub(crate) fn is_positive_integer(value: f64) -> bool {
    value > 0.0 && value.fract() == 0.0
}
