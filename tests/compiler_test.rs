// ABOUTME: Integration tests for the structured-plan compiler
// ABOUTME: Unit conversion, rest retyping, repeat inference and duration aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coaching
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serde_json::json;

use stride_workout_compiler::compiler::{PlanCompiler, StructuredPlan};
use stride_workout_compiler::models::{
    DurationType, Intensity, Sport, TargetType, ValueType, WorkoutStep,
};
use stride_workout_compiler::validation::validate;

fn plan_from(value: serde_json::Value) -> StructuredPlan {
    serde_json::from_value(value).unwrap()
}

fn compile(value: serde_json::Value) -> stride_workout_compiler::compiler::CompiledWorkout {
    PlanCompiler::new().compile(&plan_from(value))
}

#[test]
fn test_percent_ftp_target_compiles_to_percent_range() {
    let compiled = compile(json!({
        "formatVersion": "1",
        "name": "Threshold ride",
        "sport": "cycling",
        "sections": [{
            "kind": "MAIN",
            "blocks": [{
                "label": "Tempo",
                "intensity": "active",
                "duration": { "type": "TIME", "value": 1800 },
                "targets": [{ "type": "POWER", "unit": "percentFtp", "low": 0.65, "high": 0.75 }]
            }]
        }]
    }));

    assert_eq!(compiled.workout.sport, Some(Sport::Cycling));
    let WorkoutStep::Single(step) = &compiled.workout.segments[0].steps[0] else {
        panic!("expected a leaf step");
    };
    assert_eq!(step.duration_type, Some(DurationType::Time));
    assert_eq!(step.duration_value, Some(1800.0));
    assert_eq!(step.target_type, Some(TargetType::Power));
    assert_eq!(step.target_value_type, Some(ValueType::Percent));
    assert_eq!(step.target_value_low, Some(65.0));
    assert_eq!(step.target_value_high, Some(75.0));
}

#[test]
fn test_timed_rest_block_is_retyped_to_fixed_rest() {
    let compiled = compile(json!({
        "sport": "running",
        "sections": [{
            "kind": "MAIN",
            "blocks": [
                {
                    "role": "rest",
                    "duration": { "type": "TIME", "value": 90 }
                },
                {
                    "role": "rest",
                    "duration": { "type": "DISTANCE", "value": 200 }
                }
            ]
        }]
    }));

    let steps = &compiled.workout.segments[0].steps;
    let WorkoutStep::Single(timed_rest) = &steps[0] else {
        panic!("expected a leaf step");
    };
    let WorkoutStep::Single(distance_rest) = &steps[1] else {
        panic!("expected a leaf step");
    };

    // The rest retyping is specific to timed blocks
    assert_eq!(timed_rest.duration_type, Some(DurationType::FixedRest));
    assert_eq!(timed_rest.intensity, Some(Intensity::Rest));
    assert_eq!(distance_rest.duration_type, Some(DurationType::Distance));
}

#[test]
fn test_repeat_intensity_inferred_from_first_non_rest_child() {
    let compiled = compile(json!({
        "sport": "running",
        "sections": [{
            "kind": "MAIN",
            "blocks": [{
                "repeatCount": 4,
                "steps": [
                    { "role": "rest", "intensity": "rest", "duration": { "type": "TIME", "value": 60 } },
                    { "intensity": "active", "duration": { "type": "TIME", "value": 300 } }
                ]
            }]
        }]
    }));

    let WorkoutStep::Repeat(group) = &compiled.workout.segments[0].steps[0] else {
        panic!("expected a repeat group");
    };
    assert_eq!(group.intensity, Some(Intensity::Active));
    assert_eq!(group.repeat_count, Some(4.0));
    assert_eq!(group.steps.len(), 2);
}

#[test]
fn test_repeat_of_all_rest_children_defaults_to_active() {
    let compiled = compile(json!({
        "sport": "running",
        "sections": [{
            "kind": "MAIN",
            "blocks": [{
                "repeatCount": 3,
                "steps": [
                    { "role": "rest", "intensity": "rest", "duration": { "type": "TIME", "value": 60 } }
                ]
            }]
        }]
    }));

    let WorkoutStep::Repeat(group) = &compiled.workout.segments[0].steps[0] else {
        panic!("expected a repeat group");
    };
    assert_eq!(group.intensity, Some(Intensity::Active));
}

#[test]
fn test_compiled_plan_passes_validation() {
    let compiled = compile(json!({
        "formatVersion": "1",
        "name": "Interval ride",
        "sport": "cycling",
        "expectedDurationSeconds": 2340,
        "sections": [
            {
                "kind": "WARMUP",
                "blocks": [{
                    "label": "Spin up",
                    "intensity": "warmup",
                    "duration": { "type": "TIME", "value": 600 }
                }]
            },
            {
                "kind": "MAIN",
                "blocks": [{
                    "repeatCount": 4,
                    "steps": [
                        {
                            "label": "Over threshold",
                            "intensity": "interval",
                            "duration": { "type": "TIME", "value": 300 },
                            "targets": [{ "type": "POWER", "unit": "percentFtp", "low": 1.01, "high": 1.08 }]
                        },
                        {
                            "label": "Shake it out",
                            "role": "rest",
                            "duration": { "type": "TIME", "value": 60 }
                        }
                    ]
                }]
            },
            {
                "kind": "COOLDOWN",
                "blocks": [{
                    "label": "Easy spin",
                    "intensity": "cooldown",
                    "duration": { "type": "TIME", "value": 300 }
                }]
            }
        ]
    }));

    assert_eq!(validate(&compiled.workout), Ok(()));
    // Single-sport plans compile every section into the one segment the
    // vendor contract allows
    assert_eq!(compiled.workout.segments.len(), 1);
    assert_eq!(compiled.workout.segments[0].steps.len(), 3);
    assert_eq!(compiled.estimated_duration_seconds, 2340);
    assert_eq!(compiled.workout.is_session_transition_enabled, Some(false));
}

#[test]
fn test_step_orders_are_contiguous_per_segment() {
    let compiled = compile(json!({
        "sport": "running",
        "sections": [
            {
                "kind": "WARMUP",
                "blocks": [
                    { "intensity": "warmup", "duration": { "type": "TIME", "value": 300 } }
                ]
            },
            {
                "kind": "MAIN",
                "blocks": [
                    { "intensity": "active", "duration": { "type": "TIME", "value": 600 } },
                    { "repeatCount": 2, "steps": [
                        { "intensity": "active", "duration": { "type": "TIME", "value": 120 } },
                        { "role": "rest", "duration": { "type": "TIME", "value": 60 } }
                    ]},
                    { "intensity": "active", "duration": { "type": "TIME", "value": 600 } }
                ]
            }
        ]
    }));

    // Step order runs across section boundaries inside the single segment
    assert_eq!(compiled.workout.segments.len(), 1);
    let segment = &compiled.workout.segments[0];
    assert_eq!(segment.segment_order, Some(1.0));
    assert_eq!(segment.steps.len(), 4);
    for (idx, position) in segment.steps.iter().enumerate() {
        assert_eq!(position.step_order(), Some((idx + 1) as f64));
    }
    assert_eq!(validate(&compiled.workout), Ok(()));
}

#[test]
fn test_unrecognized_blocks_are_skipped_not_fatal() {
    let compiled = compile(json!({
        "sport": "running",
        "sections": [{
            "kind": "MAIN",
            "blocks": [
                "not a block at all",
                { "intensity": "active" },
                { "intensity": "active", "duration": { "type": "TIME", "value": 600 } }
            ]
        }]
    }));

    // Only the well-formed block survives
    assert_eq!(compiled.workout.segments.len(), 1);
    assert_eq!(compiled.workout.segments[0].steps.len(), 1);
    assert_eq!(compiled.estimated_duration_seconds, 600);
}

#[test]
fn test_sections_without_blocks_produce_no_segments() {
    let compiled = compile(json!({
        "sport": "running",
        "sections": [
            { "kind": "WARMUP", "blocks": [] },
            { "kind": "MAIN", "blocks": [
                { "intensity": "active", "duration": { "type": "TIME", "value": 600 } }
            ]}
        ]
    }));

    assert_eq!(compiled.workout.segments.len(), 1);
    assert_eq!(compiled.workout.segments[0].segment_order, Some(1.0));
}

#[test]
fn test_unrecognized_sport_falls_back_to_generic() {
    let compiled = compile(json!({
        "sport": "competitive yodeling",
        "sections": [{
            "kind": "MAIN",
            "blocks": [
                { "intensity": "active", "duration": { "type": "TIME", "value": 600 } }
            ]
        }]
    }));

    assert_eq!(compiled.workout.sport, Some(Sport::Generic));
}

#[test]
fn test_multi_sport_plan_compiles_per_section_sports() {
    let compiled = compile(json!({
        "name": "Race sim",
        "sport": "triathlon",
        "sections": [
            { "kind": "MAIN", "sport": "swim", "blocks": [
                { "intensity": "active", "duration": { "type": "TIME", "value": 900 } }
            ]},
            { "kind": "MAIN", "sport": "bike", "blocks": [
                { "intensity": "active", "duration": { "type": "TIME", "value": 3600 } }
            ]},
            { "kind": "MAIN", "sport": "run", "blocks": [
                { "intensity": "active", "duration": { "type": "TIME", "value": 1800 } }
            ]}
        ]
    }));

    assert_eq!(compiled.workout.sport, Some(Sport::MultiSport));
    assert_eq!(compiled.workout.is_session_transition_enabled, Some(true));
    let sports: Vec<_> = compiled
        .workout
        .segments
        .iter()
        .map(|segment| segment.sport)
        .collect();
    assert_eq!(
        sports,
        vec![
            Some(Sport::LapSwimming),
            Some(Sport::Cycling),
            Some(Sport::Running)
        ]
    );
    assert_eq!(validate(&compiled.workout), Ok(()));
}

#[test]
fn test_duration_aggregation_multiplies_repeat_counts() {
    let compiled = compile(json!({
        "sport": "running",
        "sections": [{
            "kind": "MAIN",
            "blocks": [
                { "intensity": "active", "duration": { "type": "TIME", "value": 600 } },
                { "repeatCount": 4, "steps": [
                    { "intensity": "active", "duration": { "type": "TIME", "value": 300 } },
                    { "role": "rest", "duration": { "type": "TIME", "value": 60 } }
                ]}
            ]
        }]
    }));

    assert_eq!(compiled.estimated_duration_seconds, 600 + 4 * (300 + 60));
}
