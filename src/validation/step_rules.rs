// ABOUTME: Sport-conditional step legality invariant family
// ABOUTME: Swim metadata, exercise catalog lookups, weight fields and repeat semantics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coaching

use super::issue::Issue;
use super::{for_each_leaf_step, for_each_repeat_step, is_positive_integer};
use crate::constants::limits;
use crate::models::{
    DrillType, EquipmentType, ExerciseCatalog, Intensity, RepeatType, Sport, Step, StrokeType,
    WeightUnit, Workout,
};

/// Check sport-conditional field legality on every leaf step and the
/// repeat semantics on every repeat group.
pub fn check(workout: &Workout) -> Vec<Issue> {
    let mut issues = Vec::new();

    for_each_leaf_step(workout, |step, sport, path| {
        check_intensity(step, sport, path, &mut issues);
        check_description(step, path, &mut issues);
        check_swim_metadata(step, sport, path, &mut issues);
        check_exercise_fields(step, sport, path, &mut issues);
        check_weight_fields(step, sport, path, &mut issues);
    });

    for_each_repeat_step(workout, |repeat, path| {
        match repeat.repeat_count {
            None => issues.push(Issue::new(
                format!("{path}.repeatCount"),
                "repeatCount is required",
            )),
            Some(count) if !is_positive_integer(count) => issues.push(Issue::new(
                format!("{path}.repeatCount"),
                format!("repeatCount must be a positive integer, found {count}"),
            )),
            Some(_) => {}
        }

        match repeat.repeat_type {
            None => issues.push(Issue::new(
                format!("{path}.repeatType"),
                "repeatType is required",
            )),
            Some(RepeatType::Unknown) => issues.push(Issue::new(
                format!("{path}.repeatType"),
                "unrecognized repeatType",
            )),
            Some(_) => {}
        }

        match repeat.intensity {
            None => issues.push(Issue::new(
                format!("{path}.intensity"),
                "intensity is required",
            )),
            Some(Intensity::Unknown) => issues.push(Issue::new(
                format!("{path}.intensity"),
                "unrecognized intensity",
            )),
            Some(_) => {}
        }
    });

    issues
}

fn check_intensity(step: &Step, sport: Option<Sport>, path: &str, issues: &mut Vec<Issue>) {
    match step.intensity {
        None => issues.push(Issue::new(
            format!("{path}.intensity"),
            "intensity is required",
        )),
        Some(Intensity::Unknown) => issues.push(Issue::new(
            format!("{path}.intensity"),
            "unrecognized intensity",
        )),
        Some(Intensity::Main) if !sport.is_some_and(|sport| sport.is_swim()) => {
            issues.push(Issue::new(
                format!("{path}.intensity"),
                "intensity MAIN is only valid on LAP_SWIMMING steps",
            ));
        }
        Some(_) => {}
    }
}

fn check_description(step: &Step, path: &str, issues: &mut Vec<Issue>) {
    if let Some(description) = &step.description {
        let chars = description.chars().count();
        if chars > limits::MAX_STEP_DESCRIPTION_CHARS {
            issues.push(Issue::new(
                format!("{path}.description"),
                format!(
                    "description must be at most {} characters, found {chars}",
                    limits::MAX_STEP_DESCRIPTION_CHARS
                ),
            ));
        }
    }
}

fn check_swim_metadata(step: &Step, sport: Option<Sport>, path: &str, issues: &mut Vec<Issue>) {
    let is_swim = sport.is_some_and(|sport| sport.is_swim());

    if is_swim {
        if step.stroke_type == Some(StrokeType::Unknown) {
            issues.push(Issue::new(
                format!("{path}.strokeType"),
                "unrecognized strokeType",
            ));
        }
        if step.drill_type == Some(DrillType::Unknown) {
            issues.push(Issue::new(
                format!("{path}.drillType"),
                "unrecognized drillType",
            ));
        }
        if step.equipment_type == Some(EquipmentType::Unknown) {
            issues.push(Issue::new(
                format!("{path}.equipmentType"),
                "unrecognized equipmentType",
            ));
        }
        return;
    }

    if step.stroke_type.is_some() {
        issues.push(Issue::new(
            format!("{path}.strokeType"),
            "strokeType is only valid on LAP_SWIMMING steps",
        ));
    }
    if step.drill_type.is_some() {
        issues.push(Issue::new(
            format!("{path}.drillType"),
            "drillType is only valid on LAP_SWIMMING steps",
        ));
    }
    if step.equipment_type.is_some() {
        issues.push(Issue::new(
            format!("{path}.equipmentType"),
            "equipmentType is only valid on LAP_SWIMMING steps",
        ));
    }
}

fn check_exercise_fields(step: &Step, sport: Option<Sport>, path: &str, issues: &mut Vec<Issue>) {
    let Some(sport) = sport else {
        return;
    };

    if !sport.uses_exercise_catalog() {
        if step.exercise_category.is_some() {
            issues.push(Issue::new(
                format!("{path}.exerciseCategory"),
                "exerciseCategory is only valid on strength and cardio training steps",
            ));
        }
        if step.exercise_name.is_some() {
            issues.push(Issue::new(
                format!("{path}.exerciseName"),
                "exerciseName is only valid on strength and cardio training steps",
            ));
        }
        return;
    }

    let catalog = ExerciseCatalog::global();
    match (&step.exercise_category, &step.exercise_name) {
        (Some(category), Some(name)) => {
            if !catalog.is_known(sport, category, name) {
                let message = if catalog.has_category(sport, category) {
                    format!("unknown exercise {category}/{name} for sport {sport}")
                } else {
                    format!(
                        "unknown exercise category {category} for sport {sport} (known: {})",
                        catalog.categories(sport).join(", ")
                    )
                };
                issues.push(Issue::new(format!("{path}.exerciseName"), message));
            }
        }
        (category, name) => {
            if category.is_none() {
                issues.push(Issue::new(
                    format!("{path}.exerciseCategory"),
                    format!("exerciseCategory is required for {sport} steps"),
                ));
            }
            if name.is_none() {
                issues.push(Issue::new(
                    format!("{path}.exerciseName"),
                    format!("exerciseName is required for {sport} steps"),
                ));
            }
        }
    }
}

fn check_weight_fields(step: &Step, sport: Option<Sport>, path: &str, issues: &mut Vec<Issue>) {
    let allows_weight = sport.is_some_and(|sport| sport.allows_weight());

    if !allows_weight {
        if step.weight_value.is_some() {
            issues.push(Issue::new(
                format!("{path}.weightValue"),
                "weightValue is only valid on STRENGTH_TRAINING steps",
            ));
        }
        if step.weight_unit.is_some() {
            issues.push(Issue::new(
                format!("{path}.weightUnit"),
                "weightUnit is only valid on STRENGTH_TRAINING steps",
            ));
        }
        return;
    }

    if let Some(value) = step.weight_value {
        if value <= 0.0 {
            issues.push(Issue::new(
                format!("{path}.weightValue"),
                format!("weightValue must be positive, found {value}"),
            ));
        }
        if step.weight_unit.is_none() {
            issues.push(Issue::new(
                format!("{path}.weightUnit"),
                "weightUnit is required when weightValue is set",
            ));
        }
    }

    if step.weight_unit == Some(WeightUnit::Unknown) {
        issues.push(Issue::new(
            format!("{path}.weightUnit"),
            "unrecognized weightUnit",
        ));
    }
}
