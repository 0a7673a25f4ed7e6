// ABOUTME: Target semantics invariant family
// ABOUTME: Zone indices, range pairing, percent flags and the swim-only secondary set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coaching

use super::issue::Issue;
use super::{for_each_leaf_step, is_positive_integer};
use crate::constants::limits;
use crate::models::{SecondaryTargetType, Step, TargetType, ValueType, Workout};

/// Check primary and secondary target legality on every leaf step.
/// Swim steps run a disjoint rule set: no primary target at all, and the
/// secondary type restricted to the swim-only variants.
pub fn check(workout: &Workout) -> Vec<Issue> {
    let mut issues = Vec::new();

    for_each_leaf_step(workout, |step, sport, path| {
        if sport.is_some_and(|sport| sport.is_swim()) {
            check_swim_step(step, path, &mut issues);
        } else {
            check_land_step(step, path, &mut issues);
        }
    });

    issues
}

/// Numeric fields of one target slot, primary or secondary
struct SlotValues {
    value: Option<f64>,
    low: Option<f64>,
    high: Option<f64>,
    value_type: Option<ValueType>,
}

impl SlotValues {
    fn primary(step: &Step) -> Self {
        Self {
            value: step.target_value,
            low: step.target_value_low,
            high: step.target_value_high,
            value_type: step.target_value_type,
        }
    }

    fn secondary(step: &Step) -> Self {
        Self {
            value: step.secondary_target_value,
            low: step.secondary_target_value_low,
            high: step.secondary_target_value_high,
            value_type: step.secondary_target_value_type,
        }
    }

    fn any_set(&self) -> bool {
        self.value.is_some()
            || self.low.is_some()
            || self.high.is_some()
            || self.value_type.is_some()
    }
}

fn check_swim_step(step: &Step, path: &str, issues: &mut Vec<Issue>) {
    if step.target_type.is_some() {
        issues.push(Issue::new(
            format!("{path}.targetType"),
            "swim steps must not set a primary targetType",
        ));
    }

    match step.secondary_target_type {
        Some(SecondaryTargetType::Unknown) => issues.push(Issue::new(
            format!("{path}.secondaryTargetType"),
            "unrecognized secondaryTargetType",
        )),
        Some(secondary) if !secondary.is_swim_only() => issues.push(Issue::new(
            format!("{path}.secondaryTargetType"),
            format!(
                "swim steps only allow secondary target types PACE_ZONE, SWIM_INSTRUCTION or SWIM_CSS_OFFSET, found {secondary}"
            ),
        )),
        Some(_) => {
            check_slot_structure(path, "secondaryTargetValue", &SlotValues::secondary(step), issues);
        }
        None => {
            if SlotValues::secondary(step).any_set() {
                issues.push(Issue::new(
                    format!("{path}.secondaryTargetType"),
                    "secondary target values require a secondaryTargetType",
                ));
            }
        }
    }
}

fn check_land_step(step: &Step, path: &str, issues: &mut Vec<Issue>) {
    check_primary_slot(step, path, issues);
    check_secondary_slot(step, path, issues);
}

fn check_primary_slot(step: &Step, path: &str, issues: &mut Vec<Issue>) {
    let values = SlotValues::primary(step);

    let Some(target_type) = step.target_type else {
        if values.any_set() {
            issues.push(Issue::new(
                format!("{path}.targetType"),
                "target values require a targetType",
            ));
        }
        return;
    };

    match target_type {
        TargetType::Unknown => {
            issues.push(Issue::new(
                format!("{path}.targetType"),
                "unrecognized targetType",
            ));
        }
        TargetType::Open => {
            check_open_slot(path, "targetValue", &values, "OPEN target", issues);
        }
        _ => {
            check_slot_structure(path, "targetValue", &values, issues);
            if target_type.is_zoned() {
                check_zoned_slot(path, "targetValue", target_type.as_str(), &values, issues);
            }
        }
    }
}

fn check_secondary_slot(step: &Step, path: &str, issues: &mut Vec<Issue>) {
    let values = SlotValues::secondary(step);

    let Some(secondary) = step.secondary_target_type else {
        if values.any_set() {
            issues.push(Issue::new(
                format!("{path}.secondaryTargetType"),
                "secondary target values require a secondaryTargetType",
            ));
        }
        return;
    };

    match secondary {
        SecondaryTargetType::Unknown => {
            issues.push(Issue::new(
                format!("{path}.secondaryTargetType"),
                "unrecognized secondaryTargetType",
            ));
            return;
        }
        SecondaryTargetType::Open => {
            check_open_slot(path, "secondaryTargetValue", &values, "OPEN secondary target", issues);
            return;
        }
        secondary if secondary.is_swim_only() => {
            issues.push(Issue::new(
                format!("{path}.secondaryTargetType"),
                format!("secondaryTargetType {secondary} is only valid on LAP_SWIMMING steps"),
            ));
            return;
        }
        _ => {}
    }

    if let Some(primary) = step.target_type {
        if secondary.matches_primary(primary) {
            issues.push(Issue::new(
                format!("{path}.secondaryTargetType"),
                format!("secondaryTargetType {secondary} must differ from the primary targetType"),
            ));
        }
    }

    check_slot_structure(path, "secondaryTargetValue", &values, issues);
    if secondary.is_zoned() {
        check_zoned_slot(path, "secondaryTargetValue", secondary.as_str(), &values, issues);
    }
}

/// An OPEN slot forbids any value, range bound or percent flag
fn check_open_slot(
    path: &str,
    prefix: &str,
    values: &SlotValues,
    label: &str,
    issues: &mut Vec<Issue>,
) {
    if values.value.is_some() {
        issues.push(Issue::new(
            format!("{path}.{prefix}"),
            format!("{label} forbids a {prefix}"),
        ));
    }
    if values.low.is_some() {
        issues.push(Issue::new(
            format!("{path}.{prefix}Low"),
            format!("{label} forbids a {prefix}Low"),
        ));
    }
    if values.high.is_some() {
        issues.push(Issue::new(
            format!("{path}.{prefix}High"),
            format!("{label} forbids a {prefix}High"),
        ));
    }
    if values.value_type.is_some() {
        issues.push(Issue::new(
            format!("{path}.{prefix}Type"),
            format!("{label} forbids a {prefix}Type"),
        ));
    }
}

/// Structural rules shared by every non-OPEN slot: a single value and a
/// range are mutually exclusive, range bounds come in pairs, and the low
/// bound sits below the high bound.
fn check_slot_structure(path: &str, prefix: &str, values: &SlotValues, issues: &mut Vec<Issue>) {
    if values.value.is_some() && (values.low.is_some() || values.high.is_some()) {
        issues.push(Issue::new(
            format!("{path}.{prefix}"),
            format!("{prefix} and {prefix}Low/{prefix}High are mutually exclusive"),
        ));
    }

    match (values.low, values.high) {
        (Some(low), Some(high)) if low >= high => {
            issues.push(Issue::new(
                format!("{path}.{prefix}Low"),
                format!("{prefix}Low {low} must be less than {prefix}High {high}"),
            ));
        }
        (Some(_), None) | (None, Some(_)) => {
            issues.push(Issue::new(
                format!("{path}.{prefix}Low"),
                format!("{prefix}Low and {prefix}High must be set together"),
            ));
        }
        _ => {}
    }
}

/// Zone rules for heart rate and power slots: a single value is an
/// integer zone index within the sport's zone count, and a range demands
/// the percent flag.
fn check_zoned_slot(
    path: &str,
    prefix: &str,
    type_name: &str,
    values: &SlotValues,
    issues: &mut Vec<Issue>,
) {
    let (min_zone, max_zone) = if type_name == "POWER" {
        (limits::MIN_POWER_ZONE, limits::MAX_POWER_ZONE)
    } else {
        (limits::MIN_HEART_RATE_ZONE, limits::MAX_HEART_RATE_ZONE)
    };

    if let Some(value) = values.value {
        if !is_positive_integer(value) || value < min_zone || value > max_zone {
            issues.push(Issue::new(
                format!("{path}.{prefix}"),
                format!(
                    "{type_name} zone must be an integer between {min_zone} and {max_zone}, found {value}"
                ),
            ));
        }
    }

    if values.low.is_some() && values.high.is_some() && values.value_type != Some(ValueType::Percent)
    {
        issues.push(Issue::new(
            format!("{path}.{prefix}Type"),
            format!("range-based {type_name} targets require {prefix}Type = PERCENT"),
        ));
    }
}
