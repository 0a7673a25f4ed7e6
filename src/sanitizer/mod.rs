// ABOUTME: Draft sanitizer - repairs loosely-typed AI-authored workout drafts
// ABOUTME: Idempotent JSON-level normalization run before strict validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coaching

//! # Draft Sanitizer/Normalizer
//!
//! Repairs an untrusted, loosely-typed draft document into a shape the
//! validator can judge: trims strings, coerces stringified booleans,
//! synthesizes structured cadence targets out of free text, labels bare
//! rest steps, infers missing repeat-group intensities, relocates illegal
//! swim primary targets, and propagates pool lengths up from steps.
//!
//! Every repair is best-effort enrichment, deliberately separated from
//! the validator so the lossy heuristics never mask a structural defect:
//! sanitized output still goes through the full rule set unchanged in
//! kind. The pass is idempotent - applying it to its own output is a
//! no-op.

mod cadence;

use serde_json::{json, Map, Value};

use crate::errors::{CoreError, CoreResult};
use crate::models::Workout;
use cadence::extract_cadence;

/// Sanitize a draft document into a candidate the validator can judge
#[must_use]
pub fn sanitize_draft(draft: Value) -> Value {
    let mut value = deep_clean(draft);
    repair_document(&mut value);
    value
}

/// Sanitize a draft and deserialize it into a candidate [`Workout`].
///
/// # Errors
/// Returns [`CoreError::Parse`] when the sanitized draft is still
/// structurally incompatible with the document shape.
pub fn sanitize_to_workout(draft: Value) -> CoreResult<Workout> {
    serde_json::from_value(sanitize_draft(draft)).map_err(CoreError::Parse)
}

/// Recursively trim string fields, coercing empty strings to null and
/// the two known boolean fields from `"true"`/`"false"` strings
fn deep_clean(value: Value) -> Value {
    match value {
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                Value::Null
            } else if trimmed.len() == text.len() {
                Value::String(text)
            } else {
                Value::String(trimmed.to_owned())
            }
        }
        Value::Array(items) => Value::Array(items.into_iter().map(deep_clean).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, item)| {
                    let cleaned = coerce_known_bool(&key, deep_clean(item));
                    (key, cleaned)
                })
                .collect(),
        ),
        other => other,
    }
}

fn coerce_known_bool(key: &str, value: Value) -> Value {
    if key == "isSessionTransitionEnabled" || key == "skipLastRestStep" {
        if let Value::String(text) = &value {
            match text.as_str() {
                "true" => return Value::Bool(true),
                "false" => return Value::Bool(false),
                _ => {}
            }
        }
    }
    value
}

fn repair_document(root: &mut Value) {
    let Some(segments) = root.get_mut("segments").and_then(Value::as_array_mut) else {
        return;
    };
    for segment in segments {
        repair_segment(segment);
    }
}

fn repair_segment(segment: &mut Value) {
    let is_swim = segment.get("sport").and_then(Value::as_str) == Some("LAP_SWIMMING");
    if is_swim {
        propagate_pool_length(segment);
    }

    let Some(steps) = segment.get_mut("steps").and_then(Value::as_array_mut) else {
        return;
    };
    for position in steps {
        if position.get("steps").is_some_and(Value::is_array) {
            repair_repeat(position, is_swim);
        } else {
            repair_leaf(position, is_swim);
        }
    }
}

fn repair_repeat(group: &mut Value, is_swim: bool) {
    let Some(map) = group.as_object_mut() else {
        return;
    };

    if let Some(children) = map.get_mut("steps").and_then(Value::as_array_mut) {
        for child in children {
            repair_leaf(child, is_swim);
        }
    }

    // Missing group intensity: first non-REST child wins, ACTIVE when
    // every child rests or no child intensity is found.
    if !is_set(map, "intensity") {
        let inferred = map
            .get("steps")
            .and_then(Value::as_array)
            .and_then(|children| {
                children
                    .iter()
                    .filter_map(|child| child.get("intensity").and_then(Value::as_str))
                    .find(|intensity| *intensity != "REST")
                    .map(str::to_owned)
            })
            .unwrap_or_else(|| "ACTIVE".to_owned());
        map.insert("intensity".to_owned(), Value::String(inferred));
    }
}

fn repair_leaf(step: &mut Value, is_swim: bool) {
    let Some(map) = step.as_object_mut() else {
        return;
    };

    if is_swim {
        relocate_swim_primary_target(map);
    } else {
        enrich_cadence_target(map);
    }
    default_rest_description(map);
}

/// Synthesize a structured CADENCE target from a free-text mention when
/// the step has none: primary when the primary slot is free, otherwise
/// the secondary slot when that one is free.
fn enrich_cadence_target(map: &mut Map<String, Value>) {
    let has_cadence_target = map.get("targetType").and_then(Value::as_str) == Some("CADENCE")
        || map.get("secondaryTargetType").and_then(Value::as_str) == Some("CADENCE");
    if has_cadence_target {
        return;
    }

    let Some(mention) = map
        .get("description")
        .and_then(Value::as_str)
        .and_then(extract_cadence)
    else {
        return;
    };

    if !is_set(map, "targetType") {
        map.insert("targetType".to_owned(), json!("CADENCE"));
        match mention.high {
            Some(high) => {
                map.insert("targetValueLow".to_owned(), json!(mention.low));
                map.insert("targetValueHigh".to_owned(), json!(high));
            }
            None => {
                map.insert("targetValue".to_owned(), json!(mention.low));
            }
        }
    } else if !is_set(map, "secondaryTargetType") {
        map.insert("secondaryTargetType".to_owned(), json!("CADENCE"));
        match mention.high {
            Some(high) => {
                map.insert("secondaryTargetValueLow".to_owned(), json!(mention.low));
                map.insert("secondaryTargetValueHigh".to_owned(), json!(high));
            }
            None => {
                map.insert("secondaryTargetValue".to_owned(), json!(mention.low));
            }
        }
    }
}

/// Swim steps never carry a primary target: move the goal into the
/// secondary slot as a pace zone when that slot is free, otherwise drop
/// it.
fn relocate_swim_primary_target(map: &mut Map<String, Value>) {
    if !is_set(map, "targetType") {
        return;
    }

    if !is_set(map, "secondaryTargetType") {
        map.insert("secondaryTargetType".to_owned(), json!("PACE_ZONE"));
        for (from, to) in [
            ("targetValue", "secondaryTargetValue"),
            ("targetValueLow", "secondaryTargetValueLow"),
            ("targetValueHigh", "secondaryTargetValueHigh"),
            ("targetValueType", "secondaryTargetValueType"),
        ] {
            if let Some(value) = map.get(from) {
                if !value.is_null() {
                    let moved = value.clone();
                    map.insert(to.to_owned(), moved);
                }
            }
        }
    }

    for field in [
        "targetType",
        "targetValue",
        "targetValueLow",
        "targetValueHigh",
        "targetValueType",
    ] {
        map.insert(field.to_owned(), Value::Null);
    }
}

/// A resting repetition step without a description gets a generic label
fn default_rest_description(map: &mut Map<String, Value>) {
    let restful = matches!(
        map.get("intensity").and_then(Value::as_str),
        Some("REST" | "RECOVERY")
    );
    let repetition_based = matches!(
        map.get("durationType").and_then(Value::as_str),
        Some("REPS" | "FIXED_REPETITION" | "FIXED_REST")
    );

    if restful && repetition_based && !is_set(map, "description") {
        map.insert("description".to_owned(), json!("Rest"));
    }
}

/// Propagate the first pool length/unit discovered on a leaf step up to
/// a swim segment that lacks its own
fn propagate_pool_length(segment: &mut Value) {
    let need_length = !segment.get("poolLength").is_some_and(|v| !v.is_null());
    let need_unit = !segment.get("poolLengthUnit").is_some_and(|v| !v.is_null());
    if !need_length && !need_unit {
        return;
    }

    let mut found_length = None;
    let mut found_unit = None;
    if let Some(steps) = segment.get("steps").and_then(Value::as_array) {
        for_each_leaf(steps, |leaf| {
            if found_length.is_none() {
                if let Some(value) = leaf.get("poolLength") {
                    if !value.is_null() {
                        found_length = Some(value.clone());
                    }
                }
            }
            if found_unit.is_none() {
                if let Some(value) = leaf.get("poolLengthUnit") {
                    if !value.is_null() {
                        found_unit = Some(value.clone());
                    }
                }
            }
        });
    }

    let Some(map) = segment.as_object_mut() else {
        return;
    };
    if need_length {
        if let Some(length) = found_length {
            map.insert("poolLength".to_owned(), length);
        }
    }
    if need_unit {
        if let Some(unit) = found_unit {
            map.insert("poolLengthUnit".to_owned(), unit);
        }
    }
}

fn for_each_leaf<'a, F>(steps: &'a [Value], mut visit: F)
where
    F: FnMut(&'a Value),
{
    for position in steps {
        match position.get("steps").and_then(Value::as_array) {
            Some(children) => {
                for child in children {
                    visit(child);
                }
            }
            None => visit(position),
        }
    }
}

fn is_set(map: &Map<String, Value>, key: &str) -> bool {
    map.get(key).is_some_and(|value| !value.is_null())
}
