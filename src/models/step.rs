// ABOUTME: Leaf step and repeat group models for workout documents
// ABOUTME: Loosely-typed candidate shapes the validator judges field by field
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coaching

use serde::{Deserialize, Serialize};
use std::fmt;

use super::duration::DurationType;
use super::metadata::{DrillType, EquipmentType, StrokeType, WeightUnit};
use super::target::{SecondaryTargetType, TargetType, ValueType};

/// Effort intensity of a step
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intensity {
    /// Resting between efforts
    Rest,
    /// Warming up
    Warmup,
    /// Cooling down
    Cooldown,
    /// Easy recovery effort
    Recovery,
    /// Working effort
    Active,
    /// Hard interval effort
    Interval,
    /// Main set (swim only)
    Main,
    /// Catch-all for values outside the vendor contract
    #[serde(other)]
    Unknown,
}

impl Intensity {
    /// Vendor string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rest => "REST",
            Self::Warmup => "WARMUP",
            Self::Cooldown => "COOLDOWN",
            Self::Recovery => "RECOVERY",
            Self::Active => "ACTIVE",
            Self::Interval => "INTERVAL",
            Self::Main => "MAIN",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Parse an intensity from a plan-level string
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().replace([' ', '-'], "_").as_str() {
            "REST" => Some(Self::Rest),
            "WARMUP" | "WARM_UP" => Some(Self::Warmup),
            "COOLDOWN" | "COOL_DOWN" => Some(Self::Cooldown),
            "RECOVERY" | "EASY" => Some(Self::Recovery),
            "ACTIVE" | "WORK" | "STEADY" => Some(Self::Active),
            "INTERVAL" | "HARD" => Some(Self::Interval),
            "MAIN" => Some(Self::Main),
            _ => None,
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Termination semantics of a repeat group
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RepeatType {
    /// Repeat until the fixed count of rounds completes
    RepeatUntilStepsCmplt,
    /// Repeat until a time budget is spent
    RepeatUntilTime,
    /// Repeat until a distance budget is covered
    RepeatUntilDistance,
    /// Repeat until a calorie budget is spent
    RepeatUntilCalories,
    /// Catch-all for values outside the vendor contract
    #[serde(other)]
    Unknown,
}

/// Leaf executable step.
///
/// Every field is optional: this is the candidate shape handed to the
/// validator, which reports missing or malformed fields as issues rather
/// than failing to parse. Numeric fields are `f64` on the wire; integer
/// requirements are validation rules.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// Position within the owning segment or repeat group, starting at 1
    pub step_order: Option<f64>,
    /// Effort intensity
    pub intensity: Option<Intensity>,
    /// Free-text description, at most 512 characters
    pub description: Option<String>,
    /// How the step's duration is expressed
    pub duration_type: Option<DurationType>,
    /// Duration value; semantics depend on `duration_type`
    pub duration_value: Option<f64>,
    /// Percent flag for threshold duration values
    pub duration_value_type: Option<ValueType>,
    /// Primary target type
    pub target_type: Option<TargetType>,
    /// Single target value (zone index for heart rate and power)
    pub target_value: Option<f64>,
    /// Low bound of a target range
    pub target_value_low: Option<f64>,
    /// High bound of a target range
    pub target_value_high: Option<f64>,
    /// Percent flag for the primary target value or range
    pub target_value_type: Option<ValueType>,
    /// Secondary target type
    pub secondary_target_type: Option<SecondaryTargetType>,
    /// Single secondary target value
    pub secondary_target_value: Option<f64>,
    /// Low bound of a secondary target range
    pub secondary_target_value_low: Option<f64>,
    /// High bound of a secondary target range
    pub secondary_target_value_high: Option<f64>,
    /// Percent flag for the secondary target value or range
    pub secondary_target_value_type: Option<ValueType>,
    /// Swim stroke (lap swimming only)
    pub stroke_type: Option<StrokeType>,
    /// Swim drill focus (lap swimming only)
    pub drill_type: Option<DrillType>,
    /// Swim equipment (lap swimming only)
    pub equipment_type: Option<EquipmentType>,
    /// Exercise catalog category (strength and cardio training only)
    pub exercise_category: Option<String>,
    /// Exercise catalog name (strength and cardio training only)
    pub exercise_name: Option<String>,
    /// Weight moved during the step (strength training only)
    pub weight_value: Option<f64>,
    /// Unit of `weight_value` (strength training only)
    pub weight_unit: Option<WeightUnit>,
}

/// Repeat group: a fixed number of rounds over an ordered list of leaf
/// steps.
///
/// Children are always leaf [`Step`]s; nesting repeat groups is ruled out
/// at the type level. A repeat group carries no duration, target, exercise
/// or weight fields of its own.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RepeatStep {
    /// Position within the owning segment, starting at 1
    pub step_order: Option<f64>,
    /// Intensity assigned to the group, or inferred from its children
    pub intensity: Option<Intensity>,
    /// Termination semantics
    pub repeat_type: Option<RepeatType>,
    /// Number of rounds, a positive integer
    pub repeat_count: Option<f64>,
    /// Whether the final round drops its trailing rest step
    pub skip_last_rest_step: Option<bool>,
    /// Ordered, non-empty list of child steps
    pub steps: Vec<Step>,
}

/// A position in a segment's step list: either a leaf step or a repeat
/// group.
///
/// The union is discriminated structurally: an object carrying a `steps`
/// array is a repeat group, anything else is a leaf step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum WorkoutStep {
    /// Repeat group over leaf children
    Repeat(RepeatStep),
    /// Leaf executable step
    Single(Step),
}

impl WorkoutStep {
    /// The step's position within its segment, whichever variant it is
    #[must_use]
    pub const fn step_order(&self) -> Option<f64> {
        match self {
            Self::Repeat(repeat) => repeat.step_order,
            Self::Single(step) => step.step_order,
        }
    }

    /// Number of leaf steps this position contributes (children counted
    /// once, not multiplied by the repeat count)
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Repeat(repeat) => repeat.steps.len(),
            Self::Single(_) => 1,
        }
    }
}
