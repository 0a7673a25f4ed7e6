// ABOUTME: Structured plan input model - the abstract training-plan format
// ABOUTME: Versioned envelope of sections holding single and repeat blocks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coaching

use serde::{Deserialize, Serialize};

use crate::errors::{CoreError, CoreResult};

/// Abstract, sport-agnostic training plan produced by the plan-authoring
/// layer.
///
/// The plan is deliberately loose: unrecognized sports fall back to a
/// configured default, and unrecognized block shapes are skipped during
/// compilation rather than failing it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StructuredPlan {
    /// Plan format version tag
    pub format_version: Option<String>,
    /// Workout name carried through to the document
    pub name: Option<String>,
    /// Abstract sport spelling, normalized during compilation
    pub sport: Option<String>,
    /// Author-declared total duration, cross-checked against the compiled
    /// estimate
    pub expected_duration_seconds: Option<f64>,
    /// Ordered sections of the plan
    #[serde(default)]
    pub sections: Vec<PlanSection>,
}

impl StructuredPlan {
    /// Parse a structured plan from a JSON string.
    ///
    /// # Errors
    /// Returns [`CoreError::Parse`] when the input is not well-formed
    /// JSON or is structurally incompatible with the plan shape.
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        serde_json::from_str(json).map_err(CoreError::Parse)
    }
}

/// Phase tag of a plan section
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SectionKind {
    /// Warmup phase
    Warmup,
    /// Main work phase
    Main,
    /// Cooldown phase
    Cooldown,
    /// Catch-all for values outside the plan contract
    #[serde(other)]
    Unknown,
}

/// One ordered section of a plan; compiles to at most one segment
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanSection {
    /// Phase tag (WARMUP, MAIN, COOLDOWN)
    pub kind: Option<SectionKind>,
    /// Section sport, used when the plan compiles to a multi-sport
    /// workout; single-sport plans inherit the plan sport
    pub sport: Option<String>,
    /// Ordered blocks of the section
    #[serde(default)]
    pub blocks: Vec<PlanBlock>,
}

/// A block within a section: a repeat group, a single step, or an
/// unrecognized shape the compiler skips.
///
/// Discriminated structurally: a block carrying a `steps` array is a
/// repeat, any other object is a single, and anything else is unknown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PlanBlock {
    /// Repeat group over single-like child steps
    Repeat(RepeatBlock),
    /// Single executable block
    Single(SingleBlock),
    /// Unrecognized shape, skipped during compilation
    Unknown(serde_json::Value),
}

/// A single executable block of a plan section
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SingleBlock {
    /// Human-readable label, carried into the step description
    pub label: Option<String>,
    /// Abstract intensity spelling
    pub intensity: Option<String>,
    /// Whether this block is an effort or a rest
    pub role: Option<StepRole>,
    /// Abstract duration
    pub duration: Option<PlanDuration>,
    /// Zero to two abstract targets; the first becomes the primary
    #[serde(default)]
    pub targets: Vec<PlanTarget>,
}

/// Role of a block inside its section or repeat group
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StepRole {
    /// Working effort
    Effort,
    /// Rest between efforts
    Rest,
    /// Catch-all for values outside the plan contract
    #[serde(other)]
    Unknown,
}

/// Abstract duration of a single block
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanDuration {
    /// Duration kind
    #[serde(rename = "type")]
    pub kind: Option<PlanDurationKind>,
    /// Numeric value: seconds for time, meters for distance
    pub value: Option<f64>,
}

/// Kind of an abstract plan duration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanDurationKind {
    /// Timed block, in seconds
    Time,
    /// Timed rest block, in seconds
    FixedRest,
    /// Distance block, in meters
    Distance,
    /// Catch-all for values outside the plan contract
    #[serde(other)]
    Unknown,
}

/// Abstract target of a single block: a type, a unit, and either a single
/// value or a low/high range in abstract units
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanTarget {
    /// Abstract target type spelling
    #[serde(rename = "type")]
    pub target_type: Option<String>,
    /// Abstract unit the numeric fields are expressed in
    pub unit: Option<String>,
    /// Single value
    pub value: Option<f64>,
    /// Low bound of a range
    pub low: Option<f64>,
    /// High bound of a range
    pub high: Option<f64>,
}

/// A repeat group block: a round count over single-like children
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RepeatBlock {
    /// Number of rounds
    pub repeat_count: Option<f64>,
    /// Abstract intensity spelling; inferred from children when absent
    pub intensity: Option<String>,
    /// Ordered child steps, each tagged with an effort or rest role
    pub steps: Vec<SingleBlock>,
}
