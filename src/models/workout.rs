// ABOUTME: Root workout document model owning the ordered segment list
// ABOUTME: Carries sport, provider identifiers and the multi-sport transition flag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coaching

use serde::{Deserialize, Serialize};

use super::metadata::PoolLengthUnit;
use super::segment::Segment;
use super::sport::Sport;
use crate::errors::{CoreError, CoreResult};

/// Root workout document.
///
/// Constructed once by the plan compiler or recovered from a draft by the
/// sanitizer, judged once by the validator, then handed off immutable to
/// the push layer. Every field is optional on the wire; the validator is
/// the sole gate on completeness.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    /// Human-readable workout name
    pub workout_name: Option<String>,
    /// Sport of the whole workout; `MULTI_SPORT` for composite sessions
    pub sport: Option<Sport>,
    /// Vendor-assigned workout id, echoed back after creation
    pub provider_workout_id: Option<String>,
    /// Coaching-platform user id that owns this document
    pub owner_id: Option<String>,
    /// Whether the vendor device auto-transitions between segments
    /// (required true for multi-sport workouts)
    pub is_session_transition_enabled: Option<bool>,
    /// Workout-level pool length, propagated to swim segments
    pub pool_length: Option<f64>,
    /// Unit of `pool_length`
    pub pool_length_unit: Option<PoolLengthUnit>,
    /// Ordered, non-empty list of segments
    #[serde(default)]
    pub segments: Vec<Segment>,
}

impl Workout {
    /// Parse a candidate workout document from a JSON string.
    ///
    /// # Errors
    /// Returns [`CoreError::Parse`] when the input is not well-formed JSON
    /// or is structurally incompatible with the document shape. Field-level
    /// problems do not fail the parse; they surface later as validation
    /// issues.
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        serde_json::from_str(json).map_err(CoreError::Parse)
    }

    /// Total number of leaf steps across all segments (repeat children
    /// counted once, not multiplied by repeat counts)
    #[must_use]
    pub fn total_leaf_steps(&self) -> usize {
        self.segments.iter().map(Segment::leaf_step_count).sum()
    }
}
