// ABOUTME: Segment model - a contiguous single-sport portion of a workout
// ABOUTME: Carries sport context, optional pool length and the ordered step list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coaching

use serde::{Deserialize, Serialize};

use super::metadata::PoolLengthUnit;
use super::sport::Sport;
use super::step::WorkoutStep;

/// A contiguous single-sport portion of a workout.
///
/// Mono-sport workouts have exactly one segment; multi-sport workouts have
/// one segment per leg. Pool length is legal only on lap swimming
/// segments.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// Position within the workout, starting at 1
    pub segment_order: Option<f64>,
    /// Sport of every step in this segment
    pub sport: Option<Sport>,
    /// Pool length (lap swimming only)
    pub pool_length: Option<f64>,
    /// Unit of `pool_length` (lap swimming only)
    pub pool_length_unit: Option<PoolLengthUnit>,
    /// Ordered, non-empty list of steps and repeat groups
    #[serde(default)]
    pub steps: Vec<WorkoutStep>,
}

impl Segment {
    /// Number of leaf steps in this segment (repeat children counted once)
    #[must_use]
    pub fn leaf_step_count(&self) -> usize {
        self.steps.iter().map(WorkoutStep::leaf_count).sum()
    }
}
