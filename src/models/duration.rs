// ABOUTME: Duration type enumeration for workout steps
// ABOUTME: Tags how long a step runs and which value semantics apply to it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coaching

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a step's duration is expressed.
///
/// Each variant carries its own value legality: `Open` forbids a value,
/// the counted variants require a positive integer, the heart-rate and
/// power thresholds require a percent-flagged value, and the swim CSS
/// offset is bounded to ±60 seconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DurationType {
    /// Fixed time in seconds
    Time,
    /// Fixed distance in the segment's distance unit
    Distance,
    /// Fixed repetition count
    Reps,
    /// Lap-button press ends the step; no value allowed
    Open,
    /// Step ends when heart rate drops below the percent value
    HrLessThan,
    /// Step ends when heart rate rises above the percent value
    HrGreaterThan,
    /// Step ends when power drops below the percent value
    PowerLessThan,
    /// Step ends when power rises above the percent value
    PowerGreaterThan,
    /// Fixed calorie expenditure
    Calories,
    /// Time accumulated in a valid aerodynamic position
    TimeAtValidCda,
    /// Timed rest between efforts
    FixedRest,
    /// Swim repetition paced as an offset from critical swim speed
    RepetitionSwimCssOffset,
    /// Fixed repetition count that cannot be shortened
    FixedRepetition,
    /// Catch-all for values outside the vendor contract
    #[serde(other)]
    Unknown,
}

impl DurationType {
    /// Vendor string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Time => "TIME",
            Self::Distance => "DISTANCE",
            Self::Reps => "REPS",
            Self::Open => "OPEN",
            Self::HrLessThan => "HR_LESS_THAN",
            Self::HrGreaterThan => "HR_GREATER_THAN",
            Self::PowerLessThan => "POWER_LESS_THAN",
            Self::PowerGreaterThan => "POWER_GREATER_THAN",
            Self::Calories => "CALORIES",
            Self::TimeAtValidCda => "TIME_AT_VALID_CDA",
            Self::FixedRest => "FIXED_REST",
            Self::RepetitionSwimCssOffset => "REPETITION_SWIM_CSS_OFFSET",
            Self::FixedRepetition => "FIXED_REPETITION",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Whether this duration type requires a positive integer value
    #[must_use]
    pub const fn requires_positive_integer(&self) -> bool {
        matches!(
            self,
            Self::Time
                | Self::Distance
                | Self::Reps
                | Self::FixedRepetition
                | Self::FixedRest
                | Self::Calories
                | Self::TimeAtValidCda
        )
    }

    /// Whether this duration type requires a percent-flagged value
    #[must_use]
    pub const fn requires_percent_value(&self) -> bool {
        matches!(
            self,
            Self::HrLessThan | Self::HrGreaterThan | Self::PowerLessThan | Self::PowerGreaterThan
        )
    }
}

impl fmt::Display for DurationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
