// ABOUTME: Target type enumerations for workout step goals
// ABOUTME: Primary and secondary target types plus the percent-flag value type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coaching

use serde::{Deserialize, Serialize};
use std::fmt;

/// Primary target type attached to a leaf step.
///
/// A target is either a single value (a zone index for heart rate and
/// power) or a low/high range, optionally percent-scaled via
/// [`ValueType::Percent`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TargetType {
    /// No target; forbids any value, range or percent flag
    Open,
    /// Heart rate zone or percent-of-max range
    HeartRate,
    /// Power zone or percent-of-FTP range
    Power,
    /// Cadence in revolutions or strides per minute
    Cadence,
    /// Pace in seconds per unit distance
    Pace,
    /// Speed in meters per second
    Speed,
    /// Grade as a percentage
    Grade,
    /// Catch-all for values outside the vendor contract
    #[serde(other)]
    Unknown,
}

impl TargetType {
    /// Vendor string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::HeartRate => "HEART_RATE",
            Self::Power => "POWER",
            Self::Cadence => "CADENCE",
            Self::Pace => "PACE",
            Self::Speed => "SPEED",
            Self::Grade => "GRADE",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Parse a target type from a plan-level string
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().replace([' ', '-'], "_").as_str() {
            "OPEN" | "NONE" => Some(Self::Open),
            "HEART_RATE" | "HEARTRATE" | "HR" => Some(Self::HeartRate),
            "POWER" => Some(Self::Power),
            "CADENCE" => Some(Self::Cadence),
            "PACE" => Some(Self::Pace),
            "SPEED" => Some(Self::Speed),
            "GRADE" | "INCLINE" => Some(Self::Grade),
            _ => None,
        }
    }

    /// Whether single values of this type are zone indices
    #[must_use]
    pub const fn is_zoned(&self) -> bool {
        matches!(self, Self::HeartRate | Self::Power)
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Secondary target type: the primary set plus the swim-only variants.
///
/// Swim steps never carry a primary target; their goal, when present, lives
/// in the secondary slot and is restricted to the three swim-only variants.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SecondaryTargetType {
    /// No secondary target
    Open,
    /// Heart rate zone or percent-of-max range
    HeartRate,
    /// Power zone or percent-of-FTP range
    Power,
    /// Cadence in revolutions or strides per minute
    Cadence,
    /// Pace in seconds per unit distance
    Pace,
    /// Speed in meters per second
    Speed,
    /// Grade as a percentage
    Grade,
    /// Swim pace zone (swim only)
    PaceZone,
    /// Free-text swim instruction slot (swim only)
    SwimInstruction,
    /// Offset from critical swim speed (swim only)
    SwimCssOffset,
    /// Catch-all for values outside the vendor contract
    #[serde(other)]
    Unknown,
}

impl SecondaryTargetType {
    /// Vendor string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::HeartRate => "HEART_RATE",
            Self::Power => "POWER",
            Self::Cadence => "CADENCE",
            Self::Pace => "PACE",
            Self::Speed => "SPEED",
            Self::Grade => "GRADE",
            Self::PaceZone => "PACE_ZONE",
            Self::SwimInstruction => "SWIM_INSTRUCTION",
            Self::SwimCssOffset => "SWIM_CSS_OFFSET",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Parse a secondary target type from a plan-level string
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().replace([' ', '-'], "_").as_str() {
            "PACE_ZONE" => Some(Self::PaceZone),
            "SWIM_INSTRUCTION" => Some(Self::SwimInstruction),
            "SWIM_CSS_OFFSET" => Some(Self::SwimCssOffset),
            other => TargetType::parse(other).map(|primary| match primary {
                TargetType::Open => Self::Open,
                TargetType::HeartRate => Self::HeartRate,
                TargetType::Power => Self::Power,
                TargetType::Cadence => Self::Cadence,
                TargetType::Pace => Self::Pace,
                TargetType::Speed => Self::Speed,
                TargetType::Grade => Self::Grade,
                TargetType::Unknown => Self::Unknown,
            }),
        }
    }

    /// Whether this variant is legal only on swim steps
    #[must_use]
    pub const fn is_swim_only(&self) -> bool {
        matches!(self, Self::PaceZone | Self::SwimInstruction | Self::SwimCssOffset)
    }

    /// Whether single values of this type are zone indices
    #[must_use]
    pub const fn is_zoned(&self) -> bool {
        matches!(self, Self::HeartRate | Self::Power)
    }

    /// Whether this secondary type names the same goal as the given
    /// primary type
    #[must_use]
    pub fn matches_primary(&self, primary: TargetType) -> bool {
        self.as_str() == primary.as_str()
    }
}

impl fmt::Display for SecondaryTargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value-type marker for duration and target values.
///
/// `Percent` flags the numeric value as a percentage (of FTP or of max
/// heart rate) rather than an absolute unit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueType {
    /// Value is a percentage of a user-specific reference (FTP, max HR)
    Percent,
    /// Catch-all for values outside the vendor contract
    #[serde(other)]
    Unknown,
}

impl ValueType {
    /// Vendor string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Percent => "PERCENT",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
