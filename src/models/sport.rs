// ABOUTME: Sport enumeration for workout documents and structured plans
// ABOUTME: Defines the vendor sport contract with parsing and legality predicates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coaching

use serde::{Deserialize, Serialize};
use std::fmt;

/// Enumeration of sports a workout document may carry.
///
/// The wire representation matches the vendor contract
/// (`SCREAMING_SNAKE_CASE` strings). An unrecognized string deserializes to
/// `Unknown` so the validator can report it as an issue instead of the
/// document failing to parse.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sport {
    /// Running workout
    Running,
    /// Cycling workout
    Cycling,
    /// Pool swimming workout
    LapSwimming,
    /// Strength/weight training workout
    StrengthTraining,
    /// Cardio circuit workout
    CardioTraining,
    /// Generic workout without sport-specific semantics
    Generic,
    /// Yoga session
    Yoga,
    /// Pilates session
    Pilates,
    /// Multi-sport workout composed of single-sport segments
    MultiSport,
    /// Catch-all for values outside the vendor contract
    #[serde(other)]
    Unknown,
}

impl Sport {
    /// Vendor string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "RUNNING",
            Self::Cycling => "CYCLING",
            Self::LapSwimming => "LAP_SWIMMING",
            Self::StrengthTraining => "STRENGTH_TRAINING",
            Self::CardioTraining => "CARDIO_TRAINING",
            Self::Generic => "GENERIC",
            Self::Yoga => "YOGA",
            Self::Pilates => "PILATES",
            Self::MultiSport => "MULTI_SPORT",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Parse a sport from a plan-level or vendor string.
    ///
    /// Accepts the vendor spelling plus the abstract spellings the plan
    /// layer emits ("running", "bike", "swim", ...). Returns `None` for
    /// anything unrecognized so callers can apply their own fallback.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().replace([' ', '-'], "_").as_str() {
            "RUNNING" | "RUN" => Some(Self::Running),
            "CYCLING" | "BIKE" | "BIKING" | "RIDE" => Some(Self::Cycling),
            "LAP_SWIMMING" | "SWIMMING" | "SWIM" => Some(Self::LapSwimming),
            "STRENGTH_TRAINING" | "STRENGTH" | "WEIGHT_TRAINING" => Some(Self::StrengthTraining),
            "CARDIO_TRAINING" | "CARDIO" | "HIIT" => Some(Self::CardioTraining),
            "GENERIC" | "OTHER" | "WORKOUT" => Some(Self::Generic),
            "YOGA" => Some(Self::Yoga),
            "PILATES" => Some(Self::Pilates),
            "MULTI_SPORT" | "MULTISPORT" | "TRIATHLON" | "DUATHLON" => Some(Self::MultiSport),
            _ => None,
        }
    }

    /// Whether this is the pool swimming sport
    #[must_use]
    pub const fn is_swim(&self) -> bool {
        matches!(self, Self::LapSwimming)
    }

    /// Whether this is the multi-sport composite
    #[must_use]
    pub const fn is_multi_sport(&self) -> bool {
        matches!(self, Self::MultiSport)
    }

    /// Whether steps of this sport draw exercises from the static catalog
    #[must_use]
    pub const fn uses_exercise_catalog(&self) -> bool {
        matches!(self, Self::StrengthTraining | Self::CardioTraining)
    }

    /// Whether steps of this sport may carry weight metadata
    #[must_use]
    pub const fn allows_weight(&self) -> bool {
        matches!(self, Self::StrengthTraining)
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
