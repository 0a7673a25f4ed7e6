// ABOUTME: Sport-conditional step metadata enumerations
// ABOUTME: Swim stroke/drill/equipment, pool length units and weight units
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coaching

use serde::{Deserialize, Serialize};
use std::fmt;

/// Swim stroke for a lap swimming step
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrokeType {
    /// Freestyle / front crawl
    Freestyle,
    /// Backstroke
    Backstroke,
    /// Breaststroke
    Breaststroke,
    /// Butterfly
    Butterfly,
    /// Individual medley
    Im,
    /// Mixed strokes within the step
    Mixed,
    /// Swimmer's choice
    Choice,
    /// Catch-all for values outside the vendor contract
    #[serde(other)]
    Unknown,
}

/// Swim drill focus for a lap swimming step
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DrillType {
    /// Kick-only drill
    Kick,
    /// Pull-only drill
    Pull,
    /// Technique drill
    Drill,
    /// Build effort through the repetition
    Build,
    /// Catch-all for values outside the vendor contract
    #[serde(other)]
    Unknown,
}

/// Swim equipment used during a lap swimming step
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EquipmentType {
    /// No equipment
    None,
    /// Kickboard
    Kickboard,
    /// Pull buoy
    PullBuoy,
    /// Fins
    Fins,
    /// Hand paddles
    Paddles,
    /// Center-mount snorkel
    Snorkel,
    /// Catch-all for values outside the vendor contract
    #[serde(other)]
    Unknown,
}

/// Unit for a pool length value
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PoolLengthUnit {
    /// Meters
    Meter,
    /// Yards
    Yard,
    /// Catch-all for values outside the vendor contract
    #[serde(other)]
    Unknown,
}

impl fmt::Display for PoolLengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Meter => "METER",
            Self::Yard => "YARD",
            Self::Unknown => "UNKNOWN",
        })
    }
}

/// Unit for a strength step's weight value
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeightUnit {
    /// Kilograms
    Kilogram,
    /// Pounds
    Pound,
    /// Catch-all for values outside the vendor contract
    #[serde(other)]
    Unknown,
}
