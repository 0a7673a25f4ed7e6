// ABOUTME: Abstract target unit conversion table
// ABOUTME: Percent units scale [0,1] fractions to integer percents; raw units round
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coaching

use super::plan::PlanTarget;

/// Scale factor from an abstract [0,1] fraction to an integer percent
const PERCENT_SCALE: f64 = 100.0;

/// A plan target's numeric fields after unit conversion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvertedTarget {
    /// Single value, converted
    pub value: Option<f64>,
    /// Low bound, converted
    pub low: Option<f64>,
    /// High bound, converted
    pub high: Option<f64>,
    /// Whether the converted values are percent-scaled
    pub percent: bool,
}

/// Convert a plan target's numeric fields according to its unit.
///
/// Percent-of-FTP and percent-of-max-HR units scale the abstract [0,1]
/// fraction to an integer percent and set the percent flag; raw
/// cadence/pace/speed/grade units pass through rounded to the nearest
/// integer; anything else passes through unchanged.
#[must_use]
pub fn convert_target(target: &PlanTarget) -> ConvertedTarget {
    match unit_class(target.unit.as_deref()) {
        UnitClass::Percent => ConvertedTarget {
            value: target.value.map(to_percent),
            low: target.low.map(to_percent),
            high: target.high.map(to_percent),
            percent: true,
        },
        UnitClass::Raw => ConvertedTarget {
            value: target.value.map(f64::round),
            low: target.low.map(f64::round),
            high: target.high.map(f64::round),
            percent: false,
        },
        UnitClass::Passthrough => ConvertedTarget {
            value: target.value,
            low: target.low,
            high: target.high,
            percent: false,
        },
    }
}

enum UnitClass {
    Percent,
    Raw,
    Passthrough,
}

fn unit_class(unit: Option<&str>) -> UnitClass {
    match unit {
        Some("percentFtp" | "percent_ftp" | "percentMaxHr" | "percent_max_hr") => {
            UnitClass::Percent
        }
        Some(
            "rpm" | "stepsPerMinute" | "steps_per_minute" | "secondsPerKm" | "seconds_per_km"
            | "secondsPer100m" | "seconds_per_100m" | "metersPerSecond" | "meters_per_second"
            | "percentGrade" | "percent_grade",
        ) => UnitClass::Raw,
        _ => UnitClass::Passthrough,
    }
}

fn to_percent(fraction: f64) -> f64 {
    (fraction * PERCENT_SCALE).round()
}
