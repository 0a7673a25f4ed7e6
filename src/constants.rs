// ABOUTME: Vendor contract limits and environment-based configuration values
// ABOUTME: Numeric bounds enforced by the validator plus env-overridable defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coaching

//! # Constants Module
//!
//! Hard limits of the vendor workout contract plus environment variable
//! configuration for the few tunable defaults.

/// Structural limits of the vendor workout contract
pub mod limits {
    /// Minimum number of segments in a multi-sport workout
    pub const MIN_MULTI_SPORT_SEGMENTS: usize = 1;

    /// Maximum number of segments in a multi-sport workout
    pub const MAX_MULTI_SPORT_SEGMENTS: usize = 25;

    /// Maximum total leaf steps across all segments of a multi-sport
    /// workout
    pub const MAX_MULTI_SPORT_LEAF_STEPS: usize = 250;

    /// Maximum length of a step description in characters
    pub const MAX_STEP_DESCRIPTION_CHARS: usize = 512;

    /// Lowest heart rate zone index
    pub const MIN_HEART_RATE_ZONE: f64 = 1.0;

    /// Highest heart rate zone index
    pub const MAX_HEART_RATE_ZONE: f64 = 5.0;

    /// Lowest power zone index
    pub const MIN_POWER_ZONE: f64 = 1.0;

    /// Highest power zone index
    pub const MAX_POWER_ZONE: f64 = 7.0;

    /// Lower bound of a swim CSS offset duration value, in seconds
    pub const MIN_SWIM_CSS_OFFSET: f64 = -60.0;

    /// Upper bound of a swim CSS offset duration value, in seconds
    pub const MAX_SWIM_CSS_OFFSET: f64 = 60.0;
}

/// Environment-based configuration
pub mod env_config {
    use crate::models::Sport;
    use std::env;

    /// Sport substituted when a structured plan names a sport outside the
    /// document contract. Overridable via `STRIDE_FALLBACK_SPORT`.
    #[must_use]
    pub fn fallback_sport() -> Sport {
        env::var("STRIDE_FALLBACK_SPORT")
            .ok()
            .and_then(|value| Sport::parse(&value))
            .unwrap_or(Sport::Generic)
    }
}
