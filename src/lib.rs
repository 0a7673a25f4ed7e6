// ABOUTME: Main library entry point for the Stride workout document compiler
// ABOUTME: Compiles, sanitizes and validates vendor workout documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coaching

//! # Stride Workout Document Compiler
//!
//! The subsystem of the Stride coaching platform that turns abstract,
//! sport-agnostic training plans into strictly-typed, vendor-specific
//! workout documents, and that rejects or repairs any document violating
//! the vendor's structural and semantic contract before it is handed to
//! the push layer.
//!
//! ## Components
//!
//! - **Models**: the recursive document entities (workout, segment, step,
//!   repeat group) and their field-level legality rules
//! - **Validation**: an exhaustive, path-addressed rule walk that either
//!   accepts a candidate document or returns every violation it found
//! - **Compiler**: structured plan to candidate document, with unit
//!   conversion, ordering assignment and duration aggregation
//! - **Sanitizer**: idempotent best-effort repair of loosely-typed,
//!   AI-authored drafts
//!
//! The whole crate is a pure, synchronous transformation layer: no I/O,
//! no retries, no shared mutable state beyond the read-only exercise
//! catalog loaded on first use.
//!
//! ## Example
//!
//! ```rust
//! use stride_workout_compiler::parse_and_validate;
//!
//! let document = r#"{
//!     "sport": "RUNNING",
//!     "segments": [{
//!         "segmentOrder": 1,
//!         "sport": "RUNNING",
//!         "steps": [{
//!             "stepOrder": 1,
//!             "intensity": "ACTIVE",
//!             "durationType": "TIME",
//!             "durationValue": 1800
//!         }]
//!     }]
//! }"#;
//!
//! let workout = parse_and_validate(document).unwrap();
//! assert_eq!(workout.total_leaf_steps(), 1);
//! ```

/// Structured-plan compilation into candidate workout documents
pub mod compiler;

/// Vendor contract limits and environment-based configuration
pub mod constants;

/// Unified error types for the parse/validate pipeline
pub mod errors;

/// Logging setup for binaries
pub mod logging;

/// Workout document entity types and legality predicates
pub mod models;

/// Draft document repair before validation
pub mod sanitizer;

/// Exhaustive, path-addressed document validation
pub mod validation;

pub use errors::{CoreError, CoreResult};
pub use models::Workout;
pub use validation::Issue;

/// Parse a candidate workout document and judge it against the full
/// vendor rule set.
///
/// # Errors
/// Returns [`CoreError::Parse`] when the input is not well-formed JSON,
/// or [`CoreError::Validation`] carrying every violation found.
pub fn parse_and_validate(json: &str) -> CoreResult<Workout> {
    let workout = Workout::from_json_str(json)?;
    validation::validate(&workout).map_err(CoreError::Validation)?;
    Ok(workout)
}
