// ABOUTME: Unified error types for the workout document pipeline
// ABOUTME: Parse failures and validation rejections; compilation never fails
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coaching

//! # Error Handling
//!
//! Two error kinds cover the whole pipeline:
//!
//! - [`CoreError::Parse`] - the input is not well-formed JSON or is
//!   structurally incompatible with the expected shape. Reported
//!   immediately; validation is not attempted.
//! - [`CoreError::Validation`] - one or more contract violations,
//!   collected exhaustively in one pass and never short-circuited.
//!
//! Compilation gaps (unrecognized plan fragments) are not an error kind:
//! the compiler logs and skips them, and the validator rejects the result
//! if the gap left it structurally invalid.

use thiserror::Error;

use crate::validation::Issue;

/// Result alias used throughout the crate
pub type CoreResult<T> = Result<T, CoreError>;

/// Error produced by the parse/validate pipeline
#[derive(Debug, Error)]
pub enum CoreError {
    /// Input was not well-formed JSON or did not match the expected shape
    #[error("failed to parse input document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The candidate document violated the vendor contract
    #[error("workout document rejected with {} validation issue(s)", .0.len())]
    Validation(Vec<Issue>),
}

impl CoreError {
    /// The validation issues carried by this error, if any
    #[must_use]
    pub fn issues(&self) -> Option<&[Issue]> {
        match self {
            Self::Validation(issues) => Some(issues),
            Self::Parse(_) => None,
        }
    }
}
