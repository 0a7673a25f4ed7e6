// ABOUTME: Path-addressed validation issue type
// ABOUTME: Carries a structural path into the document plus a human-readable message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coaching

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contract violation found in a candidate workout document.
///
/// `path` addresses the offending field in the document tree, e.g.
/// `segments[0].steps[2].targetValueLow`. The validator accumulates every
/// issue it finds in one pass; callers receive the full list, never just
/// the first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Issue {
    /// Structural path to the offending field
    pub path: String,
    /// Human-readable description of the violation
    pub message: String,
}

impl Issue {
    /// Create an issue for the given path and message
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (@ path: {})", self.message, self.path)
    }
}
