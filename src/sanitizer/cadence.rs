// ABOUTME: Cadence mention extraction from free-text step descriptions
// ABOUTME: Best-effort regex enrichment, isolated from the strict validator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coaching

use regex::Regex;
use std::sync::LazyLock;

// Matches a two-to-three digit number or range adjacent to the word
// "cadence", in either order: "88-92 rpm cadence", "90 cadence",
// "cadence of 85-95", "cadence: 90"
static CADENCE_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)
        \b(\d{2,3})(?:\s*(?:-|–|to)\s*(\d{2,3}))?\s*(?:rpm\s+)?cadence\b
        |
        \bcadence(?:\s+of)?\s*:?\s*(\d{2,3})(?:\s*(?:-|–|to)\s*(\d{2,3}))?\b",
    )
    .ok()
});

/// A cadence value or range parsed out of a description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CadenceMention {
    /// Single value, or the low bound of a range
    pub low: u64,
    /// High bound when the description named a range
    pub high: Option<u64>,
}

/// Extract the first cadence mention from a description, if any
pub(crate) fn extract_cadence(description: &str) -> Option<CadenceMention> {
    let pattern = CADENCE_PATTERN.as_ref()?;
    let captures = pattern.captures(description)?;

    let first = captures.get(1).or_else(|| captures.get(3))?;
    let second = captures.get(2).or_else(|| captures.get(4));

    let first: u64 = first.as_str().parse().ok()?;
    let second: Option<u64> = second.and_then(|m| m.as_str().parse().ok());

    Some(match second {
        Some(value) if value != first => CadenceMention {
            low: first.min(value),
            high: Some(first.max(value)),
        },
        _ => CadenceMention {
            low: first,
            high: None,
        },
    })
}
