// ABOUTME: Logging configuration for the CLI surface
// ABOUTME: Env-filtered tracing-subscriber setup with pretty and compact formats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coaching

//! Structured logging setup for binaries. The library itself only emits
//! through the `tracing` facade; initializing a subscriber is the
//! caller's choice.

use std::env;
use tracing_subscriber::EnvFilter;

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl LogFormat {
    /// Read the format from `STRIDE_LOG_FORMAT`, defaulting to pretty
    #[must_use]
    pub fn from_env() -> Self {
        match env::var("STRIDE_LOG_FORMAT").as_deref() {
            Ok("compact") => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

/// Initialize the process-wide tracing subscriber.
///
/// Respects `RUST_LOG` when set; otherwise defaults to `info`, or
/// `debug` when `verbose` is requested. Safe to call more than once -
/// later calls are no-ops.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    // A host process may already have installed a subscriber; that is
    // not an error for this library.
    let _ = match LogFormat::from_env() {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
}
