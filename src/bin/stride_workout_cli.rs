// ABOUTME: Stride workout CLI - validate, compile and sanitize workout documents
// ABOUTME: Thin harness over the library pipeline for files or standard input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coaching

//! Usage:
//! ```bash
//! # Validate a workout document from a file
//! stride-workout-cli validate workout.json
//!
//! # Validate a document from standard input
//! cat workout.json | stride-workout-cli validate -
//!
//! # Compile a structured plan and print the validated document
//! stride-workout-cli compile plan.json
//!
//! # Repair an AI-authored draft and print the sanitized JSON
//! stride-workout-cli sanitize draft.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;
use tracing::info;

use stride_workout_compiler::compiler::{CompilerConfig, PlanCompiler, StructuredPlan};
use stride_workout_compiler::{logging, sanitizer, validation, Workout};

#[derive(Parser)]
#[command(
    name = "stride-workout-cli",
    about = "Stride workout document tooling",
    long_about = "Validate vendor workout documents, compile structured training plans, and sanitize AI-authored drafts."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Validate a workout document against the vendor contract
    Validate {
        /// Path to a JSON document, or `-` for standard input
        input: String,
    },

    /// Compile a structured plan, validate the result and print it
    Compile {
        /// Path to a JSON plan, or `-` for standard input
        input: String,
    },

    /// Repair a loosely-typed draft document and print the result
    Sanitize {
        /// Path to a JSON draft, or `-` for standard input
        input: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    match &cli.command {
        Command::Validate { input } => validate_command(&read_input(input)?),
        Command::Compile { input } => compile_command(&read_input(input)?),
        Command::Sanitize { input } => sanitize_command(&read_input(input)?),
    }
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read standard input")?;
        Ok(buffer)
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {path}"))
    }
}

fn validate_command(json: &str) -> Result<ExitCode> {
    let workout = match Workout::from_json_str(json) {
        Ok(workout) => workout,
        Err(err) => {
            eprintln!("{err}");
            return Ok(ExitCode::FAILURE);
        }
    };

    match validation::validate(&workout) {
        Ok(()) => {
            println!("workout document is valid");
            Ok(ExitCode::SUCCESS)
        }
        Err(issues) => {
            for issue in issues {
                println!("{issue}");
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

fn compile_command(json: &str) -> Result<ExitCode> {
    let plan = match StructuredPlan::from_json_str(json) {
        Ok(plan) => plan,
        Err(err) => {
            eprintln!("{err}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let compiler = PlanCompiler::with_config(CompilerConfig::from_env());
    let compiled = compiler.compile(&plan);
    info!(
        estimated_duration_seconds = compiled.estimated_duration_seconds,
        "plan compiled"
    );

    match validation::validate(&compiled.workout) {
        Ok(()) => {
            println!("{}", serde_json::to_string_pretty(&compiled.workout)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(issues) => {
            for issue in issues {
                println!("{issue}");
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

fn sanitize_command(json: &str) -> Result<ExitCode> {
    let draft: serde_json::Value = match serde_json::from_str(json) {
        Ok(value) => value,
        Err(err) => {
            eprintln!("failed to parse input document: {err}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let sanitized = sanitizer::sanitize_draft(draft);
    println!("{}", serde_json::to_string_pretty(&sanitized)?);
    Ok(ExitCode::SUCCESS)
}
