// ABOUTME: Structured-plan compiler - abstract plans to candidate workout documents
// ABOUTME: Normalizes sport, assigns ordering, converts units, aggregates durations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coaching

//! # Structured-Plan Compiler
//!
//! Converts an abstract training plan into a candidate [`Workout`] tree.
//! The compiler never fails: unrecognized plan fragments are logged and
//! skipped, and the validator remains the sole rejection gate for
//! whatever the compiler emits.

mod plan;
mod units;

pub use plan::{
    PlanBlock, PlanDuration, PlanDurationKind, PlanSection, PlanTarget, RepeatBlock, SectionKind,
    SingleBlock, StepRole, StructuredPlan,
};
pub use units::{convert_target, ConvertedTarget};

use tracing::{debug, warn};

use crate::constants::env_config;
use crate::models::{
    DurationType, Intensity, RepeatStep, RepeatType, SecondaryTargetType, Segment, Sport, Step,
    TargetType, ValueType, Workout, WorkoutStep,
};

/// Compiler configuration
#[derive(Debug, Clone)]
pub struct CompilerConfig {
    /// Sport substituted when the plan names an unrecognized sport
    pub fallback_sport: Sport,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            fallback_sport: Sport::Generic,
        }
    }
}

impl CompilerConfig {
    /// Load configuration from the environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            fallback_sport: env_config::fallback_sport(),
        }
    }
}

/// A compiled candidate document plus its estimated total duration
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledWorkout {
    /// Candidate workout document, ready for validation
    pub workout: Workout,
    /// Estimated total duration in seconds, summed over all blocks with
    /// repeat counts applied
    pub estimated_duration_seconds: u64,
}

/// Compiler from structured plans to candidate workout documents
#[derive(Debug, Clone, Default)]
pub struct PlanCompiler {
    config: CompilerConfig,
}

impl PlanCompiler {
    /// Create a compiler with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a compiler with explicit configuration
    #[must_use]
    pub const fn with_config(config: CompilerConfig) -> Self {
        Self { config }
    }

    /// Compile a structured plan into a candidate workout document.
    ///
    /// A multi-sport plan compiles each section into its own segment; a
    /// single-sport plan flows every section into the one segment the
    /// vendor contract allows. Unrecognized block shapes are skipped
    /// with a warning and contribute nothing. The output is a candidate
    /// only - callers hand it to the validator before use.
    #[must_use]
    pub fn compile(&self, plan: &StructuredPlan) -> CompiledWorkout {
        let sport = self.resolve_sport(plan);
        let mut segments = Vec::new();
        let mut estimated = 0.0;

        if sport.is_multi_sport() {
            // One segment per section, each with its own sport and its
            // step order restarting at 1.
            for section in &plan.sections {
                let mut steps: Vec<WorkoutStep> = Vec::new();
                compile_section_blocks(section, &mut steps, &mut estimated);

                if steps.is_empty() {
                    if !section.blocks.is_empty() {
                        warn!(
                            section = ?section.kind,
                            "section compiled to no steps and was dropped"
                        );
                    }
                    continue;
                }

                segments.push(Segment {
                    segment_order: Some((segments.len() + 1) as f64),
                    sport: Some(self.resolve_section_sport(section)),
                    pool_length: None,
                    pool_length_unit: None,
                    steps,
                });
            }
        } else {
            // The vendor contract allows exactly one segment on a
            // single-sport workout, so every section's steps flow into
            // it and the step order runs across section boundaries.
            let mut steps: Vec<WorkoutStep> = Vec::new();
            for section in &plan.sections {
                let before = steps.len();
                compile_section_blocks(section, &mut steps, &mut estimated);
                if steps.len() == before && !section.blocks.is_empty() {
                    warn!(
                        section = ?section.kind,
                        "section compiled to no steps and was dropped"
                    );
                }
            }

            if !steps.is_empty() {
                segments.push(Segment {
                    segment_order: Some(1.0),
                    sport: Some(sport),
                    pool_length: None,
                    pool_length_unit: None,
                    steps,
                });
            }
        }

        let workout = Workout {
            workout_name: plan.name.clone(),
            sport: Some(sport),
            provider_workout_id: None,
            owner_id: None,
            is_session_transition_enabled: Some(sport.is_multi_sport()),
            pool_length: None,
            pool_length_unit: None,
            segments,
        };

        let estimated_duration_seconds = estimated.max(0.0).round() as u64;
        cross_check_duration(plan, &workout, estimated_duration_seconds);

        CompiledWorkout {
            workout,
            estimated_duration_seconds,
        }
    }

    fn resolve_sport(&self, plan: &StructuredPlan) -> Sport {
        match plan.sport.as_deref().map(Sport::parse) {
            Some(Some(sport)) => sport,
            Some(None) => {
                warn!(
                    sport = plan.sport.as_deref().unwrap_or_default(),
                    fallback = %self.config.fallback_sport,
                    "plan sport is unrecognized, using fallback"
                );
                self.config.fallback_sport
            }
            None => {
                warn!(
                    fallback = %self.config.fallback_sport,
                    "plan omitted sport, using fallback"
                );
                self.config.fallback_sport
            }
        }
    }

    fn resolve_section_sport(&self, section: &PlanSection) -> Sport {
        section
            .sport
            .as_deref()
            .and_then(Sport::parse)
            .unwrap_or(self.config.fallback_sport)
    }
}

/// Compile one section's blocks, appending to the segment's step list
/// and accumulating the duration estimate
fn compile_section_blocks(section: &PlanSection, steps: &mut Vec<WorkoutStep>, estimated: &mut f64) {
    for block in &section.blocks {
        match block {
            PlanBlock::Single(single) => {
                if let Some((mut step, seconds)) = compile_single(single, section.kind) {
                    step.step_order = Some((steps.len() + 1) as f64);
                    steps.push(WorkoutStep::Single(step));
                    *estimated += seconds;
                }
            }
            PlanBlock::Repeat(repeat) => {
                if let Some((mut group, seconds)) = compile_repeat(repeat, section.kind) {
                    group.step_order = Some((steps.len() + 1) as f64);
                    steps.push(WorkoutStep::Repeat(group));
                    *estimated += seconds;
                }
            }
            PlanBlock::Unknown(value) => {
                warn!("skipping unrecognized plan block shape");
                debug!(block = %value, "unrecognized plan block");
            }
        }
    }
}

/// Compile one single block into a leaf step and its duration
/// contribution in seconds. Returns `None` when the block lacks a
/// recognizable duration, which drops it from the output.
fn compile_single(block: &SingleBlock, section_kind: Option<SectionKind>) -> Option<(Step, f64)> {
    let Some(duration) = block.duration.as_ref() else {
        warn!("skipping block without a duration");
        return None;
    };
    let (Some(kind), Some(value)) = (duration.kind, duration.value) else {
        warn!("skipping block without a recognizable duration");
        return None;
    };

    let duration_type = match kind {
        PlanDurationKind::Time => {
            // Garmin distinguishes a timed rest step from a timed active
            // step; the retyping applies to TIME blocks only.
            if block.role == Some(StepRole::Rest) {
                DurationType::FixedRest
            } else {
                DurationType::Time
            }
        }
        PlanDurationKind::FixedRest => DurationType::FixedRest,
        PlanDurationKind::Distance => DurationType::Distance,
        PlanDurationKind::Unknown => {
            warn!("skipping block with unrecognized duration type");
            return None;
        }
    };

    let mut step = Step {
        intensity: Some(resolve_intensity(
            block.intensity.as_deref(),
            block.role,
            section_kind,
        )),
        description: block.label.clone(),
        duration_type: Some(duration_type),
        duration_value: Some(value.round()),
        ..Step::default()
    };

    let mut targets = block.targets.iter();
    if let Some(primary) = targets.next() {
        apply_primary_target(&mut step, primary);
    }
    if let Some(secondary) = targets.next() {
        apply_secondary_target(&mut step, secondary);
    }

    Some((step, value.round()))
}

/// Compile one repeat block into a repeat group and its duration
/// contribution (repeat count times the children's sum)
fn compile_repeat(block: &RepeatBlock, section_kind: Option<SectionKind>) -> Option<(RepeatStep, f64)> {
    let mut children = Vec::new();
    let mut round_seconds = 0.0;

    for child in &block.steps {
        if let Some((mut step, seconds)) = compile_single(child, section_kind) {
            step.step_order = Some((children.len() + 1) as f64);
            children.push(step);
            round_seconds += seconds;
        }
    }

    if children.is_empty() {
        warn!("skipping repeat block with no recognizable child steps");
        return None;
    }

    let intensity = block
        .intensity
        .as_deref()
        .and_then(Intensity::parse)
        .unwrap_or_else(|| infer_repeat_intensity(&children));

    let repeat_count = block.repeat_count.map(f64::round);
    let rounds = repeat_count.unwrap_or(1.0).max(0.0);

    let group = RepeatStep {
        step_order: None,
        intensity: Some(intensity),
        repeat_type: Some(RepeatType::RepeatUntilStepsCmplt),
        repeat_count,
        skip_last_rest_step: Some(false),
        steps: children,
    };

    Some((group, rounds * round_seconds))
}

/// First non-REST child intensity, defaulting to ACTIVE when every child
/// rests or no intensity is found
fn infer_repeat_intensity(children: &[Step]) -> Intensity {
    children
        .iter()
        .filter_map(|child| child.intensity)
        .find(|intensity| *intensity != Intensity::Rest)
        .unwrap_or(Intensity::Active)
}

fn resolve_intensity(
    explicit: Option<&str>,
    role: Option<StepRole>,
    section_kind: Option<SectionKind>,
) -> Intensity {
    if let Some(spelling) = explicit {
        if let Some(intensity) = Intensity::parse(spelling) {
            return intensity;
        }
        debug!(spelling, "unrecognized block intensity, deriving from context");
    }

    if role == Some(StepRole::Rest) {
        return Intensity::Rest;
    }

    match section_kind {
        Some(SectionKind::Warmup) => Intensity::Warmup,
        Some(SectionKind::Cooldown) => Intensity::Cooldown,
        _ => Intensity::Active,
    }
}

fn apply_primary_target(step: &mut Step, target: &PlanTarget) {
    let Some(spelling) = target.target_type.as_deref() else {
        return;
    };

    let converted = convert_target(target);
    step.target_type = Some(TargetType::parse(spelling).unwrap_or(TargetType::Unknown));
    step.target_value = converted.value;
    step.target_value_low = converted.low;
    step.target_value_high = converted.high;
    step.target_value_type = converted.percent.then_some(ValueType::Percent);
}

fn apply_secondary_target(step: &mut Step, target: &PlanTarget) {
    let Some(spelling) = target.target_type.as_deref() else {
        return;
    };

    let converted = convert_target(target);
    step.secondary_target_type =
        Some(SecondaryTargetType::parse(spelling).unwrap_or(SecondaryTargetType::Unknown));
    step.secondary_target_value = converted.value;
    step.secondary_target_value_low = converted.low;
    step.secondary_target_value_high = converted.high;
    step.secondary_target_value_type = converted.percent.then_some(ValueType::Percent);
}

/// Warn when the compiled estimate disagrees with the plan's declared
/// total beyond one second of rounding slack per step
fn cross_check_duration(plan: &StructuredPlan, workout: &Workout, estimated: u64) {
    let Some(expected) = plan.expected_duration_seconds else {
        return;
    };

    let slack = (workout.total_leaf_steps() as f64).max(1.0);
    if (estimated as f64 - expected).abs() > slack {
        warn!(
            estimated,
            expected,
            "compiled duration estimate disagrees with the plan's expected total"
        );
    }
}
