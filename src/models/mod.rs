// ABOUTME: Workout document model - entity types and field-level legality rules
// ABOUTME: Re-exports Workout, Segment, Step, RepeatStep and the sport/target enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coaching

//! # Workout Document Model
//!
//! The recursive entity types that make up a vendor workout document:
//! a [`Workout`] owns ordered [`Segment`]s, each segment owns an ordered
//! list of [`WorkoutStep`]s, and a step is either a leaf [`Step`] or a
//! [`RepeatStep`] whose children are always leaves (depth-one nesting is a
//! type-level constraint, not a runtime check).
//!
//! ## Design Principles
//!
//! - **Loose on the wire, strict after validation**: every field is
//!   optional and every enum has an `Unknown` catch-all, so malformed
//!   drafts parse and the validator can report each defect by path.
//! - **Serializable**: the wire shape is the camelCase vendor contract.
//! - **Read-only catalog**: known exercises live in a process-wide static
//!   exposed only through lookup ([`ExerciseCatalog`]).

mod duration;
mod exercise;
mod metadata;
mod segment;
mod sport;
mod step;
mod target;
mod workout;

pub use duration::DurationType;
pub use exercise::ExerciseCatalog;
pub use metadata::{DrillType, EquipmentType, PoolLengthUnit, StrokeType, WeightUnit};
pub use segment::Segment;
pub use sport::Sport;
pub use step::{Intensity, RepeatStep, RepeatType, Step, WorkoutStep};
pub use target::{SecondaryTargetType, TargetType, ValueType};
pub use workout::Workout;
