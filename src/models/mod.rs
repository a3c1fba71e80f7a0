// ABOUTME: Core data models for workout program authoring
// ABOUTME: Re-exports ExercisePrescription, WorkoutSession, TrainingProgram and friends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainplan

//! # Data Models
//!
//! Data structures for workout program documents. A [`TrainingProgram`]
//! owns [`WorkoutSession`]s, which own [`ExercisePrescription`]s; the
//! prescription carries the week-variation overlay that
//! [`crate::variations`] operates on.
//!
//! All models serialize to JSON for storage in program documents. Optional
//! fields are skipped when absent so that a record with no customizations
//! round-trips without extra keys.

// Domain modules
mod exercise;
mod program;

// Exercise domain
pub use exercise::{
    EffectivePrescription, ExercisePrescription, FieldPatch, LoadUnit, SetDetail, WeekOverride,
};

// Program document domain
pub use program::{TrainingProgram, WorkoutSession};
