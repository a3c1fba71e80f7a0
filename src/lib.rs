// ABOUTME: Library entry point for the trainplan program-authoring engine
// ABOUTME: Exposes domain models and the week-variation resolver for workout programs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainplan

#![deny(unsafe_code)]

//! # Trainplan Program Engine
//!
//! Domain layer for authoring workout programs: exercise prescriptions,
//! training sessions, and the per-week variation overlay that lets coaches
//! customize individual weeks of a program without copying the whole plan.
//!
//! ## Design Principles
//!
//! - **Week 1 is canonical**: an exercise's base fields are its week-1
//!   values; later weeks store only the fields a coach changed.
//! - **Persistent updates**: every editing operation consumes its input and
//!   returns a new record. Nothing in this crate mutates caller-owned data.
//! - **Pure resolution**: deriving a week's effective prescription performs
//!   no I/O and never fails.
//!
//! ## Modules
//!
//! - **models**: `ExercisePrescription`, `WorkoutSession`, `TrainingProgram`
//!   and supporting types
//! - **variations**: the week-variation resolver (resolve, set-field,
//!   duplicate, reset)
//! - **errors**: `ProgramError` for document-level validation failures

/// Structured error types for program document operations
pub mod errors;

/// Core data models (`ExercisePrescription`, `WorkoutSession`, `TrainingProgram`)
pub mod models;

/// Week-variation resolver operations over exercise prescriptions
pub mod variations;
