// ABOUTME: Unit tests for program document models
// ABOUTME: Covers week validation, session resolution, and document round-trips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainplan

// Test modules don't need documentation
#![allow(missing_docs)]
// Allow unwrap in tests - tests should panic on failure
#![allow(clippy::unwrap_used)]

use std::collections::BTreeSet;

use chrono::Utc;
use trainplan::errors::ProgramError;
use trainplan::models::{ExercisePrescription, FieldPatch, TrainingProgram, WorkoutSession};
use uuid::Uuid;

fn exercise(id: u32, sets: u32, reps: &str) -> ExercisePrescription {
    ExercisePrescription {
        id,
        sets,
        reps: reps.to_owned(),
        load: "moderate".to_owned(),
        tempo: "2-0-2-0".to_owned(),
        rest_seconds: 120,
        notes: String::new(),
        detailed: false,
        set_details: Vec::new(),
        techniques: BTreeSet::new(),
        week_overrides: None,
    }
}

fn sample_program() -> TrainingProgram {
    let now = Utc::now();
    TrainingProgram {
        id: Uuid::new_v4(),
        name: "12-Week Hypertrophy Block".to_owned(),
        total_weeks: 12,
        created_at: now,
        updated_at: now,
        sessions: vec![
            WorkoutSession {
                id: Uuid::new_v4(),
                name: "Lower Body A".to_owned(),
                exercises: vec![exercise(1, 4, "6-8"), exercise(2, 3, "10-12")],
            },
            WorkoutSession {
                id: Uuid::new_v4(),
                name: "Upper Body A".to_owned(),
                exercises: vec![exercise(1, 5, "5")],
            },
        ],
    }
}

#[test]
fn test_validate_week_bounds() {
    let program = sample_program();

    assert_eq!(
        program.validate_week(0),
        Err(ProgramError::week_out_of_range(0, 12))
    );
    assert_eq!(
        program.validate_week(13),
        Err(ProgramError::week_out_of_range(13, 12))
    );
    assert_eq!(program.validate_week(1), Ok(()));
    assert_eq!(program.validate_week(12), Ok(()));
}

#[test]
fn test_resolve_session_for_week_unknown_session() {
    let program = sample_program();
    let missing = Uuid::new_v4();

    let result = program.resolve_session_for_week(missing, 2);
    assert_eq!(result, Err(ProgramError::session_not_found(missing)));
}

#[test]
fn test_resolve_session_for_week_rejects_out_of_range_week() {
    let program = sample_program();
    let session_id = program.sessions[0].id;

    let result = program.resolve_session_for_week(session_id, 0);
    assert_eq!(result, Err(ProgramError::week_out_of_range(0, 12)));
}

#[test]
fn test_resolve_session_applies_exercise_overrides() {
    let mut program = sample_program();
    let session_id = program.sessions[0].id;

    let customized = program.sessions[0].exercises[0]
        .clone()
        .set_field_for_week(3, FieldPatch::Sets(6));
    program.sessions[0].exercises[0] = customized;

    let effective = program.resolve_session_for_week(session_id, 3).unwrap();
    assert_eq!(effective.len(), 2);
    assert_eq!(effective[0].sets, 6);
    assert_eq!(effective[0].reps, "6-8");
    // The untouched exercise resolves to its base values
    assert_eq!(effective[1].sets, 3);
}

#[test]
fn test_session_customized_weeks_union_sorted_deduplicated() {
    let mut session = sample_program().sessions.remove(0);
    let first = session.exercises[0]
        .clone()
        .set_field_for_week(5, FieldPatch::Sets(2))
        .set_field_for_week(2, FieldPatch::Sets(2));
    let second = session.exercises[1]
        .clone()
        .set_field_for_week(5, FieldPatch::Sets(1))
        .set_field_for_week(8, FieldPatch::Sets(1));
    session.exercises[0] = first;
    session.exercises[1] = second;

    assert_eq!(session.customized_weeks(), vec![2, 5, 8]);
}

#[test]
fn test_program_customized_weeks_spans_sessions() {
    let mut program = sample_program();
    let lower = program.sessions[0].exercises[0]
        .clone()
        .set_field_for_week(4, FieldPatch::Sets(2));
    let upper = program.sessions[1].exercises[0]
        .clone()
        .set_field_for_week(2, FieldPatch::Sets(6));
    program.sessions[0].exercises[0] = lower;
    program.sessions[1].exercises[0] = upper;

    assert_eq!(program.customized_weeks(), vec![2, 4]);
}

#[test]
fn test_program_json_round_trip() {
    let mut program = sample_program();
    let customized = program.sessions[0].exercises[1]
        .clone()
        .set_field_for_week(2, FieldPatch::Notes("back-off week".to_owned()));
    program.sessions[0].exercises[1] = customized;

    let json = serde_json::to_string(&program).unwrap();
    let parsed: TrainingProgram = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, program);

    // Exercises without customizations serialize without the mapping key
    let value = serde_json::to_value(&program).unwrap();
    let untouched = &value["sessions"][0]["exercises"][0];
    assert!(untouched.get("week_overrides").is_none());
}
