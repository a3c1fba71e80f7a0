// ABOUTME: Program document models owning sessions and exercise prescriptions
// ABOUTME: TrainingProgram and WorkoutSession with validated week resolution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainplan

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use uuid::Uuid;

use crate::errors::{ProgramError, ProgramResult};
use crate::models::{EffectivePrescription, ExercisePrescription};
use crate::variations::BASE_WEEK;

/// One training session (day) within a program.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutSession {
    /// Unique session identifier
    pub id: Uuid,
    /// Display name (e.g. "Lower Body A")
    pub name: String,
    /// Exercise prescriptions, in execution order
    pub exercises: Vec<ExercisePrescription>,
}

impl WorkoutSession {
    /// Resolve every exercise's effective values for `week`, in authored order.
    #[must_use]
    pub fn resolve_for_week(&self, week: u32) -> Vec<EffectivePrescription> {
        self.exercises
            .iter()
            .map(|exercise| exercise.resolve_for_week(week))
            .collect()
    }

    /// Weeks customized by at least one exercise in this session, ascending.
    #[must_use]
    pub fn customized_weeks(&self) -> Vec<u32> {
        let weeks: BTreeSet<u32> = self
            .exercises
            .iter()
            .flat_map(ExercisePrescription::customized_weeks)
            .collect();
        weeks.into_iter().collect()
    }

    /// Look up an exercise prescription by its session-local id.
    #[must_use]
    pub fn exercise(&self, id: u32) -> Option<&ExercisePrescription> {
        self.exercises.iter().find(|exercise| exercise.id == id)
    }
}

/// A workout program document: the unit coaches author and assign.
///
/// Owns its sessions; the week-variation overlay lives on each exercise
/// prescription. The validated methods here are the boundary the
/// authoring UI calls through - week numbers are bounded against
/// `total_weeks` before the (deliberately permissive) resolver runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainingProgram {
    /// Unique program identifier
    pub id: Uuid,
    /// Display name (e.g. "12-Week Hypertrophy Block")
    pub name: String,
    /// Planned length of the program in weeks
    pub total_weeks: u32,
    /// When the program was created
    pub created_at: DateTime<Utc>,
    /// When the program was last edited
    pub updated_at: DateTime<Utc>,
    /// Training sessions, in weekly order
    pub sessions: Vec<WorkoutSession>,
}

impl TrainingProgram {
    /// Check that `week` falls within this program's planned length.
    ///
    /// # Errors
    ///
    /// Returns [`ProgramError::WeekOutOfRange`] when `week` is zero or
    /// greater than `total_weeks`.
    pub fn validate_week(&self, week: u32) -> ProgramResult<()> {
        if week < BASE_WEEK || week > self.total_weeks {
            return Err(ProgramError::week_out_of_range(week, self.total_weeks));
        }
        Ok(())
    }

    /// Look up a session by id.
    #[must_use]
    pub fn session(&self, id: Uuid) -> Option<&WorkoutSession> {
        self.sessions.iter().find(|session| session.id == id)
    }

    /// Resolve a session's effective prescriptions for `week`.
    ///
    /// Validated entry point for authoring UIs: the week is bounded
    /// against the program length and the session must exist.
    ///
    /// # Errors
    ///
    /// Returns [`ProgramError::WeekOutOfRange`] for weeks outside
    /// `1..=total_weeks`, or [`ProgramError::SessionNotFound`] when no
    /// session has the given id.
    pub fn resolve_session_for_week(
        &self,
        session_id: Uuid,
        week: u32,
    ) -> ProgramResult<Vec<EffectivePrescription>> {
        self.validate_week(week)?;
        let session = self
            .session(session_id)
            .ok_or(ProgramError::SessionNotFound { session_id })?;
        trace!(
            program_id = %self.id,
            %session_id,
            week,
            exercises = session.exercises.len(),
            "resolving session for week"
        );
        Ok(session.resolve_for_week(week))
    }

    /// Weeks customized anywhere in the program, ascending.
    #[must_use]
    pub fn customized_weeks(&self) -> Vec<u32> {
        let weeks: BTreeSet<u32> = self
            .sessions
            .iter()
            .flat_map(WorkoutSession::customized_weeks)
            .collect();
        let weeks: Vec<u32> = weeks.into_iter().collect();
        debug!(program_id = %self.id, customized = weeks.len(), "collected customized weeks");
        weeks
    }
}
