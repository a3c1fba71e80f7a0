// ABOUTME: Error types for program document operations
// ABOUTME: ProgramError covers boundary validation and document lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainplan

use thiserror::Error;
use uuid::Uuid;

/// Result type for program document operations
pub type ProgramResult<T> = Result<T, ProgramError>;

/// Errors raised at the program-document boundary.
///
/// The week-variation resolver itself is total and never fails; these
/// errors belong to the validated entry points on [`crate::models::TrainingProgram`],
/// which bound week numbers against the program length and look up sessions
/// before resolving.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgramError {
    /// Requested week is outside the program's planned length
    #[error("week {week} is out of range for a {total_weeks}-week program")]
    WeekOutOfRange {
        /// The rejected week number
        week: u32,
        /// Planned length of the program in weeks
        total_weeks: u32,
    },

    /// No session with the given id exists in the program
    #[error("session {session_id} not found in program")]
    SessionNotFound {
        /// The session id that failed to resolve
        session_id: Uuid,
    },
}

impl ProgramError {
    /// Create a "week out of range" error
    #[must_use]
    pub const fn week_out_of_range(week: u32, total_weeks: u32) -> Self {
        Self::WeekOutOfRange { week, total_weeks }
    }

    /// Create a "session not found" error
    #[must_use]
    pub const fn session_not_found(session_id: Uuid) -> Self {
        Self::SessionNotFound { session_id }
    }
}
