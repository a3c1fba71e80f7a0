// ABOUTME: Week-variation resolver for exercise prescriptions
// ABOUTME: Resolve, set-field, duplicate, and reset operations over the per-week override mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainplan

//! # Week-Variation Resolver
//!
//! A workout program prescribes each exercise once, with week-1 values as
//! the canonical plan. Coaches customize later weeks by storing partial
//! overrides keyed by week number; resolving a week coalesces that week's
//! override (if any) over the base values, field by field.
//!
//! Two rules hold everywhere:
//!
//! - **Week 1 has no overrides.** Edits addressed to week 1 mutate the base
//!   fields; week 1 can never appear as an override key.
//! - **Presence, not truthiness.** An override field applies whenever it is
//!   `Some`, including values like `Some(0)` sets. `None` means "not
//!   customized this week", nothing else.
//!
//! Operations are total: out-of-range weeks (0, or beyond the program
//! length) are accepted uncritically. Bounding week numbers against the
//! program length is the document layer's job
//! ([`crate::models::TrainingProgram::validate_week`]).
//!
//! Editing operations consume the prescription and return a new one; no
//! caller-owned record is ever mutated in place.

use std::collections::BTreeMap;

use crate::models::{EffectivePrescription, ExercisePrescription, FieldPatch, WeekOverride};

/// The canonical week. Base fields hold this week's values; it never has
/// an override entry.
pub const BASE_WEEK: u32 = 1;

impl ExercisePrescription {
    /// Compute the effective prescription for `week`.
    ///
    /// Fields present in the week's override entry win; absent fields fall
    /// through to the base values. Weeks with no entry (week 1 included)
    /// resolve to the base values unchanged.
    #[must_use]
    pub fn resolve_for_week(&self, week: u32) -> EffectivePrescription {
        let mut effective = EffectivePrescription::from(self);
        let Some(entry) = self.week_overrides.as_ref().and_then(|m| m.get(&week)) else {
            return effective;
        };

        if let Some(sets) = entry.sets {
            effective.sets = sets;
        }
        if let Some(reps) = &entry.reps {
            effective.reps = reps.clone();
        }
        if let Some(load) = &entry.load {
            effective.load = load.clone();
        }
        if let Some(tempo) = &entry.tempo {
            effective.tempo = tempo.clone();
        }
        if let Some(rest_seconds) = entry.rest_seconds {
            effective.rest_seconds = rest_seconds;
        }
        if let Some(notes) = &entry.notes {
            effective.notes = notes.clone();
        }
        if let Some(detailed) = entry.detailed {
            effective.detailed = detailed;
        }
        if let Some(set_details) = &entry.set_details {
            effective.set_details = set_details.clone();
        }
        if let Some(techniques) = &entry.techniques {
            effective.techniques = techniques.clone();
        }
        effective
    }

    /// Apply a single field change to `week`.
    ///
    /// Week-1 edits replace the base field directly and never touch the
    /// override mapping. For any other week, the patch is merged into that
    /// week's override entry, creating the entry (and the mapping) on
    /// first use; other fields already customized for that week are kept.
    #[must_use]
    pub fn set_field_for_week(mut self, week: u32, patch: FieldPatch) -> Self {
        if week == BASE_WEEK {
            self.apply_base(patch);
            return self;
        }
        self.week_overrides
            .get_or_insert_with(BTreeMap::new)
            .entry(week)
            .or_default()
            .apply(patch);
        self
    }

    /// Copy one week's effective values onto other weeks.
    ///
    /// The source is resolved first, so duplicating a customized week
    /// carries its overrides merged with the base, not its raw entry.
    /// Every target week other than week 1 receives a full override entry
    /// (all fields set), replacing any entry it had; week 1 among the
    /// targets is silently skipped. Sequence fields are cloned per target,
    /// so editing one week's set details later cannot leak into another.
    #[must_use]
    pub fn duplicate_week(mut self, source_week: u32, target_weeks: &[u32]) -> Self {
        let source = self.resolve_for_week(source_week);
        let overrides = self.week_overrides.get_or_insert_with(BTreeMap::new);
        for &week in target_weeks {
            if week == BASE_WEEK {
                continue;
            }
            overrides.insert(week, WeekOverride::full_copy_of(&source));
        }
        // All targets were week 1: don't leave an empty mapping behind
        if overrides.is_empty() {
            self.week_overrides = None;
        }
        self
    }

    /// Remove `week`'s override entry, restoring the base values for it.
    ///
    /// Week 1, an absent mapping, and an absent entry are all no-ops.
    /// Removing the last entry drops the mapping entirely, so an exercise
    /// whose customizations were all reset is indistinguishable from one
    /// that never had any.
    #[must_use]
    pub fn reset_week(mut self, week: u32) -> Self {
        if week == BASE_WEEK {
            return self;
        }
        if let Some(overrides) = self.week_overrides.as_mut() {
            overrides.remove(&week);
            if overrides.is_empty() {
                self.week_overrides = None;
            }
        }
        self
    }

    /// Whether `week` has an override entry. Always `false` for week 1.
    #[must_use]
    pub fn is_week_customized(&self, week: u32) -> bool {
        week != BASE_WEEK
            && self
                .week_overrides
                .as_ref()
                .is_some_and(|m| m.contains_key(&week))
    }

    /// Weeks with an override entry, ascending. Week 1 is never included.
    #[must_use]
    pub fn customized_weeks(&self) -> Vec<u32> {
        self.week_overrides.as_ref().map_or_else(Vec::new, |m| {
            m.keys().copied().filter(|&w| w != BASE_WEEK).collect()
        })
    }

    /// Replace a base (week-1) field.
    fn apply_base(&mut self, patch: FieldPatch) {
        match patch {
            FieldPatch::Sets(v) => self.sets = v,
            FieldPatch::Reps(v) => self.reps = v,
            FieldPatch::Load(v) => self.load = v,
            FieldPatch::Tempo(v) => self.tempo = v,
            FieldPatch::RestSeconds(v) => self.rest_seconds = v,
            FieldPatch::Notes(v) => self.notes = v,
            FieldPatch::Detailed(v) => self.detailed = v,
            FieldPatch::SetDetails(v) => self.set_details = v,
            FieldPatch::Techniques(v) => self.techniques = v,
        }
    }
}
