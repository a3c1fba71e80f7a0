// ABOUTME: Exercise prescription models for workout program authoring
// ABOUTME: ExercisePrescription, WeekOverride, SetDetail, LoadUnit, and FieldPatch definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainplan

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Unit of the load value in a per-set detail row
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum LoadUnit {
    /// Absolute load in kilograms
    #[default]
    Kilograms,
    /// Absolute load in pounds
    Pounds,
    /// Relative load as a percentage of one-rep max
    PercentOneRepMax,
    /// Rating of perceived exertion (1-10 scale)
    Rpe,
    /// Bodyweight movement, load value ignored
    Bodyweight,
}

/// One planned set within a detailed prescription.
///
/// Used when a coach prescribes sets individually (pyramids, drop sets)
/// instead of a single scheme for the whole exercise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SetDetail {
    /// Planned repetitions for this set
    pub reps: u32,
    /// Load value, interpreted per `load_unit`
    pub load: f64,
    /// Unit of the load value
    pub load_unit: LoadUnit,
    /// Tempo descriptor (e.g. "3-1-1-0")
    pub tempo: String,
    /// Rest after this set, in seconds
    pub rest_seconds: u32,
}

/// One exercise's planned execution within a training session.
///
/// The base fields hold the week-1 (canonical) values. Weeks a coach has
/// customized store a partial [`WeekOverride`] in `week_overrides`, keyed
/// by week number. Week 1 never appears as an override key; edits targeting
/// week 1 are applied to the base fields directly.
///
/// `week_overrides` is `None` (and omitted from JSON) when no week is
/// customized, so a fully reset exercise is indistinguishable from one
/// that was never customized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExercisePrescription {
    /// Identifier, unique within the owning session
    pub id: u32,
    /// Number of working sets
    pub sets: u32,
    /// Rep scheme (e.g. "8-10", "AMRAP")
    pub reps: String,
    /// Load descriptor (e.g. "70% 1RM", "moderate")
    pub load: String,
    /// Tempo descriptor (e.g. "3-1-1-0")
    pub tempo: String,
    /// Rest between sets, in seconds
    pub rest_seconds: u32,
    /// Coach notes shown to the client
    pub notes: String,
    /// Whether per-set detail rows drive this prescription
    pub detailed: bool,
    /// Per-set detail rows, in set order (used when `detailed` is true)
    pub set_details: Vec<SetDetail>,
    /// Identifiers of intensification techniques applied to this exercise
    pub techniques: BTreeSet<u32>,
    /// Per-week customizations, keyed by week number (never week 1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_overrides: Option<BTreeMap<u32, WeekOverride>>,
}

/// Partial per-week customization of an exercise prescription.
///
/// Every field mirrors a base field of [`ExercisePrescription`], wrapped in
/// `Option`. `Some` means "this week overrides the field" (including
/// falsy-but-valid values such as `Some(0)` sets); `None` means "fall
/// through to the base value". Presence is the only thing that matters;
/// the resolver never inspects the value to decide whether to apply it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct WeekOverride {
    /// Override for the set count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,
    /// Override for the rep scheme
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<String>,
    /// Override for the load descriptor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load: Option<String>,
    /// Override for the tempo descriptor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tempo: Option<String>,
    /// Override for the rest duration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_seconds: Option<u32>,
    /// Override for the coach notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Override for the per-set detail flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed: Option<bool>,
    /// Override for the per-set detail rows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_details: Option<Vec<SetDetail>>,
    /// Override for the technique references
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub techniques: Option<BTreeSet<u32>>,
}

impl WeekOverride {
    /// Whether this override entry customizes no fields at all
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.sets.is_none()
            && self.reps.is_none()
            && self.load.is_none()
            && self.tempo.is_none()
            && self.rest_seconds.is_none()
            && self.notes.is_none()
            && self.detailed.is_none()
            && self.set_details.is_none()
            && self.techniques.is_none()
    }

    /// Merge a single field change into this entry, keeping other fields.
    pub fn apply(&mut self, patch: FieldPatch) {
        match patch {
            FieldPatch::Sets(v) => self.sets = Some(v),
            FieldPatch::Reps(v) => self.reps = Some(v),
            FieldPatch::Load(v) => self.load = Some(v),
            FieldPatch::Tempo(v) => self.tempo = Some(v),
            FieldPatch::RestSeconds(v) => self.rest_seconds = Some(v),
            FieldPatch::Notes(v) => self.notes = Some(v),
            FieldPatch::Detailed(v) => self.detailed = Some(v),
            FieldPatch::SetDetails(v) => self.set_details = Some(v),
            FieldPatch::Techniques(v) => self.techniques = Some(v),
        }
    }

    /// Build a full override entry from resolved effective values.
    ///
    /// Every field is `Some`, with sequence fields cloned into fresh
    /// containers so no storage is shared with the source.
    #[must_use]
    pub fn full_copy_of(effective: &EffectivePrescription) -> Self {
        Self {
            sets: Some(effective.sets),
            reps: Some(effective.reps.clone()),
            load: Some(effective.load.clone()),
            tempo: Some(effective.tempo.clone()),
            rest_seconds: Some(effective.rest_seconds),
            notes: Some(effective.notes.clone()),
            detailed: Some(effective.detailed),
            set_details: Some(effective.set_details.clone()),
            techniques: Some(effective.techniques.clone()),
        }
    }
}

/// A single typed field change for [`crate::variations`] set-field edits.
///
/// This is the "field name plus value" pair of the authoring UI, rendered
/// as one variant per overridable field so a patch can never name an
/// unknown field or carry a value of the wrong type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case", tag = "field", content = "value")]
pub enum FieldPatch {
    /// Change the set count
    Sets(u32),
    /// Change the rep scheme
    Reps(String),
    /// Change the load descriptor
    Load(String),
    /// Change the tempo descriptor
    Tempo(String),
    /// Change the rest duration
    RestSeconds(u32),
    /// Change the coach notes
    Notes(String),
    /// Change the per-set detail flag
    Detailed(bool),
    /// Replace the per-set detail rows
    SetDetails(Vec<SetDetail>),
    /// Replace the technique references
    Techniques(BTreeSet<u32>),
}

/// Fully resolved prescription values for one specific week.
///
/// Produced by [`ExercisePrescription::resolve_for_week`]; carries no
/// override mapping, only the values a client should execute.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EffectivePrescription {
    /// Identifier of the source prescription
    pub id: u32,
    /// Effective number of working sets
    pub sets: u32,
    /// Effective rep scheme
    pub reps: String,
    /// Effective load descriptor
    pub load: String,
    /// Effective tempo descriptor
    pub tempo: String,
    /// Effective rest between sets, in seconds
    pub rest_seconds: u32,
    /// Effective coach notes
    pub notes: String,
    /// Effective per-set detail flag
    pub detailed: bool,
    /// Effective per-set detail rows
    pub set_details: Vec<SetDetail>,
    /// Effective technique references
    pub techniques: BTreeSet<u32>,
}

impl From<&ExercisePrescription> for EffectivePrescription {
    /// Copy the base (week-1) values, ignoring any override mapping.
    fn from(exercise: &ExercisePrescription) -> Self {
        Self {
            id: exercise.id,
            sets: exercise.sets,
            reps: exercise.reps.clone(),
            load: exercise.load.clone(),
            tempo: exercise.tempo.clone(),
            rest_seconds: exercise.rest_seconds,
            notes: exercise.notes.clone(),
            detailed: exercise.detailed,
            set_details: exercise.set_details.clone(),
            techniques: exercise.techniques.clone(),
        }
    }
}
