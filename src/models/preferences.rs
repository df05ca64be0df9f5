//! Faculty preference maps.
//!
//! Five independent maps feed the scoring engine:
//!
//! - **subject / timeslot / building levels**: -3 (strong dislike) to +3
//!   (strong preference), 0 when unset.
//! - **mobility multiplier**: ≥ 0, scales the building-transition penalty;
//!   0 (the default) disables it.
//! - **consecutive multiplier**: ≥ 0, scales the back-to-back penalty;
//!   defaults to 1 when the faculty member has no entry, but an explicit 0
//!   disables it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Range limit for preference levels.
const LEVEL_MIN: i32 = -3;
const LEVEL_MAX: i32 = 3;

/// Faculty preference data for scoring.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// faculty_id → subject_id → level (-3..=3).
    pub subject: HashMap<String, HashMap<String, i32>>,
    /// faculty_id → timeslot_id → level (-3..=3).
    pub timeslot: HashMap<String, HashMap<String, i32>>,
    /// faculty_id → building_id → level (-3..=3).
    pub building: HashMap<String, HashMap<String, i32>>,
    /// faculty_id → mobility penalty multiplier (≥ 0).
    pub mobility: HashMap<String, f64>,
    /// faculty_id → consecutive penalty multiplier (≥ 0).
    pub consecutive: HashMap<String, f64>,
}

impl Preferences {
    /// Creates an empty preference set (all defaults).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a faculty→subject preference level (clamped to -3..=3).
    pub fn set_subject_level(
        &mut self,
        faculty_id: impl Into<String>,
        subject_id: impl Into<String>,
        level: i32,
    ) {
        self.subject
            .entry(faculty_id.into())
            .or_default()
            .insert(subject_id.into(), level.clamp(LEVEL_MIN, LEVEL_MAX));
    }

    /// Sets a faculty→timeslot preference level (clamped to -3..=3).
    pub fn set_timeslot_level(
        &mut self,
        faculty_id: impl Into<String>,
        timeslot_id: impl Into<String>,
        level: i32,
    ) {
        self.timeslot
            .entry(faculty_id.into())
            .or_default()
            .insert(timeslot_id.into(), level.clamp(LEVEL_MIN, LEVEL_MAX));
    }

    /// Sets a faculty→building preference level (clamped to -3..=3).
    pub fn set_building_level(
        &mut self,
        faculty_id: impl Into<String>,
        building_id: impl Into<String>,
        level: i32,
    ) {
        self.building
            .entry(faculty_id.into())
            .or_default()
            .insert(building_id.into(), level.clamp(LEVEL_MIN, LEVEL_MAX));
    }

    /// Sets a faculty mobility multiplier (negative values floored to 0).
    pub fn set_mobility(&mut self, faculty_id: impl Into<String>, factor: f64) {
        self.mobility.insert(faculty_id.into(), factor.max(0.0));
    }

    /// Sets a faculty consecutive multiplier (negative values floored to 0).
    pub fn set_consecutive(&mut self, faculty_id: impl Into<String>, factor: f64) {
        self.consecutive.insert(faculty_id.into(), factor.max(0.0));
    }

    /// Subject preference level, 0 when unset.
    pub fn subject_level(&self, faculty_id: &str, subject_id: &str) -> i32 {
        self.subject
            .get(faculty_id)
            .and_then(|m| m.get(subject_id))
            .copied()
            .unwrap_or(0)
    }

    /// Timeslot preference level, 0 when unset.
    pub fn timeslot_level(&self, faculty_id: &str, timeslot_id: &str) -> i32 {
        self.timeslot
            .get(faculty_id)
            .and_then(|m| m.get(timeslot_id))
            .copied()
            .unwrap_or(0)
    }

    /// Building preference level, 0 when unset.
    pub fn building_level(&self, faculty_id: &str, building_id: &str) -> i32 {
        self.building
            .get(faculty_id)
            .and_then(|m| m.get(building_id))
            .copied()
            .unwrap_or(0)
    }

    /// Mobility penalty multiplier, 0 when unset.
    pub fn mobility_factor(&self, faculty_id: &str) -> f64 {
        self.mobility.get(faculty_id).copied().unwrap_or(0.0)
    }

    /// Consecutive penalty multiplier.
    ///
    /// Defaults to 1 when the faculty member has no entry. An explicit 0
    /// disables the penalty.
    pub fn consecutive_factor(&self, faculty_id: &str) -> f64 {
        self.consecutive.get(faculty_id).copied().unwrap_or(1.0)
    }
}
