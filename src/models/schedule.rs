//! Schedule entry (solution) model.
//!
//! A schedule is a list of entries, each assigning one section to one
//! faculty member in one timeslot (and optionally a room). Entries marked
//! `locked` are preserved verbatim by the optimizer. Every entry the
//! optimizer commits carries a fully populated [`ScoreBreakdown`] —
//! recomputed even for locked entries, so downstream consumers always see
//! consistent values.

use serde::{Deserialize, Serialize};

/// One section-to-faculty assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Assigned section.
    pub section_id: String,
    /// Assigned faculty member.
    pub faculty_id: String,
    /// Timeslot the section meets in.
    pub timeslot_id: String,
    /// Room the section meets in, when known.
    pub room_id: Option<String>,
    /// Whether the optimizer must preserve this entry unchanged.
    pub locked: bool,
    /// Score breakdown computed at commit time.
    pub score: Option<ScoreBreakdown>,
}

/// Per-component score detail for one schedule entry.
///
/// Raw component values and their weighted contributions are both exposed;
/// consumers display both. The capacity penalty is never weighted.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Subject + timeslot + building preference sum.
    pub preference: f64,
    /// Building-transition penalty (≤ 0).
    pub mobility: f64,
    /// Seniority rank score (higher = more senior).
    pub seniority: f64,
    /// Back-to-back teaching penalty (≤ 0).
    pub consecutive: f64,
    /// Capacity/overload penalty (≤ 0), unweighted.
    pub capacity_penalty: f64,
    /// `preference` × preference weight.
    pub weighted_preference: f64,
    /// `mobility` × mobility weight.
    pub weighted_mobility: f64,
    /// `seniority` × seniority weight.
    pub weighted_seniority: f64,
    /// `consecutive` × consecutive weight.
    pub weighted_consecutive: f64,
    /// Sum of the four weighted components plus the capacity penalty.
    pub total: f64,
}

impl ScheduleEntry {
    /// Creates an unlocked entry with no score.
    pub fn new(
        section_id: impl Into<String>,
        faculty_id: impl Into<String>,
        timeslot_id: impl Into<String>,
    ) -> Self {
        Self {
            section_id: section_id.into(),
            faculty_id: faculty_id.into(),
            timeslot_id: timeslot_id.into(),
            room_id: None,
            locked: false,
            score: None,
        }
    }

    /// Sets the room.
    pub fn with_room(mut self, room_id: impl Into<String>) -> Self {
        self.room_id = Some(room_id.into());
        self
    }

    /// Marks the entry as locked.
    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    /// Sets the score breakdown.
    pub fn with_score(mut self, score: ScoreBreakdown) -> Self {
        self.score = Some(score);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_builder() {
        let e = ScheduleEntry::new("SEC1", "F1", "T1").with_room("R1").locked();
        assert_eq!(e.section_id, "SEC1");
        assert_eq!(e.faculty_id, "F1");
        assert_eq!(e.timeslot_id, "T1");
        assert_eq!(e.room_id.as_deref(), Some("R1"));
        assert!(e.locked);
        assert!(e.score.is_none());
    }

    #[test]
    fn test_entry_serde_round_trip() {
        let e = ScheduleEntry::new("SEC1", "F1", "T1").with_score(ScoreBreakdown {
            preference: 2.0,
            seniority: 3.0,
            weighted_preference: 2.0,
            weighted_seniority: 3.0,
            total: 5.0,
            ..ScoreBreakdown::default()
        });

        let json = serde_json::to_string(&e).unwrap();
        let back: ScheduleEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }
}
