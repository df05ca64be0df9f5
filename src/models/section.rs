//! Section model.
//!
//! A section is one schedulable offering of a subject. It may be pinned to
//! a specific timeslot (in which case it is scheduled in that exact slot or
//! not at all) and/or to a specific room.

use serde::{Deserialize, Serialize};

/// A schedulable offering of a subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Unique section identifier.
    pub id: String,
    /// Subject this section offers.
    pub subject_id: String,
    /// Fixed timeslot. `None` = any conflict-free timeslot is acceptable.
    pub timeslot_id: Option<String>,
    /// Fixed room. `None` = no room pinned.
    pub room_id: Option<String>,
    /// Seat capacity.
    pub capacity: u32,
}

impl Section {
    /// Creates a new section for the given subject.
    pub fn new(id: impl Into<String>, subject_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            subject_id: subject_id.into(),
            timeslot_id: None,
            room_id: None,
            capacity: 0,
        }
    }

    /// Pins the section to a timeslot.
    pub fn with_timeslot(mut self, timeslot_id: impl Into<String>) -> Self {
        self.timeslot_id = Some(timeslot_id.into());
        self
    }

    /// Pins the section to a room.
    pub fn with_room(mut self, room_id: impl Into<String>) -> Self {
        self.room_id = Some(room_id.into());
        self
    }

    /// Sets the seat capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Whether this section must be scheduled in a specific timeslot.
    #[inline]
    pub fn has_fixed_timeslot(&self) -> bool {
        self.timeslot_id.is_some()
    }
}
