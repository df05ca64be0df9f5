//! By-id lookup index over a domain snapshot.
//!
//! Built once per optimizer run. Caches the two order-derived values the
//! scoring engine needs: the seniority score per faculty (earlier in the
//! faculty list = more senior) and the global week order per timeslot
//! (position in the timeslot list). Duplicate ids keep the first
//! occurrence.

use std::collections::HashMap;

use crate::models::{ConfigData, Faculty, Room, Section, Timeslot};

/// Lookup tables for one optimizer run.
#[derive(Debug)]
pub(crate) struct DomainIndex<'a> {
    faculty: HashMap<&'a str, &'a Faculty>,
    sections: HashMap<&'a str, &'a Section>,
    timeslots: HashMap<&'a str, &'a Timeslot>,
    timeslot_order: HashMap<&'a str, usize>,
    rooms: HashMap<&'a str, &'a Room>,
    seniority: HashMap<&'a str, f64>,
}

impl<'a> DomainIndex<'a> {
    /// Builds the index from a snapshot.
    pub fn build(config: &'a ConfigData) -> Self {
        let mut faculty = HashMap::new();
        let mut seniority = HashMap::new();
        let count = config.faculty.len();
        for (pos, f) in config.faculty.iter().enumerate() {
            faculty.entry(f.id.as_str()).or_insert(f);
            // Rank score: first in the list scores highest (count), last scores 1
            seniority
                .entry(f.id.as_str())
                .or_insert((count - pos) as f64);
        }

        let mut sections = HashMap::new();
        for s in &config.sections {
            sections.entry(s.id.as_str()).or_insert(s);
        }

        let mut timeslots = HashMap::new();
        let mut timeslot_order = HashMap::new();
        for (pos, t) in config.timeslots.iter().enumerate() {
            timeslots.entry(t.id.as_str()).or_insert(t);
            timeslot_order.entry(t.id.as_str()).or_insert(pos);
        }

        let mut rooms = HashMap::new();
        for r in &config.rooms {
            rooms.entry(r.id.as_str()).or_insert(r);
        }

        Self {
            faculty,
            sections,
            timeslots,
            timeslot_order,
            rooms,
            seniority,
        }
    }

    pub fn faculty(&self, id: &str) -> Option<&'a Faculty> {
        self.faculty.get(id).copied()
    }

    pub fn section(&self, id: &str) -> Option<&'a Section> {
        self.sections.get(id).copied()
    }

    pub fn timeslot(&self, id: &str) -> Option<&'a Timeslot> {
        self.timeslots.get(id).copied()
    }

    /// Position of a timeslot in the input list (global week order).
    pub fn timeslot_order(&self, id: &str) -> Option<usize> {
        self.timeslot_order.get(id).copied()
    }

    pub fn room(&self, id: &str) -> Option<&'a Room> {
        self.rooms.get(id).copied()
    }

    /// Building a room belongs to, when the room resolves.
    pub fn building_of_room(&self, room_id: Option<&str>) -> Option<&'a str> {
        room_id
            .and_then(|id| self.room(id))
            .map(|r| r.building_id.as_str())
    }

    /// Cached seniority score, 0 for unknown faculty.
    pub fn seniority_score(&self, faculty_id: &str) -> f64 {
        self.seniority.get(faculty_id).copied().unwrap_or(0.0)
    }
}
