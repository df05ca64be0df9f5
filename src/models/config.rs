//! Domain snapshot supplied to the optimizer.
//!
//! A [`ConfigData`] is the complete, read-only problem instance for one
//! optimizer run: faculty, subjects, sections, timeslots, rooms, and
//! buildings. List order is meaningful in two places — faculty order
//! implies seniority (earlier = more senior), and timeslot order defines
//! the global week order used for chronological scoring.

use serde::{Deserialize, Serialize};

use super::{Building, Faculty, Room, Section, Subject, Timeslot};

/// The full domain snapshot for one optimizer run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigData {
    /// Faculty, most senior first.
    pub faculty: Vec<Faculty>,
    /// Subjects on offer.
    pub subjects: Vec<Subject>,
    /// Sections to assign.
    pub sections: Vec<Section>,
    /// Timeslots in week order.
    pub timeslots: Vec<Timeslot>,
    /// Rooms.
    pub rooms: Vec<Room>,
    /// Buildings.
    pub buildings: Vec<Building>,
}

impl ConfigData {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a faculty member.
    pub fn with_faculty(mut self, faculty: Faculty) -> Self {
        self.faculty.push(faculty);
        self
    }

    /// Adds a subject.
    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.subjects.push(subject);
        self
    }

    /// Adds a section.
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Adds a timeslot.
    pub fn with_timeslot(mut self, timeslot: Timeslot) -> Self {
        self.timeslots.push(timeslot);
        self
    }

    /// Adds a room.
    pub fn with_room(mut self, room: Room) -> Self {
        self.rooms.push(room);
        self
    }

    /// Adds a building.
    pub fn with_building(mut self, building: Building) -> Self {
        self.buildings.push(building);
        self
    }

    /// Finds a faculty member by ID.
    pub fn faculty(&self, id: &str) -> Option<&Faculty> {
        self.faculty.iter().find(|f| f.id == id)
    }

    /// Finds a subject by ID.
    pub fn subject(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    /// Finds a section by ID.
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Finds a timeslot by ID.
    pub fn timeslot(&self, id: &str) -> Option<&Timeslot> {
        self.timeslots.iter().find(|t| t.id == id)
    }

    /// Finds a room by ID.
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// Finds a building by ID.
    pub fn building(&self, id: &str) -> Option<&Building> {
        self.buildings.iter().find(|b| b.id == id)
    }
}
