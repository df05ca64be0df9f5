//! Input validation for assignment problems.
//!
//! Checks structural integrity of a domain snapshot (and, separately, of a
//! schedule against a snapshot) before or after optimization. The optimizer
//! itself never calls these checks: it tolerates bad references by dropping
//! or skipping. Validation exists for callers that want the problems
//! reported instead. Detects:
//! - Duplicate IDs
//! - Dangling subject/timeslot/room/building references
//! - Unparseable "HH:MM" timeslot boundaries
//! - Schedule entries that double-book a faculty member

use std::collections::HashSet;

use crate::models::{parse_hhmm, ConfigData, ScheduleEntry};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A section references a subject that doesn't exist.
    UnknownSubject,
    /// A section or entry references a timeslot that doesn't exist.
    UnknownTimeslot,
    /// A section, room, or entry references a room/building that doesn't exist.
    UnknownRoom,
    /// A room references a building that doesn't exist.
    UnknownBuilding,
    /// A schedule entry references a section or faculty that doesn't exist.
    UnknownReference,
    /// A timeslot boundary does not parse as "HH:MM".
    BadClockTime,
    /// Two entries give the same faculty member the same timeslot.
    DoubleBooking,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a domain snapshot.
///
/// Checks:
/// 1. No duplicate faculty, subject, section, timeslot, room, or building IDs
/// 2. Every section's subject exists
/// 3. Every pinned timeslot/room on a section exists
/// 4. Every room's building exists
/// 5. Every timeslot's start/end parses as "HH:MM"
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_config(config: &ConfigData) -> ValidationResult {
    let mut errors = Vec::new();

    collect_ids(config.faculty.iter().map(|f| f.id.as_str()), "faculty", &mut errors);
    let subject_ids = collect_ids(config.subjects.iter().map(|s| s.id.as_str()), "subject", &mut errors);
    collect_ids(config.sections.iter().map(|s| s.id.as_str()), "section", &mut errors);
    let timeslot_ids = collect_ids(config.timeslots.iter().map(|t| t.id.as_str()), "timeslot", &mut errors);
    let room_ids = collect_ids(config.rooms.iter().map(|r| r.id.as_str()), "room", &mut errors);
    let building_ids = collect_ids(config.buildings.iter().map(|b| b.id.as_str()), "building", &mut errors);

    for section in &config.sections {
        if !subject_ids.contains(section.subject_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownSubject,
                format!(
                    "Section '{}' references unknown subject '{}'",
                    section.id, section.subject_id
                ),
            ));
        }
        if let Some(timeslot_id) = section.timeslot_id.as_deref() {
            if !timeslot_ids.contains(timeslot_id) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownTimeslot,
                    format!(
                        "Section '{}' references unknown timeslot '{timeslot_id}'",
                        section.id
                    ),
                ));
            }
        }
        if let Some(room_id) = section.room_id.as_deref() {
            if !room_ids.contains(room_id) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownRoom,
                    format!("Section '{}' references unknown room '{room_id}'", section.id),
                ));
            }
        }
    }

    for room in &config.rooms {
        if !building_ids.contains(room.building_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownBuilding,
                format!(
                    "Room '{}' references unknown building '{}'",
                    room.id, room.building_id
                ),
            ));
        }
    }

    for timeslot in &config.timeslots {
        for (label, text) in [("start", &timeslot.start), ("end", &timeslot.end)] {
            if parse_hhmm(text).is_none() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::BadClockTime,
                    format!("Timeslot '{}' has unparseable {label} time '{text}'", timeslot.id),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a schedule against a snapshot.
///
/// This is the user-facing conflict report: the optimizer avoids
/// double-booking internally, but schedules edited or imported elsewhere
/// may carry conflicts worth surfacing. Checks:
/// 1. Every entry's section, faculty, and timeslot exist
/// 2. Every entry's room, when set, exists
/// 3. No faculty member holds two entries in the same timeslot
pub fn validate_schedule(config: &ConfigData, entries: &[ScheduleEntry]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut occupied: HashSet<(&str, &str)> = HashSet::new();

    for entry in entries {
        if config.section(&entry.section_id).is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownReference,
                format!("Entry references unknown section '{}'", entry.section_id),
            ));
        }
        if config.faculty(&entry.faculty_id).is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownReference,
                format!("Entry references unknown faculty '{}'", entry.faculty_id),
            ));
        }
        if config.timeslot(&entry.timeslot_id).is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownTimeslot,
                format!("Entry references unknown timeslot '{}'", entry.timeslot_id),
            ));
        }
        if let Some(room_id) = entry.room_id.as_deref() {
            if config.room(room_id).is_none() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownRoom,
                    format!("Entry references unknown room '{room_id}'"),
                ));
            }
        }
        if !occupied.insert((entry.faculty_id.as_str(), entry.timeslot_id.as_str())) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DoubleBooking,
                format!(
                    "Faculty '{}' is double-booked in timeslot '{}'",
                    entry.faculty_id, entry.timeslot_id
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Collects IDs into a set, recording duplicates.
fn collect_ids<'a>(
    ids: impl Iterator<Item = &'a str>,
    entity: &str,
    errors: &mut Vec<ValidationError>,
) -> HashSet<&'a str> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate {entity} ID: {id}"),
            ));
        }
    }
    seen
}
