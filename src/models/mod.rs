//! Timetabling domain models.
//!
//! Provides the core data types for representing a faculty assignment
//! problem and its solution. Inputs are read-only during an optimizer run;
//! the only mutable output type is [`ScheduleEntry`].
//!
//! # Domain Mappings
//!
//! | section-scheduler | University | Conservatory | Training Center |
//! |-------------------|-----------|--------------|-----------------|
//! | Faculty | Professor | Instructor | Trainer |
//! | Section | Course Section | Studio Class | Cohort |
//! | Timeslot | Class Period | Lesson Block | Session |
//! | Room / Building | Lecture Hall | Studio | Classroom |

mod config;
mod faculty;
mod preferences;
mod room;
mod schedule;
mod section;
mod subject;
mod timeslot;

pub use config::ConfigData;
pub use faculty::Faculty;
pub use preferences::Preferences;
pub use room::{Building, Room};
pub use schedule::{ScheduleEntry, ScoreBreakdown};
pub use section::Section;
pub use subject::Subject;
pub use timeslot::{parse_hhmm, DayOfWeek, Timeslot};
