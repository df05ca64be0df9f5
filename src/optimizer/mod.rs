//! Greedy assignment optimizer and schedule KPIs.
//!
//! Deterministic, constraint-aware section-to-faculty assignment: locked
//! entries are seeded first, remaining sections are processed
//! most-constrained-first, and each section goes to the best-scoring
//! feasible candidate. Scoring combines preference, seniority, mobility,
//! and consecutive-teaching components under configurable weights, plus an
//! unweighted capacity penalty.
//!
//! # Usage
//!
//! ```
//! use section_scheduler::models::{ConfigData, DayOfWeek, Faculty, Preferences, Section, Subject, Timeslot};
//! use section_scheduler::optimizer::{run_optimizer, OptimizerOptions};
//!
//! let config = ConfigData::new()
//!     .with_faculty(Faculty::new("F1").with_max_sections(2))
//!     .with_subject(Subject::new("S1"))
//!     .with_section(Section::new("SEC1", "S1"))
//!     .with_timeslot(Timeslot::new("T1", DayOfWeek::Monday, "09:00", "10:00"));
//!
//! let schedule = run_optimizer(&config, &Preferences::new(), &[], OptimizerOptions::default());
//! assert_eq!(schedule.len(), 1);
//! ```
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Haralick & Elliott (1980): most-constrained-variable ordering

mod capacity;
mod driver;
mod feasibility;
mod index;
mod kpi;
mod progress;
mod scoring;
mod state;
mod tiebreak;

pub use capacity::{capacity_penalty, OVERLOAD_STEP_PENALTY, OVER_CAPACITY_PENALTY};
pub use driver::{run_optimizer, Optimizer, OptimizerOptions};
pub use kpi::ScheduleKpi;
pub use progress::{OptimizerPhase, OptimizerProgress, ProgressCallback};
pub use scoring::ScoreWeights;
pub use tiebreak::{normalize_seed, tie_break_hash, DEFAULT_SEED};
