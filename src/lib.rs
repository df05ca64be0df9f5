//! Faculty-to-section assignment for academic timetabling.
//!
//! Provides domain models, a greedy constraint-aware optimizer, and input
//! validation for assigning teaching sections to faculty members across
//! fixed timeslots and rooms.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Faculty`, `Subject`, `Section`,
//!   `Timeslot`, `Room`, `Building`, `Preferences`, `ScheduleEntry`,
//!   `ConfigData`
//! - **`optimizer`**: The assignment algorithm — candidate scoring,
//!   feasibility analysis, deterministic tie-breaking, schedule KPIs
//! - **`validation`**: Input integrity checks (duplicate IDs, dangling
//!   references, double-booked schedules)
//!
//! # Algorithm
//!
//! The optimizer is a greedy heuristic, not an exact solver: it seeds locked
//! assignments, orders unassigned sections most-constrained-first, and
//! commits the best-scoring feasible (faculty, timeslot) pairing per
//! section. It never backtracks; infeasible sections are skipped and corrupt
//! carryover entries are dropped.
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Carter & Laporte (1998), "Recent Developments in Practical Course Timetabling"
//! - Haralick & Elliott (1980), "Increasing Tree Search Efficiency for
//!   Constraint Satisfaction Problems"

pub mod models;
pub mod optimizer;
pub mod validation;
