//! Schedule quality metrics (KPIs).
//!
//! Computed from a completed schedule and its input snapshot; never
//! consulted by the optimizer itself.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Assigned | Entries in the schedule (locked + free) |
//! | Unassigned | Sections with no entry |
//! | Total / Mean Score | Sum and mean of entry totals |
//! | Load by Faculty | Committed section count per faculty |
//! | Overloaded Faculty | Faculty holding more than their base load |

use std::collections::HashMap;

use itertools::Itertools;

use crate::models::{ConfigData, ScheduleEntry};

/// Schedule performance indicators.
#[derive(Debug, Clone)]
pub struct ScheduleKpi {
    /// Entries in the schedule.
    pub assigned_count: usize,
    /// Entries marked locked.
    pub locked_count: usize,
    /// Sections in the config with no entry.
    pub unassigned_sections: usize,
    /// Sum of entry score totals.
    pub total_score: f64,
    /// Mean entry score total (0 for an empty schedule).
    pub mean_score: f64,
    /// Committed section count per faculty.
    pub load_by_faculty: HashMap<String, usize>,
    /// Faculty holding more sections than their base load.
    pub overloaded_faculty: usize,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule and the snapshot it was built from.
    pub fn calculate(entries: &[ScheduleEntry], config: &ConfigData) -> Self {
        let assigned_count = entries.len();
        let locked_count = entries.iter().filter(|e| e.locked).count();
        let unassigned_sections = config
            .sections
            .iter()
            .filter(|s| !entries.iter().any(|e| e.section_id == s.id))
            .count();

        let total_score: f64 = entries.iter().filter_map(|e| e.score).map(|s| s.total).sum();
        let mean_score = if assigned_count == 0 {
            0.0
        } else {
            total_score / assigned_count as f64
        };

        let load_by_faculty: HashMap<String, usize> =
            entries.iter().counts_by(|e| e.faculty_id.clone());

        let overloaded_faculty = load_by_faculty
            .iter()
            .filter(|(faculty_id, load)| {
                config
                    .faculty(faculty_id)
                    .is_some_and(|f| **load > f.max_sections as usize)
            })
            .count();

        Self {
            assigned_count,
            locked_count,
            unassigned_sections,
            total_score,
            mean_score,
            load_by_faculty,
            overloaded_faculty,
        }
    }
}
