//! Feasibility analysis and section ordering.
//!
//! Counts, for every unassigned section, the faculty members who are
//! simultaneously capacity-feasible and conflict-free for the section's
//! fixed timeslot (sections without one are assumed satisfiable at this
//! stage). Sections are then processed scarcest-candidate-first so that
//! easy sections do not consume scarce faculty before hard sections are
//! attempted.
//!
//! # Reference
//! Haralick & Elliott (1980): most-constrained-variable ordering.

use crate::models::ConfigData;

use super::state::SchedulingState;

/// Feasible-candidate count for one unassigned section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionFeasibility {
    /// Section under analysis.
    pub section_id: String,
    /// Faculty members currently capacity- and conflict-feasible.
    pub feasible_count: usize,
}

/// Analyzes all still-unassigned sections against the current state.
pub(crate) fn analyze(config: &ConfigData, state: &SchedulingState) -> Vec<SectionFeasibility> {
    config
        .sections
        .iter()
        .filter(|section| !state.is_assigned(&section.id))
        .map(|section| {
            let feasible_count = config
                .faculty
                .iter()
                .filter(|faculty| {
                    if state.load(&faculty.id) >= faculty.effective_capacity() {
                        return false;
                    }
                    match section.timeslot_id.as_deref() {
                        Some(timeslot_id) => !state.has_conflict(&faculty.id, timeslot_id),
                        None => true,
                    }
                })
                .count();
            SectionFeasibility {
                section_id: section.id.clone(),
                feasible_count,
            }
        })
        .collect()
}

/// Orders sections scarcest-candidate-first, ties broken by section id.
pub(crate) fn order_sections(mut sections: Vec<SectionFeasibility>) -> Vec<SectionFeasibility> {
    sections.sort_by(|a, b| {
        a.feasible_count
            .cmp(&b.feasible_count)
            .then_with(|| a.section_id.cmp(&b.section_id))
    });
    sections
}
