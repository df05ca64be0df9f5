//! Greedy assignment driver.
//!
//! # Algorithm
//!
//! 1. Seed locked carryover entries (corrupt ones are dropped).
//! 2. Analyze feasibility of every unassigned section.
//! 3. Order sections scarcest-candidate-first.
//! 4. For each section: score every faculty member against the committed
//!    state, rank, resolve a timeslot for the best candidate (walking down
//!    the ranking when none is usable), and commit. Sections with no
//!    usable candidate are skipped.
//!
//! The driver never fails: malformed input degrades to dropped carryover
//! entries or skipped sections, and the only caller-visible signal is a
//! shorter output array.
//!
//! # Complexity
//! O(sections × faculty × timeslots) in the worst case.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use log::{debug, info};

use crate::models::{ConfigData, Faculty, Preferences, ScheduleEntry, Section, Timeslot};

use super::feasibility::{analyze, order_sections};
use super::index::DomainIndex;
use super::progress::{OptimizerPhase, OptimizerProgress, ProgressCallback};
use super::scoring::{score_candidate, CandidateContext, ScoreWeights};
use super::state::SchedulingState;
use super::tiebreak::{normalize_seed, tie_break_hash, DEFAULT_SEED};

/// Options for [`run_optimizer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimizerOptions {
    /// Tie-break seed. Absent or non-positive values fall back to 42.
    pub seed: Option<i64>,
    /// Score component weights.
    pub weights: ScoreWeights,
}

impl Default for OptimizerOptions {
    fn default() -> Self {
        Self {
            seed: None,
            weights: ScoreWeights::default(),
        }
    }
}

/// Runs the optimizer once over a domain snapshot.
///
/// Locked entries in `current_schedule` are preserved verbatim (with
/// recomputed score breakdowns); unlocked entries are ignored. Returns the
/// complete new schedule. Never panics, whatever the input shape.
pub fn run_optimizer(
    config: &ConfigData,
    preferences: &Preferences,
    current_schedule: &[ScheduleEntry],
    options: OptimizerOptions,
) -> Vec<ScheduleEntry> {
    let mut optimizer = Optimizer::new().with_weights(options.weights);
    if let Some(seed) = options.seed {
        optimizer = optimizer.with_seed(seed);
    }
    optimizer.optimize(config, preferences, current_schedule)
}

/// Greedy, deterministic section-to-faculty optimizer.
///
/// Pure and re-entrant: all mutable state lives in one run. The same
/// instance may be reused across runs and inputs.
///
/// # Example
///
/// ```
/// use section_scheduler::models::{ConfigData, DayOfWeek, Faculty, Preferences, Section, Subject, Timeslot};
/// use section_scheduler::optimizer::Optimizer;
///
/// let config = ConfigData::new()
///     .with_faculty(Faculty::new("F1").with_max_sections(2))
///     .with_subject(Subject::new("S1"))
///     .with_section(Section::new("SEC1", "S1"))
///     .with_timeslot(Timeslot::new("T1", DayOfWeek::Monday, "09:00", "10:00"));
///
/// let schedule = Optimizer::new().optimize(&config, &Preferences::new(), &[]);
/// assert_eq!(schedule.len(), 1);
/// assert_eq!(schedule[0].faculty_id, "F1");
/// ```
#[derive(Clone)]
pub struct Optimizer {
    seed: i64,
    weights: ScoreWeights,
    on_progress: Option<ProgressCallback>,
}

/// One ranked candidate for a section.
struct Candidate<'a> {
    faculty: &'a Faculty,
    total: f64,
    load: u32,
    capacity: u32,
    hash: u64,
}

impl Optimizer {
    /// Creates an optimizer with the default seed and unit weights.
    pub fn new() -> Self {
        Self {
            seed: DEFAULT_SEED,
            weights: ScoreWeights::default(),
            on_progress: None,
        }
    }

    /// Sets the tie-break seed (non-positive values fall back to 42).
    pub fn with_seed(mut self, seed: i64) -> Self {
        self.seed = normalize_seed(Some(seed));
        self
    }

    /// Sets the score component weights.
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Sets a progress callback, invoked synchronously at phase boundaries
    /// and after each processed section.
    pub fn with_progress(mut self, callback: impl Fn(&OptimizerProgress) + 'static) -> Self {
        self.on_progress = Some(Arc::new(callback));
        self
    }

    /// Produces a complete new schedule for the snapshot.
    ///
    /// Entries for sections that could not be assigned are simply absent
    /// from the output.
    pub fn optimize(
        &self,
        config: &ConfigData,
        preferences: &Preferences,
        current_schedule: &[ScheduleEntry],
    ) -> Vec<ScheduleEntry> {
        let index = DomainIndex::build(config);
        let mut state = SchedulingState::new();
        let total = config.sections.len();
        let mut processed = 0usize;
        let mut skipped = 0usize;

        info!(
            "optimizer run: {} sections, {} faculty, {} timeslots, {} carryover entries",
            total,
            config.faculty.len(),
            config.timeslots.len(),
            current_schedule.len()
        );
        self.report(OptimizerPhase::Initialization, total, processed, 0, skipped);

        self.seed_locked(&index, preferences, current_schedule, &mut state);

        self.report(
            OptimizerPhase::Analysis,
            total,
            processed,
            state.assigned_count(),
            skipped,
        );
        let ordered = order_sections(analyze(config, &state));

        self.report(
            OptimizerPhase::Assignment,
            total,
            processed,
            state.assigned_count(),
            skipped,
        );
        for section_feasibility in &ordered {
            if let Some(section) = index.section(&section_feasibility.section_id) {
                // Duplicate section ids yield one analysis row each; only
                // the first is assigned
                if state.is_assigned(&section.id) {
                    debug!("section {} already assigned", section.id);
                } else if self.assign_section(config, &index, preferences, section, &mut state) {
                    debug!("assigned section {}", section.id);
                } else {
                    skipped += 1;
                    debug!("skipped section {}: no usable candidate", section.id);
                }
            }
            processed += 1;
            self.report(
                OptimizerPhase::Assignment,
                total,
                processed,
                state.assigned_count(),
                skipped,
            );
        }

        info!(
            "optimizer complete: {} assigned, {} skipped",
            state.assigned_count(),
            skipped
        );
        self.report(
            OptimizerPhase::Complete,
            total,
            processed,
            state.assigned_count(),
            skipped,
        );
        state.into_entries()
    }

    /// Seeds locked carryover entries, in input order, before any free
    /// assignment. Each seeded entry is scored against the previously
    /// seeded ones only. Corrupt entries (unresolved references, duplicate
    /// section, double-booking) are dropped.
    fn seed_locked(
        &self,
        index: &DomainIndex<'_>,
        preferences: &Preferences,
        current_schedule: &[ScheduleEntry],
        state: &mut SchedulingState,
    ) {
        for entry in current_schedule.iter().filter(|e| e.locked) {
            let Some(section) = index.section(&entry.section_id) else {
                debug!(
                    "dropping locked entry for {}: unknown section",
                    entry.section_id
                );
                continue;
            };
            let Some(faculty) = index.faculty(&entry.faculty_id) else {
                debug!(
                    "dropping locked entry for {}: unknown faculty {}",
                    entry.section_id, entry.faculty_id
                );
                continue;
            };
            let Some(timeslot) = index.timeslot(&entry.timeslot_id) else {
                debug!(
                    "dropping locked entry for {}: unknown timeslot {}",
                    entry.section_id, entry.timeslot_id
                );
                continue;
            };
            if state.is_assigned(&section.id) {
                debug!(
                    "dropping locked entry for {}: section already seeded",
                    section.id
                );
                continue;
            }
            if state.has_conflict(&faculty.id, &timeslot.id) {
                debug!(
                    "dropping locked entry for {}: double-books {}",
                    section.id, faculty.id
                );
                continue;
            }

            let breakdown = score_candidate(
                index,
                preferences,
                &self.weights,
                &CandidateContext {
                    faculty,
                    section,
                    timeslot: Some(timeslot),
                    room_id: entry.room_id.as_deref(),
                    current_load: state.load(&faculty.id),
                    committed: state.committed(),
                },
            );
            let mut seeded = ScheduleEntry::new(&section.id, &faculty.id, &timeslot.id)
                .locked()
                .with_score(breakdown);
            seeded.room_id = entry.room_id.clone();
            state.commit(seeded);
        }
    }

    /// Attempts to assign one section. Returns whether an entry was
    /// committed.
    fn assign_section(
        &self,
        config: &ConfigData,
        index: &DomainIndex<'_>,
        preferences: &Preferences,
        section: &Section,
        state: &mut SchedulingState,
    ) -> bool {
        // Rank against the fixed timeslot when there is one; free sections
        // rank timeslot-agnostically and get their final breakdown after
        // resolution
        let ranking_timeslot = section
            .timeslot_id
            .as_deref()
            .and_then(|id| index.timeslot(id));

        let mut candidates: Vec<Candidate<'_>> = config
            .faculty
            .iter()
            .map(|faculty| {
                let load = state.load(&faculty.id);
                let breakdown = score_candidate(
                    index,
                    preferences,
                    &self.weights,
                    &CandidateContext {
                        faculty,
                        section,
                        timeslot: ranking_timeslot,
                        room_id: section.room_id.as_deref(),
                        current_load: load,
                        committed: state.committed(),
                    },
                );
                Candidate {
                    faculty,
                    total: breakdown.total,
                    load,
                    capacity: faculty.effective_capacity(),
                    hash: tie_break_hash(self.seed, &faculty.id, &section.id),
                }
            })
            .collect();

        candidates.sort_by(|a, b| {
            b.total
                .partial_cmp(&a.total)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.load.cmp(&b.load))
                .then_with(|| b.capacity.cmp(&a.capacity))
                .then_with(|| a.hash.cmp(&b.hash))
        });

        for candidate in &candidates {
            // Capacity is a hard bound at commit time
            if candidate.load >= candidate.capacity {
                continue;
            }
            let Some(timeslot) =
                resolve_timeslot(config, index, state, preferences, section, candidate.faculty)
            else {
                continue;
            };

            // Provisional ranking scores are discarded; the committed
            // breakdown reflects the resolved pair
            let breakdown = score_candidate(
                index,
                preferences,
                &self.weights,
                &CandidateContext {
                    faculty: candidate.faculty,
                    section,
                    timeslot: Some(timeslot),
                    room_id: section.room_id.as_deref(),
                    current_load: candidate.load,
                    committed: state.committed(),
                },
            );
            let mut entry = ScheduleEntry::new(&section.id, &candidate.faculty.id, &timeslot.id)
                .with_score(breakdown);
            entry.room_id = section.room_id.clone();
            state.commit(entry);
            return true;
        }
        false
    }

    fn report(
        &self,
        current_phase: OptimizerPhase,
        total_sections: usize,
        processed_sections: usize,
        assigned_sections: usize,
        skipped_sections: usize,
    ) {
        if let Some(callback) = &self.on_progress {
            callback(&OptimizerProgress {
                total_sections,
                processed_sections,
                assigned_sections,
                skipped_sections,
                current_phase,
            });
        }
    }
}

impl Default for Optimizer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Optimizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Optimizer")
            .field("seed", &self.seed)
            .field("weights", &self.weights)
            .field("on_progress", &self.on_progress.is_some())
            .finish()
    }
}

/// Resolves a usable timeslot for a candidate.
///
/// A fixed timeslot must resolve and be conflict-free. A free section
/// takes the conflict-free timeslot with the highest faculty preference,
/// first in input order on ties.
fn resolve_timeslot<'a>(
    config: &'a ConfigData,
    index: &DomainIndex<'a>,
    state: &SchedulingState,
    preferences: &Preferences,
    section: &Section,
    faculty: &Faculty,
) -> Option<&'a Timeslot> {
    if let Some(fixed_id) = section.timeslot_id.as_deref() {
        let timeslot = index.timeslot(fixed_id)?;
        if state.has_conflict(&faculty.id, &timeslot.id) {
            return None;
        }
        return Some(timeslot);
    }

    let mut best: Option<(&'a Timeslot, i32)> = None;
    for timeslot in &config.timeslots {
        if state.has_conflict(&faculty.id, &timeslot.id) {
            continue;
        }
        let level = preferences.timeslot_level(&faculty.id, &timeslot.id);
        if best.map_or(true, |(_, best_level)| level > best_level) {
            best = Some((timeslot, level));
        }
    }
    best.map(|(timeslot, _)| timeslot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayOfWeek, Room, Subject, Timeslot};
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    fn make_faculty(id: &str, max_sections: u32) -> Faculty {
        Faculty::new(id).with_max_sections(max_sections)
    }

    fn base_config() -> ConfigData {
        ConfigData::new()
            .with_subject(Subject::new("S1").with_code("CS1"))
            .with_timeslot(Timeslot::new("T1", DayOfWeek::Monday, "09:00", "10:00"))
            .with_timeslot(Timeslot::new("T2", DayOfWeek::Monday, "10:00", "11:00"))
            .with_timeslot(Timeslot::new("T3", DayOfWeek::Tuesday, "09:00", "10:00"))
    }

    #[test]
    fn test_no_double_booking() {
        let config = base_config()
            .with_faculty(make_faculty("F1", 10))
            .with_faculty(make_faculty("F2", 10))
            .with_section(Section::new("SEC1", "S1").with_timeslot("T1"))
            .with_section(Section::new("SEC2", "S1").with_timeslot("T1"))
            .with_section(Section::new("SEC3", "S1"))
            .with_section(Section::new("SEC4", "S1"))
            .with_section(Section::new("SEC5", "S1"));

        let schedule = Optimizer::new().optimize(&config, &Preferences::new(), &[]);

        let mut seen = HashSet::new();
        for entry in &schedule {
            assert!(
                seen.insert((entry.faculty_id.clone(), entry.timeslot_id.clone())),
                "{} double-booked in {}",
                entry.faculty_id,
                entry.timeslot_id
            );
        }
    }

    #[test]
    fn test_locked_entries_preserved() {
        let config = base_config()
            .with_faculty(make_faculty("F1", 5))
            .with_faculty(make_faculty("F2", 5))
            .with_section(Section::new("SEC1", "S1"))
            .with_section(Section::new("SEC2", "S1"));

        // Lock SEC1 onto the junior faculty member; the optimizer would
        // otherwise prefer F1
        let locked = ScheduleEntry::new("SEC1", "F2", "T2").locked();
        let schedule = Optimizer::new().optimize(&config, &Preferences::new(), &[locked]);

        let entry = schedule.iter().find(|e| e.section_id == "SEC1").unwrap();
        assert_eq!(entry.faculty_id, "F2");
        assert_eq!(entry.timeslot_id, "T2");
        assert!(entry.locked);
        // Breakdown is recomputed, not copied
        assert!(entry.score.is_some());
    }

    #[test]
    fn test_unlocked_carryover_ignored() {
        let config = base_config()
            .with_faculty(make_faculty("F1", 5))
            .with_section(Section::new("SEC1", "S1"));

        // Unlocked carryover pins nothing
        let carryover = ScheduleEntry::new("SEC1", "F1", "T3");
        let schedule = Optimizer::new().optimize(&config, &Preferences::new(), &[carryover]);

        assert_eq!(schedule.len(), 1);
        assert!(!schedule[0].locked);
        // Free resolution picks the first timeslot, not the carryover's
        assert_eq!(schedule[0].timeslot_id, "T1");
    }

    #[test]
    fn test_corrupt_locked_entries_dropped() {
        let config = base_config()
            .with_faculty(make_faculty("F1", 5))
            .with_section(Section::new("SEC1", "S1"));

        let corrupt = vec![
            ScheduleEntry::new("SEC-GONE", "F1", "T1").locked(),
            ScheduleEntry::new("SEC1", "F-GONE", "T1").locked(),
            ScheduleEntry::new("SEC1", "F1", "T-GONE").locked(),
        ];
        let schedule = Optimizer::new().optimize(&config, &Preferences::new(), &corrupt);

        // All three dropped; SEC1 still gets a free assignment
        assert_eq!(schedule.len(), 1);
        assert!(!schedule[0].locked);
    }

    #[test]
    fn test_conflicting_locked_entries_drop_later_one() {
        let config = base_config()
            .with_faculty(make_faculty("F1", 5))
            .with_section(Section::new("SEC1", "S1"))
            .with_section(Section::new("SEC2", "S1"));

        let locked = vec![
            ScheduleEntry::new("SEC1", "F1", "T1").locked(),
            ScheduleEntry::new("SEC2", "F1", "T1").locked(),
        ];
        let schedule = Optimizer::new().optimize(&config, &Preferences::new(), &locked);

        let sec1 = schedule.iter().find(|e| e.section_id == "SEC1").unwrap();
        assert!(sec1.locked);
        assert_eq!(sec1.timeslot_id, "T1");
        // SEC2's locked entry was corrupt carryover; it is re-assigned free
        let sec2 = schedule.iter().find(|e| e.section_id == "SEC2").unwrap();
        assert!(!sec2.locked);
        assert_ne!(sec2.timeslot_id, "T1");
    }

    #[test]
    fn test_determinism() {
        let mut prefs = Preferences::new();
        prefs.set_subject_level("F2", "S1", 1);
        let config = base_config()
            .with_faculty(make_faculty("F1", 2))
            .with_faculty(make_faculty("F2", 2))
            .with_faculty(make_faculty("F3", 2))
            .with_section(Section::new("SEC1", "S1"))
            .with_section(Section::new("SEC2", "S1").with_timeslot("T2"))
            .with_section(Section::new("SEC3", "S1"))
            .with_section(Section::new("SEC4", "S1"));

        let first = Optimizer::new().with_seed(7).optimize(&config, &prefs, &[]);
        let second = Optimizer::new().with_seed(7).optimize(&config, &prefs, &[]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_capacity_respected() {
        let config = base_config()
            .with_faculty(make_faculty("F1", 1))
            .with_section(Section::new("SEC1", "S1").with_timeslot("T1"))
            .with_section(Section::new("SEC2", "S1").with_timeslot("T2"))
            .with_section(Section::new("SEC3", "S1").with_timeslot("T3"));

        let schedule = Optimizer::new().optimize(&config, &Preferences::new(), &[]);
        assert_eq!(schedule.len(), 1);
    }

    #[test]
    fn test_overload_ceiling_respected() {
        let config = base_config()
            .with_faculty(Faculty::new("F1").with_max_sections(1).with_overload(1))
            .with_section(Section::new("SEC1", "S1").with_timeslot("T1"))
            .with_section(Section::new("SEC2", "S1").with_timeslot("T2"))
            .with_section(Section::new("SEC3", "S1").with_timeslot("T3"));

        let schedule = Optimizer::new().optimize(&config, &Preferences::new(), &[]);
        // Base 1 + overload 1 = 2; the third section has no one left
        assert_eq!(schedule.len(), 2);
    }

    #[test]
    fn test_overload_penalty_escalates() {
        let config = base_config()
            .with_faculty(Faculty::new("F1").with_max_sections(1).with_overload(2))
            .with_section(Section::new("SEC1", "S1").with_timeslot("T1"))
            .with_section(Section::new("SEC2", "S1").with_timeslot("T2"))
            .with_section(Section::new("SEC3", "S1").with_timeslot("T3"));

        let schedule = Optimizer::new().optimize(&config, &Preferences::new(), &[]);
        assert_eq!(schedule.len(), 3);
        // Loads 0 and 1 are penalty-free; the load-2 commit pays one
        // overload step
        let penalties: Vec<f64> = schedule
            .iter()
            .map(|e| e.score.unwrap().capacity_penalty)
            .collect();
        assert_eq!(penalties.iter().filter(|p| **p == 0.0).count(), 2);
        assert_eq!(penalties.iter().filter(|p| **p == -50.0).count(), 1);
    }

    #[test]
    fn test_consecutive_scoring_on_later_entry() {
        let config = base_config()
            .with_faculty(make_faculty("F1", 5))
            .with_section(Section::new("SEC-A", "S1").with_timeslot("T1"))
            .with_section(Section::new("SEC-B", "S1").with_timeslot("T2"));

        let schedule = Optimizer::new().optimize(&config, &Preferences::new(), &[]);
        let later = schedule.iter().find(|e| e.section_id == "SEC-B").unwrap();
        let score = later.score.unwrap();
        assert!((score.consecutive - -1.0).abs() < 1e-10);
    }

    #[test]
    fn test_consecutive_lunch_spanning_pair() {
        let config = ConfigData::new()
            .with_subject(Subject::new("S1"))
            .with_timeslot(Timeslot::new("T1", DayOfWeek::Monday, "11:00", "12:00"))
            .with_timeslot(Timeslot::new("T2", DayOfWeek::Monday, "12:00", "13:00"))
            .with_faculty(make_faculty("F1", 5))
            .with_section(Section::new("SEC-A", "S1").with_timeslot("T1"))
            .with_section(Section::new("SEC-B", "S1").with_timeslot("T2"));

        let schedule = Optimizer::new().optimize(&config, &Preferences::new(), &[]);
        let later = schedule.iter().find(|e| e.section_id == "SEC-B").unwrap();
        assert!((later.score.unwrap().consecutive - -2.0).abs() < 1e-10);
    }

    #[test]
    fn test_mobility_scoring_across_buildings() {
        let mut prefs = Preferences::new();
        prefs.set_mobility("F1", 5.0);
        prefs.set_consecutive("F1", 0.0);

        let two_buildings = base_config()
            .with_room(Room::new("R1", "B1"))
            .with_room(Room::new("R2", "B2"))
            .with_faculty(make_faculty("F1", 5))
            .with_section(Section::new("SEC-A", "S1").with_timeslot("T1").with_room("R1"))
            .with_section(Section::new("SEC-B", "S1").with_timeslot("T2").with_room("R2"));

        let schedule = Optimizer::new().optimize(&two_buildings, &prefs, &[]);
        let later = schedule.iter().find(|e| e.section_id == "SEC-B").unwrap();
        assert!((later.score.unwrap().mobility - -5.0).abs() < 1e-10);

        let same_building = base_config()
            .with_room(Room::new("R1", "B1"))
            .with_room(Room::new("R2", "B1"))
            .with_faculty(make_faculty("F1", 5))
            .with_section(Section::new("SEC-A", "S1").with_timeslot("T1").with_room("R1"))
            .with_section(Section::new("SEC-B", "S1").with_timeslot("T2").with_room("R2"));

        let schedule = Optimizer::new().optimize(&same_building, &prefs, &[]);
        let later = schedule.iter().find(|e| e.section_id == "SEC-B").unwrap();
        assert!((later.score.unwrap().mobility - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_contested_timeslot_spreads_across_faculty() {
        // Two sections pinned to the same slot, two faculty with one free
        // slot each: both sections must land, on different faculty
        let config = base_config()
            .with_faculty(make_faculty("F1", 1))
            .with_faculty(make_faculty("F2", 1))
            .with_section(Section::new("SEC1", "S1").with_timeslot("T1"))
            .with_section(Section::new("SEC2", "S1").with_timeslot("T1"));

        let schedule = Optimizer::new().optimize(&config, &Preferences::new(), &[]);
        assert_eq!(schedule.len(), 2);
        assert_ne!(schedule[0].faculty_id, schedule[1].faculty_id);
    }

    #[test]
    fn test_seniority_breaks_contested_section() {
        let config = base_config()
            .with_faculty(make_faculty("F1", 1))
            .with_faculty(make_faculty("F2", 1))
            .with_section(Section::new("SEC1", "S1").with_timeslot("T1"));

        let weights = ScoreWeights {
            preference: 0.0,
            mobility: 0.0,
            ..ScoreWeights::default()
        };
        let schedule = Optimizer::new()
            .with_weights(weights)
            .optimize(&config, &Preferences::new(), &[]);

        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule[0].faculty_id, "F1");
    }

    #[test]
    fn test_free_section_takes_preferred_timeslot() {
        let mut prefs = Preferences::new();
        prefs.set_timeslot_level("F1", "T3", 3);

        let config = base_config()
            .with_faculty(make_faculty("F1", 5))
            .with_section(Section::new("SEC1", "S1"));

        let schedule = Optimizer::new().optimize(&config, &prefs, &[]);
        assert_eq!(schedule[0].timeslot_id, "T3");
    }

    #[test]
    fn test_infeasible_section_skipped_not_fatal() {
        let config = base_config()
            .with_faculty(make_faculty("F1", 1))
            .with_section(Section::new("SEC1", "S1").with_timeslot("T1"))
            .with_section(Section::new("SEC2", "S1").with_timeslot("T1"));

        let schedule = Optimizer::new().optimize(&config, &Preferences::new(), &[]);
        assert_eq!(schedule.len(), 1);
    }

    #[test]
    fn test_fixed_timeslot_must_resolve() {
        let config = base_config()
            .with_faculty(make_faculty("F1", 5))
            .with_section(Section::new("SEC1", "S1").with_timeslot("T-GONE"));

        let schedule = Optimizer::new().optimize(&config, &Preferences::new(), &[]);
        assert!(schedule.is_empty());
    }

    #[test]
    fn test_empty_inputs_yield_empty_schedule() {
        let empty = ConfigData::new();
        assert!(Optimizer::new()
            .optimize(&empty, &Preferences::new(), &[])
            .is_empty());

        // Sections but no faculty, and no timeslots
        let no_staff = ConfigData::new().with_section(Section::new("SEC1", "S1"));
        assert!(Optimizer::new()
            .optimize(&no_staff, &Preferences::new(), &[])
            .is_empty());
    }

    #[test]
    fn test_progress_phases_in_order() {
        let config = base_config()
            .with_faculty(make_faculty("F1", 5))
            .with_section(Section::new("SEC1", "S1"))
            .with_section(Section::new("SEC2", "S1"));

        let phases: Rc<RefCell<Vec<OptimizerPhase>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&phases);
        let schedule = Optimizer::new()
            .with_progress(move |p| sink.borrow_mut().push(p.current_phase))
            .optimize(&config, &Preferences::new(), &[]);

        assert_eq!(schedule.len(), 2);
        let phases = phases.borrow();
        assert_eq!(phases.first(), Some(&OptimizerPhase::Initialization));
        assert_eq!(phases.last(), Some(&OptimizerPhase::Complete));
        // One Assignment report per processed section plus the phase entry
        let assignment_reports = phases
            .iter()
            .filter(|p| **p == OptimizerPhase::Assignment)
            .count();
        assert_eq!(assignment_reports, 3);
    }

    #[test]
    fn test_progress_counts_skips() {
        let config = base_config()
            .with_faculty(make_faculty("F1", 1))
            .with_section(Section::new("SEC1", "S1").with_timeslot("T1"))
            .with_section(Section::new("SEC2", "S1").with_timeslot("T1"));

        let last: Rc<RefCell<Option<OptimizerProgress>>> = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&last);
        Optimizer::new()
            .with_progress(move |p| *sink.borrow_mut() = Some(*p))
            .optimize(&config, &Preferences::new(), &[]);

        let last = last.borrow().unwrap();
        assert_eq!(last.current_phase, OptimizerPhase::Complete);
        assert_eq!(last.total_sections, 2);
        assert_eq!(last.processed_sections, 2);
        assert_eq!(last.assigned_sections, 1);
        assert_eq!(last.skipped_sections, 1);
    }

    #[test]
    fn test_run_optimizer_normalizes_seed() {
        let config = base_config()
            .with_faculty(make_faculty("F1", 5))
            .with_section(Section::new("SEC1", "S1"));

        let defaulted = run_optimizer(
            &config,
            &Preferences::new(),
            &[],
            OptimizerOptions {
                seed: Some(-3),
                weights: ScoreWeights::default(),
            },
        );
        let explicit = run_optimizer(
            &config,
            &Preferences::new(),
            &[],
            OptimizerOptions {
                seed: Some(DEFAULT_SEED),
                weights: ScoreWeights::default(),
            },
        );
        assert_eq!(defaulted, explicit);
    }

    #[test]
    fn test_duplicate_section_ids_assigned_once() {
        let config = base_config()
            .with_faculty(make_faculty("F1", 5))
            .with_section(Section::new("SEC1", "S1"))
            .with_section(Section::new("SEC1", "S1"));

        let schedule = Optimizer::new().optimize(&config, &Preferences::new(), &[]);
        assert_eq!(schedule.len(), 1);
    }

    #[test]
    fn test_locked_entry_scored_against_prior_locked_only() {
        let config = base_config()
            .with_faculty(make_faculty("F1", 5))
            .with_section(Section::new("SEC1", "S1"))
            .with_section(Section::new("SEC2", "S1"));

        let locked = vec![
            ScheduleEntry::new("SEC1", "F1", "T1").locked(),
            ScheduleEntry::new("SEC2", "F1", "T2").locked(),
        ];
        let schedule = Optimizer::new().optimize(&config, &Preferences::new(), &locked);

        let first = schedule.iter().find(|e| e.section_id == "SEC1").unwrap();
        let second = schedule.iter().find(|e| e.section_id == "SEC2").unwrap();
        // First seeded entry sees no context; the second sees the first
        assert!((first.score.unwrap().consecutive - 0.0).abs() < 1e-10);
        assert!((second.score.unwrap().consecutive - -1.0).abs() < 1e-10);
    }
}
