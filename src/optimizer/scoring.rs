//! Candidate scoring.
//!
//! Four independent, additive components — preference, seniority, mobility,
//! consecutive — combined with configurable weights, plus the unweighted
//! capacity penalty. Each component is computed from the already-committed
//! assignments plus the candidate under evaluation, never from other
//! pending candidates. One shared pure function serves both the
//! locked-entry seeding path and the free-assignment path, so locked
//! entries get breakdowns computed by exactly the same rules.
//!
//! # Components
//!
//! | Component | Value |
//! |-----------|-------|
//! | preference | subject + timeslot + building levels, 0 when unset |
//! | seniority | faculty_count − list position (first = highest) |
//! | mobility | −multiplier × building transitions in week order |
//! | consecutive | −multiplier × back-to-back pairs, ×2 across lunch |

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{
    DayOfWeek, Faculty, Preferences, ScheduleEntry, ScoreBreakdown, Section, Timeslot,
};

use super::capacity::capacity_penalty;
use super::index::DomainIndex;

/// Lunch window: a back-to-back pair counts double when the earlier slot
/// ends within [11:00, 13:00] and the later one starts within [11:00, 14:00].
const LUNCH_END_MIN: u32 = 11 * 60;
const LUNCH_END_MAX: u32 = 13 * 60;
const LUNCH_START_MIN: u32 = 11 * 60;
const LUNCH_START_MAX: u32 = 14 * 60;

/// Weights applied to the four score components.
///
/// The capacity penalty is never weighted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Weight for the preference component.
    pub preference: f64,
    /// Weight for the mobility (building-transition) component.
    pub mobility: f64,
    /// Weight for the seniority component.
    pub seniority: f64,
    /// Weight for the consecutive (back-to-back) component.
    pub consecutive: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            preference: 1.0,
            mobility: 1.0,
            seniority: 1.0,
            consecutive: 1.0,
        }
    }
}

/// One candidate assignment under evaluation.
///
/// `timeslot` is `None` while ranking candidates for a section with no
/// fixed slot; the timeslot preference then contributes 0 and the mobility
/// and consecutive components reflect only committed entries.
pub(crate) struct CandidateContext<'a> {
    pub faculty: &'a Faculty,
    pub section: &'a Section,
    pub timeslot: Option<&'a Timeslot>,
    pub room_id: Option<&'a str>,
    /// Committed load before this candidate is added.
    pub current_load: u32,
    /// Entries committed so far (locked + assigned this run).
    pub committed: &'a [ScheduleEntry],
}

/// Scores one candidate against the committed state.
pub(crate) fn score_candidate(
    index: &DomainIndex<'_>,
    preferences: &Preferences,
    weights: &ScoreWeights,
    ctx: &CandidateContext<'_>,
) -> ScoreBreakdown {
    let preference = preference_score(index, preferences, ctx);
    let seniority = index.seniority_score(&ctx.faculty.id);
    let mobility = mobility_score(index, preferences, ctx);
    let consecutive = consecutive_score(index, preferences, ctx);
    let capacity = capacity_penalty(
        ctx.current_load,
        ctx.faculty.max_sections,
        ctx.faculty.max_overload,
        ctx.faculty.can_overload,
    );

    let weighted_preference = preference * weights.preference;
    let weighted_mobility = mobility * weights.mobility;
    let weighted_seniority = seniority * weights.seniority;
    let weighted_consecutive = consecutive * weights.consecutive;

    ScoreBreakdown {
        preference,
        mobility,
        seniority,
        consecutive,
        capacity_penalty: capacity,
        weighted_preference,
        weighted_mobility,
        weighted_seniority,
        weighted_consecutive,
        total: weighted_preference
            + weighted_mobility
            + weighted_seniority
            + weighted_consecutive
            + capacity,
    }
}

/// Subject + timeslot + building preference levels, each 0 when unset.
fn preference_score(
    index: &DomainIndex<'_>,
    preferences: &Preferences,
    ctx: &CandidateContext<'_>,
) -> f64 {
    let faculty_id = &ctx.faculty.id;
    let mut sum = f64::from(preferences.subject_level(faculty_id, &ctx.section.subject_id));
    if let Some(timeslot) = ctx.timeslot {
        sum += f64::from(preferences.timeslot_level(faculty_id, &timeslot.id));
    }
    if let Some(building_id) = index.building_of_room(ctx.room_id) {
        sum += f64::from(preferences.building_level(faculty_id, building_id));
    }
    sum
}

/// Building-transition penalty over the faculty member's week.
///
/// Assignments (committed plus the candidate) are ordered by global
/// timeslot index; each adjacent pair whose buildings both resolve and
/// differ counts one transition.
fn mobility_score(
    index: &DomainIndex<'_>,
    preferences: &Preferences,
    ctx: &CandidateContext<'_>,
) -> f64 {
    let factor = preferences.mobility_factor(&ctx.faculty.id);
    if factor <= 0.0 {
        return 0.0;
    }

    let mut stops: Vec<(usize, Option<&str>)> = ctx
        .committed
        .iter()
        .filter(|e| e.faculty_id == ctx.faculty.id)
        .filter_map(|e| {
            index
                .timeslot_order(&e.timeslot_id)
                .map(|order| (order, index.building_of_room(e.room_id.as_deref())))
        })
        .collect();
    if let Some(timeslot) = ctx.timeslot {
        if let Some(order) = index.timeslot_order(&timeslot.id) {
            stops.push((order, index.building_of_room(ctx.room_id)));
        }
    }
    stops.sort_by_key(|&(order, _)| order);

    let transitions = stops
        .windows(2)
        .filter(|pair| match (pair[0].1, pair[1].1) {
            (Some(a), Some(b)) => a != b,
            _ => false,
        })
        .count();

    -(factor * transitions as f64)
}

/// Back-to-back teaching penalty.
///
/// Assignments (committed plus the candidate) are grouped by day and
/// sorted by start time; each adjacent same-day pair counts 1, or 2 when
/// it spans the lunch window.
fn consecutive_score(
    index: &DomainIndex<'_>,
    preferences: &Preferences,
    ctx: &CandidateContext<'_>,
) -> f64 {
    let factor = preferences.consecutive_factor(&ctx.faculty.id);
    if factor <= 0.0 {
        return 0.0;
    }

    // (start, end) minutes per day; unparseable starts sort first and
    // unparseable ends never satisfy the lunch test
    let mut by_day: HashMap<DayOfWeek, Vec<(u32, Option<u32>)>> = HashMap::new();
    let mut push = |timeslot: &Timeslot| {
        by_day
            .entry(timeslot.day)
            .or_default()
            .push((timeslot.start_minute().unwrap_or(0), timeslot.end_minute()));
    };
    for entry in ctx.committed.iter().filter(|e| e.faculty_id == ctx.faculty.id) {
        if let Some(timeslot) = index.timeslot(&entry.timeslot_id) {
            push(timeslot);
        }
    }
    if let Some(timeslot) = ctx.timeslot {
        push(timeslot);
    }

    let mut pairs = 0u32;
    for slots in by_day.values_mut() {
        slots.sort_by_key(|&(start, _)| start);
        for pair in slots.windows(2) {
            pairs += if spans_lunch(pair[0].1, pair[1].0) { 2 } else { 1 };
        }
    }

    -(factor * f64::from(pairs))
}

fn spans_lunch(prior_end: Option<u32>, next_start: u32) -> bool {
    matches!(prior_end, Some(end) if (LUNCH_END_MIN..=LUNCH_END_MAX).contains(&end))
        && (LUNCH_START_MIN..=LUNCH_START_MAX).contains(&next_start)
}
