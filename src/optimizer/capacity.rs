//! Capacity and overload penalty.
//!
//! Load below the base teaching load is free. At or beyond it, either the
//! faculty member cannot overload (disqualifying penalty), has exhausted
//! the overload allowance (same penalty), or pays an escalating per-section
//! overload cost. The disqualifying value is large enough to always lose to
//! any feasible alternative but is not an error: a disqualified candidate
//! still ranks, it just ranks last.

/// Penalty for a candidate that would exceed capacity outright.
pub const OVER_CAPACITY_PENALTY: f64 = -1000.0;

/// Penalty per already-held overload section.
pub const OVERLOAD_STEP_PENALTY: f64 = -50.0;

/// Computes the capacity penalty for a candidate assignment.
///
/// `current_load` is the faculty member's committed section count before
/// the candidate is added.
pub fn capacity_penalty(
    current_load: u32,
    max_sections: u32,
    max_overload: u32,
    can_overload: bool,
) -> f64 {
    if current_load < max_sections {
        return 0.0;
    }
    if !can_overload {
        return OVER_CAPACITY_PENALTY;
    }
    let overload = current_load - max_sections;
    if overload >= max_overload {
        return OVER_CAPACITY_PENALTY;
    }
    OVERLOAD_STEP_PENALTY * overload as f64
}
