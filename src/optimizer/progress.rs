//! Progress reporting for optimizer runs.
//!
//! The optional callback is invoked synchronously at phase boundaries and
//! after each section is processed or skipped. It must not be relied upon
//! for control flow; there is no cancellation primitive.

use std::sync::Arc;

/// Phase of an optimizer run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimizerPhase {
    /// Seeding locked entries.
    Initialization,
    /// Feasibility analysis and section ordering.
    Analysis,
    /// Greedy per-section assignment.
    Assignment,
    /// Run finished.
    Complete,
}

/// Snapshot handed to the progress callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptimizerProgress {
    /// Sections in the input config.
    pub total_sections: usize,
    /// Sections processed by the assignment loop so far.
    pub processed_sections: usize,
    /// Entries committed so far (locked + assigned this run).
    pub assigned_sections: usize,
    /// Sections skipped as infeasible so far.
    pub skipped_sections: usize,
    /// Current phase.
    pub current_phase: OptimizerPhase,
}

/// Shared progress callback.
pub type ProgressCallback = Arc<dyn Fn(&OptimizerProgress)>;
