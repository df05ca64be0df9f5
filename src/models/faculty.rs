//! Faculty model.
//!
//! A faculty member teaches sections up to a base load (`max_sections`),
//! optionally extended by an overload allowance (`max_overload`) when
//! `can_overload` is set. Seniority is implicit in the faculty list order:
//! earlier entries are more senior. The optimizer derives an explicit rank
//! from that order once per run.

use serde::{Deserialize, Serialize};

/// A faculty member who can be assigned sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faculty {
    /// Unique faculty identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Base teaching load (sections).
    pub max_sections: u32,
    /// Extra sections permitted beyond the base load.
    pub max_overload: u32,
    /// Whether the overload allowance may be used at all.
    pub can_overload: bool,
}

impl Faculty {
    /// Creates a new faculty member with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            max_sections: 0,
            max_overload: 0,
            can_overload: false,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the base teaching load.
    pub fn with_max_sections(mut self, max_sections: u32) -> Self {
        self.max_sections = max_sections;
        self
    }

    /// Enables overloading up to `max_overload` extra sections.
    pub fn with_overload(mut self, max_overload: u32) -> Self {
        self.max_overload = max_overload;
        self.can_overload = true;
        self
    }

    /// Total sections this faculty member may hold.
    ///
    /// `max_sections` plus the overload allowance when `can_overload`.
    #[inline]
    pub fn effective_capacity(&self) -> u32 {
        if self.can_overload {
            self.max_sections + self.max_overload
        } else {
            self.max_sections
        }
    }
}
