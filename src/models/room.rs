//! Room and building models.
//!
//! Rooms belong to buildings; the mobility score penalizes chronologically
//! adjacent assignments whose rooms resolve to different buildings.

use serde::{Deserialize, Serialize};

/// A teaching room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Building this room is in.
    pub building_id: String,
    /// Seat capacity.
    pub capacity: u32,
}

/// A campus building.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Building {
    /// Unique building identifier.
    pub id: String,
    /// Display label.
    pub label: String,
}

impl Room {
    /// Creates a new room in the given building.
    pub fn new(id: impl Into<String>, building_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            building_id: building_id.into(),
            capacity: 0,
        }
    }

    /// Sets the seat capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }
}

impl Building {
    /// Creates a new building.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_builder() {
        let r = Room::new("R1", "B1").with_capacity(40);
        assert_eq!(r.id, "R1");
        assert_eq!(r.building_id, "B1");
        assert_eq!(r.capacity, 40);
    }

    #[test]
    fn test_building() {
        let b = Building::new("B1", "Science Hall");
        assert_eq!(b.id, "B1");
        assert_eq!(b.label, "Science Hall");
    }
}
