//! Slot and vehicle value types for the lot allocator

use serde::{Deserialize, Serialize};
use std::fmt;

/// A vehicle currently assigned to a slot
///
/// The registration identifier is unique among parked vehicles and matched
/// case-sensitively. Color is matched case-insensitively but displayed as
/// entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub registration: String,
    pub color: String,
}

impl Vehicle {
    /// Create a new vehicle record
    pub fn new(registration: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            registration: registration.into(),
            color: color.into(),
        }
    }

    /// Case-insensitive color comparison (display casing is preserved)
    pub fn color_matches(&self, color: &str) -> bool {
        self.color.to_lowercase() == color.to_lowercase()
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.registration, self.color)
    }
}

/// One fixed parking position
///
/// Slots are created once at lot construction and never move. Occupancy is
/// carried by the optional vehicle.
#[derive(Debug, Clone)]
pub struct Slot {
    /// 1-based position in the lot
    pub position: usize,
    vehicle: Option<Vehicle>,
}

impl Slot {
    /// Create a new free slot at the given position
    pub fn new(position: usize) -> Self {
        Self {
            position,
            vehicle: None,
        }
    }

    /// Whether a vehicle currently occupies this slot
    pub fn is_occupied(&self) -> bool {
        self.vehicle.is_some()
    }

    /// The current occupant, if any
    pub fn vehicle(&self) -> Option<&Vehicle> {
        self.vehicle.as_ref()
    }

    /// Assign a vehicle to this slot
    pub fn occupy(&mut self, vehicle: Vehicle) {
        self.vehicle = Some(vehicle);
    }

    /// Clear the slot, dropping the occupant record
    pub fn vacate(&mut self) {
        self.vehicle = None;
    }
}

/// Independent copy of one occupied slot, as returned by queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRecord {
    pub position: usize,
    pub registration: String,
    pub color: String,
}

impl SlotRecord {
    pub(crate) fn from_slot(slot: &Slot, vehicle: &Vehicle) -> Self {
        Self {
            position: slot.position,
            registration: vehicle.registration.clone(),
            color: vehicle.color.clone(),
        }
    }
}
