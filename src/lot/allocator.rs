//! Slot allocator implementation

use super::slot::{Slot, SlotRecord, Vehicle};
use crate::error::{Error, Result};
use tracing::debug;

/// Fixed-capacity slot allocator
///
/// Owns the slot arena: a vector of N slots addressed by 1-based position,
/// created once and never resized. Allocation always picks the
/// lowest-numbered free slot.
pub struct SlotAllocator {
    /// Slot arena, index i holds position i + 1
    slots: Vec<Slot>,
}

impl SlotAllocator {
    /// Create a new allocator with `capacity` empty slots
    ///
    /// Fails with `InvalidCapacity` when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity);
        }

        let slots = (1..=capacity).map(Slot::new).collect();
        debug!(capacity, "initialized parking lot");

        Ok(Self { slots })
    }

    /// Park a vehicle in the lowest-numbered free slot
    ///
    /// Returns the assigned position. Fails with `DuplicateRegistration`
    /// (carrying the occupied position) if the registration is already
    /// parked, or `LotFull` if no slot is free. A failed call leaves the
    /// lot untouched.
    pub fn allocate(&mut self, registration: &str, color: &str) -> Result<usize> {
        if let Some(position) = self.position_of(registration) {
            return Err(Error::DuplicateRegistration {
                registration: registration.to_string(),
                position,
            });
        }

        let slot = self
            .slots
            .iter_mut()
            .find(|slot| !slot.is_occupied())
            .ok_or(Error::LotFull)?;

        slot.occupy(Vehicle::new(registration, color));
        debug!(position = slot.position, registration, color, "allocated slot");

        Ok(slot.position)
    }

    /// Free the slot at the given 1-based position
    ///
    /// Fails with `OutOfRange` for positions outside [1, N] (zero and
    /// negative included) and `AlreadyFree` when the slot has no occupant.
    pub fn release(&mut self, position: i64) -> Result<()> {
        let capacity = self.slots.len();
        if position < 1 || position > capacity as i64 {
            return Err(Error::OutOfRange { capacity });
        }

        let slot = &mut self.slots[position as usize - 1];
        if !slot.is_occupied() {
            return Err(Error::AlreadyFree(position as usize));
        }

        slot.vacate();
        debug!(position, "released slot");

        Ok(())
    }

    /// Snapshot of all occupied slots in ascending position order
    ///
    /// Read-only; returns independent copies, never references into the
    /// arena.
    pub fn snapshot(&self) -> Vec<SlotRecord> {
        self.slots
            .iter()
            .filter_map(|slot| slot.vehicle().map(|v| SlotRecord::from_slot(slot, v)))
            .collect()
    }

    /// Position of the vehicle with the given registration (exact match)
    pub fn find_by_registration(&self, registration: &str) -> Result<usize> {
        self.position_of(registration).ok_or(Error::NotFound)
    }

    /// Registrations of all parked vehicles with the given color,
    /// ascending slot order; empty when none match
    pub fn registrations_by_color(&self, color: &str) -> Vec<String> {
        self.occupied_matching(color)
            .map(|(_, vehicle)| vehicle.registration.clone())
            .collect()
    }

    /// Positions of all slots holding a vehicle of the given color,
    /// ascending order; empty when none match
    pub fn slots_by_color(&self, color: &str) -> Vec<usize> {
        self.occupied_matching(color)
            .map(|(slot, _)| slot.position)
            .collect()
    }

    /// Total number of slots in the lot
    pub fn total_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots currently holding a vehicle
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_occupied()).count()
    }

    /// Number of free slots
    pub fn available_count(&self) -> usize {
        self.total_count() - self.occupied_count()
    }

    fn position_of(&self, registration: &str) -> Option<usize> {
        self.slots
            .iter()
            .find(|slot| {
                slot.vehicle()
                    .is_some_and(|v| v.registration == registration)
            })
            .map(|slot| slot.position)
    }

    fn occupied_matching<'a>(
        &'a self,
        color: &'a str,
    ) -> impl Iterator<Item = (&'a Slot, &'a Vehicle)> + 'a {
        self.slots.iter().filter_map(move |slot| {
            slot.vehicle()
                .filter(|v| v.color_matches(color))
                .map(|v| (slot, v))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lot_of(capacity: usize) -> SlotAllocator {
        SlotAllocator::new(capacity).unwrap()
    }

    #[test]
    fn test_fresh_lot_counts() {
        let lot = lot_of(6);

        assert_eq!(lot.total_count(), 6);
        assert_eq!(lot.available_count(), 6);
        assert_eq!(lot.occupied_count(), 0);
        assert!(lot.snapshot().is_empty());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert_eq!(SlotAllocator::new(0).err(), Some(Error::InvalidCapacity));
    }

    #[test]
    fn test_allocate_picks_lowest_free_slot() {
        let mut lot = lot_of(6);

        assert_eq!(lot.allocate("KA-01-HH-1234", "White").unwrap(), 1);
        assert_eq!(lot.allocate("KA-01-HH-9999", "Black").unwrap(), 2);
        assert_eq!(lot.allocate("KA-01-BB-0001", "Red").unwrap(), 3);
        assert_eq!(lot.occupied_count(), 3);
    }

    #[test]
    fn test_released_gap_is_reused_first() {
        let mut lot = lot_of(6);

        lot.allocate("CAR-A", "White").unwrap();
        lot.allocate("CAR-B", "Blue").unwrap();
        lot.allocate("CAR-C", "Black").unwrap();

        lot.release(2).unwrap();

        // Slot 2 is the lowest free slot now, not slot 4
        assert_eq!(lot.allocate("CAR-D", "Red").unwrap(), 2);
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut lot = lot_of(6);
        lot.allocate("KA-01-HH-1234", "White").unwrap();

        let err = lot.allocate("KA-01-HH-1234", "Black").unwrap_err();
        assert_eq!(
            err,
            Error::DuplicateRegistration {
                registration: "KA-01-HH-1234".into(),
                position: 1,
            }
        );
        assert_eq!(
            err.to_string(),
            "Car with registration number KA-01-HH-1234 is already parked in slot 1"
        );

        // The failed attempt must not change occupancy
        assert_eq!(lot.occupied_count(), 1);
    }

    #[test]
    fn test_full_lot_rejects_allocation() {
        let mut lot = lot_of(2);
        lot.allocate("CAR-A", "White").unwrap();
        lot.allocate("CAR-B", "White").unwrap();

        assert_eq!(lot.allocate("CAR-C", "Black").unwrap_err(), Error::LotFull);
        assert_eq!(lot.occupied_count(), 2);
    }

    #[test]
    fn test_release_bounds() {
        let mut lot = lot_of(6);

        assert_eq!(
            lot.release(0).unwrap_err(),
            Error::OutOfRange { capacity: 6 }
        );
        assert_eq!(
            lot.release(7).unwrap_err(),
            Error::OutOfRange { capacity: 6 }
        );
        assert_eq!(
            lot.release(-3).unwrap_err(),
            Error::OutOfRange { capacity: 6 }
        );
    }

    #[test]
    fn test_double_release_fails_second_time() {
        let mut lot = lot_of(6);
        lot.allocate("CAR-A", "White").unwrap();

        lot.release(1).unwrap();
        assert_eq!(lot.release(1).unwrap_err(), Error::AlreadyFree(1));
    }

    #[test]
    fn test_park_leave_park_round_trip() {
        let mut lot = lot_of(3);

        let first = lot.allocate("CAR-A", "White").unwrap();
        lot.release(first as i64).unwrap();

        // Same registration may park again and gets the same slot back
        assert_eq!(lot.allocate("CAR-A", "White").unwrap(), first);
    }

    #[test]
    fn test_find_by_registration() {
        let mut lot = lot_of(6);
        lot.allocate("KA-01-HH-1234", "White").unwrap();
        lot.allocate("KA-01-HH-9999", "Black").unwrap();

        assert_eq!(lot.find_by_registration("KA-01-HH-9999").unwrap(), 2);
        assert_eq!(
            lot.find_by_registration("MH-04-AY-1111").unwrap_err(),
            Error::NotFound
        );
        // Registration match is case-sensitive
        assert_eq!(
            lot.find_by_registration("ka-01-hh-9999").unwrap_err(),
            Error::NotFound
        );
    }

    #[test]
    fn test_color_filters_are_case_insensitive() {
        let mut lot = lot_of(6);
        lot.allocate("CAR-A", "White").unwrap();
        lot.allocate("CAR-B", "Black").unwrap();
        lot.allocate("CAR-C", "white").unwrap();

        assert_eq!(
            lot.registrations_by_color("WHITE"),
            vec!["CAR-A".to_string(), "CAR-C".to_string()]
        );
        assert_eq!(lot.slots_by_color("white"), vec![1, 3]);
        assert!(lot.registrations_by_color("Green").is_empty());
        assert!(lot.slots_by_color("Green").is_empty());
    }

    #[test]
    fn test_snapshot_is_ordered_and_skips_free_slots() {
        let mut lot = lot_of(4);
        lot.allocate("CAR-A", "White").unwrap();
        lot.allocate("CAR-B", "Black").unwrap();
        lot.allocate("CAR-C", "Red").unwrap();
        lot.release(2).unwrap();

        let records = lot.snapshot();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].position, 1);
        assert_eq!(records[0].registration, "CAR-A");
        assert_eq!(records[1].position, 3);
        assert_eq!(records[1].color, "Red");
    }
}
