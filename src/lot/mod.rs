//! Slot Allocator
//!
//! The in-memory core of the system. Manages a fixed arena of parking
//! slots with lowest-free-slot allocation.
//!
//! # Architecture
//!
//! ```text
//! SlotAllocator
//!   └─→ [Slot 1] [Slot 2] [Slot 3] ... [Slot N]
//!          │
//!          └─→ Option<Vehicle> { registration, color }
//! ```
//!
//! Slots are created once at construction and never move; allocation scans
//! ascending positions and takes the first free slot, so a released gap is
//! always refilled before higher positions.

pub mod allocator;
pub mod slot;

pub use allocator::SlotAllocator;
pub use slot::{Slot, SlotRecord, Vehicle};
