// ParkLot - Rust Implementation
// A fixed-capacity parking lot automation system

#![warn(rust_2018_idioms)]

pub mod command;
pub mod input;
pub mod lot;

// Re-exports for convenience
pub use command::{Command, CommandDispatcher, Outcome, Response};
pub use lot::{SlotAllocator, SlotRecord, Vehicle};

/// ParkLot error types
pub mod error {
    use serde::Serialize;
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
    pub enum Error {
        #[error("Number of slots must be a positive integer")]
        InvalidCapacity,

        #[error("Car with registration number {registration} is already parked in slot {position}")]
        DuplicateRegistration {
            registration: String,
            position: usize,
        },

        #[error("Sorry, parking lot is full")]
        LotFull,

        #[error("Invalid slot number. Slot must be between 1 and {capacity}")]
        OutOfRange { capacity: usize },

        #[error("Slot number {0} is already free")]
        AlreadyFree(usize),

        #[error("Not found")]
        NotFound,

        #[error("Parking lot not created. Please create a parking lot first.")]
        LotNotInitialized,

        #[error("{0}")]
        Usage(String),

        #[error("Unknown command: {0}")]
        UnknownCommand(String),

        #[error("Error processing command: {0}")]
        Internal(String),
    }

    pub type Result<T> = std::result::Result<T, Error>;
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
