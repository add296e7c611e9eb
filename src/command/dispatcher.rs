//! Command dispatcher implementation

use super::response::{Outcome, Response};
use super::Command;
use crate::error::{Error, Result};
use crate::lot::SlotAllocator;
use std::any::Any;
use std::panic;
use tracing::debug;

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "Unknown error".to_string()
    }
}

/// Routes parsed commands to the slot allocator
///
/// Holds the zero-or-one lot for this session; `create_parking_lot`
/// installs it and every other command requires it. One dispatcher per
/// session keeps independent sessions isolated.
#[derive(Default)]
pub struct CommandDispatcher {
    lot: Option<SlotAllocator>,
}

impl CommandDispatcher {
    /// Create a dispatcher with no lot yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch a command, always producing a structured response
    ///
    /// Expected domain failures arrive as typed errors from [`execute`];
    /// a panic (a programming error) is converted to `Error::Internal`
    /// instead of unwinding past the dispatch boundary.
    ///
    /// [`execute`]: CommandDispatcher::execute
    pub fn dispatch(&mut self, command: &Command) -> Response {
        let result = panic::catch_unwind(panic::AssertUnwindSafe(|| self.execute(command)))
            .unwrap_or_else(|payload| Err(Error::Internal(panic_message(payload))));
        Response::from_result(result)
    }

    /// Typed dispatch boundary
    ///
    /// Command names match case-insensitively. Every failure is a typed
    /// [`Error`]; nothing propagates past this method uncaught.
    pub fn execute(&mut self, command: &Command) -> Result<Outcome> {
        debug!(name = %command.name, args = command.args.len(), "dispatching command");

        match command.name.to_lowercase().as_str() {
            "create_parking_lot" => self.create_parking_lot(&command.args),
            "park" => self.park(&command.args),
            "leave" => self.leave(&command.args),
            "status" => self.status(),
            "registration_numbers_for_cars_with_colour" => {
                self.registrations_by_color(&command.args)
            }
            "slot_numbers_for_cars_with_colour" => self.slots_by_color(&command.args),
            "slot_number_for_registration_number" => self.slot_for_registration(&command.args),
            _ => Err(Error::UnknownCommand(command.name.clone())),
        }
    }

    fn create_parking_lot(&mut self, args: &[String]) -> Result<Outcome> {
        if args.len() != 1 {
            return Err(Error::Usage(
                "Usage: create_parking_lot <number_of_slots>".into(),
            ));
        }

        // Non-numeric and non-positive counts share one failure kind
        let capacity: usize = args[0]
            .parse::<i64>()
            .ok()
            .and_then(|n| usize::try_from(n).ok())
            .filter(|&n| n > 0)
            .ok_or(Error::InvalidCapacity)?;

        self.lot = Some(SlotAllocator::new(capacity)?);

        Ok(Outcome::LotCreated { capacity })
    }

    fn park(&mut self, args: &[String]) -> Result<Outcome> {
        let lot = self.lot_mut()?;

        if args.len() != 2 {
            return Err(Error::Usage(
                "Usage: park <registration_number> <car_color>".into(),
            ));
        }

        let (registration, color) = (&args[0], &args[1]);
        if registration.is_empty() || color.is_empty() {
            return Err(Error::Usage(
                "Registration number and color are required".into(),
            ));
        }

        let position = lot.allocate(registration, color)?;
        Ok(Outcome::Allocated { position })
    }

    fn leave(&mut self, args: &[String]) -> Result<Outcome> {
        let lot = self.lot_mut()?;

        if args.len() != 1 {
            return Err(Error::Usage("Usage: leave <slot_number>".into()));
        }

        // Distinct parse failure, not folded into the range check
        let position: i64 = args[0]
            .parse()
            .map_err(|_| Error::Usage("Slot number must be a valid integer".into()))?;

        lot.release(position)?;
        Ok(Outcome::Released {
            position: position as usize,
        })
    }

    fn status(&mut self) -> Result<Outcome> {
        let lot = self.lot_ref()?;
        Ok(Outcome::Status(lot.snapshot()))
    }

    fn registrations_by_color(&mut self, args: &[String]) -> Result<Outcome> {
        let lot = self.lot_ref()?;

        if args.len() != 1 {
            return Err(Error::Usage(
                "Usage: registration_numbers_for_cars_with_colour <color>".into(),
            ));
        }

        let color = &args[0];
        if color.is_empty() {
            return Err(Error::Usage("Color is required".into()));
        }

        Ok(Outcome::RegistrationsByColor {
            color: color.clone(),
            registrations: lot.registrations_by_color(color),
        })
    }

    fn slots_by_color(&mut self, args: &[String]) -> Result<Outcome> {
        let lot = self.lot_ref()?;

        if args.len() != 1 {
            return Err(Error::Usage(
                "Usage: slot_numbers_for_cars_with_colour <color>".into(),
            ));
        }

        let color = &args[0];
        if color.is_empty() {
            return Err(Error::Usage("Color is required".into()));
        }

        Ok(Outcome::SlotsByColor {
            color: color.clone(),
            positions: lot.slots_by_color(color),
        })
    }

    fn slot_for_registration(&mut self, args: &[String]) -> Result<Outcome> {
        let lot = self.lot_ref()?;

        if args.len() != 1 {
            return Err(Error::Usage(
                "Usage: slot_number_for_registration_number <registration_number>".into(),
            ));
        }

        let registration = &args[0];
        if registration.is_empty() {
            return Err(Error::Usage("Registration number is required".into()));
        }

        let position = lot.find_by_registration(registration)?;
        Ok(Outcome::SlotForRegistration { position })
    }

    // The lot check runs before arity validation, matching the observable
    // ordering of the command language.
    fn lot_mut(&mut self) -> Result<&mut SlotAllocator> {
        self.lot.as_mut().ok_or(Error::LotNotInitialized)
    }

    fn lot_ref(&self) -> Result<&SlotAllocator> {
        self.lot.as_ref().ok_or(Error::LotNotInitialized)
    }
}
