//! Structured command results

use crate::error::{Error, Result};
use crate::lot::SlotRecord;
use serde::Serialize;

/// Successful result of one dispatched command
///
/// The typed half of the dispatch boundary; [`Response`] is its rendered
/// form.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    LotCreated {
        capacity: usize,
    },
    Allocated {
        position: usize,
    },
    Released {
        position: usize,
    },
    Status(Vec<SlotRecord>),
    RegistrationsByColor {
        color: String,
        registrations: Vec<String>,
    },
    SlotsByColor {
        color: String,
        positions: Vec<usize>,
    },
    SlotForRegistration {
        position: usize,
    },
}

/// Structured payload attached to a successful response
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseData {
    Position(usize),
    Positions(Vec<usize>),
    Registrations(Vec<String>),
    Status(Vec<SlotRecord>),
}

/// The success/message/data contract the front ends render
///
/// Every dispatched command produces exactly one `Response`; failures are
/// carried as `success = false` with the error's stable message and kind,
/// never as a propagated fault.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Error>,
}

impl Response {
    /// Convert a typed dispatch result into the rendered contract
    pub fn from_result(result: Result<Outcome>) -> Self {
        match result {
            Ok(outcome) => Self::from_outcome(outcome),
            Err(error) => Self {
                success: false,
                message: error.to_string(),
                data: None,
                error: Some(error),
            },
        }
    }

    fn from_outcome(outcome: Outcome) -> Self {
        let (message, data) = match outcome {
            Outcome::LotCreated { capacity } => {
                (format!("Created a parking lot with {capacity} slots"), None)
            }
            Outcome::Allocated { position } => (
                format!("Allocated slot number: {position}"),
                Some(ResponseData::Position(position)),
            ),
            Outcome::Released { position } => (format!("Slot number {position} is free"), None),
            Outcome::Status(records) => {
                let message = if records.is_empty() {
                    "Parking lot is empty".to_string()
                } else {
                    "Current parking lot status".to_string()
                };
                (message, Some(ResponseData::Status(records)))
            }
            Outcome::RegistrationsByColor {
                color,
                registrations,
            } => {
                let message = if registrations.is_empty() {
                    format!("No cars found with color {color}")
                } else {
                    registrations.join(", ")
                };
                (message, Some(ResponseData::Registrations(registrations)))
            }
            Outcome::SlotsByColor { color, positions } => {
                let message = if positions.is_empty() {
                    format!("No cars found with color {color}")
                } else {
                    positions
                        .iter()
                        .map(usize::to_string)
                        .collect::<Vec<_>>()
                        .join(", ")
                };
                (message, Some(ResponseData::Positions(positions)))
            }
            Outcome::SlotForRegistration { position } => (
                position.to_string(),
                Some(ResponseData::Position(position)),
            ),
        };

        Self {
            success: true,
            message,
            data,
            error: None,
        }
    }
}
