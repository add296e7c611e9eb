//! Batch and interactive front ends
//!
//! Glue around the dispatcher: reads command lines from a file or from
//! stdin, echoes each rendered [`Response`]. The core never performs I/O
//! itself.

use crate::command::{Command, CommandDispatcher, Response, ResponseData};
use anyhow::Context;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::info;

/// Header of the `status` table, fixed-width like the message strings
const STATUS_HEADER: &str = "Slot No.    Registration No    Colour";

/// Render a response as the lines printed to the user
///
/// The message comes first; a non-empty `status` result is followed by the
/// occupancy table.
pub fn render(response: &Response) -> String {
    let mut out = response.message.clone();

    if let Some(ResponseData::Status(records)) = &response.data {
        if !records.is_empty() {
            out.push('\n');
            out.push_str(STATUS_HEADER);
            for record in records {
                out.push('\n');
                out.push_str(&format!(
                    "{:<11} {:<18} {}",
                    record.position, record.registration, record.color
                ));
            }
        }
    }

    out
}

/// Execute every non-blank line of a command file in order
pub fn run_batch(dispatcher: &mut CommandDispatcher, path: &Path) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Error reading file {}", path.display()))?;

    info!(path = %path.display(), "running command file");

    for line in content.lines().filter(|line| !line.trim().is_empty()) {
        let response = dispatcher.dispatch(&Command::parse(line));
        println!("{}", render(&response));
    }

    Ok(())
}

/// Interactive shell: prompt, execute, echo, until `exit`/`quit` or EOF
pub fn run_shell(dispatcher: &mut CommandDispatcher) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("Welcome to Parking Lot Automation System");
    println!("Type \"exit\" or \"quit\" to exit the program");
    println!("Available commands:");
    println!("  create_parking_lot <number_of_slots>");
    println!("  park <registration_number> <car_color>");
    println!("  leave <slot_number>");
    println!("  status");
    println!("  registration_numbers_for_cars_with_colour <color>");
    println!("  slot_numbers_for_cars_with_colour <color>");
    println!("  slot_number_for_registration_number <registration_number>");
    println!();

    let mut line = String::new();
    loop {
        print!("parking_lot> ");
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF
            break;
        }

        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
            println!("Goodbye!");
            break;
        }
        if trimmed.is_empty() {
            continue;
        }

        let response = dispatcher.dispatch(&Command::parse(trimmed));
        println!("{}", render(&response));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Outcome;
    use crate::lot::SlotRecord;

    #[test]
    fn test_render_plain_message() {
        let response = Response::from_result(Ok(Outcome::Allocated { position: 1 }));
        assert_eq!(render(&response), "Allocated slot number: 1");
    }

    #[test]
    fn test_render_empty_status_has_no_table() {
        let response = Response::from_result(Ok(Outcome::Status(vec![])));
        assert_eq!(render(&response), "Parking lot is empty");
    }

    #[test]
    fn test_render_status_table() {
        let records = vec![
            SlotRecord {
                position: 1,
                registration: "KA-01-HH-1234".into(),
                color: "White".into(),
            },
            SlotRecord {
                position: 2,
                registration: "KA-01-HH-9999".into(),
                color: "Black".into(),
            },
        ];
        let response = Response::from_result(Ok(Outcome::Status(records)));

        let rendered = render(&response);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Current parking lot status");
        assert_eq!(lines[1], "Slot No.    Registration No    Colour");
        assert_eq!(lines[2], "1           KA-01-HH-1234      White");
        assert_eq!(lines[3], "2           KA-01-HH-9999      Black");
    }

    #[test]
    fn test_render_failure_is_just_the_message() {
        let response = Response::from_result(Err(crate::error::Error::LotFull));
        assert_eq!(render(&response), "Sorry, parking lot is full");
    }
}
