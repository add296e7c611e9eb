//! Command dispatch layer
//!
//! Parses a line of input into a [`Command`] and routes it to the
//! [`SlotAllocator`](crate::lot::SlotAllocator) through a
//! [`CommandDispatcher`]. Expected failures are typed
//! [`Error`](crate::error::Error) values; [`Response`] is the rendered
//! success/message/data contract handed to the front ends.

pub mod dispatcher;
pub mod response;

pub use dispatcher::CommandDispatcher;
pub use response::{Outcome, Response, ResponseData};

/// A parsed command line: name plus whitespace-separated arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: String,
    pub args: Vec<String>,
}

impl Command {
    /// Create a command from its parts
    pub fn new(name: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    /// Parse one input line, collapsing runs of whitespace
    ///
    /// An empty or all-whitespace line yields an empty name and no
    /// arguments.
    pub fn parse(line: &str) -> Self {
        let mut tokens = line.split_whitespace();
        let name = tokens.next().unwrap_or_default().to_string();
        let args = tokens.map(str::to_string).collect();

        Self { name, args }
    }
}
