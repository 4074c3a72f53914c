//! The structs
//!
use std::{collections::BTreeMap, fmt};
use clap::ValueEnum;
use serde_json::Value;

/// The activity type of a queue, which is the `type` field in the queue settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Activity {
    Analysis,
    Production,
}
/// The queue directory as read from AGIS.
///
/// The BTreeMap keeps the queues ordered by name.
#[derive(Debug, Default)]
pub struct AllQueues {
    pub queues: BTreeMap<String, Value>,
}
/// A line of output of the queue listing.
#[derive(Debug, PartialEq)]
pub enum QueueLine {
    /// A queue that passed the filters.
    Match {
        name: String,
        maxrss: Value,
    },
    /// A queue that misses a field that is needed to filter or print it.
    KeyError {
        key: &'static str,
    },
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for QueueLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // strings are printed without the JSON quotes.
            QueueLine::Match { name, maxrss: Value::String(maxrss) } => write!(f, "{} maxrss: {}", name, maxrss),
            // other values, null included, print as JSON text: null prints as `null`.
            QueueLine::Match { name, maxrss } => write!(f, "{} maxrss: {}", name, maxrss),
            // the blank line after a key error separates it from the listing.
            QueueLine::KeyError { key } => writeln!(f, "# Key error: '{}'", key),
        }
    }
}
