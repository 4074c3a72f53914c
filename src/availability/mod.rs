//! Module for the SLS availability report of the pilot factory.
//!
//! The factory writes its log file every cycle, so the age of the log file is a measure of the factory being alive.
//! The age is mapped to an availability percentage:
//! - younger than 300 seconds: 100
//! - younger than 600 seconds: 75
//! - younger than 1800 seconds: 25
//! - otherwise: 0
//!
//! The report is an SLS `serviceupdate` XML document, which is written to stdout.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
