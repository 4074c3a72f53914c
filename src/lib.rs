//! Monitoring helpers for AutoPyFactory.
//!
//! Two independent tools are built from this library:
//! - `apfsls`: reads the age of the factory log file and prints an SLS availability report (XML).
//! - `agis_queues`: reads the AGIS PanDA queue directory (JSON) and lists the active queues
//!   for an activity, together with their `maxrss` setting.
//!
extern crate serde;
extern crate serde_json;
#[macro_use]
extern crate serde_derive;

pub mod availability;
pub mod queues;
pub mod utility;
pub mod error;
