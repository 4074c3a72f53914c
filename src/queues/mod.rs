//! Module for reading the PanDA queue directory from AGIS.
//!
//! The AGIS endpoint returns a JSON object with the queue name as key, and the queue settings as value:
//! ```text
//! {"ANALY_LANCS": {"vo_name": "atlas", "site_state": "ACTIVE", "type": "analysis", "maxrss": 2000, ...}, ...}
//! ```
//! The queue settings are not modelled, only the fields that are filtered on are read.
//! A queue is listed when it is of the atlas VO, is ACTIVE, and has the requested activity type.
//! Queues are listed in name order.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
