//! The structs
//!
use chrono::{DateTime, Local};
use serde::Serializer;

/// The SLS update document.
///
/// The field order is the element order in the XML document.
/// Fields starting with `@` in the serde rename are attributes, `$text` is the element text.
#[derive(Serialize, Debug, Clone)]
#[serde(rename = "serviceupdate")]
pub struct AvailabilityReport {
    #[serde(rename = "@xmlns")]
    pub xmlns: String,
    pub id: String,
    pub shortname: String,
    pub fullname: String,
    /// Percentage: 100, 75, 25 or 0.
    pub availability: u8,
    pub availabilitythresholds: AvailabilityThresholds,
    pub availabilitydesc: String,
    pub availabilityinfo: String,
    /// Minutes, written as xs:duration.
    #[serde(serialize_with = "minutes_as_duration")]
    pub refreshperiod: u32,
    /// Minutes, written as xs:duration.
    #[serde(serialize_with = "minutes_as_duration")]
    pub validityduration: u32,
    pub notes: String,
    #[serde(serialize_with = "sls_timestamp")]
    pub timestamp: DateTime<Local>,
    pub data: Data,
}
/// Wrapper for the list of thresholds, which is the `<availabilitythresholds>` element.
#[derive(Serialize, Debug, Clone, Default)]
pub struct AvailabilityThresholds {
    pub threshold: Vec<Threshold>,
}
/// A threshold is descriptive only, SLS uses it for colouring.
/// It is not used to calculate the availability.
#[derive(Serialize, Debug, Clone)]
pub struct Threshold {
    #[serde(rename = "@level")]
    pub level: String,
    #[serde(rename = "$text")]
    pub percentage: u8,
}
/// Wrapper for the metrics, which is the `<data>` element.
#[derive(Serialize, Debug, Clone, Default)]
pub struct Data {
    pub numericvalue: Vec<NumericValue>,
}
#[derive(Serialize, Debug, Clone)]
pub struct NumericValue {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@desc")]
    pub desc: String,
    #[serde(rename = "@timestamp", serialize_with = "sls_timestamp")]
    pub timestamp: DateTime<Local>,
    #[serde(rename = "$text")]
    pub value: i64,
}

fn sls_timestamp<S: Serializer>(
    timestamp: &DateTime<Local>,
    serializer: S,
) -> Result<S::Ok, S::Error>
{
    serializer.serialize_str(&timestamp.format("%Y-%m-%dT%H:%M:%S").to_string())
}

fn minutes_as_duration<S: Serializer>(
    minutes: &u32,
    serializer: S,
) -> Result<S::Ok, S::Error>
{
    serializer.serialize_str(&format!("PT{}M", minutes))
}
