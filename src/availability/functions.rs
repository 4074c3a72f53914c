//! The impls and functions
//!
use chrono::{DateTime, Local};
use std::{fs, io::Write, path::Path, time::Instant};
use quick_xml::se::Serializer;
use serde::Serialize;
use log::*;
use anyhow::{Result, Context};
use crate::availability::{AvailabilityReport, AvailabilityThresholds, Threshold, Data, NumericValue};

pub const SLS_NAMESPACE: &str = "http://sls.cern.ch/SLS/XML/update";
pub const SERVICE_ID: &str = "PilotFactory_voatlas60";
pub const SERVICE_SHORTNAME: &str = "PilotFactory_voatlas60";
pub const SERVICE_FULLNAME: &str = "AutoPyFactory monitoring service on voatlas60";
pub const AVAILABILITY_DESC: &str = "Monitor logfile";
pub const AVAILABILITY_INFO: &str = "Log file should be fresh < 300s";
pub const REFRESH_PERIOD: u32 = 10;
pub const VALIDITY_DURATION: u32 = 20;
pub const NOTES: &str = "http://apfmon.lancs.ac.uk/mon/";
/// The factory does not expose a job count per cycle, the report carries this fixed value.
pub const NJOBS: i64 = 123;

/// Map the age of the log file in seconds to the availability percentage.
///
/// A negative age (log file modification time in the future) counts as fresh.
pub fn availability_from_age(age: i64) -> u8
{
    match age {
        age if age < 300 => 100,
        age if age < 600 => 75,
        age if age < 1800 => 25,
        _ => 0,
    }
}

/// The age in whole seconds of the file at `logfile` at the time `now`.
///
/// Fractions of a second are truncated.
/// A missing or unreadable file is an error.
pub fn logfile_age(
    logfile: &Path,
    now: DateTime<Local>,
) -> Result<i64>
{
    let modified = fs::metadata(logfile)
        .and_then(|metadata| metadata.modified())
        .with_context(|| format!("Error reading modification time of: {}", logfile.display()))?;
    let logtime: DateTime<Local> = DateTime::from(modified);
    debug!("logfile: {}, modification time: {}", logfile.display(), logtime);

    Ok((now - logtime).num_seconds())
}

impl AvailabilityReport {
    pub fn generate(
        logfile: &Path,
    ) -> Result<AvailabilityReport>
    {
        info!("begin report");
        let timer = Instant::now();

        let now = Local::now();
        let age = logfile_age(logfile, now)?;
        let report = AvailabilityReport::build(age, now);

        info!("end report: age: {}s, availability: {}%, {:?}", age, report.availability, timer.elapsed());

        Ok(report)
    }
    /// Assemble the report for a log file of `age` seconds.
    /// `timestamp` is the time of the report, and is shared by all the data points.
    pub fn build(
        age: i64,
        timestamp: DateTime<Local>,
    ) -> AvailabilityReport
    {
        let thresholds = [("available", 75), ("affected", 45), ("degraded", 15)]
            .into_iter()
            .map(|(level, percentage)| Threshold { level: level.to_string(), percentage })
            .collect();

        AvailabilityReport {
            xmlns: SLS_NAMESPACE.to_string(),
            id: SERVICE_ID.to_string(),
            shortname: SERVICE_SHORTNAME.to_string(),
            fullname: SERVICE_FULLNAME.to_string(),
            availability: availability_from_age(age),
            availabilitythresholds: AvailabilityThresholds { threshold: thresholds },
            availabilitydesc: AVAILABILITY_DESC.to_string(),
            availabilityinfo: AVAILABILITY_INFO.to_string(),
            refreshperiod: REFRESH_PERIOD,
            validityduration: VALIDITY_DURATION,
            notes: NOTES.to_string(),
            timestamp,
            data: Data {
                numericvalue: vec![
                    NumericValue {
                        name: "age".to_string(),
                        desc: "Age of log file in seconds".to_string(),
                        timestamp,
                        value: age,
                    },
                    NumericValue {
                        name: "njobs".to_string(),
                        desc: "Number of jobs this cycle".to_string(),
                        timestamp,
                        value: NJOBS,
                    },
                ],
            },
        }
    }
    /// Look up a data point by name.
    pub fn value(
        &self,
        name: &str,
    ) -> Option<i64>
    {
        self.data.numericvalue.iter()
            .find(|numericvalue| numericvalue.name == name)
            .map(|numericvalue| numericvalue.value)
    }
    pub fn to_xml(&self) -> Result<String>
    {
        let mut xml = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
        // written without indentation, so the text of threshold and numericvalue stays inline.
        let serializer = Serializer::new(&mut xml);
        self.serialize(serializer)
            .with_context(|| "Error serializing the availability report")?;
        Ok(xml)
    }
    pub fn print(&self) -> Result<()>
    {
        info!("print availability report");

        let xml = self.to_xml()?;
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", xml)?;
        Ok(())
    }
}
