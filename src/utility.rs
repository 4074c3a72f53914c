//! Utilities
use log::*;
use std::{env, io::Write, path::PathBuf, time::Duration};
use chrono::Local;
use anyhow::{Result, Context};
use crate::error::FetchError;

/// The log file the factory writes to every cycle.
pub const DEFAULT_FACTORY_LOG: &str = "/opt/panda/autopyfactory/var/factory.log";
/// The AGIS PanDA queue listing, restricted to the atlas VO.
pub const DEFAULT_AGIS_URL: &str = "http://atlas-agis-api.cern.ch/request/pandaqueue/query/list/?json&preset=schedconf.all&vo_name=atlas";
/// Seconds.
pub const DEFAULT_HTTP_TIMEOUT: u64 = 30;

pub fn http_get(
    url: &str,
    timeout: Duration,
) -> Result<String, FetchError>
{
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| FetchError::from_reqwest(url, timeout, e))?;

    let data_from_web_request = client
        .get(url)
        .send()
        .map_err(|e| FetchError::from_reqwest(url, timeout, e))?;

    if ! data_from_web_request.status().is_success()
    {
        debug!("Non success response: {} = {}", url, data_from_web_request.status());
        return Err(FetchError::UpstreamStatus { url: url.to_string(), status: data_from_web_request.status() });
    }
    debug!("Success response: {} = {}", url, data_from_web_request.status());

    data_from_web_request
        .text()
        .map_err(|e| FetchError::from_reqwest(url, timeout, e))
}

// A setting comes from the environment (possibly filled by dotenv().ok() from .env),
// otherwise the compiled-in default is used.
fn setting(
    key: &str,
    default: &str,
) -> String
{
    match env::var(key) {
        Ok(set_var) => {
            info!("{} set via environment or .env: {}", key, set_var);
            set_var
        }
        Err(_e) => {
            info!("{} not set: using default: {}", key, default);
            default.to_string()
        }
    }
}

pub fn set_factory_log() -> PathBuf
{
    PathBuf::from(setting("APF_FACTORY_LOG", DEFAULT_FACTORY_LOG))
}

pub fn set_agis_url() -> String
{
    setting("APF_AGIS_URL", DEFAULT_AGIS_URL)
}

pub fn set_http_timeout() -> Result<Duration>
{
    parse_timeout(&setting("APF_HTTP_TIMEOUT", &DEFAULT_HTTP_TIMEOUT.to_string()))
}

fn parse_timeout(
    seconds: &str,
) -> Result<Duration>
{
    let seconds: u64 = seconds
        .trim()
        .parse()
        .with_context(|| format!("Error parsing APF_HTTP_TIMEOUT: {}", seconds))?;
    Ok(Duration::from_secs(seconds))
}

/// The level names as the factory logs them, so all APF log lines look alike.
pub fn level_name(level: Level) -> &'static str
{
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARNING",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

/// Set up logging for the process.
///
/// This must be called once, at the start of main, with the level derived from the command line switches.
/// Lines are formatted as `[APF:LEVEL HH:MM:SS] message`.
pub fn init_logger(
    level: LevelFilter,
    target: env_logger::Target,
)
{
    env_logger::Builder::new()
        .filter_level(level)
        .target(target)
        .format(|buf, record| {
            writeln!(buf, "[APF:{} {}] {}", level_name(record.level()), Local::now().format("%T"), record.args())
        })
        .init();
}
