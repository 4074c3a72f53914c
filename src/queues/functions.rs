//! The impls and functions
//!
use std::{io::Write, time::{Duration, Instant}};
use serde_json::Value;
use log::*;
use anyhow::{bail, Result, Context};
use crate::utility;
use crate::queues::{Activity, AllQueues, QueueLine};

/// Only queues of this VO are listed.
pub const VO_NAME: &str = "atlas";
pub const SITE_STATE_ACTIVE: &str = "ACTIVE";

/// Add the cloud to the AGIS url, unless all clouds are requested.
///
/// The cloud is compared and added in upper case.
pub fn build_url(
    base_url: &str,
    cloud: &str,
) -> String
{
    let cloud = cloud.to_uppercase();
    if cloud == "ALL" {
        base_url.to_string()
    } else {
        format!("{}&cloud={}", base_url, cloud)
    }
}

impl Activity {
    pub fn as_str(&self) -> &'static str
    {
        match self {
            Activity::Analysis => "analysis",
            Activity::Production => "production",
        }
    }
}

impl AllQueues {
    pub fn new() -> Self { Default::default() }
    /// Read the queue directory from `url` and print the queues for `activity`.
    pub fn list(
        url: &str,
        timeout: Duration,
        activity: Activity,
    ) -> Result<()>
    {
        info!("begin list");
        let timer = Instant::now();

        let allqueues = AllQueues::read_http(url, timeout)?;
        allqueues.print(activity)?;

        info!("end list: {:?}", timer.elapsed());

        Ok(())
    }
    pub fn read_http(
        url: &str,
        timeout: Duration,
    ) -> Result<AllQueues>
    {
        info!("begin http read");
        let timer = Instant::now();

        let data_from_http = utility::http_get(url, timeout)?;
        let allqueues = AllQueues::parse_queues(&data_from_http)?;

        info!("end http read: {} queues, {:?}", allqueues.queues.len(), timer.elapsed());

        Ok(allqueues)
    }
    // This function parses the http output.
    // This is a separate function in order to allow tests to use it.
    pub fn parse_queues(
        http_data: &str,
    ) -> Result<AllQueues>
    {
        let mut allqueues = AllQueues::new();
        allqueues.queues = serde_json::from_str(http_data)
            .with_context(|| "Error parsing the queue directory")?;
        // a queue without settings cannot be filtered, the directory as a whole is malformed.
        if let Some((name, queue)) = allqueues.queues.iter().find(|(_, queue)| !queue.is_object()) {
            bail!("Error parsing the queue directory: queue {} is not an object: {}", name, queue);
        }
        Ok(allqueues)
    }
    /// Filter the queues and return the lines to print, in queue name order.
    pub fn select(
        &self,
        activity: Activity,
    ) -> Vec<QueueLine>
    {
        let mut lines = Vec::new();
        for (name, queue) in &self.queues
        {
            match AllQueues::match_queue(name, queue, activity)
            {
                Ok(Some(line)) => lines.push(line),
                Ok(None) => {},
                Err(key) => {
                    debug!("queue: {}, missing key: {}", name, key);
                    lines.push(QueueLine::KeyError { key });
                },
            }
        }
        lines
    }
    // The fields are read in this order, and only when needed:
    // vo_name, site_state, type (only for ACTIVE queues), maxrss (only for a match).
    // The first field that is missing is returned as error.
    fn match_queue(
        name: &str,
        queue: &Value,
        activity: Activity,
    ) -> Result<Option<QueueLine>, &'static str>
    {
        let field = |key: &'static str| queue.get(key).ok_or(key);

        if field("vo_name")? != VO_NAME {
            return Ok(None);
        }
        if field("site_state")? == SITE_STATE_ACTIVE
            && field("type")? == activity.as_str()
        {
            return Ok(Some(QueueLine::Match { name: name.to_string(), maxrss: field("maxrss")?.clone() }));
        }
        Ok(None)
    }
    pub fn write_lines<W: Write>(
        &self,
        activity: Activity,
        out: &mut W,
    ) -> Result<()>
    {
        for line in self.select(activity)
        {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
    pub fn print(
        &self,
        activity: Activity,
    ) -> Result<()>
    {
        info!("print queues");

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        self.write_lines(activity, &mut handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(
        http_data: &str,
        activity: Activity,
    ) -> String
    {
        let allqueues = AllQueues::parse_queues(http_data).unwrap();
        let mut output = Vec::new();
        allqueues.write_lines(activity, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn unit_build_url_all() {
        assert_eq!(build_url("http://agis/list/?json", "ALL"), "http://agis/list/?json");
        assert_eq!(build_url("http://agis/list/?json", "all"), "http://agis/list/?json");
    }

    #[test]
    fn unit_build_url_cloud() {
        assert_eq!(build_url("http://agis/list/?json", "uk"), "http://agis/list/?json&cloud=UK");
        assert_eq!(build_url("http://agis/list/?json", "De"), "http://agis/list/?json&cloud=DE");
    }

    #[test]
    fn unit_parse_active_and_inactive() {
        let queues = r#"
{"Q1": {"vo_name":"atlas","site_state":"ACTIVE","type":"analysis","maxrss":2000},
 "Q2": {"vo_name":"atlas","site_state":"INACTIVE","type":"analysis","maxrss":1000}}
"#;
        assert_eq!(lines(queues, Activity::Analysis), "Q1 maxrss: 2000\n");
    }

    #[test]
    fn unit_parse_activity_filter() {
        let queues = r#"
{"ANALY_A": {"vo_name":"atlas","site_state":"ACTIVE","type":"analysis","maxrss":2000},
 "PROD_B": {"vo_name":"atlas","site_state":"ACTIVE","type":"production","maxrss":4000}}
"#;
        assert_eq!(lines(queues, Activity::Analysis), "ANALY_A maxrss: 2000\n");
        assert_eq!(lines(queues, Activity::Production), "PROD_B maxrss: 4000\n");
    }

    #[test]
    fn unit_parse_other_vo_is_skipped() {
        let queues = r#"
{"CMS_Q": {"vo_name":"cms","site_state":"ACTIVE","type":"analysis","maxrss":2000}}
"#;
        assert_eq!(lines(queues, Activity::Analysis), "");
    }

    #[test]
    fn unit_parse_sorted_output() {
        let queues = r#"
{"ZETA": {"vo_name":"atlas","site_state":"ACTIVE","type":"analysis","maxrss":3},
 "ALPHA": {"vo_name":"atlas","site_state":"ACTIVE","type":"analysis","maxrss":1},
 "MU": {"vo_name":"atlas","site_state":"ACTIVE","type":"analysis","maxrss":2}}
"#;
        assert_eq!(lines(queues, Activity::Analysis), "ALPHA maxrss: 1\nMU maxrss: 2\nZETA maxrss: 3\n");
    }

    #[test]
    fn unit_parse_missing_maxrss_continues() {
        let queues = r#"
{"A": {"vo_name":"atlas","site_state":"ACTIVE","type":"analysis"},
 "B": {"vo_name":"atlas","site_state":"ACTIVE","type":"analysis","maxrss":2500}}
"#;
        assert_eq!(lines(queues, Activity::Analysis), "# Key error: 'maxrss'\n\nB maxrss: 2500\n");
    }

    #[test]
    fn unit_parse_missing_keys_in_read_order() {
        let allqueues = AllQueues::parse_queues(r#"
{"A": {"site_state":"ACTIVE","type":"analysis","maxrss":1},
 "B": {"vo_name":"atlas","type":"analysis","maxrss":1},
 "C": {"vo_name":"atlas","site_state":"ACTIVE","maxrss":1},
 "D": {"vo_name":"atlas","site_state":"OFFLINE"},
 "E": {"vo_name":"atlas","site_state":"ACTIVE","type":"production"}}
"#).unwrap();
        // D is not active, so type is never read; E is not a match, so maxrss is never read.
        assert_eq!(allqueues.select(Activity::Analysis), vec![
            QueueLine::KeyError { key: "vo_name" },
            QueueLine::KeyError { key: "site_state" },
            QueueLine::KeyError { key: "type" },
        ]);
    }

    #[test]
    fn unit_parse_maxrss_rendering() {
        let queues = r#"
{"FLOAT": {"vo_name":"atlas","site_state":"ACTIVE","type":"analysis","maxrss":2000.5},
 "NULL": {"vo_name":"atlas","site_state":"ACTIVE","type":"analysis","maxrss":null},
 "STRING": {"vo_name":"atlas","site_state":"ACTIVE","type":"analysis","maxrss":"3000"}}
"#;
        assert_eq!(lines(queues, Activity::Analysis), "FLOAT maxrss: 2000.5\nNULL maxrss: null\nSTRING maxrss: 3000\n");
    }

    #[test]
    fn unit_parse_non_object_record() {
        let queues = r#"
{"A": {"vo_name":"atlas","site_state":"ACTIVE","type":"analysis","maxrss":1},
 "BROKEN": "not a queue"}
"#;
        let error = AllQueues::parse_queues(queues).unwrap_err();
        assert!(error.to_string().contains("BROKEN"));
        assert!(AllQueues::parse_queues(r#"{"LIST": [1, 2]}"#).is_err());
        assert!(AllQueues::parse_queues(r#"{"NULL": null}"#).is_err());
    }

    #[test]
    fn unit_parse_empty_directory() {
        assert_eq!(lines("{}", Activity::Production), "");
    }

    #[test]
    fn unit_parse_malformed() {
        assert!(AllQueues::parse_queues("Error 500: Internal Server Error").is_err());
        assert!(AllQueues::parse_queues(r#"["Q1", "Q2"]"#).is_err());
        assert!(AllQueues::parse_queues("").is_err());
    }

    #[test]
    fn unit_activity_names() {
        assert_eq!(Activity::Analysis.to_string(), "analysis");
        assert_eq!(Activity::Production.as_str(), "production");
    }
}
