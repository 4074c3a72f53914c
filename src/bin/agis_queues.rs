//! Output a factory queue configuration using ACTIVE sites from the specified cloud and activity type.
//!
use clap::Parser;
use log::*;
use anyhow::Result;
use apf_monitor::queues::{build_url, Activity, AllQueues};
use apf_monitor::utility;

#[derive(Debug, Parser)]
#[command(version, about = "Output a factory queue configuration using ACTIVE sites from the\nspecified cloud and activity type.")]
struct Opts {
    /// name of cloud
    #[arg(short, default_value = "ALL")]
    cloud: String,
    /// activity filter
    #[arg(short, value_enum, default_value_t = Activity::Analysis)]
    activity: Activity,
    /// name of queue key
    #[arg(short, default_value = "ce_name")]
    keyname: String,
    /// Set logging level to WARNING [default]
    #[arg(short, long, conflicts_with = "info")]
    quiet: bool,
    /// Set logging level to INFO [default WARNING]
    #[arg(short = 'v', long)]
    info: bool,
}

impl Opts {
    fn log_level(&self) -> LevelFilter
    {
        if self.info {
            LevelFilter::Info
        } else {
            LevelFilter::Warn
        }
    }
}

fn main() -> Result<()>
{
    dotenv::dotenv().ok();
    let options = Opts::parse();

    utility::init_logger(options.log_level(), env_logger::Target::Stdout);

    info!("Cloud: {}", options.cloud.to_uppercase());
    info!("Activity: {}", options.activity);
    // the key name is accepted, but does not change the listing.
    debug!("Key name: {}", options.keyname);

    let url = build_url(&utility::set_agis_url(), &options.cloud);
    info!("{}", url);
    let timeout = utility::set_http_timeout()?;

    AllQueues::list(&url, timeout, options.activity)
}
