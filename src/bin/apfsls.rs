//! Generate the SLS availability report for the pilot factory.
//!
//! The report is based on the age of the factory log file, and is written to stdout as XML.
//! Logging goes to stderr, so stdout only contains the report.
//!
use clap::Parser;
use log::*;
use anyhow::Result;
use apf_monitor::availability::AvailabilityReport;
use apf_monitor::utility;

#[derive(Debug, Parser)]
#[command(version, about = "Generate xml for the AutoPyFactory SLS reporting")]
struct Opts {
    /// quiet mode
    #[arg(short)]
    quiet: bool,
    /// debug mode
    #[arg(short)]
    debug: bool,
}

impl Opts {
    fn log_level(&self) -> LevelFilter
    {
        if self.debug {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Warn
        } else {
            LevelFilter::Info
        }
    }
}

fn main() -> Result<()>
{
    dotenv::dotenv().ok();
    let options = Opts::parse();

    utility::init_logger(options.log_level(), env_logger::Target::Stderr);

    let logfile = utility::set_factory_log();
    let report = AvailabilityReport::generate(&logfile)?;
    report.print()?;

    Ok(())
}
