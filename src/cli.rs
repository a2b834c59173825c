//! Command-line arguments

use crate::config::Config;
use crate::options::{ConvertOptions, OutputMode};
use crate::zone::Zone;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

const AFTER_HELP: &str = "\
timestamp will print the specified time in the following formats:
  - unix timestamp (number of seconds since January 1, 1970 UTC)
  - rfc 3339 timestamp in the specified timezone (if not UTC)
  - rfc 3339 timestamp in the local timezone (with --local)
  - rfc 3339 timestamp in UTC
  - ordinal date (year and day of the year) in the specified timezone (if not UTC)
  - ordinal date (year and day of the year) in UTC
  - epoch days (number of days since January 1, 1970 UTC) as decimal and
    sexagesimal (newbase60). Only printed for dates after 1970-01-01, always
    calculated in UTC.

TIME can be a unix timestamp (sub-second digits are stripped), a full
RFC 3339 timestamp, a date (YYYY-MM-DD), a date and time without timezone,
an ordinal date (YYYY-DDD), or newbase60 encoded epoch days. If no time is
given, the current system time is used.

Times without an explicit timezone are interpreted in the local system
timezone unless --utc or --zone is given.";

#[derive(Debug, Clone, Parser)]
#[command(name = "timestamp")]
#[command(about = "Print timestamps in various formats")]
#[command(version, after_help = AFTER_HELP)]
pub struct Cli {
    /// Time to convert (default: now)
    #[arg(value_name = "TIME")]
    pub time: Option<String>,

    /// Parse times without timezones as UTC
    #[arg(short, long, conflicts_with = "zone")]
    pub utc: bool,

    /// IANA timezone for times without a timezone, e.g. America/New_York
    #[arg(short, long, value_name = "TZ", value_parser = parse_zone)]
    pub zone: Option<Zone>,

    /// Print RFC 3339 timestamp only
    #[arg(long, conflicts_with = "epoch")]
    pub rfc3339: bool,

    /// Print sexagesimal epoch days only
    #[arg(long)]
    pub epoch: bool,

    /// Also print the RFC 3339 timestamp in the local timezone
    #[arg(long)]
    pub local: bool,

    /// Configuration file (default: ./timestamp.toml or the user config dir)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write a default configuration file to PATH and exit
    #[arg(long, value_name = "PATH")]
    pub generate_config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_zone(s: &str) -> Result<Zone, String> {
    Zone::from_name(s).map_err(|e| e.to_string())
}

impl Cli {
    /// Load the configuration named on the command line, or the default one
    pub fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::load_from_file(path),
            None => Config::load(),
        }
    }

    #[must_use]
    pub fn mode(&self) -> OutputMode {
        if self.rfc3339 {
            OutputMode::Rfc3339Only
        } else if self.epoch {
            OutputMode::EpochDaysOnly
        } else {
            OutputMode::Report
        }
    }

    /// Merge flags over configured options. Flags win.
    pub fn convert_options(&self, config: &Config) -> Result<ConvertOptions> {
        let mut options = config.convert_options()?;

        if self.utc {
            options.utc = true;
        }
        if let Some(zone) = self.zone {
            options.zone = Some(zone);
            options.utc = false;
        }
        if self.local {
            options.show_local = true;
        }
        options.mode = self.mode();

        Ok(options)
    }
}
