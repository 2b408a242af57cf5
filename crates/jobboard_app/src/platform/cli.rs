use std::path::PathBuf;

use board_logging::LogDestination;
use clap::{Parser, ValueEnum};
use jobboard_engine::{DetailsSettings, DEFAULT_API_BASE};
use log::LevelFilter;

/// Browse and filter the job catalogue from a saved feed.
#[derive(Debug, Parser)]
#[command(name = "jobboard", version, about)]
pub struct Cli {
    /// JSON array of job rows as returned by the listing API.
    #[arg(long, env = "JOBBOARD_FEED")]
    pub feed: PathBuf,

    /// Detail language (en, es, pt). Defaults to the saved session, then English.
    #[arg(long)]
    pub language: Option<String>,

    /// Directory holding the saved filter session.
    #[arg(long, default_value = ".")]
    pub state_dir: PathBuf,

    /// Neither restore nor save the filter session.
    #[arg(long)]
    pub no_session: bool,

    #[arg(long, value_enum, default_value_t = LogTarget::File)]
    pub log: LogTarget,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,

    /// Base URL of the job detail API.
    #[arg(long, env = "JOBBOARD_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    Terminal,
    File,
    Both,
    Off,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::File => LogDestination::File,
            LogTarget::Both => LogDestination::Both,
            LogTarget::Off => LogDestination::Off,
        }
    }
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    pub fn details_settings(&self) -> DetailsSettings {
        DetailsSettings {
            base_url: self.api_base.clone(),
            ..DetailsSettings::default()
        }
    }
}
