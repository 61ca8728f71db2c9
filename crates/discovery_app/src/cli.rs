use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::platform::logging::LogDestination;

#[derive(Debug, Parser)]
#[command(
    name = "discovery",
    version,
    about = "Watch a simulated AI pipeline discover videos and playlists"
)]
pub struct Cli {
    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogDestination::File, global = true)]
    pub log: LogDestination,

    /// Log at debug level instead of info.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Timing overrides (RON). Defaults to ./discovery.ron when present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Submit a search and follow it through every processing stage.
    Search {
        /// What you want to learn, e.g. "DP in C++".
        query: String,

        /// Preferred content language code; repeat for several.
        #[arg(short = 'l', long = "lang", default_value = "en")]
        languages: Vec<String>,

        /// Print the result set as JSON instead of the progress view.
        #[arg(long)]
        json: bool,
    },
    /// List the processing stages and their timings.
    Stages,
    /// List supported language codes.
    Languages,
}
