use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI for BetterCal.
#[derive(Debug, Parser)]
#[command(name = "bettercal")]
#[command(about = "Turn a TISS calendar URL into a BetterCal subscription link", long_about = None)]
pub struct Cli {
    /// Print debug logs to the terminal.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding config.json (defaults to the platform config dir).
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Verify a TISS calendar URL and print the personal BetterCal link.
    Link {
        /// Calendar URL as copied from TISS (a trailing "Download" is fine).
        url: String,

        /// Tweak the feed for Google Calendar.
        #[arg(long)]
        google: bool,

        /// Use full lecture names instead of abbreviations.
        #[arg(long)]
        no_shorthand: bool,

        /// Also copy the link to the clipboard via the terminal.
        #[arg(long)]
        copy: bool,

        /// Server origin to verify against and root the link at.
        #[arg(long)]
        origin: Option<String>,
    },

    /// Turn chart rows (`[[date, daily, monthly, total], ...]`) into a chart config.
    Chart {
        /// JSON file with the rows.
        path: PathBuf,
    },

    /// Print the usage headline for chart rows.
    Summary {
        /// JSON file with the rows.
        path: PathBuf,
    },

    /// Show the effective configuration.
    Config {
        /// Write the current configuration to config.json.
        #[arg(long)]
        init: bool,
    },
}
