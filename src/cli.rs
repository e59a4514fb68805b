//! CLI argument definitions.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::DEFAULT_ELEMENT_ID;

/// Top-level CLI parser for `dashclock`.
#[derive(Debug, Parser)]
#[command(name = "dashclock", version, about = "Keep a dashboard clock showing the current UTC time")]
pub struct Cli {
    /// Log at debug level unless `DASHCLOCK_LOG` says otherwise.
    #[arg(short, long, global = true)]
    pub verbose: bool,
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the clock and keep its surface updated until Ctrl-C.
    Run(RunArgs),
    /// Print a single clock label and exit.
    Once {
        /// Render this RFC 3339 instant instead of the current time.
        #[arg(long)]
        at: Option<DateTime<Utc>>,
    },
    /// Replay the clock readings of a recorded cassette.
    Replay {
        /// Cassette file written by `run --record`.
        cassette: PathBuf,
        /// Element id the replayed labels are written to.
        #[arg(long, default_value = DEFAULT_ELEMENT_ID)]
        element: String,
        /// Fail if a replayed label differs from the recorded page write.
        #[arg(long)]
        verify: bool,
    },
}

/// Where the clock's output surface lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SurfaceKind {
    /// A single line on stdout, rewritten in place.
    Terminal,
    /// A file named after the element id inside `--root`.
    Directory,
}

/// Arguments for `dashclock run`.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Id of the element to keep updated.
    #[arg(long, env = "DASHCLOCK_ELEMENT", default_value = DEFAULT_ELEMENT_ID)]
    pub element: String,
    /// Milliseconds between ticks.
    #[arg(long, env = "DASHCLOCK_PERIOD_MS", default_value_t = 1000)]
    pub period_ms: u64,
    /// Output surface to write.
    #[arg(long, value_enum, default_value_t = SurfaceKind::Terminal)]
    pub surface: SurfaceKind,
    /// Directory holding element files, for `--surface directory`.
    #[arg(long, required_if_eq("surface", "directory"))]
    pub root: Option<PathBuf>,
    /// Stop after this many ticks instead of waiting for Ctrl-C.
    #[arg(long)]
    pub ticks: Option<u64>,
    /// Record every clock reading and page write to this cassette file.
    #[arg(long)]
    pub record: Option<PathBuf>,
}
