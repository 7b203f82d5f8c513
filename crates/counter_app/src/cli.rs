//! Command-line interface.
//!
//! ```bash
//! # Interactive counter
//! counter
//!
//! # Custom title, no colour, inline rendering
//! counter --title "Visitors" --no-color --no-alt-screen
//!
//! # Headless: apply actions and print the result
//! counter run inc inc dec add:10
//!
//! # Print the first frame without a TTY
//! counter render
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::action::Action;

/// A terminal counter with increment, decrement and reset controls.
#[derive(Parser, Debug, Clone)]
#[command(name = "counter", author, version, about)]
pub struct Cli {
    /// Header title
    #[arg(long, short = 't', env = "COUNTER_TITLE")]
    pub title: Option<String>,

    /// Path to a TOML config file
    #[arg(long, short = 'c', env = "COUNTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Amount PageUp/PageDown move the value by
    #[arg(long, env = "COUNTER_STEP", allow_negative_numbers = true)]
    pub step: Option<i64>,

    /// Disable colour output
    ///
    /// A non-empty `NO_COLOR` environment variable has the same effect
    #[arg(long)]
    pub no_color: bool,

    /// Disable mouse capture
    #[arg(long)]
    pub no_mouse: bool,

    /// Render in the main terminal buffer instead of the alternate screen
    #[arg(long)]
    pub no_alt_screen: bool,

    /// Write logs to this file
    #[arg(long, env = "COUNTER_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Optional subcommand
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Apply actions headlessly and print the final value
    Run(RunArgs),

    /// Print the initial screen once and exit
    Render,

    /// Print the resolved configuration as TOML
    Config,
}

/// Arguments for `run`.
#[derive(Parser, Debug, Clone)]
pub struct RunArgs {
    /// Actions in order: inc|+, dec|-, reset|r, add:<n>, sub:<n>
    #[arg(required = true, allow_hyphen_values = true)]
    pub actions: Vec<Action>,
}

impl Cli {
    /// Parse process arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse from an iterator (for tests).
    ///
    /// # Errors
    ///
    /// Returns an error if argument parsing fails.
    pub fn try_parse_from<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Log level for the current verbosity.
    #[must_use]
    pub const fn log_level(&self) -> LogLevel {
        LogLevel::from_verbosity(self.verbose)
    }
}

/// Log level selected by `-v` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Warnings and errors
    Warn,
    /// Plus info
    Info,
    /// Plus debug
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Map a `-v` count to a level.
    #[must_use]
    pub const fn from_verbosity(verbose: u8) -> Self {
        match verbose {
            0 => Self::Warn,
            1 => Self::Info,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// Directive understood by `tracing_subscriber::EnvFilter`.
    #[must_use]
    pub const fn as_directive(self) -> &'static str {
        match self {
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}
