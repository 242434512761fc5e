//! Command-line interface definitions.
//!
//! Report selection keeps the single-dash vocabulary (`-salary`, `-age`,
//! ...) as free positional tokens so that unknown ones can be reported and
//! skipped instead of aborting the parse. Regular flags use `--long` form
//! and must go before the report options: once the first option is seen,
//! every remaining argument (including `--json`) is taken as an option.
//! Repeating a flag is harmless (`-qq`).

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Descriptive statistics over the employees API
#[derive(Parser, Debug)]
#[command(name = "empstats")]
#[command(version, about, long_about = None)]
#[command(disable_help_flag = true)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Report options: -salary, -age, -summary, -modes, -treemap, -help
    /// (flags must come before them)
    #[arg(value_name = "OPTION", allow_hyphen_values = true)]
    pub options: Vec<String>,

    /// Path to configuration file
    #[arg(long, default_value = "empstats.toml")]
    pub config: PathBuf,

    /// Override the API base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Color output mode [auto, always, never]
    #[arg(long, default_value = "auto", hide_possible_values = true)]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long)]
    pub json: bool,

    /// Suppress the banner and other decorations
    #[arg(short, long)]
    pub quiet: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}
