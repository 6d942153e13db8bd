//! # CLI Argument Definitions
//!
//! The `wfh` command line, parsed with `clap`.

use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "wfh")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Settings page schema and watch settings for the Hellboy watchface")]
pub struct Cli {
    /// Configuration file (TOML, JSON or YAML). `WFH__*` variables override it.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Indent JSON output
    #[arg(short, long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the built-in settings page schema
    Schema {},
    /// Validate a schema file and print its summary
    Validate {
        /// Path to the schema JSON file
        file: PathBuf,
    },
    /// Print the initial watch settings
    Defaults {
        /// Derive defaults from this schema instead of the built-in one
        #[arg(short, long)]
        schema: Option<PathBuf>,
    },
    /// Apply a settings message to the defaults and render the clock face
    Apply {
        /// Path to the settings message JSON file, e.g. `{"show_am_pm": 1}`
        payload: PathBuf,

        /// Derive the starting settings from this schema instead of the built-in one
        #[arg(short, long)]
        schema: Option<PathBuf>,

        /// Local time to render, e.g. `2024-03-07T09:05:00` (defaults to now)
        #[arg(long)]
        at: Option<NaiveDateTime>,

        /// Render with the 12-hour system clock
        #[arg(long)]
        twelve_hour: bool,
    },
}
