#![allow(clippy::print_stdout)]

pub mod handlers;
pub mod models;
pub mod services;

use crate::handlers::{apply, defaults, schema, validate};
use crate::models::args::{Cli, Commands};
use crate::services::logging;

use anyhow::{Context, Result};
use clap::Parser;
use wfh::domain::config::AppConfig;
use wfh::kernel::config::load_config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config: AppConfig =
        load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;
    let _log = logging::init(&config.logging)?;
    let pretty = cli.pretty || config.output.pretty;

    match cli.command {
        Commands::Schema {} => schema::print_schema(pretty)?,
        Commands::Validate { file } => validate::validate_file(&file, pretty)?,
        Commands::Defaults { schema } => defaults::print_defaults(schema.as_deref(), pretty)?,
        Commands::Apply { payload, schema, at, twelve_hour } => {
            apply::apply_payload(&payload, schema.as_deref(), at, twelve_hour, pretty)?;
        },
    }

    Ok(())
}
