#![allow(clippy::enum_variant_names)]

use std::io::IsTerminal as _;

use clap::{CommandFactory as _, Parser as _, error::ErrorKind};
use tracing::debug;

use crate::{
    application::{Application, ApplicationError, RuntimeConfig},
    cli::Cli,
};

mod application;
mod cli;
mod compare;
mod ext;
mod report;
mod walker;

#[snafu::report]
fn main() -> Result<(), ApplicationError> {
    let cli_args = Cli::parse();
    setup_tracing(&cli_args);
    debug!("Parsed CLI arguments: {cli_args:?}");

    let runtime_config = match RuntimeConfig::try_from(cli_args) {
        Ok(config) => config,
        Err(e) => Cli::command().error(ErrorKind::ValueValidation, e).exit(),
    };
    if runtime_config.colorize {
        colored::control::set_override(true);
    }

    Application::run(runtime_config)?;

    Ok(())
}

fn setup_tracing(cli_args: &Cli) {
    tracing_subscriber::fmt()
        .with_max_level(cli_args.log_level.to_level_filter())
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .compact()
        .init();
}
