//! # Shutter CLI
//!
//! Drives the resolver catalog from the command line: payloads come from files or
//! stdin, results go to stdout as pretty JSON, logs go to stderr.

pub mod args;
mod commands;

pub use crate::args::{Cli, Command, PairArgs};

use anyhow::Context;
use shutter_kernel::config::load_config;
use shutter_kernel::domain::config::AppConfig;
use shutter_kernel::domain::navigation::RouteState;
use shutter_logger::{Logger, LoggerBuilder};
use shutter_mapper::{Collaborators, SharedNavigation, catalog};
use std::io::{Read, Write};
use std::path::Path;

/// Loads the configuration file, or the built-in defaults when none is given.
pub fn load(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    path.map_or_else(
        || Ok(AppConfig::default()),
        |path| {
            load_config(Some(path))
                .with_context(|| format!("Configuration '{}' is malformed", path.display()))
        },
    )
}

/// Prepares the logger from the `[logging]` section and the `--log-level` override.
pub fn logger(cli: &Cli, config: &AppConfig) -> anyhow::Result<LoggerBuilder> {
    let mut logging = config.logging.clone();
    if let Some(level) = &cli.log_level {
        logging.level.clone_from(level);
    }
    Ok(Logger::from_config(env!("CARGO_PKG_NAME"), &logging)?)
}

/// Executes one command. `stdin` is read only when a command has no `--input` file.
pub fn run(
    command: &Command,
    config: &AppConfig,
    stdin: impl Read,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let route = match command {
        Command::Map { params, query, .. } => commands::route(params, query),
        _ => RouteState::new(),
    };
    let collaborators =
        Collaborators::builder().config(config).navigation(SharedNavigation::new(route)).build();
    let registry = catalog::build(&collaborators);

    match command {
        Command::Map { pair, .. } => commands::map(&registry, pair, stdin, out),
        Command::Hydrate { pair, component } => {
            commands::hydrate(&registry, pair, component.as_deref(), stdin, out)
        }
        Command::Pairs {} => commands::pairs(&registry, out),
    }
}
