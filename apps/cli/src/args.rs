//! # CLI Argument Definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "shutter")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Maps photo API payloads into view models and back")]
pub struct Cli {
    /// Configuration file; the extension may be omitted (`shutter` finds `shutter.toml`)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Overrides the configured log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Map a JSON payload from one type tag to another
    Map {
        #[command(flatten)]
        pair: PairArgs,

        /// Route path parameter visible to resolvers (repeatable)
        #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_key_value)]
        params: Vec<(String, String)>,

        /// Route query parameter visible to resolvers (repeatable)
        #[arg(long = "query", value_name = "KEY=VALUE", value_parser = parse_key_value)]
        query: Vec<(String, String)>,
    },
    /// Hydrate a component from a raw response and print the component
    Hydrate {
        #[command(flatten)]
        pair: PairArgs,

        /// JSON file with the component to hydrate (defaults to `{}`)
        #[arg(long)]
        component: Option<PathBuf>,
    },
    /// List every registered (source, target) pair
    Pairs {},
}

/// Source/target tags and the input payload.
#[derive(Debug, Args)]
pub struct PairArgs {
    /// Source type tag (e.g. 'Api.Post')
    #[arg(long)]
    pub from: String,

    /// Target type tag (e.g. 'Photo')
    #[arg(long)]
    pub to: String,

    /// JSON input file; reads stdin when omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| (key.to_owned(), value.to_owned()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))
}
