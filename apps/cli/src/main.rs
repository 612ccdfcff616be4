use clap::Parser;
use shutter_cli::Cli;
use std::io;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = shutter_cli::load(cli.config.as_deref())?;
    let _log = shutter_cli::logger(&cli, &config)?.init()?;

    shutter_cli::run(&cli.command, &config, io::stdin().lock(), &mut io::stdout().lock())
}
