#![allow(clippy::cargo_common_metadata)]
use anyhow::Result;
use clone_greeter::{cli, config::Config, setup_logging};

fn main() -> Result<()> {
    // Usage errors exit here with clap's diagnostic, before any output
    let args = cli::parse_args();

    setup_logging(args.debug)?;

    let config = Config::from_args(&args);

    cli::execute_command(&config)
}
