//! Command implementations for the CLI

use crate::{config::Config, core::Greeter};
use anyhow::Context;
use std::io;
use tracing::{debug, instrument};

/// Greet every configured clone on standard output
#[instrument(skip(config))]
pub fn execute_command(config: &Config) -> anyhow::Result<()> {
    let greeter = Greeter::from_config(&config.greet);
    debug!(
        "Greeting {} clone(s) named {:?} (greet flag: {})",
        greeter.count(),
        config.greet.clone_name,
        config.greet.greet
    );

    let stdout = io::stdout();
    let written = greeter
        .write_to(stdout.lock())
        .context("Failed to write greetings to stdout")?;

    debug!("Greeting completed, {} line(s) written", written);
    Ok(())
}
