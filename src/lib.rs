//! # Clone Greeter
//!
//! Prints a numbered greeting for each clone named on the command line.
//!
//! ## Example
//!
//! ```
//! use clone_greeter::core::Greeter;
//!
//! let mut out = Vec::new();
//! let written = Greeter::new("Bob", 2).write_to(&mut out)?;
//! assert_eq!(written, 2);
//! assert_eq!(
//!     String::from_utf8(out)?,
//!     "👽 says: Hello, Bob0!\n👽 says: Hello, Bob1!\n"
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging on stderr; `RUST_LOG` takes precedence over `debug`
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if debug {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
