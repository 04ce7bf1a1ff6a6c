//! Configuration management for the greeter
//!
//! Centralizes the values a run needs once arguments are parsed.

use crate::cli::Args;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Greeting configuration
    pub greet: GreetConfig,
}

/// Greeting configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GreetConfig {
    /// Name every greeted clone shares
    pub clone_name: String,
    /// Number of clones to greet; zero or negative greets none
    pub clone_count: i64,
    /// Whether the greeting flag was passed
    pub greet: bool,
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Self {
        Self {
            debug: args.debug,
            greet: GreetConfig {
                clone_name: args.clone_name.clone(),
                clone_count: args.clone_count,
                greet: args.greet,
            },
        }
    }
}
