//! Command-line argument parsing and validation

use crate::error::Result;
use clap::{ArgAction, Parser};
use std::{ffi::OsString, num::IntErrorKind};

/// Parse a clone count, saturating integers too large for `i64`
fn parse_clone_count(count: &str) -> std::result::Result<i64, std::num::ParseIntError> {
    match count.parse::<i64>() {
        Err(e) if *e.kind() == IntErrorKind::NegOverflow => Ok(i64::MIN),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(i64::MAX),
        other => other,
    }
}

/// Testing tmux script
#[derive(Parser, Debug)]
#[command(author, version, about = "Testing tmux script", long_about = None)]
#[command(name = "greeter", infer_long_args = true, args_override_self = true)]
pub struct Args {
    #[arg(
        short = 'c',
        long = "clone_name",
        value_name = "CLONE_NAME",
        help = "The name of the clone to greet."
    )]
    pub clone_name: String,

    #[arg(
        short = 'n',
        long = "clone_count",
        value_name = "CLONE_COUNT",
        value_parser = parse_clone_count,
        allow_negative_numbers = true,
        help = "Number of clones to greet"
    )]
    pub clone_count: i64,

    // Like SetTrue but without the implicit `false` default, so `required` holds.
    #[arg(
        long,
        help = "Include a greeting (default: False).",
        required = true,
        num_args = 0,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub greet: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

/// Parse the process arguments, exiting with a usage error on failure
pub fn parse_args() -> Args {
    try_parse_args_from(std::env::args_os()).unwrap_or_else(|e| e.exit())
}

/// Parse an explicit argument list, first item being the program name
pub fn try_parse_args_from<I, T>(args: I) -> Result<Args>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Ok(Args::try_parse_from(args)?)
}
