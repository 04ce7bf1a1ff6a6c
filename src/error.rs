//! Error types for the greeter
//!
//! Argument failures keep clap's own error so they print and exit the way
//! clap formats them.

use thiserror::Error;

/// Main error type for the greeter
#[derive(Error, Debug)]
pub enum GreeterError {
    /// Required arguments are missing or failed to parse
    #[error("Usage error: {source}")]
    Usage {
        #[source]
        source: clap::Error,
    },

    /// Writing greetings to the output stream failed
    #[error("Output error: failed to write greeting {line}")]
    Output {
        line: u64,
        #[source]
        source: std::io::Error,
    },
}

impl GreeterError {
    /// Create a new usage error
    pub fn usage(source: clap::Error) -> Self {
        Self::Usage { source }
    }

    /// Create a new output error
    pub fn output(line: u64, source: std::io::Error) -> Self {
        Self::Output { line, source }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage { source } => source.exit_code(),
            Self::Output { .. } => 1,
        }
    }

    /// Print the diagnostic and terminate the process
    pub fn exit(&self) -> ! {
        match self {
            Self::Usage { source } => source.exit(),
            Self::Output { .. } => {
                eprintln!("Error: {self}");
                std::process::exit(self.exit_code())
            }
        }
    }
}

impl From<clap::Error> for GreeterError {
    fn from(source: clap::Error) -> Self {
        Self::usage(source)
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, GreeterError>;
