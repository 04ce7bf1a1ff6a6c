//! Greeting line formatting and output

use crate::{
    config::GreetConfig,
    error::{GreeterError, Result},
};
use std::io::{ErrorKind, Write};
use tracing::{debug, instrument};

/// Format a single greeting for the clone at `index`, without a line ending
pub fn greeting_line(name: &str, index: u64) -> String {
    format!("👽 says: Hello, {name}{index}!")
}

/// Writes numbered greetings for a group of clones
#[derive(Debug, Clone)]
pub struct Greeter {
    name: String,
    count: u64,
}

impl Greeter {
    /// Create a greeter; a zero or negative count greets nobody
    pub fn new(name: impl Into<String>, count: i64) -> Self {
        Self {
            name: name.into(),
            count: u64::try_from(count).unwrap_or(0),
        }
    }

    /// Create a greeter from the greeting configuration
    pub fn from_config(config: &GreetConfig) -> Self {
        Self::new(config.clone_name.clone(), config.clone_count)
    }

    /// Number of lines this greeter produces
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Greeting lines in ascending index order
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.count).map(|index| greeting_line(&self.name, index))
    }

    /// Write every greeting followed by a newline, returning the number written.
    ///
    /// A closed pipe on the reading side ends the output early without an error.
    #[instrument(skip(self, writer), fields(name = %self.name, count = self.count))]
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<u64> {
        let mut written = 0;

        for line in self.lines() {
            match writeln!(writer, "{line}") {
                Ok(()) => written += 1,
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                    debug!("Output closed after {} greetings", written);
                    return Ok(written);
                }
                Err(e) => return Err(GreeterError::output(written, e)),
            }
        }

        match writer.flush() {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                debug!("Output closed before flush");
            }
            Err(e) => return Err(GreeterError::output(written, e)),
        }

        debug!("Wrote {} greetings", written);
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn render(greeter: &Greeter) -> String {
        let mut out = Vec::new();
        greeter.write_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    /// Accepts a fixed number of complete lines, then fails with `kind`
    struct FailingWriter {
        remaining: usize,
        kind: io::ErrorKind,
        data: Vec<u8>,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.remaining == 0 {
                return Err(io::Error::from(self.kind));
            }
            if buf.ends_with(b"\n") {
                self.remaining -= 1;
            }
            self.data.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_greeting_line() {
        assert_eq!(greeting_line("Bob", 0), "👽 says: Hello, Bob0!");
        assert_eq!(greeting_line("", 12), "👽 says: Hello, 12!");
    }

    #[test]
    fn test_write_three_clones() {
        let greeter = Greeter::new("Bob", 3);
        assert_eq!(
            render(&greeter),
            "👽 says: Hello, Bob0!\n👽 says: Hello, Bob1!\n👽 says: Hello, Bob2!\n"
        );
    }

    #[test]
    fn test_zero_and_negative_counts() {
        for count in [0, -1, i64::MIN] {
            let greeter = Greeter::new("Bob", count);
            assert_eq!(greeter.count(), 0);
            assert_eq!(greeter.lines().count(), 0);
            assert_eq!(render(&greeter), "");
        }
    }

    #[test]
    fn test_write_returns_line_count() {
        let greeter = Greeter::new("Zed", 5);
        let mut out = Vec::new();
        assert_eq!(greeter.write_to(&mut out).unwrap(), 5);
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 5);
    }

    #[test]
    fn test_unicode_name() {
        let greeter = Greeter::new("Zoë", 1);
        assert_eq!(render(&greeter), "👽 says: Hello, Zoë0!\n");
    }

    #[test]
    fn test_from_config() {
        let config = GreetConfig {
            clone_name: "Ann".to_string(),
            clone_count: 2,
            greet: true,
        };
        let lines: Vec<String> = Greeter::from_config(&config).lines().collect();
        assert_eq!(lines, vec!["👽 says: Hello, Ann0!", "👽 says: Hello, Ann1!"]);
    }

    #[test]
    fn test_broken_pipe_stops_quietly() {
        let mut writer = FailingWriter {
            remaining: 2,
            kind: io::ErrorKind::BrokenPipe,
            data: Vec::new(),
        };
        let written = Greeter::new("Bob", 10).write_to(&mut writer).unwrap();
        assert_eq!(written, 2);
        assert_eq!(
            String::from_utf8(writer.data).unwrap(),
            "👽 says: Hello, Bob0!\n👽 says: Hello, Bob1!\n"
        );
    }

    #[test]
    fn test_write_failure_is_output_error() {
        let mut writer = FailingWriter {
            remaining: 1,
            kind: io::ErrorKind::PermissionDenied,
            data: Vec::new(),
        };
        let err = Greeter::new("Bob", 3).write_to(&mut writer).unwrap_err();
        assert!(matches!(err, GreeterError::Output { line: 1, .. }));
    }
}
