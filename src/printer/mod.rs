//! Rendering lines and writing them to per-severity channels.
use crate::fail;
use crate::tag::Severity;
use std::fmt;
use std::io::{self, Write};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::{MakeWriter, TestWriter};

mod pretty;
pub use pretty::{Pretty, NAME_WIDTH, VALUE_WIDTH};

/// Writes rendered lines to one [`MakeWriter`] per [`Severity`].
///
/// By default `log` and `info` go to stdout, `warn` and `error` to stderr.
/// Every line is written with its own call to the channel's writer, in order.
///
/// # Examples
///
/// Sending everything to stderr:
/// ```
/// use concol::printer::Printer;
///
/// let printer = Printer::new().writers(std::io::stderr);
/// # drop(printer);
/// ```
pub struct Printer {
    channels: [BoxMakeWriter; 4],
}

impl Printer {
    /// Returns a [`Printer`] writing to the standard streams.
    pub fn new() -> Self {
        Printer {
            channels: [
                BoxMakeWriter::new(io::stdout),
                BoxMakeWriter::new(io::stdout),
                BoxMakeWriter::new(io::stderr),
                BoxMakeWriter::new(io::stderr),
            ],
        }
    }

    /// Returns a [`Printer`] whose output is captured by the test harness.
    ///
    /// ```
    /// use concol::printer::Printer;
    /// use concol::ConCol;
    ///
    /// let app = ConCol::builder("captured").printer(Printer::test()).build();
    /// app.warn("only shown with --nocapture");
    /// ```
    pub fn test() -> Self {
        Printer::new().writers(TestWriter::new)
    }

    /// Sets the writer for a single channel.
    pub fn writer<W>(mut self, severity: Severity, make_writer: W) -> Self
    where
        W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        self.channels[severity.index()] = BoxMakeWriter::new(make_writer);
        self
    }

    /// Sets the same writer for every channel.
    pub fn writers<W>(mut self, make_writer: W) -> Self
    where
        W: for<'a> MakeWriter<'a> + Clone + Send + Sync + 'static,
    {
        for severity in Severity::ALL.iter() {
            self = self.writer(*severity, make_writer.clone());
        }
        self
    }

    /// Writes each line, newline-terminated, to the channel for `severity`.
    ///
    /// A failed write is reported on stderr and the remaining lines are
    /// still attempted.
    pub fn write_lines(&self, severity: Severity, lines: &[String]) {
        let channel = &self.channels[severity.index()];

        for line in lines {
            let mut buf = String::with_capacity(line.len() + 1);
            buf.push_str(line);
            buf.push('\n');

            if let Err(err) = channel.make_writer().write_all(buf.as_bytes()) {
                fail::write_failed(severity, &err);
            }
        }
    }
}

impl Default for Printer {
    fn default() -> Self {
        Printer::new()
    }
}

impl fmt::Debug for Printer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Printer").finish_non_exhaustive()
    }
}
