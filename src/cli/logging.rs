// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::io::{self, Stderr, Stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::PredictError;
use crate::results::{ErrorResult, PredictionResult, to_json_line};

/// Global verbosity flag.
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set the global verbosity flag.
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

/// Check if verbose output is enabled.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Macro for warning messages. Always written to stderr.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        eprintln!("{} {}", "WARNING ⚠️".yellow().bold(), format!($($arg)*));
    }}
}

/// Macro for verbose messages. Written to stderr so stdout stays a single JSON line.
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        if $crate::cli::logging::is_verbose() {
            eprintln!("{}", format!($($arg)*).dimmed());
        }
    }}
}

/// Destination for the structured output of a run.
///
/// Results go to `out`. Errors go to `err` and are mirrored to `out`, so a caller
/// reading only stdout still sees the failure. Every line is flushed as soon as it
/// is written.
pub struct JsonSink<O: Write, E: Write> {
    out: O,
    err: E,
}

impl JsonSink<Stdout, Stderr> {
    /// Sink bound to the process's standard streams.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> JsonSink<O, E> {
    /// Create a sink over arbitrary writers.
    pub const fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    /// Write a prediction result line to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if the line can't be written or flushed.
    pub fn emit_result(&mut self, result: &PredictionResult) -> io::Result<()> {
        let line = to_json_line(result)?;
        write_line(&mut self.out, &line)
    }

    /// Write an error line to `err`, then mirror it to `out`.
    ///
    /// # Errors
    ///
    /// Returns the first write or flush error. The `out` copy is attempted even if
    /// writing to `err` failed.
    pub fn emit_error(&mut self, error: &PredictError) -> io::Result<()> {
        let line = to_json_line(&ErrorResult::new(error))?;
        let to_err = write_line(&mut self.err, &line);
        let to_out = write_line(&mut self.out, &line);
        to_err.and(to_out)
    }

    /// Consume the sink, returning the underlying writers.
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

fn write_line<W: Write>(writer: &mut W, line: &str) -> io::Result<()> {
    writeln!(writer, "{line}")?;
    writer.flush()
}
