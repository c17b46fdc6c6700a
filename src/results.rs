// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Prediction output records and their JSON line encoding.
//!
//! Lines use the separators of Python's `json.dumps` (`": "` and `", "`) and its
//! exponent style (`1e+16`, `1.5e-07`), so `{"bp": 121.46}` and `{"error": "..."}`
//! match what existing callers already parse. Two differences remain: magnitudes
//! in `[1e-5, 1e-4)` are written in positional form where Python switches to an
//! exponent (unreachable at the default two decimals), and non-ASCII text is
//! written as UTF-8 rather than `\uXXXX` escapes.

use std::io;

use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};

/// Successful prediction: the blood-pressure value, already rounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionResult {
    /// Predicted blood pressure.
    pub bp: f64,
}

impl PredictionResult {
    /// Create a new result.
    #[must_use]
    pub const fn new(bp: f64) -> Self {
        Self { bp }
    }
}

/// Failed run: the message of whatever went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResult {
    /// Error message.
    pub error: String,
}

impl ErrorResult {
    /// Create an error record from anything displayable.
    #[must_use]
    pub fn new(error: impl ToString) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

/// Compact formatter with a space after `:` and `,`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        // Only finite values reach the formatter; the serializer writes `null` otherwise.
        let Some(number) = serde_json::Number::from_f64(value) else {
            return writer.write_all(b"null");
        };
        writer.write_all(python_exponent(&number.to_string()).as_bytes())
    }
}

/// Rewrite a shortest-repr float so its exponent reads like Python's `repr`:
/// explicit sign and at least two digits (`1e16` becomes `1e+16`, `1.5e-7` becomes `1.5e-07`).
fn python_exponent(text: &str) -> String {
    let Some((mantissa, exponent)) = text.split_once('e') else {
        return text.to_string();
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent.trim_start_matches('+')),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

/// Encode a record as a single JSON line (without the trailing newline).
///
/// # Errors
///
/// Returns an error if the value can't be serialized.
pub fn to_json_line<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut buf = Vec::with_capacity(64);
    let mut serializer = Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut serializer)?;
    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
