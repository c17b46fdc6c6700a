// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::path::PathBuf;

use clap::Parser;

use crate::error::PredictError;

/// CLI arguments parser.
///
/// The readings are taken as raw strings and converted by
/// [`PredictionRequest::from_args`](crate::PredictionRequest::from_args), so a
/// missing or non-numeric reading is reported as a JSON error instead of clap's
/// usage text.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"Output:
    Success (exit 0): {"bp": <value>} on stdout
    Failure (exit 1): {"error": "<message>"} on stdout and stderr

Examples:
    bp-predict 75 98
    bp-predict --model /opt/models/bp_model.json 82 95.5
    bp-predict --warnings --verbose 75 98"#)]
pub struct Cli {
    /// Heart rate in beats per minute (must be positive)
    #[arg(value_name = "HEART_RATE", allow_hyphen_values = true)]
    pub heart_rate: Option<String>,

    /// Peripheral oxygen saturation percentage (must be positive)
    #[arg(value_name = "SPO2", allow_hyphen_values = true)]
    pub spo2: Option<String>,

    /// Path to the model artifact [default: bp_model.json next to the executable]
    #[arg(short, long)]
    pub model: Option<PathBuf>,

    /// Show non-fatal warnings raised while loading the model
    #[arg(long, default_value_t = false)]
    pub warnings: bool,

    /// Print diagnostic progress to stderr
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Convert a clap parse failure into an argument error.
///
/// Only the headline of clap's report is kept (no usage block), with the leading
/// `error: ` removed.
#[must_use]
pub fn argument_error(err: &clap::Error) -> PredictError {
    let rendered = err.to_string();
    let headline = rendered
        .lines()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("invalid arguments")
        .trim();
    let message = headline.strip_prefix("error: ").unwrap_or(headline);
    PredictError::ArgumentError(message.to_string())
}
