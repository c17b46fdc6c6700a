// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::io::Write;

use crate::cli::args::Cli;
use crate::cli::logging::JsonSink;
use crate::error::Result;
use crate::{BpModel, PredictConfig, PredictionRequest, VERSION, verbose};

/// Build the prediction configuration from parsed arguments.
#[must_use]
pub fn config_from_args(args: &Cli) -> PredictConfig {
    let config = PredictConfig::new().with_warnings(args.warnings);
    match &args.model {
        Some(path) => config.with_model_path(path),
        None => config,
    }
}

/// Run one prediction and write the result line to `sink`.
///
/// The model is loaded before the readings are parsed, so a missing or broken
/// artifact is reported whatever the arguments are.
///
/// # Errors
///
/// Returns the first failure; the caller reports it through the same sink.
pub fn run_prediction<O: Write, E: Write>(args: &Cli, sink: &mut JsonSink<O, E>) -> Result<()> {
    let mut model = BpModel::load(config_from_args(args))?;

    verbose!("bp-predict {VERSION}");
    verbose!(
        "Loaded {} ({} backend) from {}",
        model.metadata().model_name(),
        model.backend(),
        model.path().display()
    );

    let request = PredictionRequest::from_args(args.heart_rate.as_deref(), args.spo2.as_deref())?;
    verbose!(
        "Predicting for heart_rate={}, spo2={}",
        request.heart_rate(),
        request.spo2()
    );

    let result = model.predict(&request)?;
    sink.emit_result(&result)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;

    use super::*;
    use crate::error::PredictError;

    fn fixture() -> String {
        format!("{}/tests/fixtures/bp_model.json", env!("CARGO_MANIFEST_DIR"))
    }

    fn run(argv: &[&str]) -> (Result<()>, String) {
        let cli = Cli::parse_from(argv.iter().copied());
        let mut sink = JsonSink::new(Vec::new(), Vec::new());
        let outcome = run_prediction(&cli, &mut sink);
        let (out, _) = sink.into_inner();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_config_from_args() {
        let cli = Cli::parse_from(["bp-predict", "-m", "m.json", "--warnings", "1", "2"]);
        let config = config_from_args(&cli);
        assert_eq!(config.model_path, Some(PathBuf::from("m.json")));
        assert!(config.warnings);
    }

    #[test]
    fn test_successful_prediction() {
        let model = fixture();
        let (outcome, out) = run(&["bp-predict", "--model", &model, "75", "98"]);
        assert!(outcome.is_ok());
        assert_eq!(out, "{\"bp\": 119.57}\n");
    }

    #[test]
    fn test_validation_failure_writes_nothing() {
        let model = fixture();
        let (outcome, out) = run(&["bp-predict", "--model", &model, "0", "98"]);
        assert!(matches!(outcome, Err(PredictError::ValidationError(_))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_missing_model_wins_over_bad_arguments() {
        let (outcome, _) = run(&["bp-predict", "--model", "missing.json", "abc"]);
        assert!(matches!(outcome, Err(PredictError::ModelLoadError(_))));
    }
}
