// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! CLI module for running a blood-pressure prediction.
//!
//! This module contains the command-line interface logic: argument parsing, the
//! prediction run, and the logging/JSON output layer.

// Modules
/// CLI arguments.
pub mod args;

/// Verbosity flag, diagnostic macros, and the JSON output sink.
pub mod logging;

/// Prediction logic.
pub mod predict;
