// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

#![allow(clippy::multiple_crate_versions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Blood-Pressure Prediction
//!
//! Loads a pre-trained regression model and predicts blood pressure from two
//! physiological readings: heart rate (bpm) and peripheral oxygen saturation (SpO2, %).
//! The `bp-predict` binary wraps the library for callers that spawn it as a child
//! process and read one JSON line back.
//!
//! ## Quick Start (Library)
//!
//! ```no_run
//! use bp_predict::{BpModel, PredictConfig, PredictionRequest};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut model = BpModel::load(PredictConfig::new().with_model_path("bp_model.json"))?;
//!     let request = PredictionRequest::new(75.0, 98.0)?;
//!     let result = model.predict(&request)?;
//!     println!("bp = {:.2}", result.bp);
//!     Ok(())
//! }
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! # Uses bp_model.json next to the executable
//! bp-predict 75 98
//! {"bp": 119.57}
//!
//! # Explicit model, verbose diagnostics on stderr
//! bp-predict --model models/bp_model.json --verbose 82 95.5
//!
//! # Invalid input: exit code 1, same line on stdout and stderr
//! bp-predict 0 98
//! {"error": "HR and SpO2 must be positive"}
//! ```
//!
//! ## Node.js Integration
//!
//! ```javascript
//! const { spawn } = require('child_process');
//!
//! const proc = spawn('bp-predict', ['75', '98']);
//! proc.stdout.on('data', (data) => {
//!     const line = JSON.parse(data.toString());
//!     if ('bp' in line) console.log(`Predicted BP: ${line.bp}`);
//!     else console.error(line.error);
//! });
//! ```
//!
//! ## Model Artifacts
//!
//! | Extension | Backend | Feature |
//! |-----------|---------|---------|
//! | `.json` | [`LinearRegression`] (`coefficients`, `intercept`, optional `metadata`) | always |
//! | `.onnx` | `OnnxRegressor` via ONNX Runtime | `onnx` |
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`model`] | [`BpModel`]: load once, predict one request |
//! | [`regressor`] | [`Regressor`] trait and backends |
//! | [`request`] | Validated [`PredictionRequest`] |
//! | [`results`] | [`PredictionResult`], [`ErrorResult`], JSON line encoding |
//! | [`inference`] | [`PredictConfig`] |
//! | [`metadata`] | [`ModelMetadata`] read from the artifact |
//! | [`error`] | Error types ([`PredictError`], [`Result`]) |
//! | [`cli`] | Argument parsing, logging, and the JSON output sink |

// Modules
pub mod cli;
pub mod error;
pub mod inference;
pub mod metadata;
pub mod model;
pub mod regressor;
pub mod request;
pub mod results;
pub mod utils;

// Re-export main types for convenience
pub use error::{PredictError, Result};
pub use inference::PredictConfig;
pub use metadata::ModelMetadata;
pub use model::BpModel;
pub use regressor::{LinearRegression, Regressor};
pub use request::PredictionRequest;
pub use results::{ErrorResult, PredictionResult};

#[cfg(feature = "onnx")]
pub use regressor::OnnxRegressor;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
