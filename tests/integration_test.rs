// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Integration tests for the `bp-predict` binary

use std::path::PathBuf;
use std::process::{Command, Output};

const VALIDATION_LINE: &str = "{\"error\": \"HR and SpO2 must be positive\"}\n";

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn run_with_model(model: &str, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bp-predict"))
        .arg("--model")
        .arg(fixture(model))
        .args(args)
        .output()
        .expect("failed to spawn bp-predict")
}

fn run(args: &[&str]) -> Output {
    run_with_model("bp_model.json", args)
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

fn error_message(output: &Output) -> String {
    let value: serde_json::Value = serde_json::from_str(stdout(output).trim()).unwrap();
    value["error"].as_str().unwrap().to_string()
}

/// Asserts exit code 1 and the same single error line on both streams.
fn assert_failed(output: &Output) {
    assert_eq!(output.status.code(), Some(1));
    let out = stdout(output);
    assert_eq!(out.lines().count(), 1);
    assert!(out.starts_with("{\"error\": "));
    assert_eq!(out, stderr(output));
}

#[test]
fn test_prediction_with_fixture_model() {
    // 73.7234 + 0.35 * 75 + 0.2 * 98 = 119.5734
    let output = run(&["75", "98"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "{\"bp\": 119.57}\n");
    assert!(stderr(&output).is_empty());
}

#[test]
fn test_output_is_single_bp_key_with_two_decimals() {
    let output = run(&["82.3", "95.1"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 1);

    let bp = object["bp"].as_f64().unwrap();
    assert!(((bp * 100.0).round() - bp * 100.0).abs() < 1e-6);
}

#[test]
fn test_identical_inputs_give_identical_output() {
    let first = run(&["75", "98"]);
    let second = run(&["75", "98"]);
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_zero_heart_rate() {
    let output = run(&["0", "98"]);
    assert_failed(&output);
    assert_eq!(stdout(&output), VALIDATION_LINE);
}

#[test]
fn test_negative_readings() {
    for args in [
        ["-60", "98"],
        ["75", "-1"],
        ["75", "0"],
        ["-.5", "98"],
        ["-inf", "98"],
        ["75", "-.5"],
    ] {
        let output = run(&args);
        assert_failed(&output);
        assert_eq!(stdout(&output), VALIDATION_LINE);
    }
}

#[test]
fn test_underscore_digit_separators() {
    // 73.7234 + 0.35 * 100 + 0.2 * 98 = 128.3234
    let output = run(&["1_00", "98"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "{\"bp\": 128.32}\n");
}

#[test]
fn test_non_numeric_argument() {
    let output = run(&["abc", "98"]);
    assert_failed(&output);
    let message = error_message(&output);
    assert!(message.starts_with("Argument error"));
    assert!(message.contains("'abc'"));
}

#[test]
fn test_missing_second_argument() {
    let output = run(&["75"]);
    assert_failed(&output);
    assert_eq!(
        error_message(&output),
        "Argument error: missing required argument <SPO2>"
    );
}

#[test]
fn test_extra_argument() {
    let output = run(&["75", "98", "120"]);
    assert_failed(&output);
    assert!(error_message(&output).starts_with("Argument error"));
}

#[test]
fn test_missing_model_regardless_of_arguments() {
    for args in [&["75", "98"][..], &["0", "98"][..], &["abc"][..]] {
        let output = run_with_model("no_such_model.json", args);
        assert_failed(&output);
        assert!(error_message(&output).contains("Model file not found"));
    }
}

#[test]
fn test_corrupt_model() {
    let output = run_with_model("corrupt_model.json", &["75", "98"]);
    assert_failed(&output);
    assert!(error_message(&output).starts_with("Model load error"));
}

#[test]
fn test_feature_shape_mismatch_is_inference_error() {
    let output = run_with_model("three_feature_model.json", &["75", "98"]);
    assert_failed(&output);
    assert!(error_message(&output).starts_with("Inference error"));
}

#[test]
fn test_feature_name_warning_only_when_enabled() {
    let quiet = run_with_model("swapped_features_model.json", &["75", "98"]);
    assert!(quiet.status.success());
    assert!(stderr(&quiet).is_empty());

    let loud = run_with_model("swapped_features_model.json", &["--warnings", "75", "98"]);
    assert!(loud.status.success());
    assert!(stderr(&loud).contains("WARNING"));
    assert_eq!(stdout(&loud).lines().count(), 1);
}

#[test]
fn test_default_model_path_is_next_to_executable() {
    // No model is installed beside the test binary, so the lookup must fail there
    // and not fall back to the working directory.
    let output = Command::new(env!("CARGO_BIN_EXE_bp-predict"))
        .current_dir(fixture(""))
        .args(["75", "98"])
        .output()
        .unwrap();
    assert_failed(&output);
    assert!(error_message(&output).contains("Model file not found"));
}

#[test]
fn test_help_exits_cleanly() {
    let output = Command::new(env!("CARGO_BIN_EXE_bp-predict"))
        .arg("--help")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(stdout(&output).contains("HEART_RATE"));
}
