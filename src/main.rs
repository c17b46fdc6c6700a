// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::process::ExitCode;

use bp_predict::cli::args::{Cli, argument_error};
use bp_predict::cli::logging::{JsonSink, set_verbose};
use bp_predict::cli::predict::run_prediction;
use clap::Parser;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => Ok(cli),
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => Err(argument_error(&e)),
    };

    let mut sink = JsonSink::stdio();
    let outcome = cli.and_then(|cli| {
        set_verbose(cli.verbose);
        run_prediction(&cli, &mut sink)
    });

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Nothing left to report to if both streams are gone.
            let _ = sink.emit_error(&err);
            ExitCode::FAILURE
        }
    }
}
