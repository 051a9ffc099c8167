//! Write the initial attendance data files.
//!
//! Delegates to `seed_data::seed_cli`, which keeps the behaviour testable
//! without spawning a process.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use seed_data::seed_cli::{CliError, ParseOutcome, parse_args, run, success_message};

fn main() -> ExitCode {
    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn execute() -> Result<(), CliError> {
    match parse_args(env::args().skip(1))? {
        ParseOutcome::Help => {
            print_usage(io::stdout().lock());
            Ok(())
        }
        ParseOutcome::Options(options) => {
            let outcome = run(&options)?;
            write_line(&success_message(&outcome, options.data_dir()));
            Ok(())
        }
    }
}

fn print_usage(mut out: impl Write) {
    let usage = concat!(
        "Usage: attendance-seed [--data-dir <path>]\n",
        "\n",
        "Creates users.json, attendance.json and leaves.json when absent.\n",
        "\n",
        "Options:\n",
        "  --data-dir <path>    Target directory (defaults to ./data)\n",
        "  -h, --help           Print this help output\n",
    );
    if let Err(err) = out.write_all(usage.as_bytes()) {
        drop(err);
    }
}

fn write_line(message: &str) {
    if let Err(err) = writeln!(io::stdout().lock(), "{message}") {
        drop(err);
    }
}
