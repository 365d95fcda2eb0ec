//! `helper-kit` entry point.
//!
//! Parses arguments, loads `HELPER_KIT_*` settings and prints the helper's
//! result on stdout. Failures go to stderr with a non-zero exit code.

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use helper_kit_cli::{Cli, CliError, HelperKitSettings, execute};
use mockable::DefaultClock;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    match run() {
        Ok(line) => {
            write_line(io::stdout().lock(), &line);
            ExitCode::SUCCESS
        }
        Err(err) => {
            write_line(io::stderr().lock(), &err.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<String, CliError> {
    let cli = Cli::parse();
    let settings = HelperKitSettings::load_from_iter([OsString::from("helper-kit")])
        .map_err(|err| CliError::Settings {
            message: err.to_string(),
        })?;
    execute(&cli.command, &settings, &DefaultClock)
}

fn write_line(mut out: impl Write, line: &str) {
    if let Err(err) = writeln!(out, "{line}") {
        drop(err);
    }
}
