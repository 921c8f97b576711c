//! ledctl CLI
//!
//! Controls drive enclosure indicator LEDs. The command line is fully
//! validated before the logger, a log file or any backend is touched.

use anyhow::Result;
use ledctl::cli::classify_and_validate;
use ledctl::commands::execute;
use ledctl::utils::config::{Capabilities, PROGRAM_NAME};
use ledctl::utils::logging::init_logging;
use ledctl::utils::{status_of, ExitStatus};
use log::debug;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    match run(&args) {
        Ok(()) => ExitStatus::Success.into(),
        Err(err) => {
            let status = status_of(&err);
            eprintln!("{}: {:#}", PROGRAM_NAME, err);
            if status == ExitStatus::CmdlineError {
                eprintln!("Try '{} --help' for more information.", PROGRAM_NAME);
            }
            status.into()
        }
    }
}

fn run(args: &[String]) -> Result<()> {
    // Resolve build capabilities once
    let capabilities = Capabilities::detect();

    // Classify and validate
    let resolved = classify_and_validate(args, capabilities.test_mode)?;

    // Setup logging
    init_logging(&resolved.log_options());
    debug!("Resolved command: {:?}", resolved);

    // Execute command
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&resolved, &mut out)
}
