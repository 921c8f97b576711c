use crate::cli::Cli;
use crate::utils::config::PROGRAM_NAME;
use anyhow::Result;
use clap::CommandFactory;
use std::io::Write;

/// Display usage text
pub fn display_help(out: &mut dyn Write) -> Result<()> {
    let help = Cli::command().render_help();
    writeln!(out, "{}", help)?;
    Ok(())
}

/// Display version information
pub fn display_version(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{} {}", PROGRAM_NAME, env!("CARGO_PKG_VERSION"))?;
    writeln!(out)?;
    writeln!(out, "{}", env!("CARGO_PKG_DESCRIPTION"))?;
    Ok(())
}
