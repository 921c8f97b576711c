//! Dispatch of resolved commands.
//!
//! Help and version are answered directly. Every other mode goes
//! through an [`LedBackend`]:
//! 1. Select the backend (test backend, or fail without hardware support)
//! 2. Run the mode's operation
//! 3. Print listings to the output stream

use super::utils::{display_help, display_version};
use crate::backend::{LedBackend, TestBackend};
use crate::cli::{Command, ResolvedCommand};
use crate::utils::error::BackendError;
use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;

/// Execute a resolved command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `resolved` - Command produced by `classify_and_validate`
/// * `out` - Where listings and usage text are written
///
/// # Errors
/// * `BackendError::NotSupported` - hardware mode requested without `--test`
/// * Any error the backend reports
pub fn execute(resolved: &ResolvedCommand, out: &mut dyn Write) -> Result<()> {
    debug!(
        "Executing {} (test mode: {})",
        resolved.mode(),
        resolved.test_mode
    );

    match &resolved.command {
        Command::Help => display_help(out),
        Command::Version => display_version(out),
        command => {
            let backend = select_backend(resolved)?;
            run_command(command, backend.as_ref(), out)
        }
    }
}

/// Pick the backend a command runs against
///
/// **Private** - only the test backend ships in this crate
fn select_backend(resolved: &ResolvedCommand) -> Result<Box<dyn LedBackend>> {
    if resolved.test_mode {
        info!("Using test backend");
        return Ok(Box::new(TestBackend::new()));
    }

    Err(BackendError::NotSupported(format!("{} on real hardware", resolved.mode())).into())
}

/// Run one command against a backend
///
/// **Public** - lets callers supply their own backend
pub fn run_command(command: &Command, backend: &dyn LedBackend, out: &mut dyn Write) -> Result<()> {
    match command {
        Command::Help => display_help(out)?,

        Command::Version => display_version(out)?,

        Command::ListControllers => {
            let controllers = backend
                .list_controllers()
                .context("Failed to list controllers")?;
            for controller in controllers {
                writeln!(out, "{}", controller)?;
            }
        }

        Command::ListSlots { controller } => {
            let slots = backend
                .list_slots(*controller)
                .with_context(|| format!("Failed to list {} slots", controller))?;
            for slot in slots {
                writeln!(out, "{}", slot)?;
            }
        }

        Command::GetSlot { controller, target } => {
            let slot = backend
                .get_slot(*controller, target)
                .with_context(|| format!("Failed to read {} on {}", target, controller))?;
            writeln!(out, "{}", slot)?;
        }

        Command::SetSlot {
            controller,
            target,
            state,
        } => {
            let slot = backend
                .set_slot(*controller, target, *state)
                .with_context(|| format!("Failed to set {} on {}", target, controller))?;
            info!("Slot {} set to {}", slot.slot, state);
        }

        Command::SetIbpi(request) => {
            backend
                .set_ibpi(&request.declarations, request.listed_only)
                .context("Failed to apply IBPI patterns")?;
            info!("Applied {} IBPI declaration(s)", request.declarations.len());
        }
    }

    Ok(())
}
