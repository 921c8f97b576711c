//! Validated commands, ready for dispatch.

use crate::backend::{ControllerType, SlotTarget};
use crate::cli::grammar::Mode;
use crate::ibpi::{IbpiDeclaration, IbpiPattern};
use crate::utils::logging::LogOptions;

/// A command that passed classification and validation
///
/// **Public** - produced by `classify_and_validate`, consumed by `execute`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCommand {
    pub command: Command,

    /// Run against the inert test backend
    pub test_mode: bool,
}

impl ResolvedCommand {
    pub fn mode(&self) -> Mode {
        self.command.mode()
    }

    /// Logging requested on the command line, if any
    pub fn log_options(&self) -> LogOptions {
        match &self.command {
            Command::SetIbpi(request) => request.log.clone(),
            _ => LogOptions::default(),
        }
    }
}

/// Mode payloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Version,
    ListControllers,
    ListSlots {
        controller: ControllerType,
    },
    GetSlot {
        controller: ControllerType,
        target: SlotTarget,
    },
    SetSlot {
        controller: ControllerType,
        target: SlotTarget,
        state: IbpiPattern,
    },
    SetIbpi(IbpiRequest),
}

impl Command {
    pub fn mode(&self) -> Mode {
        match self {
            Command::Help => Mode::Help,
            Command::Version => Mode::Version,
            Command::ListControllers => Mode::ListControllers,
            Command::ListSlots { .. } => Mode::ListSlots,
            Command::GetSlot { .. } => Mode::GetSlot,
            Command::SetSlot { .. } => Mode::SetSlot,
            Command::SetIbpi(_) => Mode::IbpiAssignment,
        }
    }
}

/// Everything an IBPI assignment carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IbpiRequest {
    pub declarations: Vec<IbpiDeclaration>,
    pub listed_only: bool,
    pub log: LogOptions,
}
