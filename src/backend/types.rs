//! Controller and slot types shared by every backend.

use crate::ibpi::IbpiPattern;
use clap::ValueEnum;
use std::fmt;
use std::path::PathBuf;

/// Storage controller families ledctl knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum ControllerType {
    Vmd,
    Npem,
    Scsi,
    Ahci,
    Dellssd,
    Amd,
}

impl ControllerType {
    pub fn as_str(self) -> &'static str {
        match self {
            ControllerType::Vmd => "vmd",
            ControllerType::Npem => "npem",
            ControllerType::Scsi => "scsi",
            ControllerType::Ahci => "ahci",
            ControllerType::Dellssd => "dellssd",
            ControllerType::Amd => "amd",
        }
    }

    /// Whether slots behind this controller can be listed and addressed
    pub fn supports_slots(self) -> bool {
        matches!(self, ControllerType::Vmd | ControllerType::Npem | ControllerType::Scsi)
    }
}

impl fmt::Display for ControllerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A controller found by a backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Controller {
    pub path: PathBuf,
    pub kind: ControllerType,
}

impl fmt::Display for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.path.display(), self.kind)
    }
}

/// How a slot is addressed on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotTarget {
    Device(PathBuf),
    Slot(String),
}

impl fmt::Display for SlotTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotTarget::Device(path) => write!(f, "device {}", path.display()),
            SlotTarget::Slot(id) => write!(f, "slot {}", id),
        }
    }
}

/// Current state of one slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotInfo {
    pub slot: String,
    pub device: Option<PathBuf>,
    pub state: IbpiPattern,
}

impl SlotInfo {
    pub fn matches(&self, target: &SlotTarget) -> bool {
        match target {
            SlotTarget::Device(path) => self.device.as_ref() == Some(path),
            SlotTarget::Slot(id) => &self.slot == id,
        }
    }
}

impl fmt::Display for SlotInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let device = self
            .device
            .as_ref()
            .map_or_else(|| "(empty)".to_string(), |path| path.display().to_string());
        write!(
            f,
            "slot: {:<12} led state: {:<20} device: {}",
            self.slot,
            self.state.name().to_uppercase(),
            device
        )
    }
}
