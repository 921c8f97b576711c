//! Inert backend used by `-T/--test`.
//!
//! Answers from a fixed synthetic inventory and never touches sysfs or
//! hardware. Nothing is stored between calls, so repeating a command
//! always gives the same answer.

use super::types::{Controller, ControllerType, SlotInfo, SlotTarget};
use super::LedBackend;
use crate::ibpi::{IbpiDeclaration, IbpiPattern};
use crate::utils::error::BackendError;
use log::{debug, info, warn};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct TestBackend {
    controllers: Vec<Controller>,
    slots: Vec<(ControllerType, SlotInfo)>,
}

impl TestBackend {
    pub fn new() -> Self {
        let controllers = vec![
            Controller {
                path: PathBuf::from("/sys/devices/pci0000:00/0000:00:0e.0"),
                kind: ControllerType::Vmd,
            },
            Controller {
                path: PathBuf::from("/sys/devices/pci0000:00/0000:00:1d.0"),
                kind: ControllerType::Npem,
            },
            Controller {
                path: PathBuf::from("/sys/devices/pci0000:00/0000:00:17.0"),
                kind: ControllerType::Ahci,
            },
        ];

        let slot = |kind, id: &str, device: Option<&str>| {
            (
                kind,
                SlotInfo {
                    slot: id.to_string(),
                    device: device.map(PathBuf::from),
                    state: IbpiPattern::Normal,
                },
            )
        };

        let slots = vec![
            slot(ControllerType::Vmd, "1", Some("/dev/nvme0n1")),
            slot(ControllerType::Vmd, "2", Some("/dev/nvme1n1")),
            slot(ControllerType::Vmd, "3", Some("/dev/nvme2n1")),
            slot(ControllerType::Vmd, "4", None),
            slot(ControllerType::Npem, "1", Some("/dev/nvme3n1")),
            slot(ControllerType::Npem, "2", None),
        ];

        Self { controllers, slots }
    }
}

impl Default for TestBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl LedBackend for TestBackend {
    fn list_controllers(&self) -> Result<Vec<Controller>, BackendError> {
        debug!("test backend: listing {} controllers", self.controllers.len());
        Ok(self.controllers.clone())
    }

    fn list_slots(&self, controller: ControllerType) -> Result<Vec<SlotInfo>, BackendError> {
        if !controller.supports_slots() {
            return Err(BackendError::NoSlots(controller.to_string()));
        }

        Ok(self
            .slots
            .iter()
            .filter(|(kind, _)| *kind == controller)
            .map(|(_, info)| info.clone())
            .collect())
    }

    fn set_slot(
        &self,
        controller: ControllerType,
        target: &SlotTarget,
        state: IbpiPattern,
    ) -> Result<SlotInfo, BackendError> {
        let mut slot = self.get_slot(controller, target)?;
        info!("test backend: {} slot {} -> {}", controller, slot.slot, state);
        slot.state = state;
        Ok(slot)
    }

    fn set_ibpi(
        &self,
        declarations: &[IbpiDeclaration],
        listed_only: bool,
    ) -> Result<(), BackendError> {
        for declaration in declarations {
            for device in &declaration.devices {
                let known = self
                    .slots
                    .iter()
                    .any(|(_, info)| info.device.as_ref() == Some(device));
                if !known {
                    warn!("test backend: {} is not behind a known slot", device.display());
                }
                info!("test backend: {} -> {}", device.display(), declaration.pattern);
            }
        }

        if !listed_only {
            debug!("test backend: devices not listed would be set to normal");
        }

        Ok(())
    }
}
