//! LED backends.
//!
//! A validated command reaches hardware only through [`LedBackend`].
//! This build ships the inert [`TestBackend`]; hardware signalling
//! (SGPIO, SES, NPEM) lives outside this crate.

pub mod test_backend;
pub mod types;

pub use test_backend::TestBackend;
pub use types::{Controller, ControllerType, SlotInfo, SlotTarget};

use crate::ibpi::{IbpiDeclaration, IbpiPattern};
use crate::utils::error::BackendError;

/// Operations a resolved command may perform on LEDs
pub trait LedBackend {
    fn list_controllers(&self) -> Result<Vec<Controller>, BackendError>;

    fn list_slots(&self, controller: ControllerType) -> Result<Vec<SlotInfo>, BackendError>;

    /// Look up one slot by device or slot identifier
    fn get_slot(
        &self,
        controller: ControllerType,
        target: &SlotTarget,
    ) -> Result<SlotInfo, BackendError> {
        self.list_slots(controller)?
            .into_iter()
            .find(|slot| slot.matches(target))
            .ok_or_else(|| BackendError::SlotNotFound(target.to_string()))
    }

    /// Set one slot's LED, returning the slot as it now reads
    fn set_slot(
        &self,
        controller: ControllerType,
        target: &SlotTarget,
        state: IbpiPattern,
    ) -> Result<SlotInfo, BackendError>;

    /// Apply IBPI declarations
    ///
    /// With `listed_only` set, devices that are not named keep their
    /// current state.
    fn set_ibpi(
        &self,
        declarations: &[IbpiDeclaration],
        listed_only: bool,
    ) -> Result<(), BackendError>;
}
