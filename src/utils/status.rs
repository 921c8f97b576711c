//! Process exit statuses.
//!
//! Callers script against these numbers, so they never change meaning.

use crate::utils::error::{BackendError, CommandError};
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    Success = 0,
    DataError = 6,
    NotSupported = 19,
    CmdlineError = 35,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}

impl From<&CommandError> for ExitStatus {
    fn from(err: &CommandError) -> Self {
        match err {
            CommandError::TestModeUnavailable => ExitStatus::NotSupported,
            _ => ExitStatus::CmdlineError,
        }
    }
}

impl From<&BackendError> for ExitStatus {
    fn from(err: &BackendError) -> Self {
        match err {
            BackendError::NotSupported(_) => ExitStatus::NotSupported,
            BackendError::SlotNotFound(_) | BackendError::NoSlots(_) => ExitStatus::DataError,
        }
    }
}

/// Map an application error to the status reported at exit
///
/// Walks the context chain so wrapped errors keep their status.
pub fn status_of(err: &anyhow::Error) -> ExitStatus {
    for cause in err.chain() {
        if let Some(err) = cause.downcast_ref::<CommandError>() {
            return err.into();
        }
        if let Some(err) = cause.downcast_ref::<BackendError>() {
            return err.into();
        }
    }
    ExitStatus::DataError
}
