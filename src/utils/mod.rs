//! Utility modules for configuration, error handling, and logging.

pub mod config;
pub mod error;
pub mod logging;
pub mod status;

// Re-export commonly used error types for convenience
pub use error::{BackendError, CommandError, IbpiError};
pub use status::{status_of, ExitStatus};
