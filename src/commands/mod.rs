//! CLI command implementations.
//!
//! Commands take a validated [`ResolvedCommand`](crate::cli::ResolvedCommand)
//! and carry it out against an LED backend.

pub mod dispatch;
pub mod utils;

// Re-export main command functions
pub use dispatch::{execute, run_command};
pub use utils::{display_help, display_version};
