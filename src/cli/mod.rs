//! Command-line classification and validation.
//!
//! This module handles:
//! - The clap definition of every flag ledctl accepts
//! - The per-mode grammar table
//! - Turning an argument vector into one validated command

pub mod args;
pub mod classify;
pub mod command;
pub mod grammar;

// Re-export main types
pub use args::Cli;
pub use classify::{classify_and_validate, strip_test_flag};
pub use command::{Command, IbpiRequest, ResolvedCommand};
pub use grammar::{Mode, ModeGrammar, OptionKind};
