//! ledctl
//!
//! Command-line control of drive enclosure indicator LEDs.
//!
//! The crate turns an argument vector into exactly one validated
//! command, or rejects it with a fixed exit status, and then runs the
//! command against an LED backend.
//!
//! ## Getting Started
//!
//! ```bash
//! ledctl --help
//! ledctl --test --list-controllers
//! ledctl locate=/dev/sda
//! ```

pub mod backend;
pub mod cli;
pub mod commands;
pub mod ibpi;
pub mod utils;
