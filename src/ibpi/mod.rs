//! IBPI (International Blinking Pattern Interpretation) vocabulary.
//!
//! This module handles:
//! - Named LED patterns and their aliases
//! - `PATTERN=DEVICE` declarations given on the command line

pub mod declaration;
pub mod pattern;

pub use declaration::IbpiDeclaration;
pub use pattern::IbpiPattern;
