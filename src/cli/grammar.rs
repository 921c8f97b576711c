//! Per-mode grammar table.
//!
//! Each mode lists the options it requires, the options of which exactly
//! one must be given, and the options it merely tolerates. Anything else
//! is rejected for that mode.

use crate::utils::error::CommandError;
use std::fmt;

/// Operating mode, fixed by the first mode-establishing token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Help,
    Version,
    ListControllers,
    ListSlots,
    GetSlot,
    SetSlot,
    IbpiAssignment,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Help => "--help",
            Mode::Version => "--version",
            Mode::ListControllers => "--list-controllers",
            Mode::ListSlots => "--list-slots",
            Mode::GetSlot => "--get-slot",
            Mode::SetSlot => "--set-slot",
            Mode::IbpiAssignment => "IBPI pattern",
        };
        f.write_str(name)
    }
}

/// Options scoped to a mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKind {
    ControllerType,
    Device,
    Slot,
    State,
    ListedOnly,
    Log,
    LogLevel,
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OptionKind::ControllerType => "--controller-type",
            OptionKind::Device => "--device",
            OptionKind::Slot => "--slot",
            OptionKind::State => "--state",
            OptionKind::ListedOnly => "--listed-only",
            OptionKind::Log => "--log",
            OptionKind::LogLevel => "--log-level",
        };
        f.write_str(name)
    }
}

/// Flags that establish a mode, keyed by clap argument id
pub const MODE_FLAGS: &[(&str, Mode)] = &[
    ("help", Mode::Help),
    ("version", Mode::Version),
    ("list_controllers", Mode::ListControllers),
    ("list_slots", Mode::ListSlots),
    ("get_slot", Mode::GetSlot),
    ("set_slot", Mode::SetSlot),
];

/// One row of the grammar table
#[derive(Debug)]
pub struct ModeGrammar {
    pub mode: Mode,
    pub required: &'static [OptionKind],
    pub exactly_one_of: &'static [OptionKind],
    pub optional: &'static [OptionKind],
}

const HELP: ModeGrammar = ModeGrammar {
    mode: Mode::Help,
    required: &[],
    exactly_one_of: &[],
    optional: &[],
};

const VERSION: ModeGrammar = ModeGrammar {
    mode: Mode::Version,
    required: &[],
    exactly_one_of: &[],
    optional: &[],
};

const LIST_CONTROLLERS: ModeGrammar = ModeGrammar {
    mode: Mode::ListControllers,
    required: &[],
    exactly_one_of: &[],
    optional: &[],
};

const LIST_SLOTS: ModeGrammar = ModeGrammar {
    mode: Mode::ListSlots,
    required: &[OptionKind::ControllerType],
    exactly_one_of: &[],
    optional: &[],
};

const GET_SLOT: ModeGrammar = ModeGrammar {
    mode: Mode::GetSlot,
    required: &[OptionKind::ControllerType],
    exactly_one_of: &[OptionKind::Device, OptionKind::Slot],
    optional: &[],
};

const SET_SLOT: ModeGrammar = ModeGrammar {
    mode: Mode::SetSlot,
    required: &[OptionKind::ControllerType, OptionKind::State],
    exactly_one_of: &[OptionKind::Device, OptionKind::Slot],
    optional: &[],
};

const IBPI_ASSIGNMENT: ModeGrammar = ModeGrammar {
    mode: Mode::IbpiAssignment,
    required: &[],
    exactly_one_of: &[],
    optional: &[OptionKind::ListedOnly, OptionKind::Log, OptionKind::LogLevel],
};

/// Every row, for checks that must hold across the table
#[cfg(test)]
const GRAMMAR: &[&ModeGrammar] = &[
    &HELP,
    &VERSION,
    &LIST_CONTROLLERS,
    &LIST_SLOTS,
    &GET_SLOT,
    &SET_SLOT,
    &IBPI_ASSIGNMENT,
];

impl ModeGrammar {
    pub fn for_mode(mode: Mode) -> &'static ModeGrammar {
        match mode {
            Mode::Help => &HELP,
            Mode::Version => &VERSION,
            Mode::ListControllers => &LIST_CONTROLLERS,
            Mode::ListSlots => &LIST_SLOTS,
            Mode::GetSlot => &GET_SLOT,
            Mode::SetSlot => &SET_SLOT,
            Mode::IbpiAssignment => &IBPI_ASSIGNMENT,
        }
    }

    pub fn permits(&self, option: OptionKind) -> bool {
        self.required.contains(&option)
            || self.exactly_one_of.contains(&option)
            || self.optional.contains(&option)
    }

    /// Check the options present on the command line against this row
    ///
    /// # Errors
    /// * `CommandError::ForbiddenOption` - option not in this row
    /// * `CommandError::MissingOption` - a required option is absent
    /// * `CommandError::ExclusiveOptions` - zero or several of `exactly_one_of`
    pub fn check(&self, present: &[OptionKind]) -> Result<(), CommandError> {
        if let Some(option) = present.iter().find(|option| !self.permits(**option)) {
            return Err(CommandError::ForbiddenOption {
                mode: self.mode,
                option: *option,
            });
        }

        if let Some(option) = self.required.iter().find(|option| !present.contains(*option)) {
            return Err(CommandError::MissingOption {
                mode: self.mode,
                option: *option,
            });
        }

        if !self.exactly_one_of.is_empty() {
            let given = self
                .exactly_one_of
                .iter()
                .filter(|option| present.contains(*option))
                .count();
            if given != 1 {
                let options: Vec<String> =
                    self.exactly_one_of.iter().map(ToString::to_string).collect();
                return Err(CommandError::ExclusiveOptions {
                    mode: self.mode,
                    options: options.join(", "),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_mode_has_its_own_row() {
        for row in GRAMMAR {
            assert_eq!(ModeGrammar::for_mode(row.mode).mode, row.mode);
        }
        assert_eq!(GRAMMAR.len(), 7);
    }

    #[test]
    fn test_get_slot_needs_exactly_one_selector() {
        let grammar = ModeGrammar::for_mode(Mode::GetSlot);
        assert!(grammar
            .check(&[OptionKind::ControllerType, OptionKind::Slot])
            .is_ok());
        assert!(matches!(
            grammar.check(&[OptionKind::ControllerType]),
            Err(CommandError::ExclusiveOptions { .. })
        ));
        assert!(matches!(
            grammar.check(&[OptionKind::ControllerType, OptionKind::Slot, OptionKind::Device]),
            Err(CommandError::ExclusiveOptions { .. })
        ));
    }

    #[test]
    fn test_missing_controller_type() {
        assert_eq!(
            ModeGrammar::for_mode(Mode::ListSlots).check(&[]),
            Err(CommandError::MissingOption {
                mode: Mode::ListSlots,
                option: OptionKind::ControllerType,
            })
        );
    }

    #[test]
    fn test_log_options_only_for_ibpi() {
        let ibpi = ModeGrammar::for_mode(Mode::IbpiAssignment);
        assert!(ibpi.check(&[OptionKind::Log, OptionKind::LogLevel]).is_ok());

        for row in GRAMMAR.iter().filter(|row| row.mode != Mode::IbpiAssignment) {
            assert!(!row.permits(OptionKind::Log), "{} permits --log", row.mode);
            assert!(!row.permits(OptionKind::ListedOnly));
        }
    }

    #[test]
    fn test_forbidden_reported_before_missing() {
        assert_eq!(
            ModeGrammar::for_mode(Mode::ListControllers).check(&[OptionKind::ControllerType]),
            Err(CommandError::ForbiddenOption {
                mode: Mode::ListControllers,
                option: OptionKind::ControllerType,
            })
        );
    }
}
