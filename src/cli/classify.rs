//! Command classifier and validator.
//!
//! One pass over the argument vector: strip the test flag, tokenize with
//! clap, fix the mode, check the grammar row, build the command. Nothing
//! here touches files, devices or the logger.

use super::args::Cli;
use super::command::{Command, IbpiRequest, ResolvedCommand};
use super::grammar::{Mode, ModeGrammar, OptionKind, MODE_FLAGS};
use crate::backend::{ControllerType, SlotTarget};
use crate::ibpi::{IbpiDeclaration, IbpiPattern};
use crate::utils::config::{PROGRAM_NAME, TEST_FLAGS};
use crate::utils::error::CommandError;
use crate::utils::logging::LogOptions;
use clap::{ArgMatches, CommandFactory, FromArgMatches};
use std::collections::HashMap;
use std::path::PathBuf;

/// Remove `-T`/`--test` from the argument vector
///
/// The flag may appear anywhere before `--`, also inside a bundle of short
/// flags (`-TL`, `-LT`). Option values are never touched, so the `-T` in
/// `-l -T` stays where it is.
///
/// # Returns
/// The remaining tokens, and whether the flag was present
pub fn strip_test_flag(args: &[String]) -> (Vec<String>, bool) {
    let (value_shorts, value_longs) = value_options();
    let mut tokens = Vec::with_capacity(args.len());
    let mut test_mode = false;
    let mut options_ended = false;
    let mut expect_value = false;

    for arg in args {
        if options_ended || expect_value {
            expect_value = false;
            tokens.push(arg.clone());
            continue;
        }

        if TEST_FLAGS.contains(&arg.as_str()) {
            test_mode = true;
            continue;
        }

        if arg == "--" {
            options_ended = true;
        } else if let Some(long) = arg.strip_prefix("--") {
            expect_value = !long.contains('=') && value_longs.iter().any(|name| name == long);
        } else if let Some(bundle) = arg.strip_prefix('-').filter(|bundle| !bundle.is_empty()) {
            let stripped = strip_short_bundle(bundle, &value_shorts);
            test_mode |= stripped.had_test_flag;
            expect_value = stripped.needs_value;
            if !stripped.kept.is_empty() {
                tokens.push(format!("-{}", stripped.kept));
            }
            continue;
        }

        tokens.push(arg.clone());
    }

    (tokens, test_mode)
}

/// What is left of a short-flag bundle once `T` is taken out
struct StrippedBundle {
    kept: String,
    had_test_flag: bool,
    /// The last flag takes a value and it is the next token
    needs_value: bool,
}

fn strip_short_bundle(bundle: &str, value_shorts: &[char]) -> StrippedBundle {
    let mut kept = String::with_capacity(bundle.len());
    let mut had_test_flag = false;

    for (pos, flag) in bundle.char_indices() {
        if flag == 'T' {
            had_test_flag = true;
            continue;
        }
        kept.push(flag);

        // Everything after a value-taking flag is its value
        if value_shorts.contains(&flag) {
            let value = &bundle[pos + flag.len_utf8()..];
            kept.push_str(value);
            return StrippedBundle {
                kept,
                had_test_flag,
                needs_value: value.is_empty(),
            };
        }
    }

    StrippedBundle {
        kept,
        had_test_flag,
        needs_value: false,
    }
}

/// Short and long names of the options that take a value
fn value_options() -> (Vec<char>, Vec<String>) {
    let command = Cli::command();
    let options: Vec<_> = command
        .get_arguments()
        .filter(|arg| !arg.is_positional() && arg.get_action().takes_values())
        .collect();

    (
        options.iter().filter_map(|arg| arg.get_short()).collect(),
        options
            .iter()
            .filter_map(|arg| arg.get_long())
            .map(str::to_string)
            .collect(),
    )
}

/// Classify an argument vector into exactly one mode and validate it
///
/// **Public** - main entry point, called from main.rs
///
/// # Arguments
/// * `args` - Command-line tokens, without the program name
/// * `test_capable` - Whether this build may run the test backend
///
/// # Returns
/// The resolved command, or the first validation error found
///
/// # Errors
/// * `CommandError::TestModeUnavailable` - `-T` given to a build without it
/// * Any other `CommandError` variant - the command line is invalid
///
/// # Example
/// ```
/// use ledctl::cli::{classify_and_validate, Mode};
///
/// let args: Vec<String> = ["-T", "-P", "-c", "vmd"].iter().map(|s| s.to_string()).collect();
/// let resolved = classify_and_validate(&args, true).unwrap();
/// assert_eq!(resolved.mode(), Mode::ListSlots);
/// assert!(resolved.test_mode);
/// ```
pub fn classify_and_validate(
    args: &[String],
    test_capable: bool,
) -> Result<ResolvedCommand, CommandError> {
    // Step 1: Test flag, checked against the build before anything else
    let (tokens, test_mode) = strip_test_flag(args);
    if test_mode && !test_capable {
        return Err(CommandError::TestModeUnavailable);
    }

    if tokens.is_empty() {
        return Ok(ResolvedCommand {
            command: Command::Help,
            test_mode,
        });
    }

    // Step 2: Tokenize (unknown flags and bad values stop here)
    let argv = std::iter::once(PROGRAM_NAME.to_string()).chain(tokens);
    let matches = Cli::command().try_get_matches_from(argv)?;
    let cli = Cli::from_arg_matches(&matches)?;

    // Step 3: Positionals must all be IBPI declarations
    if let Some(stray) = cli
        .targets
        .iter()
        .find(|token| !IbpiDeclaration::is_declaration(token))
    {
        return Err(CommandError::StrayArgument(stray.clone()));
    }

    // Step 4: Fix the mode
    let mode = establish_mode(&matches)?;

    // Step 5: Per-mode grammar
    ModeGrammar::for_mode(mode).check(&cli.present_options())?;

    // Step 6: Build the payload
    let command = build_command(mode, &cli)?;

    Ok(ResolvedCommand { command, test_mode })
}

/// Find the mode-establishing tokens in command-line order
///
/// The first one fixes the mode; a second one is a collision.
fn establish_mode(matches: &ArgMatches) -> Result<Mode, CommandError> {
    let mut found: Vec<(usize, Mode)> = MODE_FLAGS
        .iter()
        .filter(|(id, _)| matches.get_flag(id))
        .map(|(id, mode)| (matches.index_of(id).unwrap_or(usize::MAX), *mode))
        .collect();

    // Every declaration establishes the same mode, the first one places it
    if let Some(index) = matches.indices_of("targets").and_then(|mut indices| indices.next()) {
        found.push((index, Mode::IbpiAssignment));
    }

    found.sort_by_key(|(index, _)| *index);

    match found.as_slice() {
        [] => Err(CommandError::NoMode),
        [(_, mode)] => Ok(*mode),
        [(_, first), (_, second), ..] => Err(CommandError::ModeCollision {
            first: *first,
            second: *second,
        }),
    }
}

fn build_command(mode: Mode, cli: &Cli) -> Result<Command, CommandError> {
    let command = match mode {
        Mode::Help => Command::Help,
        Mode::Version => Command::Version,
        Mode::ListControllers => Command::ListControllers,
        Mode::ListSlots => Command::ListSlots {
            controller: slot_controller(mode, cli.controller_type)?,
        },
        Mode::GetSlot => Command::GetSlot {
            controller: slot_controller(mode, cli.controller_type)?,
            target: slot_target(mode, cli.device.as_ref(), cli.slot.as_ref())?,
        },
        Mode::SetSlot => Command::SetSlot {
            controller: slot_controller(mode, cli.controller_type)?,
            target: slot_target(mode, cli.device.as_ref(), cli.slot.as_ref())?,
            state: cli.state.ok_or(CommandError::MissingOption {
                mode,
                option: OptionKind::State,
            })?,
        },
        Mode::IbpiAssignment => Command::SetIbpi(IbpiRequest {
            declarations: parse_declarations(&cli.targets)?,
            listed_only: cli.listed_only,
            log: LogOptions {
                path: cli.log.clone(),
                level: cli.requested_log_level(),
            },
        }),
    };

    Ok(command)
}

fn slot_controller(
    mode: Mode,
    controller: Option<ControllerType>,
) -> Result<ControllerType, CommandError> {
    let controller = controller.ok_or(CommandError::MissingOption {
        mode,
        option: OptionKind::ControllerType,
    })?;

    if !controller.supports_slots() {
        return Err(CommandError::InvalidValue {
            option: OptionKind::ControllerType.to_string(),
            value: controller.to_string(),
            reason: "controller type has no addressable slots".to_string(),
        });
    }

    Ok(controller)
}

fn slot_target(
    mode: Mode,
    device: Option<&PathBuf>,
    slot: Option<&String>,
) -> Result<SlotTarget, CommandError> {
    match (device, slot) {
        (Some(device), None) => Ok(SlotTarget::Device(device.clone())),
        (None, Some(slot)) => Ok(SlotTarget::Slot(slot.clone())),
        _ => Err(CommandError::ExclusiveOptions {
            mode,
            options: format!("{}, {}", OptionKind::Device, OptionKind::Slot),
        }),
    }
}

/// Parse every declaration and reject a device given two patterns
fn parse_declarations(targets: &[String]) -> Result<Vec<IbpiDeclaration>, CommandError> {
    let mut declarations = Vec::with_capacity(targets.len());
    let mut assigned: HashMap<PathBuf, IbpiPattern> = HashMap::new();

    for token in targets {
        let declaration =
            IbpiDeclaration::parse(token).map_err(|err| CommandError::InvalidValue {
                option: Mode::IbpiAssignment.to_string(),
                value: token.clone(),
                reason: err.to_string(),
            })?;

        for device in &declaration.devices {
            if let Some(previous) = assigned.insert(device.clone(), declaration.pattern) {
                if previous != declaration.pattern {
                    return Err(CommandError::ConflictingDeclaration {
                        device: device.display().to_string(),
                        first: previous.to_string(),
                        second: declaration.pattern.to_string(),
                    });
                }
            }
        }

        declarations.push(declaration);
    }

    Ok(declarations)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|token| token.to_string()).collect()
    }

    #[test]
    fn test_strip_test_flag_anywhere() {
        let (tokens, test_mode) = strip_test_flag(&args(&["-L", "--test"]));
        assert_eq!(tokens, args(&["-L"]));
        assert!(test_mode);

        let (tokens, test_mode) = strip_test_flag(&args(&["-T", "-P", "-T", "-c", "vmd"]));
        assert_eq!(tokens, args(&["-P", "-c", "vmd"]));
        assert!(test_mode);
    }

    #[test]
    fn test_strip_test_flag_stops_at_double_dash() {
        let (tokens, test_mode) = strip_test_flag(&args(&["--", "-T"]));
        assert_eq!(tokens, args(&["--", "-T"]));
        assert!(!test_mode);
    }

    #[test]
    fn test_strip_test_flag_from_bundles() {
        let (tokens, test_mode) = strip_test_flag(&args(&["-TL"]));
        assert_eq!(tokens, args(&["-L"]));
        assert!(test_mode);

        let (tokens, test_mode) = strip_test_flag(&args(&["-LT"]));
        assert_eq!(tokens, args(&["-L"]));
        assert!(test_mode);

        let (tokens, test_mode) = strip_test_flag(&args(&["-TPc", "vmd"]));
        assert_eq!(tokens, args(&["-Pc", "vmd"]));
        assert!(test_mode);
    }

    #[test]
    fn test_strip_test_flag_leaves_option_values() {
        let line = args(&["normal=/dev/sda", "-l", "-T"]);
        assert_eq!(strip_test_flag(&line), (line.clone(), false));

        let line = args(&["normal=/dev/sda", "--log", "-T"]);
        assert_eq!(strip_test_flag(&line), (line.clone(), false));

        // Attached to a value-taking flag, T is the value
        let line = args(&["-Gcvmd", "-pT"]);
        assert_eq!(strip_test_flag(&line), (line.clone(), false));
    }

    #[test]
    fn test_bundled_test_flag_classifies() {
        for line in [&["-TL"][..], &["-LT"], &["-T", "-L"]] {
            let resolved = classify_and_validate(&args(line), true).unwrap();
            assert_eq!(resolved.mode(), Mode::ListControllers);
            assert!(resolved.test_mode);
        }

        assert_eq!(
            classify_and_validate(&args(&["-LT"]), false),
            Err(CommandError::TestModeUnavailable)
        );
    }

    #[test]
    fn test_first_mode_token_wins() {
        let err = classify_and_validate(&args(&["normal=/dev/nvme0n1", "-L"]), true).unwrap_err();
        assert_eq!(
            err,
            CommandError::ModeCollision {
                first: Mode::IbpiAssignment,
                second: Mode::ListControllers,
            }
        );

        let err = classify_and_validate(&args(&["-L", "normal=/dev/nvme0n1"]), true).unwrap_err();
        assert_eq!(
            err,
            CommandError::ModeCollision {
                first: Mode::ListControllers,
                second: Mode::IbpiAssignment,
            }
        );
    }

    #[test]
    fn test_conflicting_declarations() {
        let err = classify_and_validate(
            &args(&["locate=/dev/sda", "failure=/dev/sdb,/dev/sda"]),
            true,
        )
        .unwrap_err();
        assert!(matches!(err, CommandError::ConflictingDeclaration { .. }));

        // Repeating the same pattern is harmless
        assert!(classify_and_validate(&args(&["locate=/dev/sda", "locate=/dev/sda"]), true).is_ok());
    }

    #[test]
    fn test_test_flag_needs_capability() {
        assert_eq!(
            classify_and_validate(&args(&["-T", "-L"]), false),
            Err(CommandError::TestModeUnavailable)
        );
        // The capability check comes before parsing
        assert_eq!(
            classify_and_validate(&args(&["-T", "--information"]), false),
            Err(CommandError::TestModeUnavailable)
        );
        assert!(classify_and_validate(&args(&["-L"]), false).is_ok());
    }
}
