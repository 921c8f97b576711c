//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use crate::cli::grammar::{Mode, OptionKind};
use clap::error::{ContextKind, ContextValue, ErrorKind};
use std::error::Error as _;
use thiserror::Error;

/// Errors raised while classifying and validating the command line
///
/// Every variant except `TestModeUnavailable` is a command-line error
/// and shares one exit status.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("test mode requested but this build does not include the test-mode feature")]
    TestModeUnavailable,

    #[error("no mode selected, expected one of -h, -v, -L, -P, -G, -S or an IBPI pattern")]
    NoMode,

    #[error("{second} cannot be combined with {first}")]
    ModeCollision { first: Mode, second: Mode },

    #[error("{mode} requires {option}")]
    MissingOption { mode: Mode, option: OptionKind },

    #[error("{mode} requires exactly one of {options}")]
    ExclusiveOptions { mode: Mode, options: String },

    #[error("{option} cannot be used with {mode}")]
    ForbiddenOption { mode: Mode, option: OptionKind },

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("invalid value '{value}' for {option}: {reason}")]
    InvalidValue {
        option: String,
        value: String,
        reason: String,
    },

    #[error("unexpected argument '{0}'")]
    StrayArgument(String),

    #[error("device {device} is assigned both '{first}' and '{second}'")]
    ConflictingDeclaration {
        device: String,
        first: String,
        second: String,
    },

    #[error("{0}")]
    Syntax(String),
}

impl From<clap::Error> for CommandError {
    fn from(err: clap::Error) -> Self {
        let context = |kind| match err.get(kind) {
            Some(ContextValue::String(value)) => Some(value.clone()),
            _ => None,
        };

        match err.kind() {
            ErrorKind::UnknownArgument => {
                CommandError::UnknownOption(context(ContextKind::InvalidArg).unwrap_or_default())
            }
            ErrorKind::InvalidValue if is_missing_value(&err) => {
                CommandError::Syntax(first_line(&err))
            }
            ErrorKind::InvalidValue | ErrorKind::ValueValidation => {
                let reason = match (err.source(), err.get(ContextKind::ValidValue)) {
                    (Some(source), _) => source.to_string(),
                    (None, Some(ContextValue::Strings(valid))) => {
                        format!("expected one of {}", valid.join(", "))
                    }
                    _ => "value rejected".to_string(),
                };
                CommandError::InvalidValue {
                    option: context(ContextKind::InvalidArg).unwrap_or_default(),
                    value: context(ContextKind::InvalidValue).unwrap_or_default(),
                    reason,
                }
            }
            _ => CommandError::Syntax(first_line(&err)),
        }
    }
}

/// clap reports a missing option value as an invalid value with no choices
fn is_missing_value(err: &clap::Error) -> bool {
    let no_choices = match err.get(ContextKind::ValidValue) {
        Some(ContextValue::Strings(valid)) => valid.is_empty(),
        _ => true,
    };
    err.source().is_none() && no_choices
}

/// First line of a rendered clap error, without the `error: ` prefix
fn first_line(err: &clap::Error) -> String {
    let rendered = err.render().to_string();
    let line = rendered.lines().next().unwrap_or_default();
    line.trim_start_matches("error: ").to_string()
}

/// Errors that can occur while parsing IBPI patterns and declarations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IbpiError {
    #[error("unknown IBPI pattern '{0}'")]
    UnknownPattern(String),

    #[error("expected PATTERN=DEVICE[,DEVICE...], got '{0}'")]
    MalformedDeclaration(String),

    #[error("pattern '{0}' has no devices")]
    MissingDevices(String),
}

/// Errors reported by an LED backend
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("{0} is not supported by this build, run with --test")]
    NotSupported(String),

    #[error("slot not found: {0}")]
    SlotNotFound(String),

    #[error("controller type '{0}' does not expose slots")]
    NoSlots(String),
}
