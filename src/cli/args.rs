//! clap definition of the ledctl command line.
//!
//! clap only tokenizes here. Which options belong to which mode is
//! decided by the grammar table, so every option is optional at this level.

use crate::backend::ControllerType;
use crate::cli::grammar::OptionKind;
use crate::ibpi::IbpiPattern;
use crate::utils::logging::LogLevel;
use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use std::path::PathBuf;

const AFTER_HELP: &str = "\
Global options:
  -T, --test  Run against the inert test backend instead of hardware

IBPI patterns:
  normal, off, degraded (ica), rebuild, failed_array (ifa), hotspare, pfa,
  failure (disk_failed), locate, locate_off, locate_and_failure

Examples:
  ledctl locate=/dev/sda,/dev/sdb
  ledctl -P -c vmd
  ledctl --get-slot --controller-type=vmd --device=/dev/nvme0n1";

/// ledctl - control drive enclosure indicator LEDs
#[derive(Parser, Debug)]
#[command(name = "ledctl", version, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(override_usage = "ledctl [OPTIONS] PATTERN=DEVICE[,DEVICE...] ...\n       ledctl [-h | -v | -L | -P | -G | -S] [OPTIONS]")]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Print this help text
    #[arg(short = 'h', long = "help")]
    pub help: bool,

    /// Print version information
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// List controllers that can drive LEDs
    #[arg(short = 'L', long = "list-controllers")]
    pub list_controllers: bool,

    /// List slots behind a controller
    #[arg(short = 'P', long = "list-slots")]
    pub list_slots: bool,

    /// Print the LED state of one slot
    #[arg(short = 'G', long = "get-slot")]
    pub get_slot: bool,

    /// Set the LED state of one slot
    #[arg(short = 'S', long = "set-slot")]
    pub set_slot: bool,

    /// Controller type for slot operations
    #[arg(short = 'c', long = "controller-type", value_enum, ignore_case = true)]
    pub controller_type: Option<ControllerType>,

    /// Select a slot by the block device in it
    #[arg(short = 'd', long = "device")]
    pub device: Option<PathBuf>,

    /// Select a slot by its identifier
    #[arg(short = 'p', long = "slot", value_parser = NonEmptyStringValueParser::new())]
    pub slot: Option<String>,

    /// IBPI pattern to set with --set-slot
    #[arg(short = 's', long = "state")]
    pub state: Option<IbpiPattern>,

    /// Change only the devices listed on the command line
    #[arg(short = 'x', long = "listed-only")]
    pub listed_only: bool,

    /// Write log records to this file
    #[arg(short = 'l', long = "log", value_name = "PATH")]
    pub log: Option<PathBuf>,

    /// Log verbosity
    #[arg(long = "log-level", value_enum, value_name = "LEVEL", group = "verbosity")]
    pub log_level: Option<LogLevel>,

    /// Same as --log-level=quiet
    #[arg(long, group = "verbosity")]
    pub quiet: bool,

    /// Same as --log-level=error
    #[arg(long, group = "verbosity")]
    pub error: bool,

    /// Same as --log-level=warning
    #[arg(long, group = "verbosity")]
    pub warning: bool,

    /// Same as --log-level=info
    #[arg(long, group = "verbosity")]
    pub info: bool,

    /// Same as --log-level=debug
    #[arg(long, group = "verbosity")]
    pub debug: bool,

    /// Same as --log-level=all
    #[arg(long, group = "verbosity")]
    pub all: bool,

    /// IBPI declarations
    #[arg(value_name = "PATTERN=DEVICE")]
    pub targets: Vec<String>,
}

impl Cli {
    /// Log level from --log-level or one of its shortcut flags
    pub fn requested_log_level(&self) -> Option<LogLevel> {
        let shortcuts = [
            (self.quiet, LogLevel::Quiet),
            (self.error, LogLevel::Error),
            (self.warning, LogLevel::Warning),
            (self.info, LogLevel::Info),
            (self.debug, LogLevel::Debug),
            (self.all, LogLevel::All),
        ];

        self.log_level.or_else(|| {
            shortcuts
                .iter()
                .find(|(set, _)| *set)
                .map(|(_, level)| *level)
        })
    }

    /// Mode-scoped options given on the command line
    pub fn present_options(&self) -> Vec<OptionKind> {
        let flags = [
            (self.controller_type.is_some(), OptionKind::ControllerType),
            (self.device.is_some(), OptionKind::Device),
            (self.slot.is_some(), OptionKind::Slot),
            (self.state.is_some(), OptionKind::State),
            (self.listed_only, OptionKind::ListedOnly),
            (self.log.is_some(), OptionKind::Log),
            (self.requested_log_level().is_some(), OptionKind::LogLevel),
        ];

        flags
            .iter()
            .filter(|(present, _)| *present)
            .map(|(_, option)| *option)
            .collect()
    }
}
