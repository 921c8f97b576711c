use ledctl::backend::{ControllerType, SlotTarget};
use ledctl::cli::{classify_and_validate, Command, IbpiRequest, Mode, OptionKind, ResolvedCommand};
use ledctl::ibpi::{IbpiDeclaration, IbpiPattern};
use ledctl::utils::logging::{LogLevel, LogOptions};
use ledctl::utils::CommandError;
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn classify(line: &str) -> Result<ResolvedCommand, CommandError> {
    let args: Vec<String> = line.split_whitespace().map(str::to_string).collect();
    classify_and_validate(&args, true)
}

fn resolved(line: &str) -> Command {
    let resolved = classify(line).unwrap();
    assert!(resolved.test_mode, "{} did not enable test mode", line);
    resolved.command
}

#[test]
fn test_bare_test_flag_resolves_to_help() {
    assert_eq!(resolved("-T"), Command::Help);
    assert_eq!(resolved("--test"), Command::Help);
}

#[test]
fn test_short_and_long_spellings_match() {
    let pairs = [
        ("-T -h", "--test --help"),
        ("-T -v", "--test --version"),
        ("-T -L", "--test --list-controllers"),
        ("-T -P -c vmd", "--test --list-slots --controller-type=vmd"),
        (
            "-T -G -c vmd -d /dev/nvme0n1",
            "--test --get-slot --controller-type=vmd --device=/dev/nvme0n1",
        ),
        ("-T -G -c vmd -p 1", "--test --get-slot --controller-type vmd --slot 1"),
        ("-T normal=/dev/nvme0n1 -x", "--test normal=/dev/nvme0n1 --listed-only"),
        (
            "-T normal=/dev/nvme0n1 -l /var/log/ledctl.log",
            "--test normal=/dev/nvme0n1 --log=/var/log/ledctl.log",
        ),
    ];

    for (short, long) in pairs {
        assert_eq!(resolved(short), resolved(long), "{} vs {}", short, long);
    }
}

#[test]
fn test_get_slot_payload() {
    assert_eq!(
        resolved("-T --get-slot --controller-type=vmd --device=/dev/nvme0n1"),
        Command::GetSlot {
            controller: ControllerType::Vmd,
            target: SlotTarget::Device(PathBuf::from("/dev/nvme0n1")),
        }
    );
    assert_eq!(
        resolved("-T -S -c npem -p 1 -s ica"),
        Command::SetSlot {
            controller: ControllerType::Npem,
            target: SlotTarget::Slot("1".to_string()),
            state: IbpiPattern::Degraded,
        }
    );
}

#[test]
fn test_ibpi_payload() {
    assert_eq!(
        resolved("-T locate=/dev/sda,/dev/sdb failure=/dev/sdc --log-level=debug -l /tmp/ledctl.log"),
        Command::SetIbpi(IbpiRequest {
            declarations: vec![
                IbpiDeclaration {
                    pattern: IbpiPattern::Locate,
                    devices: vec![PathBuf::from("/dev/sda"), PathBuf::from("/dev/sdb")],
                },
                IbpiDeclaration {
                    pattern: IbpiPattern::FailedDrive,
                    devices: vec![PathBuf::from("/dev/sdc")],
                },
            ],
            listed_only: false,
            log: LogOptions {
                path: Some(PathBuf::from("/tmp/ledctl.log")),
                level: Some(LogLevel::Debug),
            },
        })
    );
}

#[test]
fn test_log_options_reach_resolved_command() {
    let resolved = classify("-T normal=/dev/sda --all").unwrap();
    assert_eq!(resolved.log_options().level, Some(LogLevel::All));

    let resolved = classify("-T -L").unwrap();
    assert_eq!(resolved.log_options(), LogOptions::default());
}

#[test]
fn test_test_mode_off_without_flag() {
    assert!(!classify("-L").unwrap().test_mode);
}

#[test]
fn test_mode_collisions() {
    assert_eq!(
        classify("-T normal=/dev/nvme0n1 -G -c vmd --slot=2"),
        Err(CommandError::ModeCollision {
            first: Mode::IbpiAssignment,
            second: Mode::GetSlot,
        })
    );
    assert_eq!(
        classify("--test -P -c vmd --list-controllers"),
        Err(CommandError::ModeCollision {
            first: Mode::ListSlots,
            second: Mode::ListControllers,
        })
    );
    assert!(matches!(
        classify("-T -h -v"),
        Err(CommandError::ModeCollision { .. })
    ));
}

#[test]
fn test_options_without_mode() {
    for line in [
        "-T -l /var/log/ledctl.log",
        "-T --log=/var/log/ledctl.log",
        "-T --log-level=all",
        "-T -x",
        "-T --listed-only",
        "-T -c vmd",
    ] {
        assert_eq!(classify(line), Err(CommandError::NoMode), "{}", line);
    }
}

#[test]
fn test_options_outside_their_mode() {
    assert_eq!(
        classify("-T -L -x"),
        Err(CommandError::ForbiddenOption {
            mode: Mode::ListControllers,
            option: OptionKind::ListedOnly,
        })
    );
    assert_eq!(
        classify("-T -P -c vmd --log=/tmp/x"),
        Err(CommandError::ForbiddenOption {
            mode: Mode::ListSlots,
            option: OptionKind::Log,
        })
    );
    assert_eq!(
        classify("-T normal=/dev/sda -c vmd"),
        Err(CommandError::ForbiddenOption {
            mode: Mode::IbpiAssignment,
            option: OptionKind::ControllerType,
        })
    );
}

#[test]
fn test_unknown_flags() {
    assert_eq!(
        classify("-T normal=/dev/nvme0n1 --information"),
        Err(CommandError::UnknownOption("--information".to_string()))
    );
    assert!(matches!(classify("-T -L -q"), Err(CommandError::UnknownOption(_))));
}

#[test]
fn test_stray_arguments() {
    assert_eq!(classify("-T -L a"), Err(CommandError::StrayArgument("a".to_string())));
    assert_eq!(
        classify("-T a b c -L d e f"),
        Err(CommandError::StrayArgument("a".to_string()))
    );
    assert_eq!(
        classify("-T -L test"),
        Err(CommandError::StrayArgument("test".to_string()))
    );
}

#[test]
fn test_malformed_values() {
    for line in [
        "-T sparkle=/dev/sda",
        "-T normal=",
        "-T -P -c floppy",
        "-T -P -c ahci",
        "-T -S -c vmd -p 1 -s sparkle",
        "-T normal=/dev/sda --log-level=loud",
    ] {
        assert!(
            matches!(classify(line), Err(CommandError::InvalidValue { .. })),
            "{} was not a malformed value",
            line
        );
    }
}

#[test]
fn test_missing_requirements() {
    assert_eq!(
        classify("-T -G -p 1"),
        Err(CommandError::MissingOption {
            mode: Mode::GetSlot,
            option: OptionKind::ControllerType,
        })
    );
    assert!(matches!(
        classify("-T -G -c vmd -d /dev/nvme0n1 -p 1"),
        Err(CommandError::ExclusiveOptions { mode: Mode::GetSlot, .. })
    ));
    assert_eq!(
        classify("-T -S -c vmd -p 1"),
        Err(CommandError::MissingOption {
            mode: Mode::SetSlot,
            option: OptionKind::State,
        })
    );
}

#[test]
fn test_classification_is_repeatable() {
    for line in ["-T -G -c vmd -p 1", "-T -L a", "-T normal=/dev/sda -x"] {
        assert_eq!(classify(line), classify(line));
    }
}
