//! Configuration and constants for the CLI.

/// Name used in diagnostics and usage text
pub const PROGRAM_NAME: &str = "ledctl";

/// Filter used when neither `--log-level` nor `RUST_LOG` is given
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Tokens that request the inert test backend
pub const TEST_FLAGS: &[&str] = &["-T", "--test"];

/// Build-time capabilities, resolved once at startup
///
/// **Public** - `test_mode` is handed to the classifier, which records the
/// outcome on the resolved command for the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Whether `-T/--test` may be used
    pub test_mode: bool,
}

impl Capabilities {
    /// Capabilities compiled into this binary
    pub fn detect() -> Self {
        Self {
            test_mode: cfg!(feature = "test-mode"),
        }
    }
}
