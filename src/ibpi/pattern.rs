//! Named IBPI blink patterns.

use crate::utils::error::IbpiError;
use std::fmt;
use std::str::FromStr;

/// An IBPI pattern that can be shown on a slot LED
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IbpiPattern {
    Normal,
    Off,
    Degraded,
    Rebuild,
    FailedArray,
    Hotspare,
    Pfa,
    FailedDrive,
    Locate,
    LocateOff,
    LocateAndFailure,
}

/// Accepted spellings; the first entry for a pattern is its canonical name
const PATTERN_NAMES: &[(&str, IbpiPattern)] = &[
    ("normal", IbpiPattern::Normal),
    ("off", IbpiPattern::Off),
    ("degraded", IbpiPattern::Degraded),
    ("ica", IbpiPattern::Degraded),
    ("rebuild", IbpiPattern::Rebuild),
    ("failed_array", IbpiPattern::FailedArray),
    ("ifa", IbpiPattern::FailedArray),
    ("hotspare", IbpiPattern::Hotspare),
    ("pfa", IbpiPattern::Pfa),
    ("failure", IbpiPattern::FailedDrive),
    ("disk_failed", IbpiPattern::FailedDrive),
    ("locate", IbpiPattern::Locate),
    ("locate_off", IbpiPattern::LocateOff),
    ("locate_and_failure", IbpiPattern::LocateAndFailure),
];

impl IbpiPattern {
    /// Canonical name, as printed in slot listings
    pub fn name(self) -> &'static str {
        PATTERN_NAMES
            .iter()
            .find(|(_, pattern)| *pattern == self)
            .map_or("unknown", |(name, _)| *name)
    }
}

impl FromStr for IbpiPattern {
    type Err = IbpiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PATTERN_NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|(_, pattern)| *pattern)
            .ok_or_else(|| IbpiError::UnknownPattern(s.to_string()))
    }
}

impl fmt::Display for IbpiPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
