//! `PATTERN=DEVICE[,DEVICE...]` declarations.

use crate::ibpi::pattern::IbpiPattern;
use crate::utils::error::IbpiError;
use std::path::PathBuf;

/// A pattern assigned to one or more block devices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IbpiDeclaration {
    pub pattern: IbpiPattern,
    pub devices: Vec<PathBuf>,
}

impl IbpiDeclaration {
    /// Whether a positional token should be read as a declaration
    ///
    /// Anything of the form `x=y` counts, so a misspelled pattern is
    /// reported as such instead of as a stray argument.
    pub fn is_declaration(token: &str) -> bool {
        !token.starts_with('-') && token.contains('=')
    }

    /// Parse a single declaration token
    ///
    /// # Errors
    /// * `IbpiError::MalformedDeclaration` - no `=`, or an empty device entry
    /// * `IbpiError::UnknownPattern` - pattern name not recognised
    /// * `IbpiError::MissingDevices` - nothing after `=`
    pub fn parse(token: &str) -> Result<Self, IbpiError> {
        let (name, list) = token
            .split_once('=')
            .ok_or_else(|| IbpiError::MalformedDeclaration(token.to_string()))?;

        let pattern: IbpiPattern = name.parse()?;

        if list.is_empty() {
            return Err(IbpiError::MissingDevices(name.to_string()));
        }

        let devices = list
            .split(',')
            .map(|device| {
                if device.is_empty() {
                    Err(IbpiError::MalformedDeclaration(token.to_string()))
                } else {
                    Ok(PathBuf::from(device))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { pattern, devices })
    }
}
