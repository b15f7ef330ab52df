//! Error type for color parsing.

use std::fmt;
use std::num::ParseIntError;

/// Error type for parsing a [`TargetColor`](super::TargetColor) from text.
///
/// Returned when the input is neither a hex color (`#RGB`, `#RRGGBB`, with
/// or without the hash) nor a decimal `r,g,b` triple.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    InvalidLength,
    /// Invalid hexadecimal character encountered
    InvalidHex(ParseIntError),
    /// Decimal triple did not have exactly three components
    ComponentCount(usize),
    /// A decimal component was not an integer in 0..=255
    InvalidComponent(ParseIntError),
}

impl From<ParseIntError> for ParseColorError {
    fn from(err: ParseIntError) -> Self {
        ParseColorError::InvalidHex(err)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength => {
                write!(f, "invalid hex color length (expected 3 or 6 characters)")
            }
            ParseColorError::InvalidHex(err) => {
                write!(f, "invalid hex character: {}", err)
            }
            ParseColorError::ComponentCount(n) => {
                write!(f, "expected 3 comma-separated components, got {}", n)
            }
            ParseColorError::InvalidComponent(err) => {
                write!(f, "invalid color component (expected 0-255): {}", err)
            }
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseColorError::InvalidHex(err) | ParseColorError::InvalidComponent(err) => Some(err),
            _ => None,
        }
    }
}
