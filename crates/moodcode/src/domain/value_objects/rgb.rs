//! Rgb - Decomposed color channels

use serde::{Deserialize, Serialize};

use crate::domain::errors::EngineError;

/// A hex color decomposed into 8-bit channels.
///
/// Derived from catalog color strings for terminal rendering; the decoder
/// validates its input even though the builtin catalog is well-formed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    /// Parse a `#RRGGBB` string into channels.
    ///
    /// Strict: exactly one `#` followed by six hex digits (either case).
    pub fn from_hex(hex: &str) -> Result<Self, EngineError> {
        let malformed = || EngineError::MalformedColor {
            value: hex.to_string(),
        };

        let digits = hex.strip_prefix('#').ok_or_else(malformed)?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(malformed());
        }

        let channel = |range| u8::from_str_radix(&digits[range], 16).map_err(|_| malformed());

        Ok(Self {
            red: channel(0..2)?,
            green: channel(2..4)?,
            blue: channel(4..6)?,
        })
    }

    /// Re-encode as `#RRGGBB` (uppercase digits).
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}
