//! RGB color value object.
//!
//! On the wire a color is a 3-element tuple `[r, g, b]` (the device firmware
//! format); in the UI it is a lowercase `#rrggbb` string (the value format of
//! an HTML color input). Both representations live here so every layer agrees
//! on them.

use std::fmt;
use std::str::FromStr;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeTuple, Serializer};

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from its three components.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` encoding, each component zero-padded to two digits.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Error returned when parsing a `#rrggbb` string fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseColorError {
    /// Input is not a `#` followed by exactly six ASCII characters.
    #[error("color must be a `#rrggbb` string, got {0:?}")]
    Malformed(String),
    /// A component is not valid hexadecimal.
    #[error("invalid hex digits in color component")]
    InvalidHex(#[from] std::num::ParseIntError),
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a `#rrggbb` string (hex digits in either case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .filter(|hex| hex.len() == 6 && hex.is_ascii())
            .ok_or_else(|| ParseColorError::Malformed(s.to_string()))?;

        Ok(Self {
            r: u8::from_str_radix(&hex[0..2], 16)?,
            g: u8::from_str_radix(&hex[2..4], 16)?,
            b: u8::from_str_radix(&hex[4..6], 16)?,
        })
    }
}

impl Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(3)?;
        tuple.serialize_element(&self.r)?;
        tuple.serialize_element(&self.g)?;
        tuple.serialize_element(&self.b)?;
        tuple.end()
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let [r, g, b] = <[u8; 3]>::deserialize(deserializer)?;
        Ok(Self { r, g, b })
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}
