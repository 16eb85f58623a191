// src/color.rs

//! The `ColorRecord` model shared by the importers and the code emitter.

use std::fmt;

/// Largest squared distance between two RGB colors (3 * 255^2).
pub const MAX_SQUARED_DISTANCE: u32 = 3 * 255 * 255;

/// A named color with 8-bit channels.
///
/// Records are kept in input order; that order is the order of the
/// generated array.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColorRecord {
    pub name: String,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorRecord {
    pub fn new(name: impl Into<String>, r: u8, g: u8, b: u8) -> Self {
        ColorRecord {
            name: name.into(),
            r,
            g,
            b,
        }
    }

    /// Builds a record from a packed `0xRRGGBB` value.
    /// Bits above 23 are ignored.
    pub fn from_packed(name: impl Into<String>, value: u32) -> Self {
        let r = ((value >> 16) & 0xFF) as u8;
        let g = ((value >> 8) & 0xFF) as u8;
        let b = (value & 0xFF) as u8;
        ColorRecord::new(name, r, g, b)
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Six uppercase hex digits, `RRGGBB`.
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Squared Euclidean distance to `(r, g, b)`.
    pub fn squared_distance(&self, r: u8, g: u8, b: u8) -> u32 {
        let dr = self.r as i32 - r as i32;
        let dg = self.g as i32 - g as i32;
        let db = self.b as i32 - b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }
}

impl fmt::Display for ColorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{} ({}, {}, {})", self.name, self.hex(), self.r, self.g, self.b)
    }
}

/// Turns a display name into a token usable as an identifier by
/// replacing spaces with underscores.
pub fn identifier_name(display: &str) -> String {
    display.replace(' ', "_")
}

/// Why a hex literal could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    Empty,
    InvalidDigit(char),
    TooLong(usize),
}

impl fmt::Display for HexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HexError::Empty => write!(f, "empty hex literal"),
            HexError::InvalidDigit(c) => write!(f, "invalid hex digit {:?}", c),
            HexError::TooLong(len) => write!(f, "hex literal has {} digits, at most 8 allowed", len),
        }
    }
}

impl std::error::Error for HexError {}

/// Decodes a bare hex literal (no `#`, no `0x`, no sign) of 1 to 8 digits.
pub fn parse_hex_channels(literal: &str) -> Result<u32, HexError> {
    if literal.is_empty() {
        return Err(HexError::Empty);
    }
    if let Some(bad) = literal.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(HexError::InvalidDigit(bad));
    }
    if literal.len() > 8 {
        return Err(HexError::TooLong(literal.len()));
    }
    // Only ASCII hex digits remain, so the radix parse cannot fail or overflow.
    u32::from_str_radix(literal, 16).map_err(|_| HexError::TooLong(literal.len()))
}
