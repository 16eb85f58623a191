// src/import/mod.rs

//! Importers that turn a color listing into an ordered `Vec<ColorRecord>`.
//!
//! Two line formats are understood:
//! - `hex` (canonical): `name<TAB>#RRGGBB`
//! - `triplet` (alternate): `R G B<TAB>spacer<TAB>display name`, with
//!   adjacent duplicate colors collapsed to the last one.

pub mod hex;
pub mod triplet;


use std::fmt;
use std::io::{self, BufRead};

use serde::{Deserialize, Serialize};

use crate::color::{ColorRecord, HexError};

pub use hex::read_hex;
pub use triplet::read_triplets;

/// Line format of the input listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    #[default]
    Hex,
    Triplet,
}

impl InputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputFormat::Hex => "hex",
            InputFormat::Triplet => "triplet",
        }
    }
}

impl std::str::FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hex" => Ok(InputFormat::Hex),
            "triplet" => Ok(InputFormat::Triplet),
            other => Err(format!("unknown input format '{}' (expected hex or triplet)", other)),
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What went wrong on a given line.
#[derive(Debug)]
pub enum ImportErrorKind {
    /// The underlying reader failed (including invalid UTF-8).
    Io(io::Error),
    /// The line has the wrong number of tab-separated fields.
    FieldCount { expected: &'static str, found: usize },
    /// The hex color field could not be decoded.
    Hex { literal: String, source: HexError },
    /// The `R G B` field is not three integers in 0..=255.
    Channels(String),
}

/// An import failure, tagged with its 1-based line number.
#[derive(Debug)]
pub struct ImportError {
    pub line: usize,
    pub kind: ImportErrorKind,
}

impl ImportError {
    pub(crate) fn new(line: usize, kind: ImportErrorKind) -> Self {
        ImportError { line, kind }
    }
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: ", self.line)?;
        match &self.kind {
            ImportErrorKind::Io(_) => write!(f, "read failed"),
            ImportErrorKind::FieldCount { expected, found } => write!(
                f,
                "expected {} tab-separated fields, found {}",
                expected, found
            ),
            ImportErrorKind::Hex { literal, .. } => write!(f, "bad hex color {:?}", literal),
            ImportErrorKind::Channels(field) => {
                write!(f, "bad channel triplet {:?}: expected \"R G B\" in 0..=255", field)
            }
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ImportErrorKind::Io(e) => Some(e),
            ImportErrorKind::Hex { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Reads `reader` with the importer for `format`.
///
/// `strict` only affects the triplet importer; the hex importer always
/// rejects malformed lines.
pub fn import<R: BufRead>(
    reader: R,
    format: InputFormat,
    strict: bool,
) -> Result<Vec<ColorRecord>, ImportError> {
    match format {
        InputFormat::Hex => read_hex(reader),
        InputFormat::Triplet => read_triplets(reader, strict),
    }
}
