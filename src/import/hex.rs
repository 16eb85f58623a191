// src/import/hex.rs

//! Importer for `name<TAB>#RRGGBB` listings.

use std::io::BufRead;

use log::{debug, trace};

use super::{ImportError, ImportErrorKind};
use crate::color::{parse_hex_channels, ColorRecord};

/// Reads every `name<TAB>#HEX` line into a record, in order.
///
/// The first character of the color field is a throwaway prefix (normally
/// `#`). Fields after the second are ignored. Blank lines are skipped.
/// Any other malformed line aborts the import.
pub fn read_hex<R: BufRead>(reader: R) -> Result<Vec<ColorRecord>, ImportError> {
    let mut records = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|e| ImportError::new(line_no, ImportErrorKind::Io(e)))?;
        if line.trim().is_empty() {
            trace!("line {}: blank, skipped", line_no);
            continue;
        }

        let mut fields = line.split('\t');
        let name = fields.next().unwrap_or_default();
        let color = fields.next().ok_or_else(|| {
            ImportError::new(
                line_no,
                ImportErrorKind::FieldCount {
                    expected: "at least 2",
                    found: 1,
                },
            )
        })?;

        let mut chars = color.chars();
        chars.next();
        let literal = chars.as_str().trim();
        let value = parse_hex_channels(literal).map_err(|source| {
            ImportError::new(
                line_no,
                ImportErrorKind::Hex {
                    literal: color.trim().to_string(),
                    source,
                },
            )
        })?;

        let record = ColorRecord::from_packed(name, value);
        debug!("line {}: {}", line_no, record);
        records.push(record);
    }

    Ok(records)
}
