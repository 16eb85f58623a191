// src/import/triplet.rs

//! Importer for `R G B<TAB>spacer<TAB>display name` listings.

use std::io::BufRead;

use log::debug;

use super::{ImportError, ImportErrorKind};
use crate::color::{identifier_name, ColorRecord};

const TRIPLET_FIELDS: usize = 3;

/// Parses `"R G B"` into three channels.
fn parse_channels(field: &str) -> Option<(u8, u8, u8)> {
    let mut parts = field.split_whitespace().map(|p| p.parse::<u8>());
    let r = parts.next()?.ok()?;
    let g = parts.next()?.ok()?;
    let b = parts.next()?.ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((r, g, b))
}

/// Reads a triplet listing.
///
/// Lines without exactly three tab-separated fields are skipped, or
/// rejected when `strict` is set. Display names get spaces replaced with
/// underscores. When a record has the same channels as the one pushed
/// just before it, the earlier one is dropped, so only the last of a run
/// of identical colors survives.
pub fn read_triplets<R: BufRead>(reader: R, strict: bool) -> Result<Vec<ColorRecord>, ImportError> {
    let mut records: Vec<ColorRecord> = Vec::new();
    let mut skipped = 0usize;
    let mut collapsed = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|e| ImportError::new(line_no, ImportErrorKind::Io(e)))?;
        let fields: Vec<&str> = line.trim().split('\t').collect();

        if fields.len() != TRIPLET_FIELDS {
            if strict {
                return Err(ImportError::new(
                    line_no,
                    ImportErrorKind::FieldCount {
                        expected: "exactly 3",
                        found: fields.len(),
                    },
                ));
            }
            skipped += 1;
            continue;
        }

        let (r, g, b) = parse_channels(fields[0]).ok_or_else(|| {
            ImportError::new(line_no, ImportErrorKind::Channels(fields[0].to_string()))
        })?;
        let record = ColorRecord::new(identifier_name(fields[2]), r, g, b);

        if records.last().map(ColorRecord::rgb) == Some(record.rgb()) {
            if let Some(previous) = records.pop() {
                debug!("line {}: {} replaces {}", line_no, record.name, previous.name);
                collapsed += 1;
            }
        }
        records.push(record);
    }

    debug!(
        "triplet import: {} records, {} collapsed, {} lines skipped",
        records.len(),
        collapsed,
        skipped
    );
    Ok(records)
}
