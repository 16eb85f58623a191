//! Shared helpers for integration tests.
//!
//! `parse_table` reads the array back out of generated C and
//! `closest_color` runs the same scan the generated function performs, so
//! tests can check what the emitted lookup would return without a C
//! compiler.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

/// One `{ "name", r, g, b },` entry of a generated array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEntry {
    pub name: String,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Extracts the array entries from generated code. Names must not contain
/// escaped characters.
pub fn parse_table(code: &str) -> Vec<TableEntry> {
    code.lines()
        .filter_map(|line| {
            let body = line.trim().strip_prefix("{ \"")?.strip_suffix(" },")?;
            let (name, rest) = body.split_once("\", ")?;
            let mut channels = rest.split(", ").map(|v| v.parse::<u8>().ok());
            Some(TableEntry {
                name: name.to_string(),
                r: channels.next()??,
                g: channels.next()??,
                b: channels.next()??,
            })
        })
        .collect()
}

/// Reads the initial minimum out of the generated function.
pub fn initial_min_distance(code: &str) -> i32 {
    let line = code
        .lines()
        .find(|l| l.trim_start().starts_with("int min_distance = "))
        .expect("generated code has no min_distance initialiser");
    let value = line.trim_start()["int min_distance = ".len()..]
        .split(';')
        .next()
        .expect("min_distance initialiser is not terminated");
    value.parse().expect("min_distance is not an integer")
}

/// Mirrors the generated lookup: strict `<` against a running minimum,
/// starting from the fallback name.
pub fn closest_color<'a>(table: &'a [TableEntry], initial: i32, fallback: &'a str, r: u8, g: u8, b: u8) -> &'a str {
    let mut min_distance = initial;
    let mut closest = fallback;
    for entry in table {
        let dr = entry.r as i32 - r as i32;
        let dg = entry.g as i32 - g as i32;
        let db = entry.b as i32 - b as i32;
        let distance = dr * dr + dg * dg + db * db;
        if distance < min_distance {
            min_distance = distance;
            closest = &entry.name;
        }
    }
    closest
}

/// A fresh scratch directory for one test.
pub fn scratch_dir(test_name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("colorgen-{}-{}", test_name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("Failed to create scratch dir");
    dir
}
