// src/codegen/mod.rs

//! Renders color records as C source: a struct type, a static array, a
//! count constant and a nearest-color lookup function.

pub mod escape;


use std::fmt::{self, Write};

use crate::color::{ColorRecord, MAX_SQUARED_DISTANCE};
use crate::config::CodegenConfig;

pub use escape::{c_string_literal, is_c_identifier};

/// Starting value of the running minimum in the generated lookup. It sits
/// one above the largest reachable distance, so any entry replaces it.
pub const INITIAL_MIN_DISTANCE: u32 = MAX_SQUARED_DISTANCE + 1;

/// Returns the generated C source for `records`.
///
/// The output depends only on `records` and `config`.
pub fn emit_c(records: &[ColorRecord], config: &CodegenConfig) -> String {
    let mut out = String::with_capacity(1024 + records.len() * 40);
    // Writing into a String does not fail.
    let _ = write_c(&mut out, records, config);
    out
}

/// Writes the generated C source into any `fmt::Write` sink.
pub fn write_c<W: Write>(out: &mut W, records: &[ColorRecord], config: &CodegenConfig) -> fmt::Result {
    let CodegenConfig {
        type_name,
        array_name,
        count_name,
        function_name,
        unknown_name,
    } = config;

    writeln!(
        out,
        "typedef struct {{ const char* name; unsigned char r, g, b; }} {};",
        type_name
    )?;
    writeln!(out)?;

    writeln!(out, "{} {}[] = {{", type_name, array_name)?;
    for record in records {
        writeln!(
            out,
            "    {{ {}, {}, {}, {} }},",
            c_string_literal(&record.name),
            record.r,
            record.g,
            record.b
        )?;
    }
    writeln!(out, "}};")?;
    writeln!(out)?;

    writeln!(out, "const int {} = {};", count_name, records.len())?;
    writeln!(out)?;

    writeln!(
        out,
        "const char* {}(unsigned char r, unsigned char g, unsigned char b) {{",
        function_name
    )?;
    writeln!(
        out,
        "    int min_distance = {}; // Maximum possible distance in RGB space",
        INITIAL_MIN_DISTANCE
    )?;
    writeln!(out, "    const char* closest_color = {};", c_string_literal(unknown_name))?;
    writeln!(out, "    for (int i = 0; i < {}; i++) {{", count_name)?;
    writeln!(out, "        int dr = {}[i].r - r;", array_name)?;
    writeln!(out, "        int dg = {}[i].g - g;", array_name)?;
    writeln!(out, "        int db = {}[i].b - b;", array_name)?;
    writeln!(out, "        int distance = dr * dr + dg * dg + db * db;")?;
    writeln!(out, "        if (distance < min_distance) {{")?;
    writeln!(out, "            min_distance = distance;")?;
    writeln!(out, "            closest_color = {}[i].name;", array_name)?;
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    writeln!(out, "    return closest_color;")?;
    writeln!(out, "}}")?;
    Ok(())
}
