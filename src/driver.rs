// src/driver.rs

//! Runs one conversion: read the listing, import records, emit C, write it.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::Context;
use log::{debug, info, warn};

use crate::codegen::emit_c;
use crate::color::ColorRecord;
use crate::config::Config;
use crate::import::import;

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Number of records written to the array.
    pub records: usize,
    /// Where the code went (`-` for standard output).
    pub output: PathBuf,
}

/// Imports `reader` and renders the records, without touching the filesystem.
///
/// Fails before reading if the configured identifiers are not usable C names.
pub fn generate<R: BufRead>(reader: R, config: &Config) -> anyhow::Result<(Vec<ColorRecord>, String)> {
    config.validate().context("Invalid configuration")?;
    let records = import(reader, config.format, config.strict)
        .with_context(|| format!("Failed to import {} listing", config.format))?;
    if records.is_empty() {
        warn!("No colors imported; the lookup will always return the fallback name");
    }
    let code = emit_c(&records, &config.codegen);
    Ok((records, code))
}

/// Performs the whole conversion described by `config`.
///
/// The input is read completely before the output is opened, and the
/// generated text is written with a single write. Nothing is written if
/// reading or importing fails.
pub fn run(config: &Config) -> anyhow::Result<Summary> {
    config.validate().context("Invalid configuration")?;

    info!(
        "Reading {} colors from {}",
        config.format,
        config.input.display()
    );
    let file = File::open(&config.input)
        .with_context(|| format!("Failed to open input file {}", config.input.display()))?;
    let (records, code) = generate(BufReader::new(file), config)
        .with_context(|| format!("Failed to convert {}", config.input.display()))?;
    debug!("Generated {} bytes of C source", code.len());

    if config.writes_to_stdout() {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(code.as_bytes())
            .and_then(|_| stdout.flush())
            .context("Failed to write generated code to stdout")?;
    } else {
        fs::write(&config.output, &code)
            .with_context(|| format!("Failed to write output file {}", config.output.display()))?;
    }

    info!(
        "wrote {} colors to {}",
        records.len(),
        config.output.display()
    );
    Ok(Summary {
        records: records.len(),
        output: config.output.clone(),
    })
}
