// src/main.rs

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{App, Arg, ArgMatches};
use log::{error, info};

use colorgen::config::Config;
use colorgen::import::InputFormat;

fn cli() -> App<'static, 'static> {
    App::new("colorgen")
        .about("Generates a C color table and nearest-color lookup from a named color listing")
        .arg(
            Arg::with_name("input")
                .value_name("INPUT")
                .help("Color listing to read (default: rgb.txt)"),
        )
        .arg(
            Arg::with_name("output")
                .value_name("OUTPUT")
                .help("C file to write, or - for stdout (default: colors.c)"),
        )
        .arg(
            Arg::with_name("format")
                .short("f")
                .long("format")
                .takes_value(true)
                .possible_values(&["hex", "triplet"])
                .help("Input line format"),
        )
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .takes_value(true)
                .value_name("FILE")
                .help("JSON config file"),
        )
        .arg(
            Arg::with_name("strict")
                .long("strict")
                .help("Reject triplet lines without exactly three fields"),
        )
}

/// Defaults, then the config file, then command-line values.
fn build_config(matches: &ArgMatches) -> anyhow::Result<Config> {
    let mut config = match matches.value_of("config") {
        Some(path) => Config::load(Path::new(path))?,
        None => Config::default(),
    };
    if let Some(input) = matches.value_of("input") {
        config.input = PathBuf::from(input);
    }
    if let Some(output) = matches.value_of("output") {
        config.output = PathBuf::from(output);
    }
    if let Some(format) = matches.value_of("format") {
        config.format = format
            .parse::<InputFormat>()
            .map_err(anyhow::Error::msg)?;
    }
    if matches.is_present("strict") {
        config.strict = true;
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    // Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let matches = cli().get_matches();
    let config = build_config(&matches).context("Failed to load configuration")?;
    info!("Configuration: {:?}", config);

    match colorgen::run(&config) {
        Ok(summary) => {
            if !config.writes_to_stdout() {
                println!("wrote {} colors to {}", summary.records, summary.output.display());
            }
            Ok(())
        }
        Err(e) => {
            error!("Conversion failed: {:#}", e);
            Err(e)
        }
    }
}
