// crates/strings_helper/src/main.rs

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use std::fs;
use std::io::{self, Read};
use std::process::exit;

use strings_helper::{get_string_between, segments_between, BetweenOptions};

fn read_source(file: Option<&String>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path).with_context(|| format!("Error reading file {}", path)),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Error reading from stdin")?;
            Ok(input)
        }
    }
}

fn main() -> Result<()> {
    let matches = Command::new("get_string_between")
        .version("0.1.0")
        .about("Prints the text found between a start marker and an end marker")
        .arg(
            Arg::new("start")
                .long("start")
                .required(true)
                .num_args(1)
                .help("The start marker"),
        )
        .arg(
            Arg::new("end")
                .long("end")
                .required(true)
                .num_args(1)
                .help("The end marker"),
        )
        .arg(
            Arg::new("include_start")
                .long("include-start")
                .help("Include the start marker in the output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("include_end")
                .long("include-end")
                .help("Include the end marker in the output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("all")
                .long("all")
                .help("Print every segment, one per line")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("show_remainder")
                .long("show-remainder")
                .help("Print the unconsumed remainder after the segment")
                .action(ArgAction::SetTrue)
                .conflicts_with("all"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue),
        )
        .arg(Arg::new("file").help("File to search (defaults to stdin)"))
        .get_matches();

    let verbose = matches.get_flag("verbose");
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if verbose { "debug" } else { "warn" }),
    )
    .init();

    // `required(true)` guarantees both markers are present.
    let start = matches.get_one::<String>("start").map(String::as_str).unwrap_or_default();
    let end = matches.get_one::<String>("end").map(String::as_str).unwrap_or_default();
    let options = BetweenOptions {
        include_start: matches.get_flag("include_start"),
        include_end: matches.get_flag("include_end"),
    };

    let source = read_source(matches.get_one::<String>("file"))?;
    log::debug!("[VERBOSE] Searching {} byte(s) with options {:?}", source.len(), options);

    if matches.get_flag("all") {
        let segments = match segments_between(&source, start, end, options) {
            Ok(segments) => segments,
            Err(err) => {
                eprintln!("Error: {}", err);
                exit(2);
            }
        };
        let mut count = 0;
        for segment in segments {
            println!("{}", segment);
            count += 1;
        }
        log::debug!("[VERBOSE] {} segment(s) found.", count);
        if count == 0 {
            eprintln!("No segment found between '{}' and '{}'.", start, end);
            exit(1);
        }
        return Ok(());
    }

    let between = match get_string_between(&source, start, end, options) {
        Ok(between) => between,
        Err(err) => {
            eprintln!("Error: {}", err);
            exit(2);
        }
    };
    match between.found {
        Some(segment) => {
            println!("{}", segment);
            if matches.get_flag("show_remainder") {
                println!("--- remainder ---");
                println!("{}", between.remainder.unwrap_or_default());
            }
            Ok(())
        }
        None => {
            if between.remainder.is_some() {
                eprintln!("Start marker '{}' not found.", start);
            } else {
                eprintln!("End marker '{}' not found after the start marker.", end);
            }
            exit(1);
        }
    }
}
