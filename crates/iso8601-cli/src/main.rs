mod cli;
mod logging;
mod report;

use std::io::{self, BufRead};
use std::process;

use anyhow::{bail, Context, Result};
use clap::Parser;
use iso8601_engine::ParseOptions;
use tracing::debug;

use crate::cli::Cli;
use crate::report::Report;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let options = if cli.strict {
        ParseOptions::strict()
    } else {
        ParseOptions::default()
    };

    let inputs = if cli.inputs.is_empty() {
        read_stdin()?
    } else {
        cli.inputs
    };
    if inputs.is_empty() {
        bail!("no input given; pass specs as arguments or on stdin");
    }
    debug!(count = inputs.len(), ?options, "read inputs");

    let reports: Vec<Report> = inputs
        .iter()
        .flat_map(|input| report::evaluate(input, &options))
        .collect();

    let json = if cli.pretty {
        serde_json::to_string_pretty(&reports)
    } else {
        serde_json::to_string(&reports)
    }
    .context("failed to serialize reports")?;
    println!("{json}");
    Ok(())
}

/// Non-blank stdin lines.
fn read_stdin() -> Result<Vec<String>> {
    let mut inputs = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        if !line.trim().is_empty() {
            inputs.push(line);
        }
    }
    Ok(inputs)
}
