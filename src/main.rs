mod cli;
mod convert;
mod logging;

use std::io::{self, Write};
use std::process;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut out = io::stdout().lock();

    if cli.today {
        writeln!(out, "{}", convert::today())?;
        return Ok(());
    }

    if let Some(input) = &cli.input {
        writeln!(out, "{}", convert::render(input, &cli.input_format, cli.short)?)?;
        return Ok(());
    }

    info!(format = %cli.input_format, "reading dates from stdin");
    convert::run_lines(io::stdin().lock(), out, &cli.input_format, cli.short)
}
