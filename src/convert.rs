use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tracing::debug;

use tqtime::TqDate;

/// Parses a Gregorian date in `format`, trying a zoned date and time, then
/// a naive date and time, then a bare date. Zoned inputs are taken in UTC.
pub fn parse_date(input: &str, format: &str) -> Result<NaiveDate> {
    if let Ok(datetime) = DateTime::parse_from_str(input, format) {
        return Ok(datetime.with_timezone(&Utc).date_naive());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(input, format) {
        return Ok(datetime.date());
    }
    NaiveDate::parse_from_str(input, format)
        .with_context(|| format!("cannot parse {input:?} with format {format:?}"))
}

/// Converts one line of input into its Tranquility form.
pub fn render(input: &str, format: &str, short: bool) -> Result<String> {
    let date = parse_date(input.trim(), format)?;
    let tq = TqDate::from_naive_date(date);
    debug!(gregorian = %date, year = tq.year(), day = ?tq.day(), "converted");
    Ok(if short { tq.short() } else { tq.to_string() })
}

/// Converts every line of `input` into `out`, skipping blank lines.
///
/// Stops at the first line that cannot be parsed; the error names its line
/// number. Lines converted before it have already been written.
pub fn run_lines(input: impl BufRead, mut out: impl Write, format: &str, short: bool) -> Result<()> {
    for (n, line) in input.lines().enumerate() {
        let line = line.context("failed to read input")?;
        if line.trim().is_empty() {
            debug!(line = n + 1, "skipping blank line");
            continue;
        }
        let rendered = render(&line, format, short).with_context(|| format!("line {}", n + 1))?;
        writeln!(out, "{rendered}")?;
    }
    Ok(())
}

/// Today's date as `"<long>\t<short>"`.
pub fn today() -> String {
    let tq = tqtime::civil::today();
    format!("{tq}\t{}", tq.short())
}
