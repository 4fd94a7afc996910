//! Append-only CSV metrics log.
//!
//! The header is written once, when the file is first created; every run then
//! appends one row. Appends are not locked, so concurrent runs writing to the
//! same file can interleave their rows.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::error::{BenchError, Result};
use crate::metrics::MetricsRecord;

/// Render `v` the way C's `%e` does: six fractional digits and a signed
/// exponent of at least two digits (`1.234567e+09`).
pub fn format_exp(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let s = format!("{:.6e}", v);
    match s.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(d) => ('-', d),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => s,
    }
}

/// One data row in the column order of [`crate::Kernel::csv_header`].
pub fn format_row(record: &MetricsRecord) -> String {
    let mut row = format!(
        "{},{},{},{:.6}",
        record.n,
        record.flop,
        format_exp(record.flops),
        record.seconds
    );
    if let Some(threads) = record.threads {
        row.push_str(&format!(",{threads}"));
    }
    row
}

/// Append `record` to the CSV file at `path`, creating it with a header first
/// if it does not exist yet.
pub fn append_record(path: &Path, record: &MetricsRecord) -> Result<()> {
    if File::open(path).is_err() {
        write_header(path, record.kernel.csv_header())?;
    }

    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|e| BenchError::io(path, e))?;
    writeln!(file, "{}", format_row(record)).map_err(|e| BenchError::io(path, e))?;
    tracing::debug!(path = %path.display(), "appended metrics row");
    Ok(())
}

fn write_header(path: &Path, header: &str) -> Result<()> {
    // `create_new` so a file we merely failed to read is never truncated.
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(()),
        Err(e) => return Err(BenchError::io(path, e)),
    };
    writeln!(file, "{header}").map_err(|e| BenchError::io(path, e))?;
    tracing::info!(path = %path.display(), "created metrics file");
    Ok(())
}
