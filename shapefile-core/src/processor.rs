//! Shape stream processor
//!
//! Runs one scan over a token stream, writing a result or diagnostic line per
//! record. Invalid dimensions skip the record; parse errors end the scan.

use std::io::{self, Read, Write};

use tracing::debug;

use crate::ast::Record;
use crate::parser::{ParseError, Scanner};
use crate::renderer::{self, Config};

/// How the scan ended
#[derive(Debug, Clone, PartialEq)]
pub enum ScanEnd {
    /// Input ran out
    Exhausted,
    /// A parse error stopped the scan; the rest of the input was not parsed
    Aborted(ParseError),
}

/// Summary of one scan
#[derive(Debug, Clone, PartialEq)]
pub struct ScanReport {
    /// Records dispatched, including failed ones
    pub records: usize,
    /// Records whose area was computed, with the area
    pub areas: Vec<(Record, f64)>,
    /// Records skipped for a non-positive dimension
    pub invalid: usize,
    pub end: ScanEnd,
}

impl ScanReport {
    pub fn is_aborted(&self) -> bool {
        matches!(self.end, ScanEnd::Aborted(_))
    }
}

/// Read `source` to the end, then scan it.
///
/// A read failure on `source` ends the input at the bytes read so far, and
/// invalid UTF-8 is replaced, so only output errors are returned.
pub fn process_reader<R: Read, W: Write>(
    mut source: R,
    out: &mut W,
    config: &Config,
) -> io::Result<ScanReport> {
    let mut bytes = Vec::new();
    if let Err(e) = source.read_to_end(&mut bytes) {
        debug!(error = %e, read = bytes.len(), "input read failed, treating as end of input");
    }
    let input = String::from_utf8_lossy(&bytes);
    process(&input, out, config)
}

/// Scan `input`, writing one line per record to `out`
pub fn process<W: Write>(input: &str, out: &mut W, config: &Config) -> io::Result<ScanReport> {
    if config.banners {
        writeln!(out, "{}", renderer::START_BANNER)?;
    }

    let mut scanner = Scanner::new(input);
    let mut areas = Vec::new();
    let mut invalid = 0;

    let end = loop {
        let record = match scanner.next_record() {
            Ok(Some(record)) => record,
            Ok(None) => break ScanEnd::Exhausted,
            Err(e) => {
                debug!(record = e.record(), error = %e, "scan aborted");
                writeln!(out, "{}", e)?;
                break ScanEnd::Aborted(e);
            }
        };

        match record.shape.area() {
            Ok(area) => {
                writeln!(out, "{}", renderer::render_area(&record, area, config))?;
                areas.push((record, area));
            }
            Err(e) => {
                debug!(record = record.index, error = %e, "record skipped");
                writeln!(out, "{}", e)?;
                invalid += 1;
            }
        }
    };

    if config.banners {
        writeln!(out, "{}", renderer::END_BANNER)?;
    }
    out.flush()?;

    Ok(ScanReport {
        records: scanner.records(),
        areas,
        invalid,
        end,
    })
}
