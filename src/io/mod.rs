use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::GzDecoder;

pub mod expression;
pub mod json_writer;
pub mod presence;
pub mod probes;
pub mod samples;
pub mod summary;

pub(crate) fn open_maybe_gz(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        let decoder = GzDecoder::new(file);
        Ok(Box::new(decoder))
    } else {
        Ok(Box::new(file))
    }
}

/// All inputs are comma-delimited, double-quote-wrapped text. Field counts
/// are validated per loader, so the reader itself is flexible.
pub(crate) fn csv_reader(path: &Path, has_header: bool) -> Result<csv::Reader<Box<dyn Read>>> {
    let input = open_maybe_gz(path)?;
    Ok(csv::ReaderBuilder::new()
        .has_headers(has_header)
        .flexible(true)
        .from_reader(input))
}

pub(crate) fn record_line(record: &csv::StringRecord) -> usize {
    record.position().map_or(0, |p| p.line() as usize)
}
