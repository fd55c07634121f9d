use std::path::Path;

use anyhow::{Context, Result};

use crate::error::CompareError;
use crate::io::{csv_reader, record_line};

/// Column layout of the probe metadata file. Supplied explicitly by the
/// caller; the loader never guesses from the file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeSchema {
    /// probe_id, _, gene_id, gene_name, ...
    Minimal,
    /// probe_id, _, gene_id, _, gene_name, ..., chromosome
    Extended,
}

impl ProbeSchema {
    fn min_fields(self) -> usize {
        match self {
            ProbeSchema::Minimal => 4,
            ProbeSchema::Extended => 6,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProbeRow {
    pub probe_id: String,
    pub gene_id: String,
    pub gene_name: String,
    pub chromosome: String,
}

/// Reads probe metadata. The header line is skipped.
pub fn read_probes(path: &Path, schema: ProbeSchema) -> Result<Vec<ProbeRow>> {
    let mut reader = csv_reader(path, true)?;
    let mut rows = Vec::new();

    for record in reader.records() {
        let record = record.with_context(|| format!("failed to read {}", path.display()))?;
        let line = record_line(&record);
        if record.len() < schema.min_fields() {
            return Err(CompareError::malformed_row(
                path,
                line,
                format!(
                    "probe metadata row has {} fields, expected at least {}",
                    record.len(),
                    schema.min_fields()
                ),
            )
            .into());
        }

        let gene_name = match schema {
            ProbeSchema::Minimal => &record[3],
            ProbeSchema::Extended => &record[4],
        };
        rows.push(ProbeRow {
            probe_id: record[0].trim().to_string(),
            gene_id: record[2].trim().to_string(),
            gene_name: gene_name.trim().to_string(),
            chromosome: record[record.len() - 1].trim().to_string(),
        });
    }

    Ok(rows)
}
