use std::path::Path;

use anyhow::{Context, Result};

use crate::error::CompareError;
use crate::io::{csv_reader, record_line};

/// One sample-annotation row. Row position (0-based, header excluded) + 1 is
/// the sample's column in the expression matrix.
#[derive(Debug, Clone)]
pub struct SampleRow {
    pub structure_id: String,
    pub structure_acronym: String,
    pub structure_name: String,
}

const MIN_FIELDS: usize = 6;

pub fn read_samples(path: &Path) -> Result<Vec<SampleRow>> {
    let mut reader = csv_reader(path, true)?;
    let mut rows = Vec::new();

    for record in reader.records() {
        let record = record.with_context(|| format!("failed to read {}", path.display()))?;
        let line = record_line(&record);
        if record.len() < MIN_FIELDS {
            return Err(CompareError::malformed_row(
                path,
                line,
                format!(
                    "sample annotation row has {} fields, expected at least {}",
                    record.len(),
                    MIN_FIELDS
                ),
            )
            .into());
        }
        rows.push(SampleRow {
            structure_id: record[0].trim().to_string(),
            structure_acronym: record[4].trim().to_string(),
            structure_name: record[5].trim().to_string(),
        });
    }

    Ok(rows)
}
