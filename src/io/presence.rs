use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};

use crate::error::CompareError;
use crate::io::{csv_reader, record_line};

/// Presence/absence calls per (probe, sample). Same column layout as the
/// expression matrix, joined by probe id. A probe or column missing from the
/// mask counts as present, so an absent mask never suppresses a probe.
#[derive(Debug, Default)]
pub struct PresenceMask {
    flags: HashMap<String, Vec<u8>>,
}

impl PresenceMask {
    /// `column` is 1-based, matching expression-matrix sample columns.
    pub fn is_present(&self, probe_id: &str, column: usize) -> bool {
        self.flags
            .get(probe_id)
            .and_then(|row| row.get(column - 1))
            .map_or(true, |&flag| flag != 0)
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

/// Reads the presence-call matrix. No header line; flags must be 0 or 1.
pub fn read_presence(path: &Path) -> Result<PresenceMask> {
    let mut reader = csv_reader(path, false)?;
    let mut mask = PresenceMask::default();

    for record in reader.records() {
        let record = record.with_context(|| format!("failed to read {}", path.display()))?;
        let line = record_line(&record);
        if record.len() < 2 {
            return Err(CompareError::malformed_row(
                path,
                line,
                "presence-call row has no sample flags",
            )
            .into());
        }

        let probe_id = record[0].trim().to_string();
        let mut flags = Vec::with_capacity(record.len() - 1);
        for field in record.iter().skip(1) {
            let flag: u8 = field.trim().parse().map_err(|_| {
                CompareError::malformed_row(
                    path,
                    line,
                    format!("presence flag '{}' is not 0 or 1", field),
                )
            })?;
            if flag > 1 {
                return Err(CompareError::malformed_row(
                    path,
                    line,
                    format!("presence flag '{}' is not 0 or 1", field),
                )
                .into());
            }
            flags.push(flag);
        }
        mask.flags.insert(probe_id, flags);
    }

    Ok(mask)
}
