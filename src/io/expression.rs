use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};

use crate::error::CompareError;
use crate::io::{csv_reader, record_line};

/// One expression-matrix row: a probe id followed by one value per sample.
#[derive(Debug, Clone)]
pub struct ExpressionRow {
    pub probe_id: String,
    pub values: Vec<f64>,
}

/// In-memory expression table, indexed by probe id. Read-only after load;
/// background correction is applied on transient copies, never here.
#[derive(Debug, Default)]
pub struct ExpressionMatrix {
    rows: Vec<ExpressionRow>,
    index: HashMap<String, usize>,
}

impl ExpressionMatrix {
    pub fn get(&self, probe_id: &str) -> Option<&ExpressionRow> {
        self.index.get(probe_id).map(|&i| &self.rows[i])
    }

    pub fn rows(&self) -> &[ExpressionRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn n_samples(&self) -> usize {
        self.rows.first().map_or(0, |r| r.values.len())
    }
}

/// Reads the expression matrix. No header line. A duplicate probe id
/// overwrites the earlier row; the overwrite is reported as a warning,
/// not an error.
pub fn read_expression(path: &Path) -> Result<(ExpressionMatrix, Vec<String>)> {
    let mut reader = csv_reader(path, false)?;
    let mut matrix = ExpressionMatrix::default();
    let mut warnings = Vec::new();
    let mut expected_width: Option<usize> = None;

    for record in reader.records() {
        let record =
            record.with_context(|| format!("failed to read {}", path.display()))?;
        let line = record_line(&record);
        if record.len() < 2 {
            return Err(CompareError::malformed_row(
                path,
                line,
                "expression row has no sample values",
            )
            .into());
        }

        let probe_id = record[0].trim().to_string();
        let mut values = Vec::with_capacity(record.len() - 1);
        for field in record.iter().skip(1) {
            let value: f64 = field.trim().parse().map_err(|_| {
                CompareError::malformed_row(
                    path,
                    line,
                    format!("'{}' is not a valid expression value", field),
                )
            })?;
            values.push(value);
        }

        match expected_width {
            None => expected_width = Some(values.len()),
            Some(width) if width != values.len() => {
                return Err(CompareError::malformed_row(
                    path,
                    line,
                    format!("expected {} sample values, found {}", width, values.len()),
                )
                .into());
            }
            Some(_) => {}
        }

        let row = ExpressionRow { probe_id, values };
        if let Some(&existing) = matrix.index.get(&row.probe_id) {
            warnings.push(format!(
                "duplicate probe id '{}' at line {} overwrites an earlier row",
                row.probe_id, line
            ));
            matrix.rows[existing] = row;
        } else {
            matrix.index.insert(row.probe_id.clone(), matrix.rows.len());
            matrix.rows.push(row);
        }
    }

    Ok((matrix, warnings))
}
