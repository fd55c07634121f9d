use anyhow::{Result, bail};

use crate::io::expression::ExpressionMatrix;
use crate::io::presence::PresenceMask;

/// Candidate probes qualifying in one structure: at least one sample value
/// in the structure's columns at or above the cutoff (inclusive).
///
/// When a presence mask is given, values flagged 0 count as 0 for this
/// decision only; the stored matrix is never touched, so correcting for one
/// structure cannot leak into the other's filtering. Probes whose masked
/// values are all exactly 0 are dropped outright, whatever the cutoff.
pub fn qualifying_probes(
    candidates: &[String],
    matrix: &ExpressionMatrix,
    columns: &[usize],
    cutoff: f64,
    mask: Option<&PresenceMask>,
) -> Result<Vec<String>> {
    let mut qualifying = Vec::new();

    for probe_id in candidates {
        let row = match matrix.get(probe_id) {
            Some(row) => row,
            None => bail!("candidate probe '{}' has no expression row", probe_id),
        };

        let mut all_zero = true;
        let mut above_cutoff = false;
        for &column in columns {
            let value = match row.values.get(column - 1) {
                Some(&value) => value,
                None => bail!(
                    "sample column {} is out of range for probe '{}' ({} samples)",
                    column,
                    probe_id,
                    row.values.len()
                ),
            };
            let value = match mask {
                Some(mask) if !mask.is_present(probe_id, column) => 0.0,
                _ => value,
            };
            if value != 0.0 {
                all_zero = false;
            }
            if value >= cutoff {
                above_cutoff = true;
            }
        }

        if !all_zero && above_cutoff {
            qualifying.push(probe_id.clone());
        }
    }

    Ok(qualifying)
}
