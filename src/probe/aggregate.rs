use std::collections::{HashMap, HashSet};

use crate::io::expression::ExpressionMatrix;
use crate::io::probes::ProbeRow;
use crate::probe::Probe;

/// Arithmetic mean of each probe's sample values, across all samples.
/// Rows are guaranteed non-empty by the loader.
pub fn probe_averages(matrix: &ExpressionMatrix) -> HashMap<String, f64> {
    let mut averages = HashMap::with_capacity(matrix.len());
    for row in matrix.rows() {
        let sum: f64 = row.values.iter().sum();
        averages.insert(row.probe_id.clone(), sum / row.values.len() as f64);
    }
    averages
}

/// Joins probe metadata with the per-probe averages by probe id. Metadata
/// rows without an expression row are skipped with a warning, as are
/// duplicate metadata rows; expression rows never named by the metadata are
/// reported once as a count.
pub fn join_probes(
    meta: &[ProbeRow],
    averages: &HashMap<String, f64>,
) -> (Vec<Probe>, Vec<String>) {
    let mut probes = Vec::with_capacity(meta.len());
    let mut warnings = Vec::new();
    let mut seen: HashSet<&str> = HashSet::with_capacity(meta.len());

    for row in meta {
        if !seen.insert(row.probe_id.as_str()) {
            warnings.push(format!(
                "duplicate probe metadata for '{}' ignored",
                row.probe_id
            ));
            continue;
        }
        match averages.get(&row.probe_id) {
            Some(&average) => probes.push(Probe {
                probe_id: row.probe_id.clone(),
                gene_id: row.gene_id.clone(),
                gene_name: row.gene_name.clone(),
                chromosome: row.chromosome.clone(),
                average,
            }),
            None => warnings.push(format!(
                "probe '{}' has metadata but no expression row; skipped",
                row.probe_id
            )),
        }
    }

    let unannotated = averages
        .keys()
        .filter(|id| !seen.contains(id.as_str()))
        .count();
    if unannotated > 0 {
        warnings.push(format!(
            "{} expression rows have no probe metadata",
            unannotated
        ));
    }

    (probes, warnings)
}
