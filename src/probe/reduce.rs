//! Gene-to-probe reduction: one representative probe per gene, chosen by
//! maximum average expression.
//!
//! The running maximum starts at zero and the comparison is strict, so a
//! gene whose probes all average <= 0 yields no representative at all.

use std::collections::HashMap;

use crate::probe::Probe;

/// Probes grouped by gene name, genes kept in first-seen order.
#[derive(Debug, Default)]
pub struct GeneGroups {
    order: Vec<String>,
    groups: HashMap<String, Vec<(String, f64)>>,
}

impl GeneGroups {
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, gene_name: &str) -> Option<&[(String, f64)]> {
        self.groups.get(gene_name).map(|v| v.as_slice())
    }

    pub fn genes(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|g| g.as_str())
    }
}

pub fn group_by_gene(probes: &[Probe]) -> GeneGroups {
    let mut grouped = GeneGroups::default();
    for probe in probes {
        if !grouped.groups.contains_key(&probe.gene_name) {
            grouped.order.push(probe.gene_name.clone());
        }
        grouped
            .groups
            .entry(probe.gene_name.clone())
            .or_default()
            .push((probe.probe_id.clone(), probe.average));
    }
    grouped
}

/// One probe id per gene: the probe with the strictly greatest average.
/// Ties keep the first probe in file order. Output follows gene first-seen
/// order, so the candidate list is deterministic.
pub fn select_representatives(grouped: &GeneGroups) -> Vec<String> {
    let mut candidates = Vec::with_capacity(grouped.order.len());
    for gene in &grouped.order {
        let mut max_average = 0.0;
        let mut best: Option<&str> = None;
        for (probe_id, average) in &grouped.groups[gene] {
            if *average > max_average {
                max_average = *average;
                best = Some(probe_id.as_str());
            }
        }
        if let Some(probe_id) = best {
            candidates.push(probe_id.to_string());
        }
    }
    candidates
}
