use std::fmt;

pub mod aggregate;
pub mod reduce;

/// A probe joined with its metadata and derived average expression. The raw
/// sample values stay in the expression matrix; the average is computed once
/// at join time and never recomputed.
#[derive(Debug, Clone)]
pub struct Probe {
    pub probe_id: String,
    pub gene_id: String,
    pub gene_name: String,
    pub chromosome: String,
    pub average: f64,
}

impl fmt::Display for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "probe {} (gene {} '{}', chromosome {}), average expression {:.4}",
            self.probe_id, self.gene_id, self.gene_name, self.chromosome, self.average
        )
    }
}
