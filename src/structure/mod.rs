use std::fmt;

pub mod filter;
pub mod resolve;

/// One anatomical structure with its resolved sample columns and, after
/// filtering, the probe ids qualifying at the cutoff.
#[derive(Debug, Clone)]
pub struct Structure {
    pub structure_id: String,
    pub acronym: String,
    pub name: String,
    /// 1-based positions into the expression matrix's sample columns,
    /// unique and in annotation order.
    pub columns: Vec<usize>,
    pub cutoff: f64,
    pub probes: Vec<String>,
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, structure {})",
            self.acronym, self.name, self.structure_id
        )
    }
}
