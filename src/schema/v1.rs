use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputMeta {
    pub n_probes: Option<u64>,
    pub n_samples: Option<u64>,
    pub n_genes: Option<u64>,
    pub n_candidates: Option<u64>,
    pub background_corrected: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructureEntry {
    pub structure_id: String,
    pub acronym: String,
    pub name: String,
    pub n_samples: u64,
    pub n_probes: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeSet {
    pub count: u64,
    pub probes: Vec<String>,
}

impl ProbeSet {
    pub fn empty() -> Self {
        Self {
            count: 0,
            probes: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionCompareV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub cutoff: f64,
    pub input_meta: InputMeta,
    pub structures: Vec<StructureEntry>,
    pub shared: ProbeSet,
    /// Probes unique to each structure, in the same order as `structures`.
    pub unique: Vec<ProbeSet>,
    pub warnings: Vec<String>,
}

impl RegionCompareV1 {
    pub fn empty(tool_version: &str, cutoff: f64) -> Self {
        Self {
            tool: "microcmp".to_string(),
            version: tool_version.to_string(),
            schema_version: "v1".to_string(),
            cutoff,
            input_meta: InputMeta {
                n_probes: None,
                n_samples: None,
                n_genes: None,
                n_candidates: None,
                background_corrected: false,
            },
            structures: Vec::new(),
            shared: ProbeSet::empty(),
            unique: Vec::new(),
            warnings: Vec::new(),
        }
    }
}
