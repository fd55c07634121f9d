use std::collections::HashMap;
use std::path::PathBuf;

use crate::compare::Comparison;
use crate::io::expression::ExpressionMatrix;
use crate::io::probes::{ProbeRow, ProbeSchema};
use crate::io::samples::SampleRow;
use crate::probe::Probe;
use crate::schema::v1::RegionCompareV1;
use crate::structure::Structure;
use crate::structure::resolve::ResolvedStructure;

/// Resolved locations of the four input files. The presence-call path is
/// optional at runtime: a missing file downgrades to uncorrected filtering.
#[derive(Debug, Clone)]
pub struct InputPaths {
    pub expression: PathBuf,
    pub probes: PathBuf,
    pub samples: PathBuf,
    pub presence: PathBuf,
}

/// Shared pipeline state. Stages fill the fields top to bottom; everything
/// is built fresh for one invocation and discarded afterwards.
#[derive(Debug)]
pub struct Ctx {
    pub acronyms: [String; 2],
    pub cutoff: f64,
    pub probe_schema: ProbeSchema,
    pub apply_background: bool,
    pub json_path: Option<PathBuf>,
    pub inputs: InputPaths,
    pub expression: ExpressionMatrix,
    pub probe_meta: Vec<ProbeRow>,
    pub samples: Vec<SampleRow>,
    pub averages: HashMap<String, f64>,
    pub probes: Vec<Probe>,
    pub candidates: Vec<String>,
    pub resolved: Vec<ResolvedStructure>,
    pub structures: Vec<Structure>,
    pub comparison: Option<Comparison>,
    pub warnings: Vec<String>,
    pub report: RegionCompareV1,
}

impl Ctx {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        acronyms: [String; 2],
        cutoff: f64,
        probe_schema: ProbeSchema,
        apply_background: bool,
        json_path: Option<PathBuf>,
        inputs: InputPaths,
        tool_version: &str,
    ) -> Self {
        let report = RegionCompareV1::empty(tool_version, cutoff);
        Self {
            acronyms,
            cutoff,
            probe_schema,
            apply_background,
            json_path,
            inputs,
            expression: ExpressionMatrix::default(),
            probe_meta: Vec::new(),
            samples: Vec::new(),
            averages: HashMap::new(),
            probes: Vec::new(),
            candidates: Vec::new(),
            resolved: Vec::new(),
            structures: Vec::new(),
            comparison: None,
            warnings: Vec::new(),
            report,
        }
    }
}
