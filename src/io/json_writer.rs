use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::schema::v1::{ProbeSet, RegionCompareV1, StructureEntry};

pub fn build_report(ctx: &Ctx) -> Result<RegionCompareV1> {
    let comparison = ctx.comparison.as_ref().context("comparison missing")?;

    let structures = ctx
        .structures
        .iter()
        .map(|s| StructureEntry {
            structure_id: s.structure_id.clone(),
            acronym: s.acronym.clone(),
            name: s.name.clone(),
            n_samples: s.columns.len() as u64,
            n_probes: s.probes.len() as u64,
        })
        .collect();

    let mut report = RegionCompareV1::empty(env!("CARGO_PKG_VERSION"), ctx.cutoff);
    report.input_meta = ctx.report.input_meta.clone();
    report.structures = structures;
    report.shared = probe_set(&comparison.shared);
    report.unique = vec![
        probe_set(&comparison.unique_first),
        probe_set(&comparison.unique_second),
    ];
    report.warnings = ctx.warnings.clone();
    Ok(report)
}

pub fn write_json(path: &Path, ctx: &Ctx) -> Result<()> {
    let report = build_report(ctx)?;
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &report)?;
    Ok(())
}

fn probe_set(probes: &BTreeSet<String>) -> ProbeSet {
    ProbeSet {
        count: probes.len() as u64,
        probes: probes.iter().cloned().collect(),
    }
}
