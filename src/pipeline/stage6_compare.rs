use std::collections::BTreeSet;

use anyhow::{Result, bail};
use tracing::info;

use crate::compare;
use crate::ctx::Ctx;
use crate::io::json_writer;
use crate::pipeline::Stage;

pub struct Stage6Compare;

impl Stage6Compare {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage6Compare {
    fn name(&self) -> &'static str {
        "stage6_compare"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let [first, second] = match ctx.structures.as_slice() {
            [first, second] => [first, second],
            other => bail!("expected 2 filtered structures, got {}", other.len()),
        };

        let set_first: BTreeSet<String> = first.probes.iter().cloned().collect();
        let set_second: BTreeSet<String> = second.probes.iter().cloned().collect();
        let comparison = compare::compare_sets(&set_first, &set_second);

        info!(
            shared = comparison.shared.len(),
            unique_first = comparison.unique_first.len(),
            unique_second = comparison.unique_second.len(),
            "sets_compared"
        );

        ctx.comparison = Some(comparison);
        let report = json_writer::build_report(ctx)?;
        ctx.report = report;

        if let Some(path) = ctx.json_path.clone() {
            json_writer::write_json(&path, ctx)?;
            info!(path = %path.display(), "json_report_written");
        }
        Ok(())
    }
}
