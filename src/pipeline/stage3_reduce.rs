use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::probe::reduce;

pub struct Stage3Reduce;

impl Stage3Reduce {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Reduce {
    fn name(&self) -> &'static str {
        "stage3_reduce"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let grouped = reduce::group_by_gene(&ctx.probes);
        let candidates = reduce::select_representatives(&grouped);

        info!(
            genes = grouped.len(),
            candidates = candidates.len(),
            "representatives_selected"
        );

        if candidates.is_empty() {
            ctx.warnings.push(
                "no gene has a probe with positive average expression; \
all qualifying sets will be empty"
                    .to_string(),
            );
        }

        ctx.report.input_meta.n_genes = Some(grouped.len() as u64);
        ctx.report.input_meta.n_candidates = Some(candidates.len() as u64);
        ctx.candidates = candidates;
        Ok(())
    }
}
