use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::probe::aggregate;

pub struct Stage2Aggregate;

impl Stage2Aggregate {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Aggregate {
    fn name(&self) -> &'static str {
        "stage2_aggregate"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let averages = aggregate::probe_averages(&ctx.expression);
        let (probes, warnings) = aggregate::join_probes(&ctx.probe_meta, &averages);

        info!(
            averages = averages.len(),
            joined = probes.len(),
            "averages_computed"
        );

        ctx.averages = averages;
        ctx.probes = probes;
        ctx.warnings.extend(warnings);
        Ok(())
    }
}
