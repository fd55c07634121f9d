use anyhow::Result;
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::io::presence;
use crate::pipeline::Stage;
use crate::structure::Structure;
use crate::structure::filter;

pub struct Stage5Filter;

impl Stage5Filter {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage5Filter {
    fn name(&self) -> &'static str {
        "stage5_filter"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let mask = if !ctx.apply_background {
            None
        } else if ctx.inputs.presence.exists() {
            let mask = presence::read_presence(&ctx.inputs.presence)?;
            info!(probes = mask.len(), "presence_calls_loaded");
            Some(mask)
        } else {
            warn!(
                path = %ctx.inputs.presence.display(),
                "presence-call file not found; filtering without background correction"
            );
            ctx.warnings.push(format!(
                "presence-call file not found at {}; filtered without background correction",
                ctx.inputs.presence.display()
            ));
            None
        };
        ctx.report.input_meta.background_corrected = mask.is_some();

        let mut structures = Vec::with_capacity(ctx.resolved.len());
        for entry in &ctx.resolved {
            let probes = filter::qualifying_probes(
                &ctx.candidates,
                &ctx.expression,
                &entry.columns,
                ctx.cutoff,
                mask.as_ref(),
            )?;
            info!(
                acronym = %entry.acronym,
                qualifying = probes.len(),
                "structure_filtered"
            );
            structures.push(Structure {
                structure_id: entry.structure_id.clone(),
                acronym: entry.acronym.clone(),
                name: entry.name.clone(),
                columns: entry.columns.clone(),
                cutoff: ctx.cutoff,
                probes,
            });
        }

        ctx.structures = structures;
        Ok(())
    }
}
