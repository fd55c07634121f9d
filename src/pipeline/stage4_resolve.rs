use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::error::CompareError;
use crate::pipeline::Stage;
use crate::structure::resolve;

pub struct Stage4Resolve;

impl Stage4Resolve {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Resolve {
    fn name(&self) -> &'static str {
        "stage4_resolve"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let resolved = resolve::resolve_columns(&ctx.acronyms, &ctx.samples);

        // An acronym with no matching samples is an error here, not a
        // silently empty result further down the pipeline.
        for entry in &resolved {
            if entry.columns.is_empty() {
                return Err(CompareError::UnknownStructure {
                    acronym: entry.acronym.clone(),
                }
                .into());
            }
            info!(
                acronym = %entry.acronym,
                name = %entry.name,
                columns = entry.columns.len(),
                "structure_resolved"
            );
        }

        ctx.resolved = resolved;
        Ok(())
    }
}
