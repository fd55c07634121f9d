use anyhow::{Result, bail};
use tracing::info;

use crate::ctx::Ctx;
use crate::io::{expression, probes, samples};
use crate::pipeline::Stage;

pub struct Stage1Input;

impl Stage1Input {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Input {
    fn name(&self) -> &'static str {
        "stage1_input"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let mandatory = [
            ("expression matrix", &ctx.inputs.expression),
            ("probe metadata", &ctx.inputs.probes),
            ("sample annotation", &ctx.inputs.samples),
        ];
        for (label, path) in mandatory {
            if !path.exists() {
                bail!("{} not found at {}", label, path.display());
            }
        }

        let (matrix, warnings) = expression::read_expression(&ctx.inputs.expression)?;
        if matrix.is_empty() {
            bail!(
                "expression matrix {} contains no rows",
                ctx.inputs.expression.display()
            );
        }
        let probe_meta = probes::read_probes(&ctx.inputs.probes, ctx.probe_schema)?;
        let sample_rows = samples::read_samples(&ctx.inputs.samples)?;

        info!(
            probes = matrix.len(),
            samples = matrix.n_samples(),
            annotations = sample_rows.len(),
            "inputs_loaded"
        );

        if sample_rows.len() != matrix.n_samples() {
            ctx.warnings.push(format!(
                "sample annotation has {} rows but the expression matrix has {} sample columns",
                sample_rows.len(),
                matrix.n_samples()
            ));
        }

        ctx.report.input_meta.n_probes = Some(matrix.len() as u64);
        ctx.report.input_meta.n_samples = Some(matrix.n_samples() as u64);

        ctx.expression = matrix;
        ctx.probe_meta = probe_meta;
        ctx.samples = sample_rows;
        ctx.warnings.extend(warnings);
        Ok(())
    }
}
