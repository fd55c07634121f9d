use anyhow::Result;
use std::time::Instant;
use tracing::{info, warn};

use crate::ctx::Ctx;

pub mod stage1_input;
pub mod stage2_aggregate;
pub mod stage3_reduce;
pub mod stage4_resolve;
pub mod stage5_filter;
pub mod stage6_compare;

pub trait Stage {
    fn name(&self) -> &'static str;
    fn run(&self, ctx: &mut Ctx) -> Result<()>;
}

pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    pub fn run(&self, ctx: &mut Ctx) -> Result<()> {
        for stage in &self.stages {
            let start = Instant::now();
            info!(stage = stage.name(), "stage_started");
            if let Err(err) = stage.run(ctx) {
                warn!(
                    stage = stage.name(),
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "stage_failed"
                );
                return Err(err);
            }
            info!(
                stage = stage.name(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "stage_finished"
            );
        }
        Ok(())
    }
}
