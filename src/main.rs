use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use microcmp::cli::{self, Cli};
use microcmp::config::{self, ConfigFile, PathOverrides};
use microcmp::ctx::Ctx;
use microcmp::io;
use microcmp::pipeline::Pipeline;
use microcmp::pipeline::stage1_input::Stage1Input;
use microcmp::pipeline::stage2_aggregate::Stage2Aggregate;
use microcmp::pipeline::stage3_reduce::Stage3Reduce;
use microcmp::pipeline::stage4_resolve::Stage4Resolve;
use microcmp::pipeline::stage5_filter::Stage5Filter;
use microcmp::pipeline::stage6_compare::Stage6Compare;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let acronyms = cli::validate_acronyms(&cli.structures)?;

    let config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => ConfigFile::default(),
    };
    let overrides = PathOverrides {
        data_dir: cli.data_dir.clone(),
        expression: cli.expression.clone(),
        probes: cli.probes.clone(),
        samples: cli.samples.clone(),
        presence: cli.presence.clone(),
    };
    let inputs = config::resolve_inputs(&overrides, &config);
    let cutoff = config::resolve_cutoff(cli.cutoff, &config);

    let mut ctx = Ctx::new(
        acronyms,
        f64::from(cutoff),
        cli.probe_schema.into(),
        !cli.no_background,
        cli.json.clone(),
        inputs,
        env!("CARGO_PKG_VERSION"),
    );

    let pipeline = Pipeline::new(vec![
        Box::new(Stage1Input::new()),
        Box::new(Stage2Aggregate::new()),
        Box::new(Stage3Reduce::new()),
        Box::new(Stage4Resolve::new()),
        Box::new(Stage5Filter::new()),
        Box::new(Stage6Compare::new()),
    ]);
    pipeline.run(&mut ctx)?;

    print_report(&ctx)?;
    Ok(())
}

fn print_report(ctx: &Ctx) -> Result<()> {
    let summary = io::summary::format_summary(ctx)?;
    print!("{}", summary);
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
    Ok(())
}
