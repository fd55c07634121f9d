use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::error::CompareError;
use crate::io::probes::ProbeSchema;

/// Structure acronyms are short codes such as "LHM" or "PHA"; anything
/// longer is almost certainly a full structure name typed by mistake.
pub const MAX_ACRONYM_LEN: usize = 11;

#[derive(Debug, Parser)]
#[command(
    name = "microcmp",
    version,
    about = "Compare probe-level microarray expression between two anatomical structures"
)]
pub struct Cli {
    #[arg(
        value_name = "ACRONYM",
        num_args = 2,
        help = "Two structure acronyms to compare (e.g. LHM PHA)"
    )]
    pub structures: Vec<String>,

    #[arg(long, help = "Expression cutoff; a probe is present when at least \
one sample value reaches it (default 1, or the config value)")]
    pub cutoff: Option<u32>,

    #[arg(long, help = "Directory holding the input CSV files")]
    pub data_dir: Option<PathBuf>,

    #[arg(long, help = "Expression matrix CSV (probe_id, v1..vN)")]
    pub expression: Option<PathBuf>,

    #[arg(long, help = "Probe metadata CSV")]
    pub probes: Option<PathBuf>,

    #[arg(long, help = "Sample annotation CSV")]
    pub samples: Option<PathBuf>,

    #[arg(long, help = "Presence-call (PACall) CSV for background correction")]
    pub presence: Option<PathBuf>,

    #[arg(long, help = "YAML configuration file with paths and defaults")]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = ProbeSchemaArg::Extended)]
    pub probe_schema: ProbeSchemaArg,

    #[arg(long, default_value_t = false, help = "Skip background correction")]
    pub no_background: bool,

    #[arg(long, value_name = "PATH", help = "Write a JSON report to PATH")]
    pub json: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProbeSchemaArg {
    Minimal,
    Extended,
}

impl From<ProbeSchemaArg> for ProbeSchema {
    fn from(arg: ProbeSchemaArg) -> Self {
        match arg {
            ProbeSchemaArg::Minimal => ProbeSchema::Minimal,
            ProbeSchemaArg::Extended => ProbeSchema::Extended,
        }
    }
}

/// Enforces the acronym length bound. Arity is already enforced by clap.
pub fn validate_acronyms(structures: &[String]) -> Result<[String; 2], CompareError> {
    for acronym in structures {
        if acronym.len() > MAX_ACRONYM_LEN {
            return Err(CompareError::InvalidArgument(format!(
                "'{}' is longer than {} characters; use structure acronyms such as LHM or PHA",
                acronym, MAX_ACRONYM_LEN
            )));
        }
    }
    match structures {
        [first, second] => Ok([first.clone(), second.clone()]),
        _ => Err(CompareError::InvalidArgument(format!(
            "expected exactly 2 structure acronyms, got {}",
            structures.len()
        ))),
    }
}
