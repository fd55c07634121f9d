use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::ctx::InputPaths;

pub const DEFAULT_EXPRESSION: &str = "MicroarrayExpression.csv";
pub const DEFAULT_PROBES: &str = "Probes.csv";
pub const DEFAULT_SAMPLES: &str = "SampleAnnot.csv";
pub const DEFAULT_PRESENCE: &str = "PACall.csv";
pub const DEFAULT_CUTOFF: u32 = 1;

/// Optional YAML configuration. Every field may be omitted; CLI flags take
/// precedence over config entries, which take precedence over the
/// conventional file names under `data_dir`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub data_dir: Option<PathBuf>,
    pub expression: Option<PathBuf>,
    pub probes: Option<PathBuf>,
    pub samples: Option<PathBuf>,
    pub presence: Option<PathBuf>,
    pub cutoff: Option<u32>,
}

pub fn load_config(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: ConfigFile = serde_yaml::from_str(&content)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    Ok(config)
}

/// CLI path flags, as given. Kept separate from `Cli` so the resolution
/// logic stays independent of clap.
#[derive(Debug, Default, Clone)]
pub struct PathOverrides {
    pub data_dir: Option<PathBuf>,
    pub expression: Option<PathBuf>,
    pub probes: Option<PathBuf>,
    pub samples: Option<PathBuf>,
    pub presence: Option<PathBuf>,
}

pub fn resolve_inputs(overrides: &PathOverrides, config: &ConfigFile) -> InputPaths {
    let data_dir = overrides
        .data_dir
        .clone()
        .or_else(|| config.data_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    let pick = |flag: &Option<PathBuf>, entry: &Option<PathBuf>, default_name: &str| {
        flag.clone()
            .or_else(|| entry.clone())
            .unwrap_or_else(|| data_dir.join(default_name))
    };

    InputPaths {
        expression: pick(&overrides.expression, &config.expression, DEFAULT_EXPRESSION),
        probes: pick(&overrides.probes, &config.probes, DEFAULT_PROBES),
        samples: pick(&overrides.samples, &config.samples, DEFAULT_SAMPLES),
        presence: pick(&overrides.presence, &config.presence, DEFAULT_PRESENCE),
    }
}

pub fn resolve_cutoff(flag: Option<u32>, config: &ConfigFile) -> u32 {
    flag.or(config.cutoff).unwrap_or(DEFAULT_CUTOFF)
}
