use anyhow::Context;
use fs_err as fs;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::cli::{Args, ExportFormat};
use crate::errors::BlueprintError;
use crate::profile::{ProfileDraft, WeightUnit};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub schema_version: String,
    pub out_dir: String,
    pub generation_delay_ms: u64,
    pub default_weight_unit: WeightUnit,
    pub export_format: ExportFormat,
    pub save_session: bool,
    pub progress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema_version: "2025-10-01".into(),
            out_dir: ".blueprint/sessions".into(),
            generation_delay_ms: 2000,
            default_weight_unit: WeightUnit::Kg,
            export_format: ExportFormat::Json,
            save_session: false,
            progress: true,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&raw)
            .map_err(|e| BlueprintError::Config(format!("{}: {e}", path.display())))?;
        Ok(cfg)
    }

    /// Config file (if any) first, then command-line overrides.
    pub fn resolve(args: &Args) -> anyhow::Result<Self> {
        let mut cfg = match &args.config {
            Some(p) => Self::load(Path::new(p)).with_context(|| format!("loading config {p}"))?,
            None => Self::default(),
        };
        if let Some(ms) = args.delay_ms {
            cfg.generation_delay_ms = ms;
        }
        if let Some(dir) = &args.out_dir {
            cfg.out_dir = dir.clone();
        }
        if let Some(fmt) = args.format {
            cfg.export_format = fmt;
        }
        if args.save_session {
            cfg.save_session = true;
        }
        if args.no_progress {
            cfg.progress = false;
        }
        Ok(cfg)
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct UnitField {
    weight_unit: Option<WeightUnit>,
}

fn parse_answers<T: DeserializeOwned>(ext: &str, raw: &str) -> Result<T, BlueprintError> {
    match ext {
        "toml" => toml::from_str(raw).map_err(|e| BlueprintError::Config(e.to_string())),
        "json" => serde_json::from_str(raw).map_err(|e| BlueprintError::Config(e.to_string())),
        "yaml" | "yml" => serde_yaml::from_str(raw).map_err(|e| BlueprintError::Config(e.to_string())),
        other => Err(BlueprintError::Config(format!(
            "unsupported answers format '{other}' (expected toml, json or yaml)"
        ))),
    }
}

/// Read pre-filled answers; the format follows the file extension. A file
/// that names no weight unit gets `default_unit`.
pub fn load_answers(path: &Path, default_unit: WeightUnit) -> anyhow::Result<ProfileDraft> {
    let raw = fs::read_to_string(path)?;
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    let mut draft: ProfileDraft = parse_answers(&ext, &raw)?;
    let unit: UnitField = parse_answers(&ext, &raw)?;
    draft.weight_unit = unit.weight_unit.unwrap_or(default_unit);
    Ok(draft)
}
