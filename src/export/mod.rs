use fs_err as fs;
use std::path::Path;

use crate::cli::ExportFormat;
use crate::errors::BlueprintError;
use crate::wire::Plan;

/// Extension wins over the configured default.
pub fn format_for_path(path: &Path, fallback: ExportFormat) -> ExportFormat {
    match path.extension().and_then(|e| e.to_str()).map(|e| e.to_ascii_lowercase()).as_deref() {
        Some("json") => ExportFormat::Json,
        Some("yaml") | Some("yml") => ExportFormat::Yaml,
        _ => fallback,
    }
}

pub fn render(plan: &Plan, format: ExportFormat) -> Result<String, BlueprintError> {
    match format {
        ExportFormat::Json => serde_json::to_string_pretty(plan).map_err(|e| BlueprintError::Export(e.to_string())),
        ExportFormat::Yaml => serde_yaml::to_string(plan).map_err(|e| BlueprintError::Export(e.to_string())),
    }
}

pub fn write_plan(path: &Path, plan: &Plan, format: ExportFormat) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, render(plan, format)?)?;
    tracing::info!(path = %path.display(), ?format, "plan exported");
    Ok(())
}
