use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    #[value(alias = "yml")]
    Yaml,
}

#[derive(Parser, Debug, Default)]
#[command(name = "fitness-blueprint", version, about = "Answer a few questions, get a 7-day fitness & nutrition blueprint")]
pub struct Args {
    /// TOML config file
    #[arg(long)]
    pub config: Option<String>,

    /// Answers file (toml, json or yaml); skips the interactive questions
    #[arg(long)]
    pub answers: Option<String>,

    /// Accept each answer without the "You entered" check
    #[arg(long, default_value_t = false)]
    pub auto_approve: bool,

    /// Simulated generation delay, overrides the config
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Write the generated plan to this file
    #[arg(long)]
    pub export: Option<String>,

    #[arg(long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Keep profile, plan and session metadata under the output dir
    #[arg(long, default_value_t = false)]
    pub save_session: bool,

    #[arg(long)]
    pub out_dir: Option<String>,

    #[arg(long, default_value_t = false)]
    pub no_progress: bool,

    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let args = Args::parse_from([
            "fitness-blueprint",
            "--answers",
            "me.toml",
            "--auto-approve",
            "--delay-ms",
            "0",
            "--format",
            "yml",
            "--no-progress",
        ]);
        assert_eq!(args.answers.as_deref(), Some("me.toml"));
        assert!(args.auto_approve);
        assert_eq!(args.delay_ms, Some(0));
        assert_eq!(args.format, Some(ExportFormat::Yaml));
        assert!(args.no_progress);
        assert!(!args.save_session);
    }
}
