use anyhow::Context;
use clap::Parser;
use std::io;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

mod cli;
mod config;
mod errors;
mod export;
mod log;
mod plan;
mod profile;
mod provider;
mod session;
mod ux;
mod wire;
mod wizard;

fn init_tracing(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr).with_target(false))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    init_tracing(args.debug);

    let cfg = config::Config::resolve(&args)?;
    let session_id = Uuid::new_v4();
    tracing::debug!(%session_id, ?cfg, "starting session");

    let prov = provider::make_provider(cfg.generation_delay_ms);

    // ===== QUESTIONS + GENERATION =====
    let finished = match &args.answers {
        Some(path) => {
            let answers = config::load_answers(Path::new(path), cfg.default_weight_unit)
                .with_context(|| format!("reading answers from {path}"))?;
            Some(session::run_scripted(&answers, prov.as_ref(), cfg.progress).await?)
        }
        None => {
            let start = wizard::Wizard::with_draft(profile::ProfileDraft {
                weight_unit: cfg.default_weight_unit,
                ..Default::default()
            });
            let opts = session::SessionOptions { auto_approve: args.auto_approve, progress: cfg.progress };
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut out = io::stdout();
            session::run_interactive(&mut input, &mut out, start, prov.as_ref(), opts).await?
        }
    };

    let Some(wizard) = finished else {
        println!("Stopped before a plan was generated.");
        return Ok(());
    };
    let Some(plan) = wizard.plan() else {
        println!("No plan was generated.");
        return Ok(());
    };
    let profile = wizard.draft().complete()?;

    // ===== OUTPUT =====
    ux::print_plan(&mut io::stdout(), plan, &profile.full_name)?;

    if let Some(path) = &args.export {
        let path = Path::new(path);
        let format = match args.format {
            Some(f) => f,
            None => export::format_for_path(path, cfg.export_format),
        };
        export::write_plan(path, plan, format)?;
        println!("\nPlan written to {}", path.display());
    }

    if cfg.save_session {
        let saved = log::save_session(&profile, plan, session_id, &cfg)?;
        log::print_saved_paths(&saved);
    }

    if args.debug {
        log::print_json_debug(&profile, plan)?;
    }

    Ok(())
}
