use crate::config::Config;
use crate::profile::UserProfile;
use crate::wire::Plan;
use chrono::{DateTime, Utc};
use fs_err as fs;
use serde::Serialize;
use serde_json::to_string_pretty;
use std::io::Write;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct SavedPaths {
    pub dir: PathBuf,
    pub profile: PathBuf,
    pub plan: PathBuf,
    pub session: PathBuf,
}

#[derive(Debug, Serialize)]
struct SessionRecord<'a> {
    session_id: Uuid,
    generated_at: DateTime<Utc>,
    version: &'static str,
    name: &'a str,
    weight_loss: bool,
}

fn session_dir(out_dir: &Path, session: Uuid) -> PathBuf {
    out_dir.join(session.to_string())
}

/// Keep one session's profile and plan side by side. The timestamp goes to
/// `session.json` only, so `plan.json` stays reproducible.
pub fn save_session(
    profile: &UserProfile,
    plan: &Plan,
    session: Uuid,
    cfg: &Config,
) -> anyhow::Result<SavedPaths> {
    let dir = session_dir(Path::new(&cfg.out_dir), session);
    fs::create_dir_all(&dir)?;

    let profile_path = dir.join("profile.json");
    fs::write(&profile_path, to_string_pretty(profile)?)?;

    let plan_path = dir.join("plan.json");
    fs::write(&plan_path, to_string_pretty(plan)?)?;

    let record = SessionRecord {
        session_id: session,
        generated_at: Utc::now(),
        version: env!("CARGO_PKG_VERSION"),
        name: &profile.full_name,
        weight_loss: plan.is_weight_loss,
    };
    let session_path = dir.join("session.json");
    fs::write(&session_path, to_string_pretty(&record)?)?;

    tracing::info!(dir = %dir.display(), "session saved");
    Ok(SavedPaths { dir, profile: profile_path, plan: plan_path, session: session_path })
}

pub fn print_saved_paths(saved: &SavedPaths) {
    println!("session artifacts: {}", saved.dir.display());
    println!("  profile: {}", saved.profile.display());
    println!("  plan:    {}", saved.plan.display());
    println!("  session: {}", saved.session.display());
    std::io::stdout().flush().ok();
}

pub fn print_json_debug(profile: &UserProfile, plan: &Plan) -> anyhow::Result<()> {
    eprintln!("\n===== DEBUG: PROFILE JSON =====\n{}\n", to_string_pretty(profile)?);
    eprintln!("===== DEBUG: PLAN JSON =====\n{}\n", to_string_pretty(plan)?);
    std::io::stderr().flush().ok();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::build_plan;
    use crate::profile::alex_draft;

    #[test]
    fn writes_three_artifacts_under_session_id() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = Config { out_dir: tmp.path().display().to_string(), ..Config::default() };
        let profile = alex_draft().complete().unwrap();
        let plan = build_plan(&profile);
        let id = Uuid::new_v4();

        let saved = save_session(&profile, &plan, id, &cfg).unwrap();
        assert_eq!(saved.dir, tmp.path().join(id.to_string()));

        let stored: Plan = serde_json::from_str(&fs::read_to_string(&saved.plan).unwrap()).unwrap();
        assert_eq!(stored, plan);
        let stored: UserProfile = serde_json::from_str(&fs::read_to_string(&saved.profile).unwrap()).unwrap();
        assert_eq!(stored, profile);

        let record: serde_json::Value = serde_json::from_str(&fs::read_to_string(&saved.session).unwrap()).unwrap();
        assert_eq!(record["session_id"], id.to_string());
        assert_eq!(record["name"], "Alex");
        assert_eq!(record["weight_loss"], true);
    }
}
