//! Drives a [`Wizard`] from a terminal or from a pre-filled answers file.

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::errors::BlueprintError;
use crate::profile::{DietPreference, Equipment, ProfileDraft, TrainingMethod, WeightUnit};
use crate::provider::PlanProvider;
use crate::ux;
use crate::wizard::{FieldUpdate, Stage, StepId, Wizard};

#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    pub auto_approve: bool,
    pub progress: bool,
}

#[derive(Debug, PartialEq)]
enum Input {
    Back,
    Quit,
    Text(String),
}

fn read_input(input: &mut impl BufRead) -> Result<Input> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(Input::Quit);
    }
    let line = line.trim();
    Ok(match line {
        ":back" | ":b" => Input::Back,
        ":quit" | ":q" => Input::Quit,
        _ => Input::Text(line.to_string()),
    })
}

/// Run the questions until a plan exists. `Ok(None)` means the user quit.
pub async fn run_interactive(
    input: &mut impl BufRead,
    out: &mut impl Write,
    mut wizard: Wizard,
    provider: &dyn PlanProvider,
    opts: SessionOptions,
) -> Result<Option<Wizard>> {
    loop {
        wizard = match wizard.stage() {
            Stage::Done(_) => return Ok(Some(wizard)),
            Stage::DataEntry(step) => {
                let step = *step;
                ux::show_question(out, &wizard)?;
                match read_input(input)? {
                    Input::Quit => return Ok(None),
                    Input::Back => wizard.go_back(),
                    // Enter on an answered question keeps the stored answer.
                    Input::Text(text) if text.is_empty() && wizard.is_current_step_valid() => wizard.advance(),
                    Input::Text(text) => match apply_answer(wizard.clone(), step, &text) {
                        Err(hint) => {
                            ux::show_invalid(out, step, Some(&hint))?;
                            wizard
                        }
                        // Toggles stay on the diet question until an empty line.
                        Ok(next) if step == StepId::DietPreferences && !text.is_empty() => next,
                        Ok(next) if next.is_current_step_valid() => next.advance(),
                        Ok(next) => {
                            ux::show_invalid(out, step, None)?;
                            next
                        }
                    },
                }
            }
            Stage::ReviewingAnswer(_) if opts.auto_approve => wizard.confirm_yes(),
            Stage::ReviewingAnswer(_) => {
                ux::show_answer_review(out, &wizard)?;
                match read_input(input)? {
                    Input::Quit => return Ok(None),
                    Input::Back => wizard.go_back(),
                    Input::Text(t) if is_edit(&t) => wizard.confirm_no(),
                    Input::Text(_) => wizard.confirm_yes(),
                }
            }
            Stage::FinalConfirm if opts.auto_approve => wizard.confirm_yes(),
            Stage::FinalConfirm => {
                ux::show_final_review(out, wizard.draft())?;
                match read_input(input)? {
                    Input::Quit => return Ok(None),
                    Input::Back => wizard.go_back(),
                    Input::Text(t) if is_edit(&t) => wizard.go_back(),
                    Input::Text(_) => wizard.confirm_yes(),
                }
            }
            Stage::Generating => generate_with_spinner(wizard, provider, opts.progress).await,
            Stage::GenerationFailed { reason } => {
                ux::show_failure(out, reason)?;
                match read_input(input)? {
                    Input::Text(t) if t.eq_ignore_ascii_case("r") || t.eq_ignore_ascii_case("retry") => {
                        wizard.confirm_yes()
                    }
                    Input::Back => wizard.go_back(),
                    Input::Text(t) if is_edit(&t) => wizard.go_back(),
                    _ => return Ok(None),
                }
            }
        };
    }
}

/// Feed a complete answers file through the same step sequence, approving
/// each answer. Fails on the first answer that does not validate.
pub async fn run_scripted(answers: &ProfileDraft, provider: &dyn PlanProvider, progress: bool) -> Result<Wizard> {
    let mut wizard = Wizard::new();
    while let Stage::DataEntry(step) = wizard.stage() {
        let step = *step;
        wizard = scripted_updates(step, answers)
            .into_iter()
            .fold(wizard, Wizard::update_field);
        if step == StepId::DietPreferences {
            for pref in &answers.diet_preferences {
                if !wizard.draft().diet_preferences.contains(pref) {
                    wizard = wizard.toggle_diet_preference(*pref);
                }
            }
        }
        if !wizard.is_current_step_valid() {
            return Err(BlueprintError::validation(step.id(), format!("'{}' is not accepted", wizard.step_value())).into());
        }
        wizard = wizard.advance().confirm_yes();
    }

    let wizard = generate_with_spinner(wizard.confirm_yes(), provider, progress).await;
    if let Some(reason) = wizard.failure() {
        return Err(BlueprintError::Generation(reason.to_string()).into());
    }
    Ok(wizard)
}

fn scripted_updates(step: StepId, a: &ProfileDraft) -> Vec<FieldUpdate> {
    match step {
        StepId::FullName => vec![FieldUpdate::FullName(a.full_name.clone())],
        StepId::Email => vec![FieldUpdate::Email(a.email.clone())],
        StepId::Phone => vec![FieldUpdate::Phone(a.phone.clone())],
        StepId::Weight => vec![
            FieldUpdate::CurrentWeight(a.current_weight.clone()),
            FieldUpdate::WeightUnit(a.weight_unit),
        ],
        StepId::GoalWeight => vec![FieldUpdate::GoalWeight(a.goal_weight.clone())],
        StepId::TrainingMethod => a.training_method.map(FieldUpdate::TrainingMethod).into_iter().collect(),
        StepId::Equipment => a.equipment.map(FieldUpdate::Equipment).into_iter().collect(),
        _ => Vec::new(),
    }
}

async fn generate_with_spinner(wizard: Wizard, provider: &dyn PlanProvider, progress: bool) -> Wizard {
    let pb = ux::spinner(&wizard.draft().full_name, progress);
    let wizard = wizard.generate_plan(provider).await;
    pb.finish_and_clear();
    wizard
}

fn is_edit(t: &str) -> bool {
    t.eq_ignore_ascii_case("e") || t.eq_ignore_ascii_case("edit")
}

/// Turn one line of input into writes for `step`. `Err` carries a hint.
fn apply_answer(wizard: Wizard, step: StepId, text: &str) -> Result<Wizard, String> {
    let w = match step {
        StepId::FullName => wizard.update_field(FieldUpdate::FullName(text.to_string())),
        StepId::Email => wizard.update_field(FieldUpdate::Email(text.to_string())),
        StepId::Phone => wizard.update_field(FieldUpdate::Phone(text.to_string())),
        StepId::Weight => {
            let (value, unit) = split_weight(text)?;
            let w = wizard.update_field(FieldUpdate::CurrentWeight(value));
            match unit {
                Some(u) => w.update_field(FieldUpdate::WeightUnit(u)),
                None => w,
            }
        }
        StepId::GoalWeight => {
            let unit = wizard.draft().weight_unit;
            let (value, given) = split_weight(text)?;
            if given.is_some_and(|g| g != unit) {
                return Err(format!("Goal weight uses the same unit as your current weight ({unit})."));
            }
            wizard.update_field(FieldUpdate::GoalWeight(value))
        }
        StepId::TrainingMethod => {
            let m = pick(text, TrainingMethod::ALL, TrainingMethod::from_label)?;
            wizard.update_field(FieldUpdate::TrainingMethod(m))
        }
        StepId::Equipment => {
            let e = pick(text, Equipment::ALL, Equipment::from_label)?;
            wizard.update_field(FieldUpdate::Equipment(e))
        }
        StepId::DietPreferences => {
            let mut w = wizard;
            for token in text.split(',').map(str::trim).filter(|t| !t.is_empty()) {
                let p = pick(token, DietPreference::ALL, DietPreference::from_label)?;
                w = w.toggle_diet_preference(p);
            }
            w
        }
        StepId::Confirmation | StepId::Generating | StepId::Plan => wizard,
    };
    Ok(w)
}

/// "80", "80kg", "176.5 lbs", "1e2". Only a trailing unit is split off.
fn split_weight(text: &str) -> Result<(String, Option<WeightUnit>), String> {
    let text = text.trim();
    let lower = text.to_ascii_lowercase();
    for suffix in ["lbs", "lb", "kgs", "kg"] {
        if lower.ends_with(suffix) {
            let num = text[..text.len() - suffix.len()].trim();
            return Ok((num.to_string(), WeightUnit::parse(suffix)));
        }
    }

    let num = text.trim_end_matches(|c: char| c.is_ascii_alphabetic());
    let unit = &text[num.len()..];
    if !unit.is_empty() && num.trim().parse::<f64>().is_ok() {
        return Err(format!("Unknown unit '{unit}', use kg or lbs."));
    }
    Ok((text.to_string(), None))
}

/// Option number (1-based) or its label.
fn pick<T: Copy>(text: &str, all: &[T], by_label: fn(&str) -> Option<T>) -> Result<T, String> {
    if let Ok(n) = text.trim().parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| all.get(i).copied())
            .ok_or_else(|| format!("Pick a number between 1 and {}.", all.len()));
    }
    by_label(text).ok_or_else(|| format!("'{text}' is not one of the options."))
}
