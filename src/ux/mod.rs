use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;

use crate::profile::{DietPreference, Equipment, ProfileDraft, TrainingMethod};
use crate::wire::{GroceryList, Plan};
use crate::wizard::{StepId, Wizard};

pub fn show_question(out: &mut impl Write, wizard: &Wizard) -> io::Result<()> {
    let step = wizard.current_step();
    let counter = match wizard.progress() {
        Some((n, total)) => format!("  (Question {n} of {total})"),
        None => String::new(),
    };
    writeln!(out, "\n{}{}", step.title.green().bold(), counter.dimmed())?;

    let draft = wizard.draft();
    match step.id {
        StepId::Weight => {
            writeln!(out, "Enter your current weight, optionally followed by kg or lbs (now: {})", draft.weight_unit)?;
        }
        StepId::GoalWeight => {
            writeln!(out, "Enter your goal weight in {}", draft.weight_unit)?;
        }
        StepId::TrainingMethod => {
            let current = draft.training_method;
            for (i, m) in TrainingMethod::ALL.iter().enumerate() {
                writeln!(out, "  {}. {} {}", i + 1, radio(current == Some(*m)), m)?;
            }
        }
        StepId::Equipment => {
            let current = draft.equipment;
            for (i, e) in Equipment::ALL.iter().enumerate() {
                writeln!(out, "  {}. {} {}", i + 1, radio(current == Some(*e)), e)?;
            }
        }
        StepId::DietPreferences => {
            for (i, p) in DietPreference::ALL.iter().enumerate() {
                let mark = if draft.diet_preferences.contains(p) { "[x]".green().bold() } else { "[ ]".normal() };
                writeln!(out, "  {:>2}. {} {}", i + 1, mark, p)?;
            }
            writeln!(out, "Toggle with numbers (e.g. 2,7); press Enter when done.")?;
        }
        _ => {}
    }
    writeln!(out, "{}", "(:back to go back, :quit to stop)".dimmed())?;
    prompt(out, "›")
}

fn radio(selected: bool) -> colored::ColoredString {
    if selected {
        "(•)".green().bold()
    } else {
        "( )".normal()
    }
}

pub fn show_invalid(out: &mut impl Write, step: StepId, hint: Option<&str>) -> io::Result<()> {
    let default_hint = match step {
        StepId::FullName => "Please enter your name.",
        StepId::Email => "Please enter a valid email address.",
        StepId::Phone => "Please enter your phone number.",
        StepId::Weight | StepId::GoalWeight => "Please enter a number greater than 0.",
        StepId::TrainingMethod | StepId::Equipment => "Please pick one of the listed options.",
        StepId::DietPreferences => "Please select at least one preference.",
        _ => "That answer can't be used here.",
    };
    writeln!(out, "{}", hint.unwrap_or(default_hint).red())
}

pub fn show_answer_review(out: &mut impl Write, wizard: &Wizard) -> io::Result<()> {
    writeln!(out, "You entered: {} {}", wizard.step_value().bold(), "✓".green())?;
    prompt(out, "[Enter] Next   [e] Edit")
}

pub fn show_final_review(out: &mut impl Write, draft: &ProfileDraft) -> io::Result<()> {
    writeln!(out, "\n{}", StepId::Confirmation.title().green().bold())?;
    let rows = [
        ("Name", draft.full_name.clone()),
        ("Email", draft.email.clone()),
        ("Phone", draft.phone.clone()),
        ("Current Weight", format!("{} {}", draft.current_weight, draft.weight_unit)),
        ("Goal Weight", format!("{} {}", draft.goal_weight, draft.weight_unit)),
        ("Training Method", draft.training_method.map(|m| m.to_string()).unwrap_or_default()),
        ("Equipment", draft.equipment.map(|e| e.to_string()).unwrap_or_default()),
        ("Diet Preferences", draft.diet_summary()),
    ];
    for (label, value) in rows {
        writeln!(out, "  {}: {}", label.bold(), value)?;
    }
    prompt(out, "[Enter] Confirm & Generate Plan   [e] Edit")
}

pub fn show_failure(out: &mut impl Write, reason: &str) -> io::Result<()> {
    writeln!(out, "{} {}", "Could not build your plan:".red().bold(), reason)?;
    prompt(out, "[r] Retry   [e] Edit answers   [q] Quit")
}

/// Spinner shown while the plan is being built; hidden when disabled.
pub fn spinner(name: &str, enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(format!("Thank you, {name}! Building your personalized plan now..."));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

pub fn print_plan(out: &mut impl Write, plan: &Plan, name: &str) -> io::Result<()> {
    writeln!(out, "\n{}", "🎉 Your plan is ready!".green().bold())?;
    writeln!(out, "{}", StepId::Plan.title().bold())?;
    writeln!(out, "Prepared for {name}")?;

    for day in &plan.days {
        let header = format!(" Day {} ", day.day);
        writeln!(out, "\n{}", format!("┏━━━━━━━━━━━━━━━━━━━━━━━━{header}━━━━━━━━━━━━━━━━━━━━━━━━┓").bold())?;

        let w = &day.workout;
        writeln!(out, "{}", w.title.cyan().bold())?;
        writeln!(out, "  {} {}", "Warm-up:".bold(), w.warm_up)?;
        writeln!(out, "  {}", "Main Workout:".bold())?;
        for (i, e) in w.exercises.iter().enumerate() {
            writeln!(out, "    {}. {}  {} × {} (Rest: {})", i + 1, e.name, e.sets, e.reps, e.rest)?;
        }
        writeln!(out, "  {} {}", "Conditioning:".bold(), w.conditioning)?;
        writeln!(out, "  {} {}", "Cool-down:".bold(), w.cool_down)?;

        writeln!(out, "{}", "Nutrition Plan".magenta().bold())?;
        for meal in &day.nutrition.meals {
            writeln!(
                out,
                "  {}: {} ({} kcal)",
                meal.slot.label().bold(),
                meal.name,
                meal.calories
            )?;
            writeln!(
                out,
                "    {}g protein • {}g carbs • {}g fat",
                meal.macros.protein, meal.macros.carbs, meal.macros.fat
            )?;
            writeln!(out, "{}", indent(&meal.ingredients.join("\n"), 6))?;
        }

        writeln!(out, "{}", "Daily Grocery List".yellow().bold())?;
        print_grocery_list(out, &day.grocery_list)?;
    }

    writeln!(out, "\n{}", "Weekly Grocery List (Aggregated)".yellow().bold())?;
    print_grocery_list(out, &plan.weekly_grocery_list)
}

fn print_grocery_list(out: &mut impl Write, list: &GroceryList) -> io::Result<()> {
    for cat in &list.categories {
        writeln!(out, "  {}", cat.name.bold())?;
        for item in &cat.items {
            writeln!(out, "    • {item}")?;
        }
    }
    Ok(())
}

fn prompt(out: &mut impl Write, text: &str) -> io::Result<()> {
    write!(out, "{} ", text)?;
    out.flush()
}

fn indent(s: &str, n: usize) -> String {
    let pad = " ".repeat(n);
    s.lines()
        .map(|l| format!("{}{}", pad, l))
        .collect::<Vec<_>>()
        .join("\n")
}
