use crate::profile::{DietPreference, Equipment, TrainingMethod, UserProfile};
use crate::wire::{
    DayPlan, Exercise, GroceryCategory, GroceryList, Macros, Meal, MealClass, MealSlot, Nutrition,
    Plan, SourceLists, Workout, DAYS_PER_PLAN,
};

pub mod catalog;

use catalog::{ExerciseRow, MealOption};

/// Diet flags the nutrition tables branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DietFlags {
    pub vegan: bool,
    pub vegetarian: bool,
    pub keto: bool,
    pub low_carb: bool,
}

impl DietFlags {
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            vegan: profile.prefers(DietPreference::Vegan),
            vegetarian: profile.prefers(DietPreference::Vegetarian),
            keto: profile.prefers(DietPreference::Keto),
            low_carb: profile.prefers(DietPreference::LowCarb),
        }
    }
}

/// Which of the fixed exercise lists a profile gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseBranch {
    Bodyweight,
    FreeWeights,
    Machine,
    Hiit,
    Yoga,
    Hybrid,
}

impl ExerciseBranch {
    /// First match wins: no-equipment beats every training method.
    pub fn select(method: TrainingMethod, equipment: Equipment) -> Self {
        match (method, equipment) {
            (TrainingMethod::Bodyweight, _) | (_, Equipment::NoEquipment) => ExerciseBranch::Bodyweight,
            (TrainingMethod::FreeWeights, _) => ExerciseBranch::FreeWeights,
            (TrainingMethod::MachineBased, _) => ExerciseBranch::Machine,
            (TrainingMethod::Hiit, _) => ExerciseBranch::Hiit,
            (TrainingMethod::Yoga, _) => ExerciseBranch::Yoga,
            (TrainingMethod::Hybrid, _) => ExerciseBranch::Hybrid,
        }
    }

    fn rows(self) -> &'static [ExerciseRow; 4] {
        match self {
            ExerciseBranch::Bodyweight => &catalog::BODYWEIGHT_EXERCISES,
            ExerciseBranch::FreeWeights => &catalog::FREE_WEIGHT_EXERCISES,
            ExerciseBranch::Machine => &catalog::MACHINE_EXERCISES,
            ExerciseBranch::Hiit => &catalog::HIIT_EXERCISES,
            ExerciseBranch::Yoga => &catalog::YOGA_EXERCISES,
            ExerciseBranch::Hybrid => &catalog::HYBRID_EXERCISES,
        }
    }

    pub fn exercises(self) -> Vec<Exercise> {
        self.rows()
            .iter()
            .map(|(name, sets, reps, rest)| Exercise {
                name: (*name).to_string(),
                sets: (*sets).to_string(),
                reps: (*reps).to_string(),
                rest: (*rest).to_string(),
            })
            .collect()
    }
}

/// Assemble the full 7-day plan. Pure: equal profiles give equal plans.
pub fn build_plan(profile: &UserProfile) -> Plan {
    let is_weight_loss = profile.is_weight_loss();
    let flags = DietFlags::from_profile(profile);

    let days = (1..=DAYS_PER_PLAN as u8)
        .map(|day| DayPlan {
            day,
            workout: workout_for_day(day, profile.training_method, profile.equipment, is_weight_loss),
            nutrition: nutrition_for_day(day, flags, is_weight_loss),
            grocery_list: daily_grocery_list(),
        })
        .collect();

    Plan {
        is_weight_loss,
        days,
        weekly_grocery_list: weekly_grocery_list(flags),
    }
}

/// `day` is 1-based.
pub fn workout_for_day(day: u8, method: TrainingMethod, equipment: Equipment, is_weight_loss: bool) -> Workout {
    let theme = catalog::DAY_THEMES[(usize::from(day) - 1) % catalog::DAY_THEMES.len()];
    Workout {
        title: format!("Day {day} – {theme} ({method})"),
        warm_up: catalog::WARM_UP.to_string(),
        exercises: ExerciseBranch::select(method, equipment).exercises(),
        conditioning: conditioning(is_weight_loss).to_string(),
        cool_down: catalog::COOL_DOWN.to_string(),
    }
}

pub fn conditioning(is_weight_loss: bool) -> &'static str {
    if is_weight_loss {
        catalog::STEADY_STATE_CARDIO
    } else {
        catalog::INTERVALS
    }
}

pub fn source_lists(flags: DietFlags) -> SourceLists {
    let proteins = if flags.vegan {
        catalog::VEGAN_PROTEINS
    } else if flags.vegetarian {
        catalog::VEGETARIAN_PROTEINS
    } else {
        catalog::OMNIVORE_PROTEINS
    };
    let carbs = if flags.keto || flags.low_carb {
        catalog::LOW_CARB_CARBS
    } else {
        catalog::STANDARD_CARBS
    };
    let mut fats = to_strings(catalog::BASE_FATS);
    if !flags.vegan {
        fats.extend(to_strings(catalog::DAIRY_FATS));
    }
    if !flags.vegetarian && !flags.vegan {
        fats.extend(to_strings(catalog::ANIMAL_FATS));
    }

    SourceLists {
        proteins: to_strings(proteins),
        carbs: to_strings(carbs),
        fats,
    }
}

pub fn nutrition_for_day(day: u8, flags: DietFlags, is_weight_loss: bool) -> Nutrition {
    let meals = MealSlot::DAILY
        .iter()
        .map(|slot| {
            let option = meal_option(*slot, day);
            let (calories, macros) = macro_targets(slot.class(), is_weight_loss, flags);
            Meal {
                slot: *slot,
                name: option.name.to_string(),
                calories,
                macros,
                ingredients: to_strings(option.ingredients),
            }
        })
        .collect();

    Nutrition { meals, sources: source_lists(flags) }
}

/// Calorie and macro targets straight from the fixed table; keto wins over
/// low-carb when both are selected.
pub fn macro_targets(class: MealClass, is_weight_loss: bool, flags: DietFlags) -> (u32, Macros) {
    // (calories loss/gain, protein loss/gain, carbs keto/low/std, fat keto/low/std)
    let (calories, protein, carbs, fat) = match class {
        MealClass::Breakfast => ((350, 450), (30, 35), (5, 20, 45), (30, 25, 15)),
        MealClass::Snack => ((150, 200), (15, 20), (3, 10, 20), (12, 10, 5)),
        MealClass::Main => ((450, 550), (35, 40), (8, 25, 55), (35, 30, 15)),
    };
    let by_goal = |(loss, gain): (u32, u32)| if is_weight_loss { loss } else { gain };
    let by_diet = |(keto, low, std): (u32, u32, u32)| {
        if flags.keto {
            keto
        } else if flags.low_carb {
            low
        } else {
            std
        }
    };

    (
        by_goal(calories),
        Macros { protein: by_goal(protein), carbs: by_diet(carbs), fat: by_diet(fat) },
    )
}

/// The meal shown in a slot depends only on the slot and the day.
pub fn meal_option(slot: MealSlot, day: u8) -> &'static MealOption {
    let d = usize::from(day) - 1;
    match slot {
        MealSlot::Breakfast => &catalog::BREAKFAST_OPTIONS[d % catalog::BREAKFAST_OPTIONS.len()],
        MealSlot::MidMorningSnack => &catalog::SNACK_OPTIONS[(d * 2) % catalog::SNACK_OPTIONS.len()],
        MealSlot::AfternoonSnack => &catalog::SNACK_OPTIONS[(d * 2 + 1) % catalog::SNACK_OPTIONS.len()],
        MealSlot::Lunch => &catalog::LUNCH_OPTIONS[d % catalog::LUNCH_OPTIONS.len()],
        MealSlot::Dinner => &catalog::DINNER_OPTIONS[d % catalog::DINNER_OPTIONS.len()],
    }
}

// TODO: derive the daily list from that day's meals once ingredient
// quantities are normalized.
pub fn daily_grocery_list() -> GroceryList {
    GroceryList {
        categories: vec![
            category(catalog::PRODUCE, catalog::DAILY_PRODUCE),
            category(catalog::PROTEINS, catalog::DAILY_PROTEINS),
            category(catalog::GRAINS_AND_PANTRY, catalog::DAILY_PANTRY),
        ],
    }
}

pub fn weekly_grocery_list(flags: DietFlags) -> GroceryList {
    let proteins = if flags.vegan {
        catalog::WEEKLY_VEGAN_PROTEINS
    } else if flags.vegetarian {
        catalog::WEEKLY_VEGETARIAN_PROTEINS
    } else {
        catalog::WEEKLY_OMNIVORE_PROTEINS
    };
    GroceryList {
        categories: vec![
            category(catalog::PRODUCE, catalog::WEEKLY_PRODUCE),
            category(catalog::PROTEINS, proteins),
            category(catalog::GRAINS_AND_PANTRY, catalog::WEEKLY_PANTRY),
        ],
    }
}

fn category(name: &str, items: &[&str]) -> GroceryCategory {
    GroceryCategory { name: name.to_string(), items: to_strings(items) }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{alex_draft, ProfileDraft};
    use crate::wire::MEALS_PER_DAY;

    fn profile(edit: impl FnOnce(&mut ProfileDraft)) -> UserProfile {
        let mut d = alex_draft();
        edit(&mut d);
        d.complete().unwrap()
    }

    #[test]
    fn alex_vegan_scenario() {
        let plan = build_plan(&profile(|_| {}));
        assert!(plan.is_weight_loss);
        assert_eq!(plan.days.len(), 7);

        let day1 = &plan.days[0];
        let names: Vec<_> = day1.workout.exercises.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            ["Bodyweight Squats", "Push-ups (or Modified Push-ups)", "Walking Lunges", "Plank"]
        );
        assert_eq!(day1.workout.exercises[2].reps, "12 per leg");
        assert_eq!(day1.nutrition.meals[0].name, "Greek Yogurt Parfait");
        assert_eq!(
            plan.weekly_grocery_list.category("Proteins").unwrap(),
            to_strings(catalog::WEEKLY_VEGAN_PROTEINS).as_slice()
        );
    }

    #[test]
    fn keto_breakfast_macros_come_from_the_table() {
        let plan = build_plan(&profile(|d| d.diet_preferences = vec![DietPreference::Keto]));
        let breakfast = &plan.days[0].nutrition.meals[0];
        assert_eq!(breakfast.slot, MealSlot::Breakfast);
        assert_eq!(breakfast.calories, 350);
        assert_eq!(breakfast.macros, Macros { protein: 30, carbs: 5, fat: 30 });
    }

    #[test]
    fn macro_table_rows() {
        let none = DietFlags::default();
        let low = DietFlags { low_carb: true, ..none };
        let both = DietFlags { keto: true, low_carb: true, ..none };
        assert_eq!(macro_targets(MealClass::Snack, false, none), (200, Macros { protein: 20, carbs: 20, fat: 5 }));
        assert_eq!(macro_targets(MealClass::Main, true, low), (450, Macros { protein: 35, carbs: 25, fat: 30 }));
        assert_eq!(macro_targets(MealClass::Main, false, both), (550, Macros { protein: 40, carbs: 8, fat: 35 }));
        assert_eq!(macro_targets(MealClass::Breakfast, false, low), (450, Macros { protein: 35, carbs: 20, fat: 25 }));
    }

    #[test]
    fn themes_run_in_fixed_order() {
        let plan = build_plan(&profile(|_| {}));
        for (i, day) in plan.days.iter().enumerate() {
            assert_eq!(usize::from(day.day), i + 1);
            assert_eq!(
                day.workout.title,
                format!("Day {} – {} (Bodyweight/Calisthenics)", i + 1, catalog::DAY_THEMES[i])
            );
        }
        let mut themes = catalog::DAY_THEMES.to_vec();
        themes.sort();
        themes.dedup();
        assert_eq!(themes.len(), 7);
    }

    #[test]
    fn exercise_branch_precedence() {
        use Equipment::*;
        use TrainingMethod::*;
        assert_eq!(ExerciseBranch::select(FreeWeights, NoEquipment), ExerciseBranch::Bodyweight);
        assert_eq!(ExerciseBranch::select(Bodyweight, FullGym), ExerciseBranch::Bodyweight);
        assert_eq!(ExerciseBranch::select(FreeWeights, FullGym), ExerciseBranch::FreeWeights);
        assert_eq!(ExerciseBranch::select(MachineBased, DumbbellsAndBands), ExerciseBranch::Machine);
        assert_eq!(ExerciseBranch::select(Hiit, HomeCardio), ExerciseBranch::Hiit);
        assert_eq!(ExerciseBranch::select(Yoga, FullGym), ExerciseBranch::Yoga);
        assert_eq!(ExerciseBranch::select(Hybrid, FullGym), ExerciseBranch::Hybrid);
        assert_eq!(ExerciseBranch::Hybrid.exercises()[0].name, "Kettlebell Swings");
    }

    #[test]
    fn conditioning_follows_goal() {
        let gain = build_plan(&profile(|d| d.goal_weight = "90".into()));
        assert!(!gain.is_weight_loss);
        assert!(gain.days.iter().all(|d| d.workout.conditioning == catalog::INTERVALS));

        // Equal weights are not weight loss.
        let same = build_plan(&profile(|d| d.goal_weight = "80".into()));
        assert!(!same.is_weight_loss);
    }

    #[test]
    fn snacks_step_two_per_day() {
        let n = |slot, day| meal_option(slot, day).name;
        assert_eq!(n(MealSlot::MidMorningSnack, 1), "Apple with Almond Butter");
        assert_eq!(n(MealSlot::AfternoonSnack, 1), "Protein Bar");
        assert_eq!(n(MealSlot::MidMorningSnack, 4), "Cottage Cheese with Fruit");
        assert_eq!(n(MealSlot::AfternoonSnack, 4), "Apple with Almond Butter");
        assert_eq!(n(MealSlot::AfternoonSnack, 7), "Cottage Cheese with Fruit");
        assert_eq!(n(MealSlot::Dinner, 7), "Baked Chicken with Vegetables");
        assert_eq!(n(MealSlot::Lunch, 3), "Quinoa Bowl");
    }

    #[test]
    fn every_day_has_five_meals_in_slot_order() {
        let plan = build_plan(&profile(|_| {}));
        for day in &plan.days {
            let slots: Vec<_> = day.nutrition.meals.iter().map(|m| m.slot).collect();
            assert_eq!(slots.len(), MEALS_PER_DAY);
            assert_eq!(slots, MealSlot::DAILY.to_vec());
            assert_eq!(day.workout.exercises.len(), 4);
            assert_eq!(day.grocery_list, daily_grocery_list());
        }
    }

    #[test]
    fn source_lists_by_diet() {
        let vegan = source_lists(DietFlags { vegan: true, vegetarian: true, ..Default::default() });
        assert_eq!(vegan.proteins[0], "tofu");
        assert_eq!(vegan.fats, to_strings(catalog::BASE_FATS));

        let veg = source_lists(DietFlags { vegetarian: true, low_carb: true, ..Default::default() });
        assert_eq!(veg.proteins[0], "eggs");
        assert_eq!(veg.carbs[0], "leafy greens");
        assert_eq!(veg.fats.last().map(String::as_str), Some("cheese (in moderation)"));

        let omni = source_lists(DietFlags::default());
        assert_eq!(omni.proteins[0], "chicken breast");
        assert_eq!(omni.carbs[0], "brown rice");
        assert_eq!(omni.fats.len(), 8);
        assert_eq!(&omni.fats[6..], ["salmon", "eggs"]);
    }

    #[test]
    fn weekly_proteins_branch_on_diet() {
        let veg = weekly_grocery_list(DietFlags { vegetarian: true, ..Default::default() });
        assert_eq!(veg.category("Proteins").unwrap()[0], "Eggs - 18");
        let omni = weekly_grocery_list(DietFlags { keto: true, ..Default::default() });
        assert_eq!(omni.category("Proteins").unwrap()[0], "Chicken breast - 3 lbs");
        let names: Vec<_> = omni.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Produce", "Proteins", "Grains & Pantry"]);
    }

    #[test]
    fn same_profile_gives_identical_bytes() {
        let p = profile(|d| d.diet_preferences = vec![DietPreference::Vegetarian, DietPreference::LowCarb]);
        let a = serde_json::to_vec(&build_plan(&p)).unwrap();
        let b = serde_json::to_vec(&build_plan(&p)).unwrap();
        assert_eq!(a, b);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn heavier_than_goal_means_steady_cardio_every_day(
                goal in 1u32..300,
                extra in 1u32..200,
                method in prop::sample::select(TrainingMethod::ALL.to_vec()),
            ) {
                let p = profile(|d| {
                    d.goal_weight = goal.to_string();
                    d.current_weight = (goal + extra).to_string();
                    d.training_method = Some(method);
                });
                let plan = build_plan(&p);
                prop_assert!(plan.is_weight_loss);
                for day in &plan.days {
                    prop_assert_eq!(day.workout.conditioning.as_str(), catalog::STEADY_STATE_CARDIO);
                }
            }
        }
    }
}
