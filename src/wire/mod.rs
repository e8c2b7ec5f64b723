use serde::{Deserialize, Serialize};

/// ========================================
/// Generated plan, as handed to rendering and export
/// ========================================

pub const DAYS_PER_PLAN: usize = 7;
pub const MEALS_PER_DAY: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub is_weight_loss: bool,
    pub days: Vec<DayPlan>,
    pub weekly_grocery_list: GroceryList,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: u8,
    pub workout: Workout,
    pub nutrition: Nutrition,
    pub grocery_list: GroceryList,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub title: String,
    pub warm_up: String,
    pub exercises: Vec<Exercise>,
    pub conditioning: String,
    pub cool_down: String,
}

/// Sets, reps and rest are free text ("12 per leg", "Breath between").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    pub sets: String,
    pub reps: String,
    pub rest: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub meals: Vec<Meal>,
    /// Food groups recommended for the selected diet.
    pub sources: SourceLists,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceLists {
    pub proteins: Vec<String>,
    pub carbs: Vec<String>,
    pub fats: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MealSlot {
    #[serde(rename = "Breakfast")]
    Breakfast,
    #[serde(rename = "Mid-Morning Snack")]
    MidMorningSnack,
    #[serde(rename = "Lunch")]
    Lunch,
    #[serde(rename = "Afternoon Snack")]
    AfternoonSnack,
    #[serde(rename = "Dinner")]
    Dinner,
}

impl MealSlot {
    /// Order in which meals appear within a day.
    pub const DAILY: [MealSlot; MEALS_PER_DAY] = [
        MealSlot::Breakfast,
        MealSlot::MidMorningSnack,
        MealSlot::Lunch,
        MealSlot::AfternoonSnack,
        MealSlot::Dinner,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::MidMorningSnack => "Mid-Morning Snack",
            MealSlot::Lunch => "Lunch",
            MealSlot::AfternoonSnack => "Afternoon Snack",
            MealSlot::Dinner => "Dinner",
        }
    }

    pub fn class(self) -> MealClass {
        match self {
            MealSlot::Breakfast => MealClass::Breakfast,
            MealSlot::MidMorningSnack | MealSlot::AfternoonSnack => MealClass::Snack,
            MealSlot::Lunch | MealSlot::Dinner => MealClass::Main,
        }
    }
}

/// Row selector for the macro-target table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealClass {
    Breakfast,
    Snack,
    Main,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub slot: MealSlot,
    pub name: String,
    pub calories: u32,
    pub macros: Macros,
    pub ingredients: Vec<String>,
}

/// Grams per meal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macros {
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroceryList {
    pub categories: Vec<GroceryCategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryCategory {
    pub name: String,
    pub items: Vec<String>,
}

impl GroceryList {
    pub fn category(&self, name: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.items.as_slice())
    }
}
