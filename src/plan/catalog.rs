//! Literal content tables the plan is assembled from.

pub struct MealOption {
    pub name: &'static str,
    pub ingredients: &'static [&'static str],
}

/// (name, sets, reps, rest)
pub type ExerciseRow = (&'static str, &'static str, &'static str, &'static str);

pub const DAY_THEMES: [&str; 7] = [
    "Full-Body Strength",
    "Cardio & Core",
    "Upper Body Focus",
    "Active Recovery",
    "Lower Body Focus",
    "HIIT Circuit",
    "Mobility & Stretching",
];

pub const WARM_UP: &str = "5 minutes of dynamic stretching and light cardio to increase heart rate";
pub const COOL_DOWN: &str = "5 minutes of static stretching focusing on worked muscle groups";
pub const STEADY_STATE_CARDIO: &str =
    "20 minutes of steady-state cardio (treadmill, bike, or elliptical) at 65-75% max heart rate";
pub const INTERVALS: &str = "10 minutes of high-intensity intervals (30 sec sprint / 30 sec rest)";

pub static BODYWEIGHT_EXERCISES: [ExerciseRow; 4] = [
    ("Bodyweight Squats", "3", "15", "45 sec"),
    ("Push-ups (or Modified Push-ups)", "3", "10-12", "60 sec"),
    ("Walking Lunges", "3", "12 per leg", "45 sec"),
    ("Plank", "3", "30-45 sec hold", "30 sec"),
];

pub static FREE_WEIGHT_EXERCISES: [ExerciseRow; 4] = [
    ("Barbell Squats", "4", "8", "90 sec"),
    ("Dumbbell Bench Press", "3", "10", "60 sec"),
    ("Bent-Over Rows", "3", "12", "60 sec"),
    ("Shoulder Press", "3", "10", "60 sec"),
];

pub static MACHINE_EXERCISES: [ExerciseRow; 4] = [
    ("Leg Press", "3", "12", "60 sec"),
    ("Chest Press Machine", "3", "10", "60 sec"),
    ("Lat Pulldown", "3", "12", "60 sec"),
    ("Seated Row", "3", "12", "60 sec"),
];

pub static HIIT_EXERCISES: [ExerciseRow; 4] = [
    ("Burpees", "4", "45 sec work / 15 sec rest", "Complete circuit"),
    ("Mountain Climbers", "4", "45 sec work / 15 sec rest", "Complete circuit"),
    ("Jump Squats", "4", "45 sec work / 15 sec rest", "Complete circuit"),
    ("High Knees", "4", "45 sec work / 15 sec rest", "Complete circuit"),
];

pub static YOGA_EXERCISES: [ExerciseRow; 4] = [
    ("Sun Salutation A", "3", "Full sequence", "Breath between"),
    ("Warrior Sequence", "2", "Each side", "Breath between"),
    ("Balance Poses", "2", "30 sec each pose", "Breath between"),
    ("Core Flow", "1", "3-5 min sequence", "As needed"),
];

pub static HYBRID_EXERCISES: [ExerciseRow; 4] = [
    ("Kettlebell Swings", "3", "15", "45 sec"),
    ("TRX Rows", "3", "12", "45 sec"),
    ("Dumbbell Lunges", "3", "10 each leg", "60 sec"),
    ("Medicine Ball Slams", "3", "12", "45 sec"),
];

pub const VEGAN_PROTEINS: &[&str] = &[
    "tofu", "tempeh", "seitan", "lentils", "chickpeas", "black beans", "protein powder (plant-based)",
];
pub const VEGETARIAN_PROTEINS: &[&str] = &[
    "eggs", "Greek yogurt", "cottage cheese", "tofu", "tempeh", "lentils", "protein powder (whey)",
];
pub const OMNIVORE_PROTEINS: &[&str] = &[
    "chicken breast", "turkey", "lean beef", "salmon", "tuna", "eggs", "Greek yogurt",
];

pub const LOW_CARB_CARBS: &[&str] = &[
    "leafy greens", "broccoli", "cauliflower", "zucchini", "bell peppers", "berries (limited)",
];
pub const STANDARD_CARBS: &[&str] = &[
    "brown rice", "quinoa", "sweet potatoes", "oats", "whole grain bread", "fruits", "vegetables",
];

pub const BASE_FATS: &[&str] = &["avocado", "olive oil", "nuts", "seeds", "nut butters"];
pub const DAIRY_FATS: &[&str] = &["cheese (in moderation)"];
pub const ANIMAL_FATS: &[&str] = &["salmon", "eggs"];

pub static BREAKFAST_OPTIONS: [MealOption; 7] = [
    MealOption {
        name: "Greek Yogurt Parfait",
        ingredients: &["1 cup Greek yogurt", "1/2 cup berries", "1/4 cup granola", "1 tbsp honey"],
    },
    MealOption {
        name: "Protein Oatmeal",
        ingredients: &["1 cup oats", "1 scoop protein powder", "1 tbsp almond butter", "1/2 banana, sliced"],
    },
    MealOption {
        name: "Veggie Omelette",
        ingredients: &["3 eggs", "1/4 cup bell peppers", "1/4 cup spinach", "1/4 cup onions", "1 oz cheese"],
    },
    MealOption {
        name: "Avocado Toast",
        ingredients: &["2 slices whole grain bread", "1/2 avocado", "2 eggs", "Salt and pepper to taste"],
    },
    MealOption {
        name: "Protein Smoothie",
        ingredients: &["1 scoop protein powder", "1 cup almond milk", "1/2 cup berries", "1 tbsp nut butter", "Ice"],
    },
    MealOption {
        name: "Chia Seed Pudding",
        ingredients: &["1/4 cup chia seeds", "1 cup almond milk", "1 tbsp maple syrup", "1/4 cup berries"],
    },
    MealOption {
        name: "Breakfast Burrito",
        ingredients: &["1 whole grain wrap", "2 eggs", "1/4 cup black beans", "1/4 avocado", "2 tbsp salsa"],
    },
];

pub static SNACK_OPTIONS: [MealOption; 7] = [
    MealOption { name: "Apple with Almond Butter", ingredients: &["1 medium apple", "1 tbsp almond butter"] },
    MealOption { name: "Protein Bar", ingredients: &["1 protein bar (20g protein)"] },
    MealOption { name: "Greek Yogurt with Berries", ingredients: &["3/4 cup Greek yogurt", "1/4 cup mixed berries"] },
    MealOption {
        name: "Hummus with Veggies",
        ingredients: &["1/4 cup hummus", "1 cup sliced vegetables (carrots, cucumbers, bell peppers)"],
    },
    MealOption { name: "Hard-Boiled Eggs", ingredients: &["2 hard-boiled eggs", "Salt and pepper to taste"] },
    MealOption {
        name: "Trail Mix",
        ingredients: &["1/4 cup mixed nuts", "1 tbsp dried fruit", "1 tbsp dark chocolate chips"],
    },
    MealOption { name: "Cottage Cheese with Fruit", ingredients: &["1/2 cup cottage cheese", "1/2 cup pineapple chunks"] },
];

pub static LUNCH_OPTIONS: [MealOption; 7] = [
    MealOption {
        name: "Grilled Chicken Salad",
        ingredients: &[
            "4 oz grilled chicken breast",
            "2 cups mixed greens",
            "1/4 cup cherry tomatoes",
            "1/4 cup cucumber",
            "2 tbsp vinaigrette",
        ],
    },
    MealOption {
        name: "Turkey and Avocado Wrap",
        ingredients: &["1 whole grain wrap", "4 oz turkey breast", "1/4 avocado", "1 cup leafy greens", "1 tbsp mustard"],
    },
    MealOption {
        name: "Quinoa Bowl",
        ingredients: &["3/4 cup cooked quinoa", "4 oz grilled tofu", "1/2 cup roasted vegetables", "2 tbsp tahini dressing"],
    },
    MealOption {
        name: "Tuna Salad Sandwich",
        ingredients: &[
            "3 oz tuna (canned in water)",
            "1 tbsp light mayo",
            "2 slices whole grain bread",
            "1 cup mixed greens",
        ],
    },
    MealOption {
        name: "Lentil Soup with Side Salad",
        ingredients: &["1 cup lentil soup", "2 cups mixed greens", "1 tbsp olive oil", "1 tbsp balsamic vinegar"],
    },
    MealOption {
        name: "Chicken and Rice Bowl",
        ingredients: &["4 oz grilled chicken", "1/2 cup brown rice", "1/2 cup black beans", "1/4 avocado", "2 tbsp salsa"],
    },
    MealOption {
        name: "Mediterranean Plate",
        ingredients: &["1/4 cup hummus", "1/2 cup tabbouleh", "2 oz feta cheese", "5 olives", "1 whole wheat pita"],
    },
];

pub static DINNER_OPTIONS: [MealOption; 7] = [
    MealOption {
        name: "Baked Salmon with Roasted Vegetables",
        ingredients: &[
            "5 oz salmon fillet",
            "1 cup roasted broccoli and cauliflower",
            "1/2 cup quinoa",
            "1 tbsp olive oil",
            "Lemon and herbs",
        ],
    },
    MealOption {
        name: "Stir-Fry with Lean Protein",
        ingredients: &[
            "4 oz chicken/tofu",
            "2 cups mixed vegetables",
            "1/2 cup brown rice",
            "1 tbsp low-sodium soy sauce",
            "1 tsp sesame oil",
        ],
    },
    MealOption {
        name: "Turkey Chili",
        ingredients: &[
            "4 oz ground turkey",
            "1/2 cup beans",
            "1/4 cup onions",
            "1/4 cup bell peppers",
            "1/2 cup crushed tomatoes",
            "Spices",
        ],
    },
    MealOption {
        name: "Zucchini Noodles with Protein",
        ingredients: &[
            "2 medium zucchinis (spiralized)",
            "4 oz protein of choice",
            "1/2 cup marinara sauce",
            "1 tbsp grated parmesan",
            "Fresh basil",
        ],
    },
    MealOption {
        name: "Grilled Steak with Sweet Potato",
        ingredients: &[
            "4 oz lean steak",
            "1 medium sweet potato",
            "2 cups steamed green beans",
            "1 tbsp olive oil",
            "Herbs and spices",
        ],
    },
    MealOption {
        name: "Stuffed Bell Peppers",
        ingredients: &[
            "2 bell peppers",
            "1/2 cup cooked quinoa",
            "3 oz ground turkey/tempeh",
            "1/4 cup onions",
            "1/4 cup tomato sauce",
            "Spices",
        ],
    },
    MealOption {
        name: "Baked Chicken with Vegetables",
        ingredients: &[
            "5 oz chicken breast",
            "1 cup roasted vegetables",
            "1/2 cup brown rice",
            "1 tbsp olive oil",
            "Herbs and spices",
        ],
    },
];

pub const PRODUCE: &str = "Produce";
pub const PROTEINS: &str = "Proteins";
pub const GRAINS_AND_PANTRY: &str = "Grains & Pantry";

// Same every day regardless of meals or diet.
pub const DAILY_PRODUCE: &[&str] = &[
    "Mixed greens - 2 cups",
    "Bell peppers - 1",
    "Onion - 1/2",
    "Avocado - 1/2",
    "Berries - 1/2 cup",
    "Banana - 1",
];
pub const DAILY_PROTEINS: &[&str] = &[
    "Chicken breast - 8 oz",
    "Eggs - 3",
    "Greek yogurt - 1 cup",
    "Tofu - 4 oz (if vegetarian/vegan)",
];
pub const DAILY_PANTRY: &[&str] = &[
    "Brown rice - 1/2 cup dry",
    "Oats - 1/2 cup",
    "Whole grain bread - 2 slices",
    "Quinoa - 1/2 cup dry",
    "Olive oil - 2 tbsp",
];

pub const WEEKLY_PRODUCE: &[&str] = &[
    "Mixed greens - 14 cups",
    "Bell peppers - 7",
    "Onions - 3",
    "Avocados - 3",
    "Berries - 4 cups",
    "Bananas - 7",
    "Apples - 7",
    "Sweet potatoes - 3",
    "Zucchini - 2",
    "Broccoli - 2 heads",
    "Carrots - 1 bunch",
    "Cucumbers - 3",
];
pub const WEEKLY_VEGAN_PROTEINS: &[&str] = &[
    "Tofu - 28 oz",
    "Tempeh - 16 oz",
    "Lentils - 2 cups dry",
    "Chickpeas - 2 cans",
    "Black beans - 2 cans",
    "Plant-based protein powder - 1 container",
];
pub const WEEKLY_VEGETARIAN_PROTEINS: &[&str] = &[
    "Eggs - 18",
    "Greek yogurt - 64 oz",
    "Cottage cheese - 16 oz",
    "Tofu - 16 oz",
    "Tempeh - 8 oz",
    "Whey protein powder - 1 container",
];
pub const WEEKLY_OMNIVORE_PROTEINS: &[&str] = &[
    "Chicken breast - 3 lbs",
    "Ground turkey - 1 lb",
    "Salmon - 1 lb",
    "Lean steak - 12 oz",
    "Tuna (canned) - 3 cans",
    "Eggs - 12",
    "Greek yogurt - 32 oz",
];
pub const WEEKLY_PANTRY: &[&str] = &[
    "Brown rice - 3 cups dry",
    "Quinoa - 2 cups dry",
    "Oats - 3 cups",
    "Whole grain bread - 1 loaf",
    "Whole grain wraps - 4",
    "Olive oil - 1 bottle",
    "Almond butter - 1 jar",
    "Honey - 1 bottle",
    "Maple syrup - 1 bottle",
    "Low-sodium soy sauce - 1 bottle",
    "Vinaigrette dressing - 1 bottle",
    "Spices (as needed)",
];
