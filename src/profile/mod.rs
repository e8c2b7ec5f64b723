use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::errors::BlueprintError;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lbs,
}

impl WeightUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lbs => "lbs",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kgs" => Some(WeightUnit::Kg),
            "lb" | "lbs" => Some(WeightUnit::Lbs),
            _ => None,
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declares a closed vocabulary whose serialized form is the user-facing label.
macro_rules! labelled_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $label)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            pub fn from_label(s: &str) -> Option<Self> {
                let s = s.trim();
                Self::ALL.iter().copied().find(|v| v.label().eq_ignore_ascii_case(s))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

labelled_enum!(TrainingMethod {
    Bodyweight => "Bodyweight/Calisthenics",
    FreeWeights => "Free Weights",
    MachineBased => "Machine-based Gym",
    Hiit => "HIIT/Cardio only",
    Yoga => "Yoga/Pilates",
    Hybrid => "Hybrid",
});

labelled_enum!(Equipment {
    NoEquipment => "None (bodyweight only)",
    DumbbellsAndBands => "Dumbbells & Resistance Bands",
    FullGym => "Full Gym Access",
    HomeCardio => "Home Cardio Equipment (treadmill, bike)",
});

labelled_enum!(DietPreference {
    Vegetarian => "Vegetarian",
    Vegan => "Vegan",
    Pescatarian => "Pescatarian",
    Omnivore => "Omnivore",
    GlutenFree => "Gluten-Free",
    DairyFree => "Dairy-Free",
    Keto => "Keto",
    LowCarb => "Low-Carb",
    NoRedMeat => "No Red Meat",
    IntermittentFasting => "Intermittent Fasting",
});

/// Answers collected so far. Every field may be empty or malformed;
/// validity is only ever queried, never enforced on write.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileDraft {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub current_weight: String,
    pub weight_unit: WeightUnit,
    pub goal_weight: String,
    pub training_method: Option<TrainingMethod>,
    pub equipment: Option<Equipment>,
    /// Insertion-ordered; never holds duplicates.
    #[serde(deserialize_with = "unique_preferences")]
    pub diet_preferences: Vec<DietPreference>,
}

fn unique_preferences<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<DietPreference>, D::Error> {
    let raw = Vec::<DietPreference>::deserialize(d)?;
    let mut out = Vec::with_capacity(raw.len());
    for p in raw {
        if !out.contains(&p) {
            out.push(p);
        }
    }
    Ok(out)
}

impl ProfileDraft {
    pub fn toggle_diet_preference(mut self, pref: DietPreference) -> Self {
        if let Some(pos) = self.diet_preferences.iter().position(|p| *p == pref) {
            self.diet_preferences.remove(pos);
        } else {
            self.diet_preferences.push(pref);
        }
        self
    }

    pub fn name_is_valid(&self) -> bool {
        !self.full_name.trim().is_empty()
    }

    pub fn email_is_valid(&self) -> bool {
        EMAIL_RE.is_match(&self.email)
    }

    pub fn phone_is_valid(&self) -> bool {
        !self.phone.trim().is_empty()
    }

    pub fn current_weight_value(&self) -> Option<f64> {
        parse_weight(&self.current_weight)
    }

    pub fn goal_weight_value(&self) -> Option<f64> {
        parse_weight(&self.goal_weight)
    }

    pub fn diet_summary(&self) -> String {
        self.diet_preferences
            .iter()
            .map(|p| p.label())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Freeze the draft into a profile the generator accepts.
    pub fn complete(&self) -> Result<UserProfile, BlueprintError> {
        if !self.name_is_valid() {
            return Err(BlueprintError::validation("fullName", "name must not be empty"));
        }
        if !self.email_is_valid() {
            return Err(BlueprintError::validation("email", format!("'{}' is not an email address", self.email)));
        }
        if !self.phone_is_valid() {
            return Err(BlueprintError::validation("phone", "phone must not be empty"));
        }
        let current_weight = self.current_weight_value().ok_or_else(|| {
            BlueprintError::validation("weight", format!("'{}' is not a positive number", self.current_weight))
        })?;
        let goal_weight = self.goal_weight_value().ok_or_else(|| {
            BlueprintError::validation("goalWeight", format!("'{}' is not a positive number", self.goal_weight))
        })?;
        let training_method = self
            .training_method
            .ok_or_else(|| BlueprintError::validation("trainingMethod", "no training method selected"))?;
        let equipment = self
            .equipment
            .ok_or_else(|| BlueprintError::validation("equipment", "no equipment option selected"))?;
        if self.diet_preferences.is_empty() {
            return Err(BlueprintError::validation("dietPreferences", "select at least one preference"));
        }

        Ok(UserProfile {
            full_name: self.full_name.trim().to_string(),
            email: self.email.clone(),
            phone: self.phone.trim().to_string(),
            current_weight,
            goal_weight,
            weight_unit: self.weight_unit,
            training_method,
            equipment,
            diet_preferences: self.diet_preferences.clone(),
        })
    }
}

/// Blank and whitespace-only input is rejected, mirroring a number field
/// that treats empty as "no value".
fn parse_weight(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok().filter(|w| w.is_finite() && *w > 0.0)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub current_weight: f64,
    pub goal_weight: f64,
    pub weight_unit: WeightUnit,
    pub training_method: TrainingMethod,
    pub equipment: Equipment,
    pub diet_preferences: Vec<DietPreference>,
}

impl UserProfile {
    /// Plain magnitude comparison; kg and lbs are not reconciled.
    pub fn is_weight_loss(&self) -> bool {
        self.current_weight > self.goal_weight
    }

    pub fn prefers(&self, pref: DietPreference) -> bool {
        self.diet_preferences.contains(&pref)
    }
}

#[cfg(test)]
pub(crate) fn alex_draft() -> ProfileDraft {
    ProfileDraft {
        full_name: "Alex".into(),
        email: "a@b.com".into(),
        phone: "555".into(),
        current_weight: "80".into(),
        weight_unit: WeightUnit::Kg,
        goal_weight: "70".into(),
        training_method: Some(TrainingMethod::Bodyweight),
        equipment: Some(Equipment::NoEquipment),
        diet_preferences: vec![DietPreference::Vegan],
    }
}
