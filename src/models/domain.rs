use serde::{Deserialize, Serialize};
use std::fmt;

/// Cluster tags used by the nutrition dataset
pub mod cluster {
    pub const ENERGY_DENSE: &str = "Energy Dense";
    pub const HIGH_CARB: &str = "High Carb";
    pub const HIGH_PROTEIN: &str = "High Protein";
    pub const LOW_CALORIE: &str = "Low Calorie";
}

/// Dietary preferences offered on the form page
pub const DIETARY_OPTIONS: [&str; 4] = ["Vegan", "Vegetarian", "Omnivore", "Pescatarian"];

/// One row of the nutrition dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealRecord {
    #[serde(rename = "Cluster_Type", alias = "clusterType", default)]
    pub cluster_type: Option<String>,
    #[serde(rename = "Dietary Preference", alias = "dietaryPreference", default)]
    pub dietary_preference: Option<String>,
    #[serde(rename = "Breakfast Suggestion", alias = "breakfast", default)]
    pub breakfast: Option<String>,
    #[serde(rename = "Lunch Suggestion", alias = "lunch", default)]
    pub lunch: Option<String>,
    #[serde(rename = "Dinner Suggestion", alias = "dinner", default)]
    pub dinner: Option<String>,
    #[serde(rename = "Snack Suggestion", alias = "snack", default)]
    pub snack: Option<String>,
}

impl MealRecord {
    /// Suggestion for a slot, treating empty strings as absent
    pub fn suggestion(&self, slot: MealSlot) -> Option<&str> {
        let value = match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
            MealSlot::Snack => &self.snack,
        };
        value.as_deref().filter(|s| !s.is_empty())
    }
}

/// Meal slots a record carries suggestions for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snack,
    ];
}

/// BMI category, ordered from lowest to highest BMI
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub const ALL: [BmiCategory; 4] = [
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a height/weight pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiResult {
    /// Unrounded BMI
    pub bmi: f64,
    pub category: BmiCategory,
    pub calorie_target: &'static str,
}

impl BmiResult {
    /// BMI rounded to two decimals for display
    pub fn rounded_bmi(&self) -> f64 {
        (self.bmi * 100.0).round() / 100.0
    }
}

/// Deduplicated suggestions per meal slot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendedMeals {
    #[serde(rename = "Breakfast")]
    pub breakfast: Vec<String>,
    #[serde(rename = "Lunch")]
    pub lunch: Vec<String>,
    #[serde(rename = "Dinner")]
    pub dinner: Vec<String>,
    #[serde(rename = "Snacks")]
    pub snacks: Vec<String>,
}

impl RecommendedMeals {
    pub fn is_empty(&self) -> bool {
        self.breakfast.is_empty()
            && self.lunch.is_empty()
            && self.dinner.is_empty()
            && self.snacks.is_empty()
    }

    /// Slots in display order, labelled as in the response body
    pub fn slots(&self) -> [(&'static str, &[String]); 4] {
        [
            ("Breakfast", &self.breakfast),
            ("Lunch", &self.lunch),
            ("Dinner", &self.dinner),
            ("Snacks", &self.snacks),
        ]
    }
}
