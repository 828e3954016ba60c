// Unit tests for BMI Meals

use bmi_meals::core::{
    bmi::{calorie_target_of, category_of, classify, compute_bmi, preferred_clusters_of},
    filters::matches_dietary_preference,
    Recommender,
};
use bmi_meals::models::{BmiCategory, MealRecord};
use bmi_meals::services::Dataset;
use std::collections::HashSet;
use std::sync::Arc;

fn create_record(cluster: &str, diet: Option<&str>, prefix: &str) -> MealRecord {
    MealRecord {
        cluster_type: Some(cluster.to_string()),
        dietary_preference: diet.map(str::to_string),
        breakfast: Some(format!("{} oats", prefix)),
        lunch: Some(format!("{} bowl", prefix)),
        dinner: Some(format!("{} stew", prefix)),
        snack: Some(format!("{} nuts", prefix)),
    }
}

fn create_dataset() -> Arc<Dataset> {
    Arc::new(Dataset::new(vec![
        create_record("Low Calorie", Some("Vegan"), "Green"),
        create_record("Low Calorie", Some("Omnivore"), "Lean"),
        create_record("Low Calorie", Some("Vegan"), "Green"),
        create_record("High Protein", Some("Vegetarian"), "Tofu"),
        create_record("High Protein", Some("Pescatarian"), "Salmon"),
        create_record("High Carb", Some("Omnivore"), "Rice"),
        create_record("Energy Dense", None, "Butter"),
        MealRecord {
            cluster_type: Some("High Carb".to_string()),
            dietary_preference: Some("Vegetarian".to_string()),
            breakfast: Some("Rice oats".to_string()),
            ..Default::default()
        },
    ]))
}

#[test]
fn test_worked_example_obese() {
    let result = classify(170.0, 95.0).unwrap();

    assert_eq!(result.rounded_bmi(), 32.87);
    assert_eq!(result.category, BmiCategory::Obese);
    assert_eq!(result.calorie_target, "1200–1500 kcal/day");
    assert_eq!(preferred_clusters_of(result.category), &["Low Calorie"]);
}

#[test]
fn test_worked_example_normal() {
    let result = classify(160.0, 50.0).unwrap();

    assert_eq!(result.rounded_bmi(), 19.53);
    assert_eq!(result.category, BmiCategory::Normal);
    assert_eq!(result.calorie_target, "2000–2200 kcal/day");
}

#[test]
fn test_exact_boundaries() {
    // 2 m tall keeps the arithmetic exact
    assert_eq!(compute_bmi(200.0, 100.0).unwrap(), 25.0);
    assert_eq!(classify(200.0, 100.0).unwrap().category, BmiCategory::Overweight);

    assert_eq!(compute_bmi(200.0, 74.0).unwrap(), 18.5);
    assert_eq!(classify(200.0, 74.0).unwrap().category, BmiCategory::Normal);

    assert_eq!(classify(200.0, 120.0).unwrap().category, BmiCategory::Obese);
}

#[test]
fn test_category_monotonic_in_weight() {
    for height in [150.0, 165.5, 183.0, 201.0] {
        let mut previous = BmiCategory::Underweight;
        for weight in (30..=200).map(|w| w as f64) {
            let category = classify(height, weight).unwrap().category;
            assert!(category >= previous, "category dropped at {}cm {}kg", height, weight);
            previous = category;
        }
    }
}

#[test]
fn test_category_total() {
    for bmi in [-5.0, 0.0, 10.0, 18.5, 22.0, 25.0, 29.999, 30.0, 1e9] {
        assert!(BmiCategory::ALL.contains(&category_of(bmi)));
    }
}

#[test]
fn test_calorie_targets_distinct() {
    let targets: HashSet<&str> = BmiCategory::ALL.iter().map(|c| calorie_target_of(*c)).collect();
    assert_eq!(targets.len(), 4);
}

#[test]
fn test_invalid_measurements_rejected() {
    assert!(classify(0.0, 70.0).is_err());
    assert!(classify(-1.0, 70.0).is_err());
    assert!(classify(170.0, -70.0).is_err());
    assert!(classify(f64::NAN, 70.0).is_err());
}

#[test]
fn test_substring_law() {
    let vegan = create_record("Low Calorie", Some("Vegan"), "a");
    let vegetarian = create_record("Low Calorie", Some("Vegetarian"), "b");
    let untagged = create_record("Low Calorie", None, "c");

    assert!(matches_dietary_preference(&vegan, "Veg"));
    assert!(matches_dietary_preference(&vegetarian, "Veg"));
    assert!(matches_dietary_preference(&vegetarian, "TARIAN"));
    assert!(!matches_dietary_preference(&vegan, "Vegetarian"));
    assert!(!matches_dietary_preference(&untagged, "Veg"));
}

#[test]
fn test_veg_matches_vegan_and_vegetarian_rows() {
    let recommender = Recommender::new(create_dataset());

    let result = recommender.recommend(BmiCategory::Overweight, Some("Veg"));

    assert!(!result.fallback);
    assert_eq!(result.meals.breakfast, vec!["Green oats", "Tofu oats"]);
}

#[test]
fn test_recommend_obese_without_preference() {
    let recommender = Recommender::new(create_dataset());

    let result = recommender.recommend(BmiCategory::Obese, None);

    assert_eq!(result.matched_rows, 3);
    assert_eq!(result.meals.breakfast, vec!["Green oats", "Lean oats"]);
    assert_eq!(result.meals.dinner, vec!["Green stew", "Lean stew"]);
}

#[test]
fn test_absent_slot_values_contribute_nothing() {
    let recommender = Recommender::new(create_dataset());

    let result = recommender.recommend(BmiCategory::Underweight, Some("Vegetarian"));

    assert!(!result.fallback);
    assert_eq!(result.meals.breakfast, vec!["Rice oats"]);
    assert!(result.meals.lunch.is_empty());
    assert!(result.meals.snacks.is_empty());
}

#[test]
fn test_fallback_law() {
    let recommender = Recommender::new(create_dataset());
    let unfiltered = recommender.all_meals();

    let no_preference_match = recommender.recommend(BmiCategory::Underweight, Some("Vegan"));
    assert!(no_preference_match.fallback);
    assert_eq!(no_preference_match.meals, unfiltered);

    let unknown = recommender.recommend(BmiCategory::Obese, Some("Keto"));
    assert!(unknown.fallback);
    assert_eq!(unknown.meals, unfiltered);

    assert_eq!(
        unfiltered.breakfast,
        vec!["Green oats", "Lean oats", "Tofu oats", "Salmon oats", "Rice oats", "Butter oats"]
    );
}

#[test]
fn test_no_cluster_rows_falls_back() {
    let dataset = Arc::new(Dataset::new(vec![create_record("Mystery", Some("Vegan"), "Odd")]));
    let recommender = Recommender::new(dataset);

    let result = recommender.recommend(BmiCategory::Normal, None);

    assert!(result.fallback);
    assert_eq!(result.meals.lunch, vec!["Odd bowl"]);
}

#[test]
fn test_recommend_idempotent() {
    let recommender = Recommender::new(create_dataset());

    for category in BmiCategory::ALL {
        for preference in [None, Some("Veg"), Some("Omnivore"), Some("Keto")] {
            assert_eq!(
                recommender.recommend(category, preference),
                recommender.recommend(category, preference)
            );
        }
    }
}

#[test]
fn test_no_duplicates_in_any_slot() {
    let recommender = Recommender::new(create_dataset());

    for category in BmiCategory::ALL {
        for preference in [None, Some("Veg"), Some("Vegan")] {
            let result = recommender.recommend(category, preference);
            for (slot, items) in result.meals.slots() {
                let unique: HashSet<&String> = items.iter().collect();
                assert_eq!(unique.len(), items.len(), "duplicate in {} for {}", slot, category);
            }
        }
    }
}
