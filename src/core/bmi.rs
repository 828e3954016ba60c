use crate::models::{cluster, BmiCategory, BmiResult};
use thiserror::Error;

/// Errors raised while classifying a height/weight pair
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BmiError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Compute BMI from height in centimetres and weight in kilograms
///
/// Both values must be finite and strictly positive.
pub fn compute_bmi(height_cm: f64, weight_kg: f64) -> Result<f64, BmiError> {
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(BmiError::InvalidInput(format!(
            "height must be a positive number, got {}",
            height_cm
        )));
    }
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(BmiError::InvalidInput(format!(
            "weight must be a positive number, got {}",
            weight_kg
        )));
    }

    let height_m = height_cm / 100.0;
    Ok(weight_kg / (height_m * height_m))
}

/// Map a BMI to its category; lower bounds are inclusive
#[inline]
pub fn category_of(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Daily calorie target for a category
pub fn calorie_target_of(category: BmiCategory) -> &'static str {
    match category {
        BmiCategory::Underweight => "2800–3000 kcal/day",
        BmiCategory::Normal => "2000–2200 kcal/day",
        BmiCategory::Overweight => "1600–1800 kcal/day",
        BmiCategory::Obese => "1200–1500 kcal/day",
    }
}

/// Dataset cluster tags suited to a category
pub fn preferred_clusters_of(category: BmiCategory) -> &'static [&'static str] {
    match category {
        BmiCategory::Underweight => &[cluster::ENERGY_DENSE, cluster::HIGH_CARB],
        BmiCategory::Normal => &[cluster::HIGH_PROTEIN, cluster::HIGH_CARB],
        BmiCategory::Overweight => &[cluster::LOW_CALORIE, cluster::HIGH_PROTEIN],
        BmiCategory::Obese => &[cluster::LOW_CALORIE],
    }
}

/// Full classification: BMI, category and calorie target
pub fn classify(height_cm: f64, weight_kg: f64) -> Result<BmiResult, BmiError> {
    let bmi = compute_bmi(height_cm, weight_kg)?;
    let category = category_of(bmi);

    Ok(BmiResult {
        bmi,
        category,
        calorie_target: calorie_target_of(category),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_bmi() {
        let bmi = compute_bmi(170.0, 95.0).unwrap();
        assert!((bmi - 32.8719).abs() < 0.001);
    }

    #[test]
    fn test_rejects_non_positive_height() {
        assert!(matches!(compute_bmi(0.0, 70.0), Err(BmiError::InvalidInput(_))));
        assert!(matches!(compute_bmi(-170.0, 70.0), Err(BmiError::InvalidInput(_))));
    }

    #[test]
    fn test_rejects_bad_weight() {
        assert!(compute_bmi(170.0, 0.0).is_err());
        assert!(compute_bmi(170.0, f64::NAN).is_err());
        assert!(compute_bmi(f64::INFINITY, 70.0).is_err());
    }

    #[test]
    fn test_category_boundaries() {
        assert_eq!(category_of(18.49), BmiCategory::Underweight);
        assert_eq!(category_of(18.5), BmiCategory::Normal);
        assert_eq!(category_of(24.99), BmiCategory::Normal);
        assert_eq!(category_of(25.0), BmiCategory::Overweight);
        assert_eq!(category_of(29.99), BmiCategory::Overweight);
        assert_eq!(category_of(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_preferred_clusters() {
        assert_eq!(preferred_clusters_of(BmiCategory::Obese), &["Low Calorie"]);
        assert!(preferred_clusters_of(BmiCategory::Underweight).contains(&"Energy Dense"));
        assert!(preferred_clusters_of(BmiCategory::Normal).contains(&"High Protein"));
    }

    #[test]
    fn test_classify_obese() {
        let result = classify(170.0, 95.0).unwrap();
        assert_eq!(result.category, BmiCategory::Obese);
        assert_eq!(result.rounded_bmi(), 32.87);
        assert_eq!(result.calorie_target, "1200–1500 kcal/day");
    }
}
