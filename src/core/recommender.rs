use crate::core::{
    bmi::preferred_clusters_of,
    filters::{matches_clusters, matches_dietary_preference, unique_suggestions},
};
use crate::models::{BmiCategory, MealRecord, MealSlot, RecommendedMeals};
use crate::services::Dataset;
use std::sync::Arc;

/// Result of a recommendation pass
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub meals: RecommendedMeals,
    /// Rows that survived the cluster and preference filters
    pub matched_rows: usize,
    /// Whether the filters matched nothing and the whole dataset was used
    pub fallback: bool,
}

/// Meal recommendation orchestrator
///
/// # Pipeline Stages
/// 1. Cluster filter by the category's preferred clusters
/// 2. Dietary preference filter (case-insensitive substring)
/// 3. Per-slot collection with deduplication
/// 4. Fallback to the full dataset when every slot is empty
#[derive(Debug, Clone)]
pub struct Recommender {
    dataset: Arc<Dataset>,
}

impl Recommender {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Recommend meals for a BMI category and optional dietary preference
    ///
    /// An empty preference is treated as no preference. Lists are returned in
    /// full; truncation for display is left to the caller.
    pub fn recommend(&self, category: BmiCategory, dietary_preference: Option<&str>) -> Recommendation {
        let clusters = preferred_clusters_of(category);
        let preference = dietary_preference.filter(|p| !p.is_empty());

        let candidates: Vec<&MealRecord> = self
            .dataset
            .rows()
            .iter()
            // Stage 1: cluster filter
            .filter(|record| matches_clusters(record, clusters))
            // Stage 2: dietary preference filter
            .filter(|record| preference.map_or(true, |p| matches_dietary_preference(record, p)))
            .collect();

        let matched_rows = candidates.len();
        let meals = collect_meals(candidates);

        if !meals.is_empty() {
            tracing::debug!(
                "Recommended from {} rows for {} (preference: {:?})",
                matched_rows,
                category,
                preference
            );
            return Recommendation {
                meals,
                matched_rows,
                fallback: false,
            };
        }

        tracing::debug!(
            "No suggestions for {} (preference: {:?}), falling back to full dataset",
            category,
            preference
        );

        Recommendation {
            meals: self.all_meals(),
            matched_rows,
            fallback: true,
        }
    }

    /// Deduplicated suggestions from the whole dataset, with no filtering
    pub fn all_meals(&self) -> RecommendedMeals {
        collect_meals(self.dataset.rows())
    }
}

/// Build all four slot lists from the same set of records
fn collect_meals<'a, I>(records: I) -> RecommendedMeals
where
    I: IntoIterator<Item = &'a MealRecord>,
    I::IntoIter: Clone,
{
    let records = records.into_iter();
    let [breakfast, lunch, dinner, snacks] =
        MealSlot::ALL.map(|slot| unique_suggestions(records.clone(), slot));

    RecommendedMeals {
        breakfast,
        lunch,
        dinner,
        snacks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_record(cluster: &str, diet: &str, meal: &str) -> MealRecord {
        MealRecord {
            cluster_type: Some(cluster.to_string()),
            dietary_preference: Some(diet.to_string()),
            breakfast: Some(format!("{} breakfast", meal)),
            lunch: Some(format!("{} lunch", meal)),
            dinner: Some(format!("{} dinner", meal)),
            snack: Some(format!("{} snack", meal)),
        }
    }

    fn create_recommender() -> Recommender {
        let rows = vec![
            create_record("Low Calorie", "Vegan", "Salad"),
            create_record("Low Calorie", "Omnivore", "Chicken"),
            create_record("High Protein", "Vegetarian", "Paneer"),
            create_record("Energy Dense", "Omnivore", "Steak"),
            create_record("Low Calorie", "Vegan", "Salad"),
        ];
        Recommender::new(Arc::new(Dataset::new(rows)))
    }

    #[test]
    fn test_recommend_by_cluster() {
        let recommender = create_recommender();

        let result = recommender.recommend(BmiCategory::Obese, None);

        assert!(!result.fallback);
        assert_eq!(result.matched_rows, 3);
        assert_eq!(result.meals.breakfast, vec!["Salad breakfast", "Chicken breakfast"]);
        assert_eq!(result.meals.snacks, vec!["Salad snack", "Chicken snack"]);
    }

    #[test]
    fn test_recommend_with_preference() {
        let recommender = create_recommender();

        let result = recommender.recommend(BmiCategory::Overweight, Some("veg"));

        assert!(!result.fallback);
        assert_eq!(
            result.meals.lunch,
            vec!["Salad lunch", "Paneer lunch"]
        );
    }

    #[test]
    fn test_empty_preference_is_ignored() {
        let recommender = create_recommender();

        assert_eq!(
            recommender.recommend(BmiCategory::Obese, Some("")),
            recommender.recommend(BmiCategory::Obese, None)
        );
    }

    #[test]
    fn test_fallback_when_preference_matches_nothing() {
        let recommender = create_recommender();

        let result = recommender.recommend(BmiCategory::Underweight, Some("Vegan"));

        assert!(result.fallback);
        assert_eq!(result.matched_rows, 0);
        assert_eq!(result.meals, recommender.all_meals());
        assert_eq!(result.meals.dinner.len(), 4);
    }

    #[test]
    fn test_empty_dataset_returns_empty_meals() {
        let recommender = Recommender::new(Arc::new(Dataset::default()));

        let result = recommender.recommend(BmiCategory::Normal, None);

        assert!(result.fallback);
        assert!(result.meals.is_empty());
    }
}
