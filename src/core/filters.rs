use crate::models::{MealRecord, MealSlot};
use std::collections::HashSet;

/// Check if a record belongs to one of the given clusters
#[inline]
pub fn matches_clusters(record: &MealRecord, clusters: &[&str]) -> bool {
    match record.cluster_type.as_deref() {
        Some(cluster) => clusters.contains(&cluster),
        None => false,
    }
}

/// Check if a record's dietary tag contains the preference, ignoring case
///
/// This is a substring test, so "Veg" matches both "Vegan" and "Vegetarian".
/// Records without a tag never match.
#[inline]
pub fn matches_dietary_preference(record: &MealRecord, preference: &str) -> bool {
    match record.dietary_preference.as_deref() {
        Some(tag) if !tag.is_empty() => tag.to_lowercase().contains(&preference.to_lowercase()),
        _ => false,
    }
}

/// Collect a slot's suggestions across records, first-seen order, no duplicates
pub fn unique_suggestions<'a, I>(records: I, slot: MealSlot) -> Vec<String>
where
    I: IntoIterator<Item = &'a MealRecord>,
{
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter_map(|record| record.suggestion(slot))
        .filter(|suggestion| seen.insert(*suggestion))
        .map(str::to_string)
        .collect()
}
