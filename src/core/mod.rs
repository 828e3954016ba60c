// Core engine exports
pub mod bmi;
pub mod filters;
pub mod recommender;

pub use bmi::{calorie_target_of, category_of, classify, compute_bmi, preferred_clusters_of, BmiError};
pub use filters::{matches_clusters, matches_dietary_preference, unique_suggestions};
pub use recommender::{Recommendation, Recommender};
