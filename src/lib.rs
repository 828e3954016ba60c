//! BMI Meals - BMI classification and meal recommendation service
//!
//! This library classifies a height/weight pair into a BMI category and
//! suggests meals from a static nutrition dataset, filtered by the
//! category's preferred clusters and an optional dietary preference.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{classify, BmiError, Recommendation, Recommender};
pub use models::{BmiCategory, BmiResult, MealRecord, RecommendedMeals, RecommendRequest, RecommendResponse};
pub use services::{Dataset, DatasetError};
