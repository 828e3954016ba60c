// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{cluster, BmiCategory, BmiResult, MealRecord, MealSlot, RecommendedMeals, DIETARY_OPTIONS};
pub use requests::{Measurement, RecommendRequest};
pub use responses::{ErrorResponse, HealthResponse, RecommendResponse};
