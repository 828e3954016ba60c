use serde::{Deserialize, Serialize};
use crate::models::domain::{BmiResult, RecommendedMeals};

/// Response for the recommendation endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    #[serde(rename = "BMI")]
    pub bmi: f64,
    #[serde(rename = "BMI_Category")]
    pub bmi_category: String,
    #[serde(rename = "Daily_Calorie_Target")]
    pub daily_calorie_target: String,
    #[serde(rename = "Recommended_Meals")]
    pub recommended_meals: RecommendedMeals,
}

impl RecommendResponse {
    pub fn new(classification: &BmiResult, meals: RecommendedMeals) -> Self {
        Self {
            bmi: classification.rounded_bmi(),
            bmi_category: classification.category.to_string(),
            daily_calorie_target: classification.calorie_target.to_string(),
            recommended_meals: meals,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub dataset_rows: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl ErrorResponse {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self {
            error: "Invalid input".to_string(),
            message: message.into(),
            status_code: 400,
        }
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}
