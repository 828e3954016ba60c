use serde::{Deserialize, Serialize};

/// A height or weight as it arrives on the wire
///
/// JSON clients send numbers, HTML forms send strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Measurement {
    Number(f64),
    Text(String),
}

impl Measurement {
    /// Parse into a number, `None` if the text is not numeric
    pub fn value(&self) -> Option<f64> {
        match self {
            Measurement::Number(n) => Some(*n),
            Measurement::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// Request for a BMI classification and meal suggestions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub height: Option<Measurement>,
    #[serde(default)]
    pub weight: Option<Measurement>,
    #[serde(default, alias = "dietaryPreference")]
    pub dietary_preference: Option<String>,
}

impl RecommendRequest {
    pub fn height_cm(&self) -> Option<f64> {
        self.height.as_ref().and_then(Measurement::value)
    }

    pub fn weight_kg(&self) -> Option<f64> {
        self.weight.as_ref().and_then(Measurement::value)
    }

    /// Preference with the form's "No preference" (empty) mapped to `None`
    pub fn preference(&self) -> Option<&str> {
        self.dietary_preference.as_deref().filter(|p| !p.is_empty())
    }
}
