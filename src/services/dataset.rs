use crate::models::MealRecord;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading the nutrition dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Immutable, in-memory nutrition dataset
///
/// Loaded once at startup and shared read-only between workers.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    rows: Vec<MealRecord>,
}

impl Dataset {
    pub fn new(rows: Vec<MealRecord>) -> Self {
        Self { rows }
    }

    /// Load a dataset from a JSON file containing an array of row objects
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let dataset = Self::from_json_slice(&bytes)?;

        tracing::info!("Loaded {} meal records from {}", dataset.len(), path.display());
        Ok(dataset)
    }

    /// Parse a dataset from JSON bytes
    ///
    /// Rows that do not deserialize into a record are skipped.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, DatasetError> {
        let values: Vec<serde_json::Value> = serde_json::from_slice(bytes)?;
        let total = values.len();

        let rows: Vec<MealRecord> = values
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value(value) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!("Skipping malformed dataset row {}: {}", index, e);
                    None
                }
            })
            .collect();

        if rows.len() < total {
            tracing::warn!("Skipped {} of {} dataset rows", total - rows.len(), total);
        }

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[MealRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
