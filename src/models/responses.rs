use crate::models::domain::SearchEntry;
use serde::{Deserialize, Serialize};

/// Response for the trainer search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTrainersResponse {
    pub matches: Vec<SearchEntry>,
    pub found: bool,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
}

/// Response for the tag listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagListResponse {
    pub tags: Vec<String>,
    pub count: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
