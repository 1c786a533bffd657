use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to search trainers by tags and areas
///
/// Both lists may be empty: an empty list means "no constraint", not
/// "match nothing". The caller is responsible for expanding broad region
/// names (e.g. "서울") into district names before calling.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchTrainersRequest {
    #[validate(length(max = 20))]
    #[serde(default)]
    pub tags: Vec<String>,
    #[validate(length(max = 20))]
    #[serde(default)]
    pub areas: Vec<String>,
}

/// Health check request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthRequest;
