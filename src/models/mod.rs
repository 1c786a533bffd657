// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{MatchTier, SearchEntry, SearchResult, TrainerRecord};
pub use requests::SearchTrainersRequest;
pub use responses::{ErrorResponse, HealthResponse, SearchTrainersResponse, TagListResponse};
