use crate::models::TrainerRecord;
use thiserror::Error;

/// Errors that can occur when querying a trainer store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Seed file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Seed deserialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Read-only collection of trainer records consumed by the matching engine
///
/// Every `find_matching_*` operation applies OR semantics across the given
/// criteria list. Ordering of returned records is store-defined but must be
/// stable within a call, because the engine deduplicates across sequential
/// tier queries. Empty criteria lists degrade: both empty behaves like
/// `find_all`, one empty behaves like the corresponding single-criterion
/// query.
pub trait TrainerStore: Send + Sync {
    /// All trainers, store order
    fn find_all(&self) -> Result<Vec<TrainerRecord>, StoreError>;

    /// Trainers matching at least one tag criterion
    fn find_matching_tags(&self, tags: &[String]) -> Result<Vec<TrainerRecord>, StoreError>;

    /// Trainers matching at least one area criterion
    fn find_matching_areas(&self, areas: &[String]) -> Result<Vec<TrainerRecord>, StoreError>;

    /// Trainers matching at least one tag AND at least one area criterion
    fn find_matching_both(
        &self,
        tags: &[String],
        areas: &[String],
    ) -> Result<Vec<TrainerRecord>, StoreError>;

    /// Full profile lookup by the owning user's nickname
    fn find_by_nickname(&self, nickname: &str) -> Result<Option<TrainerRecord>, StoreError>;

    /// Distinct specialization tags across the whole store, sorted
    fn list_tags(&self) -> Result<Vec<String>, StoreError>;

    /// Health check for the backing store
    fn health_check(&self) -> Result<bool, StoreError> {
        Ok(true)
    }
}
