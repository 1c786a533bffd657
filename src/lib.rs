//! PetTalk Match - Trainer matching service for the PetTalk pet-care platform
//!
//! This library provides the trainer matching engine used by the PetTalk
//! assistant. It implements character-level fuzzy tag matching,
//! administrative-suffix-stripped area matching, and a three-tier quota
//! allocation over a read-only trainer store.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{area_matches, tag_matches, Matcher};
pub use models::{MatchTier, SearchEntry, SearchResult, SearchTrainersRequest, SearchTrainersResponse, TrainerRecord};
pub use services::{MemoryStore, StoreError, TrainerStore};
