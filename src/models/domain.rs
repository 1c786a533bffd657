use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trainer profile as stored by the platform
///
/// The matching engine only reads `tags` and `visiting_areas`; the remaining
/// fields travel with the record so the detail endpoint can serve a full
/// profile without a second lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerRecord {
    #[serde(rename = "trainerId")]
    pub trainer_id: Uuid,
    /// Nickname of the owning user - the stable natural key shown to clients
    pub nickname: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub introduction: Option<String>,
    #[serde(rename = "representativeCareer", default)]
    pub representative_career: Option<String>,
    /// Specialization tags, e.g. "분리불안", "배변훈련"
    #[serde(default)]
    pub tags: Vec<String>,
    /// Free-text visiting region description, e.g. "서울 강남, 서초"
    #[serde(rename = "visitingAreas", default)]
    pub visiting_areas: String,
    #[serde(rename = "experienceYears", default)]
    pub experience_years: u8,
    #[serde(rename = "profileImageUrl", default)]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Why a trainer was included in a search result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    /// Satisfied at least one tag and at least one area criterion
    Both,
    /// Satisfied tag criteria only
    Tag,
    /// Satisfied area criteria only
    Area,
}

/// One entry of a search result
///
/// `tier` is `None` only for the unconstrained listing case (no tags and
/// no areas supplied).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchEntry {
    #[serde(rename = "trainerId")]
    pub trainer_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tier: Option<MatchTier>,
}

/// Ranked, deduplicated, size-bounded outcome of one search invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub entries: Vec<SearchEntry>,
    pub found: bool,
}

impl SearchResult {
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            found: false,
        }
    }
}
