use crate::core::{any_area_matches, any_tag_matches};
use crate::models::TrainerRecord;
use crate::services::store::{StoreError, TrainerStore};
use std::collections::BTreeSet;
use std::path::Path;

/// In-memory trainer store
///
/// Evaluates the matching predicates by post-filtering its record list.
/// Insertion order is the store order, which keeps results stable across
/// the engine's sequential tier queries.
pub struct MemoryStore {
    trainers: Vec<TrainerRecord>,
}

impl MemoryStore {
    pub fn new(trainers: Vec<TrainerRecord>) -> Self {
        Self { trainers }
    }

    /// Load a store from a JSON seed file containing an array of records
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let trainers: Vec<TrainerRecord> = serde_json::from_str(&contents)?;

        tracing::info!(
            "Loaded {} trainer records from {}",
            trainers.len(),
            path.as_ref().display()
        );

        Ok(Self::new(trainers))
    }

    pub fn len(&self) -> usize {
        self.trainers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trainers.is_empty()
    }

    fn filtered<F>(&self, predicate: F) -> Vec<TrainerRecord>
    where
        F: Fn(&TrainerRecord) -> bool,
    {
        self.trainers
            .iter()
            .filter(|t| predicate(t))
            .cloned()
            .collect()
    }
}

impl TrainerStore for MemoryStore {
    fn find_all(&self) -> Result<Vec<TrainerRecord>, StoreError> {
        Ok(self.trainers.clone())
    }

    fn find_matching_tags(&self, tags: &[String]) -> Result<Vec<TrainerRecord>, StoreError> {
        if tags.is_empty() {
            return self.find_all();
        }

        Ok(self.filtered(|t| any_tag_matches(&t.tags, tags)))
    }

    fn find_matching_areas(&self, areas: &[String]) -> Result<Vec<TrainerRecord>, StoreError> {
        if areas.is_empty() {
            return self.find_all();
        }

        Ok(self.filtered(|t| any_area_matches(&t.visiting_areas, areas)))
    }

    fn find_matching_both(
        &self,
        tags: &[String],
        areas: &[String],
    ) -> Result<Vec<TrainerRecord>, StoreError> {
        // Degrade to the single-criterion query when one list is empty
        if tags.is_empty() {
            return self.find_matching_areas(areas);
        }
        if areas.is_empty() {
            return self.find_matching_tags(tags);
        }

        Ok(self.filtered(|t| {
            any_tag_matches(&t.tags, tags) && any_area_matches(&t.visiting_areas, areas)
        }))
    }

    fn find_by_nickname(&self, nickname: &str) -> Result<Option<TrainerRecord>, StoreError> {
        Ok(self
            .trainers
            .iter()
            .find(|t| t.nickname == nickname)
            .cloned())
    }

    fn list_tags(&self) -> Result<Vec<String>, StoreError> {
        let tags: BTreeSet<String> = self
            .trainers
            .iter()
            .flat_map(|t| t.tags.iter().cloned())
            .collect();

        Ok(tags.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn trainer(nickname: &str, tags: &[&str], areas: &str) -> TrainerRecord {
        TrainerRecord {
            trainer_id: Uuid::new_v4(),
            nickname: nickname.to_string(),
            title: None,
            introduction: None,
            representative_career: None,
            tags: tags.iter().map(|s| s.to_string()).collect(),
            visiting_areas: areas.to_string(),
            experience_years: 3,
            profile_image_url: None,
            created_at: None,
        }
    }

    fn store() -> MemoryStore {
        MemoryStore::new(vec![
            trainer("kim", &["분리불안"], "서울 강남"),
            trainer("lee", &["배변훈련"], "부산 해운대"),
            trainer("park", &["분리불안", "배변훈련"], "서울 종로"),
        ])
    }

    #[test]
    fn test_find_matching_tags_or_semantics() {
        let store = store();
        let result = store
            .find_matching_tags(&["분리불안".to_string()])
            .unwrap();
        let names: Vec<&str> = result.iter().map(|t| t.nickname.as_str()).collect();
        assert_eq!(names, vec!["kim", "park"]);
    }

    #[test]
    fn test_find_matching_areas_strips_suffix() {
        let store = store();
        let result = store
            .find_matching_areas(&["강남구".to_string()])
            .unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].nickname, "kim");
    }

    #[test]
    fn test_find_matching_both_requires_both() {
        let store = store();
        let result = store
            .find_matching_both(&["분리불안".to_string()], &["서울".to_string()])
            .unwrap();
        let names: Vec<&str> = result.iter().map(|t| t.nickname.as_str()).collect();
        assert_eq!(names, vec!["kim", "park"]);
    }

    #[test]
    fn test_empty_lists_degrade_to_find_all() {
        let store = store();
        assert_eq!(store.find_matching_tags(&[]).unwrap().len(), 3);
        assert_eq!(store.find_matching_areas(&[]).unwrap().len(), 3);
        assert_eq!(store.find_matching_both(&[], &[]).unwrap().len(), 3);
    }

    #[test]
    fn test_find_by_nickname() {
        let store = store();
        assert!(store.find_by_nickname("lee").unwrap().is_some());
        assert!(store.find_by_nickname("unknown").unwrap().is_none());
    }

    #[test]
    fn test_list_tags_distinct_sorted() {
        let store = store();
        let tags = store.list_tags().unwrap();
        assert_eq!(tags, vec!["배변훈련".to_string(), "분리불안".to_string()]);
    }
}
