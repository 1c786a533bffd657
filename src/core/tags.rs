/// Normalize a tag criterion for matching
///
/// Trims surrounding whitespace and drops every character that is not a
/// letter or digit. The retained characters are the unit of matching: each
/// must occur somewhere in the trainer's tag set.
pub fn normalize_tag(tag: &str) -> Vec<char> {
    tag.trim().chars().filter(|c| c.is_alphanumeric()).collect()
}

/// Check whether one tag criterion matches a trainer's tag set
///
/// Character-wise AND: every retained character of the normalized criterion
/// must occur as a substring of at least one tag in the set. Different
/// characters may be satisfied by different tags, which is what makes a
/// compound criterion like "배변훈련" match a trainer tagged
/// {"배변", "훈련"}.
///
/// A criterion that normalizes to zero characters matches nothing.
#[inline]
pub fn tag_matches(trainer_tags: &[String], tag: &str) -> bool {
    let chars = normalize_tag(tag);
    if chars.is_empty() {
        return false;
    }

    chars
        .iter()
        .all(|c| trainer_tags.iter().any(|t| t.contains(*c)))
}

/// Check whether any criterion in a tag list matches (OR across criteria)
#[inline]
pub fn any_tag_matches(trainer_tags: &[String], tags: &[String]) -> bool {
    tags.iter().any(|tag| tag_matches(trainer_tags, tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize_drops_whitespace_and_symbols() {
        assert_eq!(normalize_tag("  분리 불안! "), vec!['분', '리', '불', '안']);
        assert_eq!(normalize_tag("dog-training"), vec!['d', 'o', 'g', 't', 'r', 'a', 'i', 'n', 'i', 'n', 'g']);
    }

    #[test]
    fn test_single_tag_exact() {
        let trainer = tags(&["분리불안"]);
        assert!(tag_matches(&trainer, "분리불안"));
    }

    #[test]
    fn test_characters_spread_across_tags() {
        // 배/변 found in "배변", 훈/련 found in "훈련"
        let trainer = tags(&["배변", "훈련"]);
        assert!(tag_matches(&trainer, "배변훈련"));
    }

    #[test]
    fn test_missing_character_fails() {
        let trainer = tags(&["배변"]);
        assert!(!tag_matches(&trainer, "배변훈련"));
    }

    #[test]
    fn test_symbols_only_criterion_matches_nothing() {
        let trainer = tags(&["분리불안"]);
        assert!(!tag_matches(&trainer, " !!! "));
        assert!(!tag_matches(&trainer, ""));
    }

    #[test]
    fn test_or_across_criteria() {
        let trainer = tags(&["고양이"]);
        let criteria = tags(&["강아지", "고양이"]);
        assert!(any_tag_matches(&trainer, &criteria));

        let criteria = tags(&["강아지", "토끼"]);
        assert!(!any_tag_matches(&trainer, &criteria));
    }
}
