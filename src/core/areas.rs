/// Trailing administrative-unit suffixes, checked in order
///
/// City / province / county / district / town / township / neighborhood /
/// village. Only one suffix is stripped even when several would match.
pub const ADMINISTRATIVE_UNITS: [&str; 8] = ["시", "도", "군", "구", "읍", "면", "동", "리"];

/// Normalize an area criterion for matching
///
/// Trims surrounding whitespace and strips at most one trailing
/// administrative-unit suffix, e.g. "강남구" -> "강남". A bare unit name
/// like "구" strips to the empty string and therefore matches nothing.
pub fn normalize_area(area: &str) -> &str {
    let trimmed = area.trim();

    for unit in ADMINISTRATIVE_UNITS {
        if let Some(stripped) = trimmed.strip_suffix(unit) {
            return stripped;
        }
    }

    trimmed
}

/// Check whether one area criterion matches a trainer's visiting-area text
///
/// The stripped form must be non-empty and occur as a substring of the
/// trainer's free-text area field.
#[inline]
pub fn area_matches(trainer_area_text: &str, area: &str) -> bool {
    let normalized = normalize_area(area);
    if normalized.is_empty() {
        return false;
    }

    trainer_area_text.contains(normalized)
}

/// Check whether any criterion in an area list matches (OR across criteria)
#[inline]
pub fn any_area_matches(trainer_area_text: &str, areas: &[String]) -> bool {
    areas.iter().any(|area| area_matches(trainer_area_text, area))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_single_suffix() {
        assert_eq!(normalize_area("강남구"), "강남");
        assert_eq!(normalize_area("경기도"), "경기");
        assert_eq!(normalize_area(" 서울시 "), "서울");
    }

    #[test]
    fn test_strips_at_most_one_suffix() {
        // Ends in "동리"; only the trailing "리" goes
        assert_eq!(normalize_area("상동리"), "상동");
    }

    #[test]
    fn test_no_suffix_left_unchanged() {
        assert_eq!(normalize_area("서울"), "서울");
        assert_eq!(normalize_area("강남"), "강남");
    }

    #[test]
    fn test_district_matches_area_text() {
        assert!(area_matches("서울 강남, 서초", "강남구"));
        assert!(!area_matches("강원도", "강남구"));
    }

    #[test]
    fn test_bare_unit_matches_nothing() {
        assert!(!area_matches("서울 강남구", "구"));
        assert!(!area_matches("서울 강남구", "  "));
    }

    #[test]
    fn test_or_across_criteria() {
        let criteria = vec!["용산구".to_string(), "강남구".to_string()];
        assert!(any_area_matches("서울 강남", &criteria));
        assert!(!any_area_matches("부산 해운대", &criteria));
    }
}
