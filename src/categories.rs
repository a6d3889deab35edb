//! Coupang best-category codes and names.

/// Category id to Korean name, sorted by id.
pub const CATEGORIES: &[(&str, &str)] = &[
    ("1001", "여성패션"),
    ("1002", "남성패션"),
    ("1010", "뷰티"),
    ("1012", "식품"),
    ("1013", "주방용품"),
    ("1014", "생활용품"),
    ("1015", "홈인테리어"),
    ("1016", "가전디지털"),
    ("1017", "스포츠/레저"),
    ("1018", "자동차용품"),
    ("1019", "도서/음반/DVD"),
    ("1020", "완구/취미"),
    ("1021", "문구/오피스"),
    ("1024", "헬스/건강식품"),
    ("1025", "국내여행"),
    ("1026", "해외여행"),
    ("1029", "반려동물용품"),
    ("1030", "유아동패션"),
];

/// Look up a category name by id.
pub fn category_name(category_id: &str) -> Option<&'static str> {
    CATEGORIES
        .iter()
        .find(|(id, _)| *id == category_id)
        .map(|(_, name)| *name)
}

/// Returns true if the id is a known best-category code.
pub fn is_valid_category(category_id: &str) -> bool {
    category_name(category_id).is_some()
}

/// Formatted `id - name` listing, one category per line.
///
/// Used in the tool description shown to the model.
pub fn category_list_text() -> String {
    CATEGORIES
        .iter()
        .map(|(id, name)| format!("{} - {}", id, name))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(category_name("1001"), Some("여성패션"));
        assert_eq!(category_name("1016"), Some("가전디지털"));
        assert_eq!(category_name("9999"), None);
    }

    #[test]
    fn test_is_valid_category() {
        assert!(is_valid_category("1030"));
        assert!(!is_valid_category(""));
        assert!(!is_valid_category("1003"));
    }

    #[test]
    fn test_list_text_is_sorted_and_complete() {
        let text = category_list_text();
        assert_eq!(text.lines().count(), CATEGORIES.len());
        assert!(text.starts_with("1001 - 여성패션"));
        assert!(text.ends_with("1030 - 유아동패션"));

        let ids: Vec<&str> = text.lines().map(|l| &l[..4]).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }
}
