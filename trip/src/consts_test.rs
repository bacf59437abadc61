use super::*;

// =============================================================
// SortType
// =============================================================

#[test]
fn default_sort_type_is_day() {
    assert_eq!(SortType::default(), SortType::Day);
    assert_eq!(DEFAULT_SORT_TYPE, SortType::Day);
}

#[test]
fn sort_type_parses_supported_names() {
    assert_eq!("day".parse::<SortType>().unwrap(), SortType::Day);
    assert_eq!(" Time ".parse::<SortType>().unwrap(), SortType::Time);
    assert_eq!("PRICE".parse::<SortType>().unwrap(), SortType::Price);
}

#[test]
fn sort_type_rejects_disabled_columns() {
    for name in ["event", "offers", "", "duration"] {
        let err = name.parse::<SortType>().unwrap_err();
        assert!(matches!(err, SortError::Unsupported(_)), "{name} should be unsupported");
    }
}

#[test]
fn sort_type_display_matches_as_str() {
    for sort_type in SortType::ALL {
        assert_eq!(sort_type.to_string(), sort_type.as_str());
        assert_eq!(sort_type.as_str().parse::<SortType>().unwrap(), sort_type);
    }
}

// =============================================================
// UpdateType / UserAction
// =============================================================

#[test]
fn update_types_order_by_scope() {
    assert!(UpdateType::Patch < UpdateType::Minor);
    assert!(UpdateType::Minor < UpdateType::Major);
}

#[test]
fn update_type_serde_lowercase() {
    assert_eq!(serde_json::to_string(&UpdateType::Minor).unwrap(), "\"minor\"");
    let back: UpdateType = serde_json::from_str("\"major\"").unwrap();
    assert_eq!(back, UpdateType::Major);
}

#[test]
fn user_action_serde_snake_case() {
    assert_eq!(serde_json::to_string(&UserAction::DeletePoint).unwrap(), "\"delete_point\"");
}

// =============================================================
// FilterType
// =============================================================

#[test]
fn filter_type_messages_are_distinct() {
    let all = [FilterType::Everything, FilterType::Future, FilterType::Present, FilterType::Past];
    for (i, a) in all.iter().enumerate() {
        for b in &all[i + 1..] {
            assert_ne!(a.empty_message(), b.empty_message());
        }
    }
}

#[test]
fn filter_type_parse() {
    assert_eq!("past".parse::<FilterType>().unwrap(), FilterType::Past);
    assert_eq!(" Future ".parse::<FilterType>().unwrap(), FilterType::Future);
    assert_eq!("archive".parse::<FilterType>().unwrap_err(), FilterError::Unsupported("archive".into()));
}
