// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::cmp::Ordering;

use super::*;

#[test]
fn default_ordering_is_newest_first() {
    let ordering = SortOrder::default();
    assert_eq!(SortField::CreatedAt, ordering.field);
    assert_eq!(SortDirection::Descending, ordering.direction);
}

#[test]
fn blank_phrase_is_ignored() {
    let params = Params {
        phrase: "  ".into(),
        ..Default::default()
    };
    assert_eq!(None, params.lowercase_phrase());
}

#[test]
fn phrase_is_lowercased_but_not_trimmed() {
    let params = Params {
        phrase: " Hobbit".into(),
        ..Default::default()
    };
    assert_eq!(Some(" hobbit".to_owned()), params.lowercase_phrase());
}

#[test]
fn empty_filter() {
    assert!(Filter::default().is_empty());
    assert!(
        !Filter {
            min_rating: Some(Rating::new(4)),
            ..Default::default()
        }
        .is_empty()
    );
}

#[test]
fn sort_direction_names() {
    assert_eq!("asc", SortDirection::Ascending.to_string());
    assert_eq!(SortDirection::Descending, "desc".parse().unwrap());
    assert_eq!("created_at", SortField::CreatedAt.to_string());
    assert_eq!(
        Ordering::Greater,
        SortDirection::Descending.apply(Ordering::Less)
    );
}

#[test]
fn deserialize_params() {
    let params: Params = serde_json::from_str(
        r#"{"phrase":"tolkien","filter":{"status":"completed"},"ordering":{"field":"title","direction":"asc"}}"#,
    )
    .unwrap();
    assert_eq!(Some(ReadingStatus::Completed), params.filter.status);
    assert_eq!(SortField::Title, params.ordering.field);
    assert_eq!(SortDirection::Ascending, params.ordering.direction);
}
