// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;
use crate::book::Book;

#[test]
fn action_names() {
    assert_eq!("system_settings_updated", Action::SystemSettingsUpdated.to_string());
    assert_eq!(Action::BookCreated, "book_created".parse().unwrap());
}

#[test]
fn book_event_with_snapshots() {
    let occurred_at = UtcDateTimeMs::from_unix_timestamp_millis(0);
    let after = Book {
        title: "Dune".into(),
        author: "Frank Herbert".into(),
        ..Default::default()
    };
    let event = AuditEvent::book(Action::BookCreated, BookId::new(3), occurred_at)
        .with_actor(Some(UserId::new(2)))
        .with_snapshots(None, Some(&after));
    assert_eq!(ResourceType::Book, event.resource_type);
    assert_eq!(Some(3), event.resource_id);
    assert_eq!(Some(UserId::new(2)), event.actor);
    assert!(event.before.is_none());
    assert_eq!(
        Some("Dune"),
        event
            .after
            .as_ref()
            .and_then(|after| after["title"].as_str())
    );
}

#[test]
fn serialize_entry_flat() {
    let entry = Entry {
        id: EntryId::new(1),
        event: AuditEvent::system(
            Action::SystemStartup,
            UtcDateTimeMs::from_unix_timestamp_millis(0),
        ),
    };
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(1, json["id"]);
    assert_eq!("system_startup", json["action"]);
    assert_eq!("system", json["resource_type"]);
    assert_eq!("1970-01-01T00:00:00.000Z", json["occurred_at"]);
}
