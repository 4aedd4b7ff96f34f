// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use bookshelf_core::settings::ThemeMode;
use bookshelf_repo::audit::Repo as _;
use bookshelf_storage_inmemory::Database;

use super::*;

fn now() -> UtcDateTimeMs {
    UtcDateTimeMs::from_unix_timestamp_millis(1_700_000_000_000)
}

#[test]
fn load_defaults() {
    let db = Database::default();
    assert_eq!(SystemSettings::default(), load(&db).unwrap());
}

#[test]
fn update_records_snapshots() {
    let mut db = Database::default();
    let new_settings = SystemSettings {
        app_name: " My Shelf ".into(),
        theme_mode: ThemeMode::Dark,
        ..Default::default()
    };
    let stored = update(&mut db, Some(UserId::new(1)), new_settings, now()).unwrap();
    assert_eq!("My Shelf", stored.app_name);
    assert_eq!(stored, load(&db).unwrap());

    let entries = db.load_recent_audit_entries(None).unwrap();
    assert_eq!(1, entries.len());
    let event = &entries[0].event;
    assert_eq!(Action::SystemSettingsUpdated, event.action);
    assert_eq!(Some(UserId::new(1)), event.actor);
    assert_eq!(
        Some(&serde_json::json!("Books Library")),
        event.before.as_ref().and_then(|before| before.get("app_name"))
    );
    assert_eq!(
        Some(&serde_json::json!("My Shelf")),
        event.after.as_ref().and_then(|after| after.get("app_name"))
    );
}

#[test]
fn reject_invalid_settings() {
    let mut db = Database::default();
    let err = update(
        &mut db,
        None,
        SystemSettings {
            max_books_per_user: 0,
            ..Default::default()
        },
        now(),
    )
    .unwrap_err();
    assert!(err.is_input());
    assert_eq!(SystemSettings::default(), load(&db).unwrap());
    assert!(db.load_recent_audit_entries(None).unwrap().is_empty());
}
