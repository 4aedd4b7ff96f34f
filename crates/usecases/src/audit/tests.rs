// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use bookshelf_core::audit::Action;
use bookshelf_storage_inmemory::Database;

use super::*;

struct FailingSink;

impl AuditSink for FailingSink {
    fn record(&mut self, _event: AuditEvent) -> anyhow::Result<()> {
        anyhow::bail!("unavailable")
    }
}

#[test]
fn failures_are_swallowed() {
    record_audit_event(
        &mut FailingSink,
        AuditEvent::system(Action::SystemStartup, UtcDateTimeMs::now()),
    );
}

#[test]
fn repository_is_a_sink() {
    let mut db = Database::default();
    record_audit_event(
        &mut db,
        AuditEvent::system(Action::SystemStartup, UtcDateTimeMs::now()),
    );
    let entries = load_recent(&db, None).unwrap();
    assert_eq!(1, entries.len());
    assert_eq!(Action::SystemStartup, entries[0].event.action);
}
