// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use bookshelf_core::audit::{AuditEvent, Entry};
use bookshelf_repo::audit::Repo as AuditRepo;

use crate::prelude::*;

pub const RECENT_ENTRIES_LIMIT: usize = 10;

/// Receives an event for every mutation.
pub trait AuditSink {
    fn record(&mut self, event: AuditEvent) -> anyhow::Result<()>;
}

impl<T> AuditSink for T
where
    T: AuditRepo + ?Sized,
{
    fn record(&mut self, event: AuditEvent) -> anyhow::Result<()> {
        self.append_audit_event(event)
            .map(|_| ())
            .map_err(|err| anyhow::anyhow!("failed to append audit event: {err}"))
    }
}

/// Record an audit event without affecting the outcome of the
/// preceding mutation.
///
/// Failures are only logged.
pub fn record_audit_event(sink: &mut (impl AuditSink + ?Sized), event: AuditEvent) {
    let action = event.action;
    if let Err(err) = sink.record(event) {
        log::warn!("Failed to record audit event {action}: {err}");
    }
}

pub fn load_recent<Repo>(repo: &Repo, limit: Option<usize>) -> Result<Vec<Entry>>
where
    Repo: AuditRepo + ?Sized,
{
    repo.load_recent_audit_entries(limit).map_err(Into::into)
}

#[cfg(test)]
mod tests;
