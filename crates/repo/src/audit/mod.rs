// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use bookshelf_core::audit::{AuditEvent, Entry};

use crate::prelude::*;

pub trait Repo {
    /// Append a new event.
    ///
    /// The repository may discard the oldest entries when reaching
    /// its capacity.
    fn append_audit_event(&mut self, event: AuditEvent) -> RepoResult<Entry>;

    /// Load entries, newest first.
    fn load_recent_audit_entries(&self, limit: Option<usize>) -> RepoResult<Vec<Entry>>;
}
