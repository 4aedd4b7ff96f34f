// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use bookshelf_core::AuditEntry;

use crate::{prelude::*, read_task};

/// Load audit entries, newest first.
pub async fn load_recent(db_gatekeeper: &Gatekeeper, limit: Option<usize>) -> Result<Vec<AuditEntry>> {
    read_task(db_gatekeeper, move |db| {
        bookshelf_usecases::audit::load_recent(db, limit)
    })
    .await
}
