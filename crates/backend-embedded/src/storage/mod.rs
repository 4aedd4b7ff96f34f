// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use bookshelf_core::{AuditEvent, audit::Action};
use bookshelf_storage_inmemory::{
    Database,
    database::Config as DatabaseConfig,
    gatekeeper::{Config as GatekeeperConfig, Gatekeeper},
};
use bookshelf_usecases::audit::record_audit_event;

use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StorageConfig {
    pub database: DatabaseConfig,
    pub gatekeeper: GatekeeperConfig,
}

/// Create an empty database behind a new gatekeeper.
///
/// The startup is recorded as the first audit event.
#[must_use]
pub fn commission_storage(config: &StorageConfig) -> Gatekeeper {
    let StorageConfig {
        database,
        gatekeeper,
    } = *config;
    log::info!(
        "Creating in-memory database with an audit log capacity of {}",
        database.audit_log_capacity
    );
    let mut database = Database::new(database);
    record_audit_event(
        &mut database,
        AuditEvent::system(Action::SystemStartup, UtcDateTimeMs::now()),
    );
    Gatekeeper::new(database, gatekeeper)
}
