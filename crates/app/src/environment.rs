// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{
    ops::Deref,
    sync::{Arc, Weak},
};

use bookshelf_backend_embedded::storage::{StorageConfig, commission_storage};
use bookshelf_storage_inmemory::gatekeeper::Gatekeeper;

#[allow(missing_debug_implementations)]
pub struct Environment {
    storage_config: StorageConfig,
    db_gatekeeper: Gatekeeper,
}

impl Environment {
    /// Set up the runtime environment.
    ///
    /// Modifying the storage configuration at runtime is not supported.
    #[must_use]
    pub fn commission(storage_config: StorageConfig) -> Self {
        log::info!("Commissioning runtime environment");
        let db_gatekeeper = commission_storage(&storage_config);
        Self {
            storage_config,
            db_gatekeeper,
        }
    }

    /// Prepare for tear down.
    ///
    /// Rejects new database requests. Pending requests could still proceed
    /// until finished.
    pub fn decommission(&self) {
        log::info!("Decommissioning runtime environment");
        self.db_gatekeeper.decommission();
    }

    #[must_use]
    pub const fn storage_config(&self) -> &StorageConfig {
        &self.storage_config
    }

    #[must_use]
    pub const fn db_gatekeeper(&self) -> &Gatekeeper {
        &self.db_gatekeeper
    }
}

/// Shared runtime environment handle
///
/// A cheaply `Clone`able and `Send`able handle to a shared runtime environment
/// for invoking operations.
#[derive(Clone)]
#[allow(missing_debug_implementations)]
pub struct Handle(Arc<Environment>);

impl Handle {
    /// Set up a shared runtime environment
    ///
    /// See also: [`Environment::commission()`]
    #[must_use]
    pub fn commission(storage_config: StorageConfig) -> Self {
        Self(Arc::new(Environment::commission(storage_config)))
    }

    #[must_use]
    pub fn downgrade(&self) -> WeakHandle {
        WeakHandle(Arc::downgrade(&self.0))
    }
}

impl AsRef<Environment> for Handle {
    fn as_ref(&self) -> &Environment {
        &self.0
    }
}

impl Deref for Handle {
    type Target = Environment;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Clone)]
#[allow(missing_debug_implementations)]
pub struct WeakHandle(Weak<Environment>);

impl WeakHandle {
    #[must_use]
    pub fn upgrade(&self) -> Option<Handle> {
        self.0.upgrade().map(Handle)
    }
}
