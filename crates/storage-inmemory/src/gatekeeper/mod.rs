// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{
    num::NonZeroU64,
    sync::{
        Arc,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
    time::Duration,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tokio::{sync::RwLock, task::spawn_blocking, time::sleep};

use crate::{Database, Error, Result};

/// Serialize access to the database for asynchronous tasks
///
/// Readers share the database while a single writer gets exclusive
/// access. Waiting for access is bounded by timeouts.
#[allow(missing_debug_implementations)]
pub struct Gatekeeper {
    database: Arc<RwLock<Database>>,
    acquire_read_timeout: Duration,
    acquire_write_timeout: Duration,
    request_counter_state: Arc<RequestCounterState>,
    decommissioned: AtomicBool,
}

#[derive(Debug, Default)]
struct RequestCounterState {
    read_count: AtomicUsize,
    write_count: AtomicUsize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RequestCounterMode {
    Read,
    Write,
}

impl RequestCounterMode {
    const fn label(self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
        }
    }
}

impl RequestCounterState {
    const fn counter(&self, mode: RequestCounterMode) -> &AtomicUsize {
        match mode {
            RequestCounterMode::Read => &self.read_count,
            RequestCounterMode::Write => &self.write_count,
        }
    }
}

/// Tracks a pending request until dropped.
struct RequestCounterScope {
    shared_state: Arc<RequestCounterState>,
    mode: RequestCounterMode,
}

impl RequestCounterScope {
    #[must_use]
    fn new(shared_state: Arc<RequestCounterState>, mode: RequestCounterMode) -> Self {
        let pending_before = shared_state.counter(mode).fetch_add(1, Ordering::Relaxed);
        log::debug!(
            "Starting {mode} request: {pending} pending {mode} request(s)",
            mode = mode.label(),
            pending = pending_before + 1,
        );
        Self { shared_state, mode }
    }
}

impl Drop for RequestCounterScope {
    fn drop(&mut self) {
        let pending_before = self
            .shared_state
            .counter(self.mode)
            .fetch_sub(1, Ordering::Relaxed);
        debug_assert!(pending_before > 0);
        log::debug!(
            "Finished {mode} request: {pending} pending {mode} request(s)",
            mode = self.mode.label(),
            pending = pending_before - 1,
        );
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTasks {
    pub read: usize,
    pub write: usize,
}

impl Gatekeeper {
    #[must_use]
    pub fn new(database: Database, config: Config) -> Self {
        let Config {
            acquire_read_timeout_millis,
            acquire_write_timeout_millis,
        } = config;
        let acquire_read_timeout = Duration::from_millis(acquire_read_timeout_millis.get());
        let acquire_write_timeout = Duration::from_millis(acquire_write_timeout_millis.get());
        Self {
            database: Arc::new(RwLock::new(database)),
            acquire_read_timeout,
            acquire_write_timeout,
            request_counter_state: Default::default(),
            decommissioned: AtomicBool::new(false),
        }
    }

    /// Reject all subsequent requests.
    ///
    /// Pending requests that already got access proceed until finished.
    pub fn decommission(&self) {
        self.decommissioned.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_decommissioned(&self) -> bool {
        self.decommissioned.load(Ordering::Acquire)
    }

    fn check_not_decommissioned(&self) -> Result<()> {
        if self.is_decommissioned() {
            return Err(Error::TaskTimeout {
                reason: "database has been decommissioned".to_owned(),
            });
        }
        Ok(())
    }

    pub async fn spawn_blocking_read_task<H, R>(&self, database_handler: H) -> Result<R>
    where
        H: FnOnce(&Database) -> R + Send + 'static,
        R: Send + 'static,
    {
        self.check_not_decommissioned()?;
        let _request_counter_scope = RequestCounterScope::new(
            Arc::clone(&self.request_counter_state),
            RequestCounterMode::Read,
        );
        let timeout = sleep(self.acquire_read_timeout);
        tokio::pin!(timeout);
        tokio::select! {
            () = &mut timeout => Err(Error::TaskTimeout { reason: "database is locked".to_owned() }),
            guard = Arc::clone(&self.database).read_owned() => {
                self.check_not_decommissioned()?;
                spawn_blocking(move || database_handler(&*guard))
                    .await
                    .map_err(Error::TaskScheduling)
            },
        }
    }

    pub async fn spawn_blocking_write_task<H, R>(&self, database_handler: H) -> Result<R>
    where
        H: FnOnce(&mut Database) -> R + Send + 'static,
        R: Send + 'static,
    {
        self.check_not_decommissioned()?;
        let _request_counter_scope = RequestCounterScope::new(
            Arc::clone(&self.request_counter_state),
            RequestCounterMode::Write,
        );
        let timeout = sleep(self.acquire_write_timeout);
        tokio::pin!(timeout);
        tokio::select! {
            () = &mut timeout => Err(Error::TaskTimeout { reason: "database is locked".to_owned() }),
            guard = Arc::clone(&self.database).write_owned() => {
                self.check_not_decommissioned()?;
                let mut guard = guard;
                spawn_blocking(move || database_handler(&mut *guard))
                    .await
                    .map_err(Error::TaskScheduling)
            },
        }
    }

    #[must_use]
    pub fn pending_tasks(&self) -> PendingTasks {
        PendingTasks {
            read: self
                .request_counter_state
                .read_count
                .load(Ordering::Relaxed),
            write: self
                .request_counter_state
                .write_count
                .load(Ordering::Relaxed),
        }
    }
}

pub const DEFAULT_ACQUIRE_READ_TIMEOUT_MILLIS: NonZeroU64 =
    NonZeroU64::new(10_000).expect("non-zero");

pub const DEFAULT_ACQUIRE_WRITE_TIMEOUT_MILLIS: NonZeroU64 =
    NonZeroU64::new(30_000).expect("non-zero");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    pub acquire_read_timeout_millis: NonZeroU64,
    pub acquire_write_timeout_millis: NonZeroU64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            acquire_read_timeout_millis: DEFAULT_ACQUIRE_READ_TIMEOUT_MILLIS,
            acquire_write_timeout_millis: DEFAULT_ACQUIRE_WRITE_TIMEOUT_MILLIS,
        }
    }
}
