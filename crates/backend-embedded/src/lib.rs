// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use bookshelf_storage_inmemory::{Database, gatekeeper::Gatekeeper};
use thiserror::Error;

pub mod audit;
pub mod book;
pub mod settings;
pub mod storage;
pub mod user;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Usecases(#[from] bookshelf_usecases::Error),

    #[error(transparent)]
    Storage(#[from] bookshelf_storage_inmemory::Error),
}

impl Error {
    /// The requested entity does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Usecases(err) if err.is_not_found())
    }

    /// The input has been rejected.
    #[must_use]
    pub const fn is_input(&self) -> bool {
        matches!(self, Self::Usecases(err) if err.is_input())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

pub mod prelude {
    pub use bookshelf_core::util::clock::UtcDateTimeMs;
    pub use bookshelf_storage_inmemory::gatekeeper::Gatekeeper;

    pub use super::{Error, Result};
}

async fn read_task<H, T>(db_gatekeeper: &Gatekeeper, handler: H) -> Result<T>
where
    H: FnOnce(&Database) -> bookshelf_usecases::Result<T> + Send + 'static,
    T: Send + 'static,
{
    db_gatekeeper
        .spawn_blocking_read_task(move |db| handler(db).map_err(Error::from))
        .await
        .map_err(Into::into)
        .unwrap_or_else(Err)
}

async fn write_task<H, T>(db_gatekeeper: &Gatekeeper, handler: H) -> Result<T>
where
    H: FnOnce(&mut Database) -> bookshelf_usecases::Result<T> + Send + 'static,
    T: Send + 'static,
{
    db_gatekeeper
        .spawn_blocking_write_task(move |db| handler(db).map_err(Error::from))
        .await
        .map_err(Into::into)
        .unwrap_or_else(Err)
}
