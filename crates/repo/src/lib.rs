// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

pub mod audit;
pub mod book;
pub mod settings;
pub mod user;

pub mod prelude {
    pub use bookshelf_core_api::{Pagination, sorting::*};
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum RepoError {
        #[error("not found")]
        NotFound,

        #[error("conflict")]
        Conflict,

        #[error(transparent)]
        Other(#[from] anyhow::Error),
    }

    pub type RepoResult<T> = Result<T, RepoError>;

    pub trait OptionalRepoResult<T> {
        fn optional(self) -> RepoResult<Option<T>>;
    }

    impl<T> OptionalRepoResult<T> for Result<T, RepoError> {
        fn optional(self) -> RepoResult<Option<T>> {
            self.map_or_else(
                |err| {
                    if matches!(err, RepoError::NotFound) {
                        Ok(None)
                    } else {
                        Err(err)
                    }
                },
                |val| Ok(Some(val)),
            )
        }
    }
}

pub use self::prelude::{OptionalRepoResult, RepoError, RepoResult};

/// All repositories of a storage backend.
pub trait Storage:
    book::EntityRepo + user::EntityRepo + settings::Repo + audit::Repo
{
}

impl<T> Storage for T where
    T: book::EntityRepo + user::EntityRepo + settings::Repo + audit::Repo
{
}
