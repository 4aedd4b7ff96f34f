// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::result::Result as StdResult;

use thiserror::Error;

pub mod audit;
pub mod auth;
pub mod book;
pub mod settings;
pub mod user;

#[derive(Error, Debug)]
#[error(transparent)]
pub struct InputError(#[from] pub anyhow::Error);

pub type InputResult<T> = StdResult<T, InputError>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Repository(#[from] RepoError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// The requested entity does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Repository(RepoError::NotFound))
    }

    /// The input has been rejected.
    #[must_use]
    pub const fn is_input(&self) -> bool {
        matches!(self, Self::Input(_))
    }
}

pub type Result<T> = StdResult<T, Error>;

pub mod prelude {
    pub(crate) use bookshelf_core::{prelude::*, util::clock::UtcDateTimeMs};
    pub(crate) use bookshelf_repo::prelude::*;

    pub(crate) use crate::audit::{AuditSink, record_audit_event};
    pub use crate::{Error, InputError, InputResult, Result};
}

use self::prelude::*;
