// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

#[macro_use]
mod macros;

pub mod util;

mod entity;
pub use self::entity::*;

pub mod audit;
pub use self::audit::{AuditEvent, Entry as AuditEntry, EntryId as AuditEntryId};

pub mod book;
pub use self::book::{
    Book, BookId, Entity as BookEntity, EntityHeader as BookHeader, Rating, ReadingProgress,
    ReadingStatus,
};

pub mod settings;
pub use self::settings::SystemSettings;

pub mod user;
pub use self::user::{
    Entity as UserEntity, EntityHeader as UserHeader, Role as UserRole, User, UserId,
};

pub mod prelude {
    pub(crate) use semval::prelude::*;
    // Re-export trait methods from semval
    pub use semval::{IsValid, Validate as _};

    pub(crate) use crate::{entity::*, util::clock::*};
}
