// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use bookshelf_core::user::{Entity, User, UserId};
use bookshelf_usecases::user::Changes;

use crate::{prelude::*, read_task, write_task};

pub async fn load_all(db_gatekeeper: &Gatekeeper) -> Result<Vec<Entity>> {
    read_task(db_gatekeeper, |db| bookshelf_usecases::user::load_all(db)).await
}

pub async fn load_one(db_gatekeeper: &Gatekeeper, id: UserId) -> Result<Option<Entity>> {
    read_task(db_gatekeeper, move |db| {
        bookshelf_usecases::user::load_one(db, id)
    })
    .await
}

pub async fn create(
    db_gatekeeper: &Gatekeeper,
    actor: Option<UserId>,
    new_user: User,
) -> Result<Entity> {
    write_task(db_gatekeeper, move |db| {
        bookshelf_usecases::user::create(db, actor, new_user, UtcDateTimeMs::now())
    })
    .await
}

pub async fn update(
    db_gatekeeper: &Gatekeeper,
    actor: Option<UserId>,
    id: UserId,
    changes: Changes,
) -> Result<Entity> {
    write_task(db_gatekeeper, move |db| {
        bookshelf_usecases::user::update(db, actor, id, changes, UtcDateTimeMs::now())
    })
    .await
}

pub async fn purge(
    db_gatekeeper: &Gatekeeper,
    actor: Option<UserId>,
    id: UserId,
) -> Result<Entity> {
    write_task(db_gatekeeper, move |db| {
        bookshelf_usecases::user::purge(db, actor, id, UtcDateTimeMs::now())
    })
    .await
}

#[cfg(test)]
mod tests;
