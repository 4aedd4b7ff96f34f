// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use bookshelf_core::{
    book::{Book, BookId, Entity},
    user::UserId,
};
use bookshelf_core_api::{Pagination, book::search::Params};
use bookshelf_usecases::book::{Changes, search::SearchResults};

use crate::{prelude::*, read_task, write_task};

pub async fn load_all(db_gatekeeper: &Gatekeeper) -> Result<Vec<Entity>> {
    read_task(db_gatekeeper, |db| bookshelf_usecases::book::load_all(db)).await
}

pub async fn load_one(db_gatekeeper: &Gatekeeper, id: BookId) -> Result<Option<Entity>> {
    read_task(db_gatekeeper, move |db| {
        bookshelf_usecases::book::load_one(db, id)
    })
    .await
}

pub async fn search(
    db_gatekeeper: &Gatekeeper,
    params: Params,
    pagination: Pagination,
) -> Result<SearchResults> {
    read_task(db_gatekeeper, move |db| {
        bookshelf_usecases::book::search::search(db, &params, &pagination)
    })
    .await
}

pub async fn create(
    db_gatekeeper: &Gatekeeper,
    actor: Option<UserId>,
    new_book: Book,
) -> Result<Entity> {
    write_task(db_gatekeeper, move |db| {
        bookshelf_usecases::book::create(db, actor, new_book, UtcDateTimeMs::now())
    })
    .await
}

pub async fn update(
    db_gatekeeper: &Gatekeeper,
    actor: Option<UserId>,
    id: BookId,
    changes: Changes,
) -> Result<Entity> {
    write_task(db_gatekeeper, move |db| {
        bookshelf_usecases::book::update(db, actor, id, changes, UtcDateTimeMs::now())
    })
    .await
}

pub async fn purge(
    db_gatekeeper: &Gatekeeper,
    actor: Option<UserId>,
    id: BookId,
) -> Result<Entity> {
    write_task(db_gatekeeper, move |db| {
        bookshelf_usecases::book::purge(db, actor, id, UtcDateTimeMs::now())
    })
    .await
}
