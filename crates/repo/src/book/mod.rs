// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use bookshelf_core::book::{BookId, Entity};

use crate::prelude::*;

pub trait EntityRepo {
    fn load_book_entity(&self, id: BookId) -> RepoResult<Entity>;

    /// All books in insertion order.
    fn load_all_book_entities(&self) -> RepoResult<Vec<Entity>>;

    fn count_book_entities(&self) -> RepoResult<usize>;

    /// The id for the next book, i.e. the successor of the greatest
    /// id currently in use.
    fn next_book_id(&self) -> RepoResult<BookId>;

    /// Fails with [`RepoError::Conflict`] if the id is already in use.
    fn insert_book_entity(&mut self, entity: &Entity) -> RepoResult<()>;

    /// Fails with [`RepoError::NotFound`] if the id is unknown.
    fn update_book_entity(&mut self, entity: &Entity) -> RepoResult<()>;

    /// Returns the removed entity.
    fn delete_book_entity(&mut self, id: BookId) -> RepoResult<Entity>;
}
