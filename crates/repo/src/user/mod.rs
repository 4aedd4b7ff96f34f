// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use bookshelf_core::user::{Entity, UserId};

use crate::prelude::*;

pub trait EntityRepo {
    fn load_user_entity(&self, id: UserId) -> RepoResult<Entity>;

    /// Case-insensitive lookup by e-mail address.
    fn load_user_entity_by_email(&self, email: &str) -> RepoResult<Entity>;

    fn load_all_user_entities(&self) -> RepoResult<Vec<Entity>>;

    fn next_user_id(&self) -> RepoResult<UserId>;

    fn insert_user_entity(&mut self, entity: &Entity) -> RepoResult<()>;

    fn update_user_entity(&mut self, entity: &Entity) -> RepoResult<()>;

    fn delete_user_entity(&mut self, id: UserId) -> RepoResult<Entity>;
}
