// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{collections::VecDeque, num::NonZeroUsize};

use bookshelf_core::{
    AuditEntry, AuditEntryId, AuditEvent, BookEntity, BookId, UserEntity, UserId,
    settings::SystemSettings,
};
use bookshelf_repo::{audit, book, prelude::*, settings, user};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_AUDIT_LOG_CAPACITY: NonZeroUsize = NonZeroUsize::new(100).expect("non-zero");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Maximum number of retained audit log entries.
    pub audit_log_capacity: NonZeroUsize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            audit_log_capacity: DEFAULT_AUDIT_LOG_CAPACITY,
        }
    }
}

/// Volatile storage of all entities.
#[derive(Debug, Default)]
pub struct Database {
    config: Config,
    books: Vec<BookEntity>,
    users: Vec<UserEntity>,
    system_settings: SystemSettings,
    // Newest first
    audit_log: VecDeque<AuditEntry>,
    last_audit_entry_id: Option<AuditEntryId>,
}

impl Database {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    fn book_index(&self, id: BookId) -> RepoResult<usize> {
        self.books
            .iter()
            .position(|entity| entity.hdr.id == id)
            .ok_or(RepoError::NotFound)
    }

    fn user_index(&self, id: UserId) -> RepoResult<usize> {
        self.users
            .iter()
            .position(|entity| entity.hdr.id == id)
            .ok_or(RepoError::NotFound)
    }
}

impl book::EntityRepo for Database {
    fn load_book_entity(&self, id: BookId) -> RepoResult<BookEntity> {
        let index = self.book_index(id)?;
        Ok(self.books[index].clone())
    }

    fn load_all_book_entities(&self) -> RepoResult<Vec<BookEntity>> {
        Ok(self.books.clone())
    }

    fn count_book_entities(&self) -> RepoResult<usize> {
        Ok(self.books.len())
    }

    fn next_book_id(&self) -> RepoResult<BookId> {
        Ok(BookId::next_after(
            self.books.iter().map(|entity| entity.hdr.id),
        ))
    }

    fn insert_book_entity(&mut self, entity: &BookEntity) -> RepoResult<()> {
        if self.book_index(entity.hdr.id).is_ok() {
            return Err(RepoError::Conflict);
        }
        self.books.push(entity.clone());
        Ok(())
    }

    fn update_book_entity(&mut self, entity: &BookEntity) -> RepoResult<()> {
        let index = self.book_index(entity.hdr.id)?;
        self.books[index] = entity.clone();
        Ok(())
    }

    fn delete_book_entity(&mut self, id: BookId) -> RepoResult<BookEntity> {
        let index = self.book_index(id)?;
        Ok(self.books.remove(index))
    }
}

impl user::EntityRepo for Database {
    fn load_user_entity(&self, id: UserId) -> RepoResult<UserEntity> {
        let index = self.user_index(id)?;
        Ok(self.users[index].clone())
    }

    fn load_user_entity_by_email(&self, email: &str) -> RepoResult<UserEntity> {
        self.users
            .iter()
            .find(|entity| entity.body.email.eq_ignore_ascii_case(email))
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn load_all_user_entities(&self) -> RepoResult<Vec<UserEntity>> {
        Ok(self.users.clone())
    }

    fn next_user_id(&self) -> RepoResult<UserId> {
        Ok(UserId::next_after(
            self.users.iter().map(|entity| entity.hdr.id),
        ))
    }

    fn insert_user_entity(&mut self, entity: &UserEntity) -> RepoResult<()> {
        if self.user_index(entity.hdr.id).is_ok() {
            return Err(RepoError::Conflict);
        }
        self.users.push(entity.clone());
        Ok(())
    }

    fn update_user_entity(&mut self, entity: &UserEntity) -> RepoResult<()> {
        let index = self.user_index(entity.hdr.id)?;
        self.users[index] = entity.clone();
        Ok(())
    }

    fn delete_user_entity(&mut self, id: UserId) -> RepoResult<UserEntity> {
        let index = self.user_index(id)?;
        Ok(self.users.remove(index))
    }
}

impl settings::Repo for Database {
    fn load_system_settings(&self) -> RepoResult<SystemSettings> {
        Ok(self.system_settings.clone())
    }

    fn store_system_settings(&mut self, settings: &SystemSettings) -> RepoResult<()> {
        settings.clone_into(&mut self.system_settings);
        Ok(())
    }
}

impl audit::Repo for Database {
    fn append_audit_event(&mut self, event: AuditEvent) -> RepoResult<AuditEntry> {
        let id = AuditEntryId::next_after(self.last_audit_entry_id);
        let entry = AuditEntry { id, event };
        self.audit_log.push_front(entry.clone());
        self.audit_log
            .truncate(self.config.audit_log_capacity.get());
        self.last_audit_entry_id = Some(id);
        Ok(entry)
    }

    fn load_recent_audit_entries(&self, limit: Option<usize>) -> RepoResult<Vec<AuditEntry>> {
        let limit = limit.unwrap_or(usize::MAX);
        Ok(self.audit_log.iter().take(limit).cloned().collect())
    }
}
