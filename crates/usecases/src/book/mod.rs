// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use bookshelf_core::{
    audit::{Action, AuditEvent},
    book::{
        Book, BookId, Entity, EntityHeader, Rating, ReadingProgress, ReadingStatus, lifecycle,
    },
    user::UserId,
    util::string::trimmed_non_empty,
};
use bookshelf_repo::book::EntityRepo as BookRepo;

use crate::prelude::*;

pub mod search;
pub mod stats;

#[derive(Debug)]
pub struct ValidatedInput(pub(crate) Book);

pub fn validate_input(book: Book) -> InputResult<ValidatedInput> {
    if let Err(err) = book.validate() {
        return Err(anyhow::anyhow!("Invalid book input: {err:?}").into());
    }
    Ok(ValidatedInput(book))
}

fn normalize(book: &mut Book) {
    let Book {
        title,
        author,
        isbn,
        genre,
        notes,
        cover_image,
        ..
    } = book;
    *title = title.trim().to_owned();
    *author = author.trim().to_owned();
    for text in [isbn, genre, notes, cover_image] {
        *text = text.take().and_then(trimmed_non_empty);
    }
}

/// Partial modification of a book.
///
/// Unset fields are left untouched. Nested options distinguish
/// between keeping (`None`) and clearing (`Some(None)`) a value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Changes {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<Option<String>>,
    pub genre: Option<Option<String>>,
    pub rating: Option<Option<Rating>>,
    pub notes: Option<Option<String>>,
    pub cover_image: Option<Option<String>>,
    pub status: Option<ReadingStatus>,
    pub reading_progress: Option<ReadingProgress>,
    pub started_at: Option<Option<UtcDateTimeMs>>,
    pub completed_at: Option<Option<UtcDateTimeMs>>,
}

impl Changes {
    /// Merge into an existing book.
    ///
    /// The lifecycle rules are applied only if a status is given,
    /// even if it equals the current status.
    #[must_use]
    pub fn merge_into(self, mut book: Book, now: UtcDateTimeMs) -> Book {
        let Self {
            title,
            author,
            isbn,
            genre,
            rating,
            notes,
            cover_image,
            status,
            reading_progress,
            started_at,
            completed_at,
        } = self;
        let old_status = book.status;
        if let Some(title) = title {
            book.title = title;
        }
        if let Some(author) = author {
            book.author = author;
        }
        if let Some(isbn) = isbn {
            book.isbn = isbn;
        }
        if let Some(genre) = genre {
            book.genre = genre;
        }
        if let Some(rating) = rating {
            book.rating = rating;
        }
        if let Some(notes) = notes {
            book.notes = notes;
        }
        if let Some(cover_image) = cover_image {
            book.cover_image = cover_image;
        }
        if let Some(reading_progress) = reading_progress {
            book.reading_progress = reading_progress;
        }
        if let Some(started_at) = started_at {
            book.started_at = started_at;
        }
        if let Some(completed_at) = completed_at {
            book.completed_at = completed_at;
        }
        if let Some(status) = status {
            book.status = status;
            lifecycle::apply_transition(&mut book, old_status, now);
        }
        book
    }
}

/// Prepare a new entity without storing it.
///
/// The new book is owned by the `actor`.
pub fn create_entity(
    id: BookId,
    actor: Option<UserId>,
    mut new_book: Book,
    now: UtcDateTimeMs,
) -> Result<Entity> {
    normalize(&mut new_book);
    new_book.owner = actor;
    lifecycle::apply_initial(&mut new_book, now);
    let ValidatedInput(book) = validate_input(new_book)?;
    Ok(Entity::new(EntityHeader::initial(id, now), book))
}

/// Prepare the modified entity without storing it.
pub fn update_entity(entity: Entity, changes: Changes, now: UtcDateTimeMs) -> Result<Entity> {
    let Entity { hdr, body } = entity;
    let mut book = changes.merge_into(body, now);
    normalize(&mut book);
    let ValidatedInput(book) = validate_input(book)?;
    Ok(Entity::new(hdr.next(now), book))
}

pub fn create<Repo>(
    repo: &mut Repo,
    actor: Option<UserId>,
    new_book: Book,
    now: UtcDateTimeMs,
) -> Result<Entity>
where
    Repo: BookRepo + AuditSink + ?Sized,
{
    let id = repo.next_book_id()?;
    let entity = create_entity(id, actor, new_book, now)?;
    repo.insert_book_entity(&entity)?;
    log::debug!("Created book {id}: {entity:?}");
    record_audit_event(
        repo,
        AuditEvent::book(Action::BookCreated, id, now)
            .with_actor(actor)
            .with_snapshots(None, Some(&entity)),
    );
    Ok(entity)
}

pub fn update<Repo>(
    repo: &mut Repo,
    actor: Option<UserId>,
    id: BookId,
    changes: Changes,
    now: UtcDateTimeMs,
) -> Result<Entity>
where
    Repo: BookRepo + AuditSink + ?Sized,
{
    let old_entity = repo.load_book_entity(id)?;
    let new_entity = update_entity(old_entity.clone(), changes, now)?;
    repo.update_book_entity(&new_entity)?;
    log::debug!("Updated book {id}: {new_entity:?}");
    record_audit_event(
        repo,
        AuditEvent::book(Action::BookUpdated, id, now)
            .with_actor(actor)
            .with_snapshots(Some(&old_entity), Some(&new_entity)),
    );
    Ok(new_entity)
}

/// Delete a book permanently.
///
/// Returns the deleted entity.
pub fn purge<Repo>(
    repo: &mut Repo,
    actor: Option<UserId>,
    id: BookId,
    now: UtcDateTimeMs,
) -> Result<Entity>
where
    Repo: BookRepo + AuditSink + ?Sized,
{
    let entity = repo.delete_book_entity(id)?;
    log::debug!("Deleted book {id}");
    record_audit_event(
        repo,
        AuditEvent::book(Action::BookDeleted, id, now)
            .with_actor(actor)
            .with_snapshots(Some(&entity), None),
    );
    Ok(entity)
}

pub fn load_one<Repo>(repo: &Repo, id: BookId) -> Result<Option<Entity>>
where
    Repo: BookRepo + ?Sized,
{
    repo.load_book_entity(id).optional().map_err(Into::into)
}

pub fn load_all<Repo>(repo: &Repo) -> Result<Vec<Entity>>
where
    Repo: BookRepo + ?Sized,
{
    repo.load_all_book_entities().map_err(Into::into)
}
