// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use bookshelf_core::{
    audit::{Action, AuditEvent},
    user::{Entity, EntityHeader, Role, User, UserId},
};
use bookshelf_repo::user::EntityRepo as UserRepo;

use crate::prelude::*;

#[derive(Debug)]
pub struct ValidatedInput(pub(crate) User);

pub fn validate_input(mut user: User) -> InputResult<ValidatedInput> {
    user.name = user.name.trim().to_owned();
    user.email = user.email.trim().to_owned();
    if let Err(err) = user.validate() {
        return Err(anyhow::anyhow!("Invalid user input: {err:?}").into());
    }
    Ok(ValidatedInput(user))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Changes {
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: Option<Role>,
}

impl Changes {
    #[must_use]
    pub fn merge_into(self, mut user: User) -> User {
        let Self { email, name, role } = self;
        if let Some(email) = email {
            user.email = email;
        }
        if let Some(name) = name {
            user.name = name;
        }
        if let Some(role) = role {
            user.role = role;
        }
        user
    }
}

pub fn create<Repo>(
    repo: &mut Repo,
    actor: Option<UserId>,
    new_user: User,
    now: UtcDateTimeMs,
) -> Result<Entity>
where
    Repo: UserRepo + AuditSink + ?Sized,
{
    let ValidatedInput(user) = validate_input(new_user)?;
    let id = repo.next_user_id()?;
    let entity = Entity::new(EntityHeader::initial(id, now), user);
    repo.insert_user_entity(&entity)?;
    log::debug!("Created user {id}: {entity:?}");
    record_audit_event(
        repo,
        AuditEvent::user(Action::UserCreated, id, now)
            .with_actor(actor)
            .with_snapshots(None, Some(&entity)),
    );
    Ok(entity)
}

pub fn update<Repo>(
    repo: &mut Repo,
    actor: Option<UserId>,
    id: UserId,
    changes: Changes,
    now: UtcDateTimeMs,
) -> Result<Entity>
where
    Repo: UserRepo + AuditSink + ?Sized,
{
    let old_entity = repo.load_user_entity(id)?;
    let ValidatedInput(user) = validate_input(changes.merge_into(old_entity.body.clone()))?;
    let new_entity = Entity::new(old_entity.hdr.next(now), user);
    repo.update_user_entity(&new_entity)?;
    log::debug!("Updated user {id}: {new_entity:?}");
    record_audit_event(
        repo,
        AuditEvent::user(Action::UserUpdated, id, now)
            .with_actor(actor)
            .with_snapshots(Some(&old_entity), Some(&new_entity)),
    );
    Ok(new_entity)
}

pub fn purge<Repo>(
    repo: &mut Repo,
    actor: Option<UserId>,
    id: UserId,
    now: UtcDateTimeMs,
) -> Result<Entity>
where
    Repo: UserRepo + AuditSink + ?Sized,
{
    let entity = repo.delete_user_entity(id)?;
    log::debug!("Deleted user {id}");
    record_audit_event(
        repo,
        AuditEvent::user(Action::UserDeleted, id, now)
            .with_actor(actor)
            .with_snapshots(Some(&entity), None),
    );
    Ok(entity)
}

pub fn load_one<Repo>(repo: &Repo, id: UserId) -> Result<Option<Entity>>
where
    Repo: UserRepo + ?Sized,
{
    repo.load_user_entity(id).optional().map_err(Into::into)
}

pub fn load_one_by_email<Repo>(repo: &Repo, email: &str) -> Result<Option<Entity>>
where
    Repo: UserRepo + ?Sized,
{
    repo.load_user_entity_by_email(email.trim())
        .optional()
        .map_err(Into::into)
}

pub fn load_all<Repo>(repo: &Repo) -> Result<Vec<Entity>>
where
    Repo: UserRepo + ?Sized,
{
    repo.load_all_user_entities().map_err(Into::into)
}

/// Users created at or after `since`.
#[must_use]
pub fn created_since<'a>(
    entities: impl IntoIterator<Item = &'a Entity>,
    since: UtcDateTimeMs,
) -> Vec<&'a Entity> {
    entities
        .into_iter()
        .filter(|entity| entity.hdr.created_at >= since)
        .collect()
}
