// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Placeholder authentication.
//!
//! Accepts any pair of non-empty credentials. Only the well-known
//! administrator credentials grant the admin role. No secrets are
//! verified or stored.

use bookshelf_core::{
    user::{Entity, EntityHeader, Role, User, UserId},
    util::string::capitalize_first,
};

use crate::{prelude::*, user};

pub const ADMIN_USERNAME: &str = "admin";

pub const ADMIN_PASSWORD: &str = "password";

pub const EMAIL_DOMAIN: &str = "books-library.local";

pub const ADMIN_USER_ID: UserId = UserId::new(1);

pub const REGULAR_USER_ID: UserId = UserId::new(2);

const TOKEN_PREFIX: &str = "mock-jwt-token-";

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid username or password";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: Entity,
    pub token: String,
}

#[must_use]
pub fn issue_token(now: UtcDateTimeMs) -> String {
    format!("{TOKEN_PREFIX}{millis}", millis = now.unix_timestamp_millis())
}

pub fn login(username: &str, password: &str, now: UtcDateTimeMs) -> InputResult<Session> {
    if username.is_empty() || password.is_empty() {
        return Err(anyhow::anyhow!(INVALID_CREDENTIALS_MESSAGE).into());
    }
    let (id, user) = if username == ADMIN_USERNAME && password == ADMIN_PASSWORD {
        (
            ADMIN_USER_ID,
            User {
                email: format!("{ADMIN_USERNAME}@{EMAIL_DOMAIN}"),
                name: "Administrator".to_owned(),
                role: Role::Admin,
            },
        )
    } else {
        (
            REGULAR_USER_ID,
            User {
                email: format!("{username}@{EMAIL_DOMAIN}"),
                name: capitalize_first(username),
                role: Role::User,
            },
        )
    };
    log::debug!("Signed in as {email}", email = user.email);
    Ok(Session {
        user: Entity::new(EntityHeader::initial(id, now), user),
        token: issue_token(now),
    })
}

/// Apply profile changes to the signed-in user.
pub fn update_profile(
    entity: Entity,
    changes: user::Changes,
    now: UtcDateTimeMs,
) -> InputResult<Entity> {
    let Entity { hdr, body } = entity;
    let user::ValidatedInput(user) = user::validate_input(changes.merge_into(body))?;
    Ok(Entity::new(hdr.next(now), user))
}
