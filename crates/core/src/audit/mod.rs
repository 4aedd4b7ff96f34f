// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

use crate::{book::BookId, prelude::*, user::UserId};

entity_id_newtype!(EntryId);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Action {
    BookCreated,
    BookUpdated,
    BookDeleted,
    UserCreated,
    UserUpdated,
    UserDeleted,
    SystemSettingsUpdated,
    SystemStartup,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Book,
    User,
    System,
}

/// A recorded mutation.
///
/// The `before` and `after` snapshots are opaque JSON values
/// of the affected resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<UserId>,

    pub action: Action,

    pub resource_type: ResourceType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<EntityId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    pub occurred_at: UtcDateTimeMs,
}

impl AuditEvent {
    #[must_use]
    pub fn new(action: Action, resource_type: ResourceType, occurred_at: UtcDateTimeMs) -> Self {
        Self {
            actor: None,
            action,
            resource_type,
            resource_id: None,
            before: None,
            after: None,
            occurred_at,
        }
    }

    #[must_use]
    pub fn book(action: Action, id: BookId, occurred_at: UtcDateTimeMs) -> Self {
        Self {
            resource_id: Some(id.to_inner()),
            ..Self::new(action, ResourceType::Book, occurred_at)
        }
    }

    #[must_use]
    pub fn user(action: Action, id: UserId, occurred_at: UtcDateTimeMs) -> Self {
        Self {
            resource_id: Some(id.to_inner()),
            ..Self::new(action, ResourceType::User, occurred_at)
        }
    }

    #[must_use]
    pub fn system(action: Action, occurred_at: UtcDateTimeMs) -> Self {
        Self::new(action, ResourceType::System, occurred_at)
    }

    #[must_use]
    pub fn with_actor(mut self, actor: Option<UserId>) -> Self {
        self.actor = actor;
        self
    }

    /// Attach snapshots of the resource.
    ///
    /// Values that fail to serialize are omitted.
    #[must_use]
    pub fn with_snapshots<T>(mut self, before: Option<&T>, after: Option<&T>) -> Self
    where
        T: Serialize,
    {
        self.before = before.and_then(|value| serde_json::to_value(value).ok());
        self.after = after.and_then(|value| serde_json::to_value(value).ok());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,

    #[serde(flatten)]
    pub event: AuditEvent,
}

#[cfg(test)]
mod tests;
