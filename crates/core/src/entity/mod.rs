// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use serde::{Deserialize, Serialize};

use crate::util::clock::UtcDateTimeMs;

/// Numeric identifier of a stored entity.
///
/// Identifiers are assigned by the store and never reused while
/// the entity exists.
pub type EntityId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityHeader<Id> {
    pub id: Id,
    pub created_at: UtcDateTimeMs,
    pub updated_at: UtcDateTimeMs,
}

impl<Id> EntityHeader<Id> {
    #[must_use]
    pub const fn initial(id: Id, created_at: UtcDateTimeMs) -> Self {
        Self {
            id,
            created_at,
            updated_at: created_at,
        }
    }

    /// Header of the next modification.
    ///
    /// The creation time is preserved.
    #[must_use]
    pub fn next(self, updated_at: UtcDateTimeMs) -> Self {
        let Self { id, created_at, .. } = self;
        Self {
            id,
            created_at,
            updated_at,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity<Id, Body> {
    pub hdr: EntityHeader<Id>,
    pub body: Body,
}

impl<Id, Body> Entity<Id, Body> {
    #[must_use]
    pub const fn new(hdr: EntityHeader<Id>, body: Body) -> Self {
        Self { hdr, body }
    }

    #[must_use]
    pub fn into_body(self) -> Body {
        self.body
    }
}

impl<Id, Body> AsRef<Body> for Entity<Id, Body> {
    fn as_ref(&self) -> &Body {
        &self.body
    }
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests;
