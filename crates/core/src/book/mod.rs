// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::{prelude::*, user::UserId};

pub mod lifecycle;

entity_id_newtype!(BookId);

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    IntoStaticStr,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ReadingStatus {
    #[default]
    ToRead,
    Reading,
    Completed,
}

/// A rating on a scale from 1 to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(5);

    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingInvalidity {
    OutOfRange,
}

impl Validate for Rating {
    type Invalidity = RatingInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .invalidate_if(
                !(Self::MIN..=Self::MAX).contains(self),
                Self::Invalidity::OutOfRange,
            )
            .into()
    }
}

/// Reading progress in percent.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ReadingProgress(u8);

impl ReadingProgress {
    pub const NONE: Self = Self(0);
    pub const COMPLETE: Self = Self(100);

    #[must_use]
    pub const fn new(percent: u8) -> Self {
        Self(percent)
    }

    #[must_use]
    pub const fn percent(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingProgressInvalidity {
    OutOfRange,
}

impl Validate for ReadingProgress {
    type Invalidity = ReadingProgressInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .invalidate_if(*self > Self::COMPLETE, Self::Invalidity::OutOfRange)
            .into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// The user who added the book.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<UserId>,

    pub title: String,

    pub author: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// URL or path of a cover image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,

    pub status: ReadingStatus,

    #[serde(default)]
    pub reading_progress: ReadingProgress,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<UtcDateTimeMs>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<UtcDateTimeMs>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookInvalidity {
    TitleEmpty,
    AuthorEmpty,
    Rating(RatingInvalidity),
    ReadingProgress(ReadingProgressInvalidity),
    Lifecycle(lifecycle::Inconsistency),
}

impl Validate for Book {
    type Invalidity = BookInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        let Self {
            title,
            author,
            rating,
            reading_progress,
            ..
        } = self;
        let mut context = ValidationContext::new()
            .invalidate_if(title.trim().is_empty(), Self::Invalidity::TitleEmpty)
            .invalidate_if(author.trim().is_empty(), Self::Invalidity::AuthorEmpty)
            .validate_with(rating, Self::Invalidity::Rating)
            .validate_with(reading_progress, Self::Invalidity::ReadingProgress);
        for inconsistency in lifecycle::inconsistencies(self) {
            context = context.invalidate(Self::Invalidity::Lifecycle(inconsistency));
        }
        context.into()
    }
}

pub type EntityHeader = crate::entity::EntityHeader<BookId>;

pub type Entity = crate::entity::Entity<BookId, Book>;

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////
