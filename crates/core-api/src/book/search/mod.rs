// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use bookshelf_core::book::{Rating, ReadingStatus};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::sorting::SortDirection;

#[derive(
    Clone,
    Copy,
    Debug,
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
pub enum SortField {
    Title,
    Author,
    #[default]
    CreatedAt,
    Rating,
}

/// Newest first by default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOrder {
    pub field: SortField,
    pub direction: SortDirection,
}

/// Conjunction of optional criteria.
///
/// Unset criteria match all books.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ReadingStatus>,

    /// Exact, case-sensitive genre.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,

    /// Minimum rating. Excludes unrated books.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<Rating>,
}

impl Filter {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let Self {
            status,
            genre,
            min_rating,
        } = self;
        status.is_none() && genre.is_none() && min_rating.is_none()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    /// Free-text search phrase.
    ///
    /// Matched case-insensitively against title, author, and genre.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phrase: String,

    #[serde(default)]
    pub filter: Filter,

    #[serde(default)]
    pub ordering: SortOrder,
}

impl Params {
    /// The lowercased search phrase, if any.
    ///
    /// A phrase that is blank after trimming is ignored. Otherwise the
    /// untrimmed phrase is used for matching.
    #[must_use]
    pub fn lowercase_phrase(&self) -> Option<String> {
        if self.phrase.trim().is_empty() {
            return None;
        }
        Some(self.phrase.to_lowercase())
    }
}

#[cfg(test)]
mod tests;
