// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::collections::BTreeSet;

use bookshelf_core::book::{Entity, ReadingStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub to_read: usize,
    pub reading: usize,
    pub completed: usize,
}

impl StatusCounts {
    #[must_use]
    pub const fn get(&self, status: ReadingStatus) -> usize {
        match status {
            ReadingStatus::ToRead => self.to_read,
            ReadingStatus::Reading => self.reading,
            ReadingStatus::Completed => self.completed,
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.to_read + self.reading + self.completed
    }
}

#[must_use]
pub fn count_by_status<'a>(entities: impl IntoIterator<Item = &'a Entity>) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for entity in entities {
        let count = match entity.body.status {
            ReadingStatus::ToRead => &mut counts.to_read,
            ReadingStatus::Reading => &mut counts.reading,
            ReadingStatus::Completed => &mut counts.completed,
        };
        *count += 1;
    }
    counts
}

/// Mean rating of all rated books, rounded to one decimal place.
///
/// Returns 0 if no book has been rated.
#[must_use]
pub fn average_rating<'a>(entities: impl IntoIterator<Item = &'a Entity>) -> f64 {
    let (sum, count) = entities
        .into_iter()
        .filter_map(|entity| entity.body.rating)
        .fold((0u64, 0u64), |(sum, count), rating| {
            (sum + u64::from(rating.value()), count + 1)
        });
    if count == 0 {
        return 0.0;
    }
    (sum as f64 / count as f64 * 10.0).round() / 10.0
}

/// Distinct genres in lexicographical order.
#[must_use]
pub fn genres<'a>(entities: impl IntoIterator<Item = &'a Entity>) -> Vec<String> {
    entities
        .into_iter()
        .filter_map(|entity| entity.body.genre.as_deref())
        .filter(|genre| !genre.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(ToOwned::to_owned)
        .collect()
}
