// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Status-dependent derivation of the reading lifecycle attributes.
//!
//! | Transition                      | `started_at`       | `completed_at` | `reading_progress` |
//! |---------------------------------|--------------------|----------------|--------------------|
//! | any → `to_read`                 | cleared            | cleared        | 0                  |
//! | `to_read` → `reading`           | now                | unchanged      | unchanged          |
//! | not `completed` → `completed`   | unchanged          | now            | 100                |
//! | otherwise                       | unchanged          | unchanged      | unchanged          |

use super::{Book, ReadingProgress, ReadingStatus};
use crate::util::clock::UtcDateTimeMs;

/// The initial status of a new book before applying the requested status.
pub const INITIAL_STATUS: ReadingStatus = ReadingStatus::ToRead;

/// Apply the transition from `old_status` to the current `book.status`.
///
/// Caller-supplied lifecycle attributes are overridden only where the
/// transition requires it. Returns `true` if any attribute has been modified.
pub fn apply_transition(book: &mut Book, old_status: ReadingStatus, now: UtcDateTimeMs) -> bool {
    use ReadingStatus::*;
    let before = (book.reading_progress, book.started_at, book.completed_at);
    match (old_status, book.status) {
        (_, ToRead) => {
            book.reading_progress = ReadingProgress::NONE;
            book.started_at = None;
            book.completed_at = None;
        }
        (ToRead, Reading) => {
            // A book that is still to be read has never been started.
            book.started_at = Some(now);
        }
        (ToRead | Reading, Completed) => {
            book.reading_progress = ReadingProgress::COMPLETE;
            book.completed_at = Some(now);
        }
        (Reading, Reading) | (Completed, Reading | Completed) => (),
    }
    before != (book.reading_progress, book.started_at, book.completed_at)
}

/// Apply the lifecycle rules for a newly created book.
///
/// Treated as a transition from the implicit, empty [`INITIAL_STATUS`].
pub fn apply_initial(book: &mut Book, now: UtcDateTimeMs) -> bool {
    apply_transition(book, INITIAL_STATUS, now)
}

/// Violations of the invariants between status and lifecycle attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inconsistency {
    ToReadWithProgress,
    ToReadStarted,
    ToReadCompleted,
    CompletedWithoutFullProgress,
    CompletedWithoutTimestamp,
}

#[must_use]
pub fn inconsistencies(book: &Book) -> Vec<Inconsistency> {
    let mut found = Vec::new();
    match book.status {
        ReadingStatus::ToRead => {
            if book.reading_progress != ReadingProgress::NONE {
                found.push(Inconsistency::ToReadWithProgress);
            }
            if book.started_at.is_some() {
                found.push(Inconsistency::ToReadStarted);
            }
            if book.completed_at.is_some() {
                found.push(Inconsistency::ToReadCompleted);
            }
        }
        ReadingStatus::Reading => (),
        ReadingStatus::Completed => {
            if book.reading_progress != ReadingProgress::COMPLETE {
                found.push(Inconsistency::CompletedWithoutFullProgress);
            }
            if book.completed_at.is_none() {
                found.push(Inconsistency::CompletedWithoutTimestamp);
            }
        }
    }
    found
}
