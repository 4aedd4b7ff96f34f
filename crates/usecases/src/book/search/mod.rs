// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{cmp::Ordering, time::Instant};

use bookshelf_core::{
    book::{Book, Entity, Rating},
    util::string::contains_lowercase,
};
use bookshelf_core_api::{
    PageInfo, Pagination,
    book::search::{Filter, Params, SortField, SortOrder},
};
use bookshelf_repo::book::EntityRepo as BookRepo;

use crate::prelude::*;

/// Case-insensitive match of a lowercased phrase against title,
/// author, and genre.
#[must_use]
pub fn matches_phrase(book: &Book, lowercase_phrase: &str) -> bool {
    contains_lowercase(&book.title, lowercase_phrase)
        || contains_lowercase(&book.author, lowercase_phrase)
        || book
            .genre
            .as_deref()
            .is_some_and(|genre| contains_lowercase(genre, lowercase_phrase))
}

#[must_use]
pub fn matches_filter(book: &Book, filter: &Filter) -> bool {
    let Filter {
        status,
        genre,
        min_rating,
    } = filter;
    status.is_none_or(|status| status == book.status)
        && genre
            .as_ref()
            .is_none_or(|genre| book.genre.as_ref() == Some(genre))
        && min_rating.is_none_or(|min_rating| book.rating.is_some_and(|rating| rating >= min_rating))
}

/// Compare two optional sort keys.
///
/// Undefined keys are always ordered after defined keys,
/// independent of the direction.
fn cmp_defined_first<T: Ord>(lhs: Option<T>, rhs: Option<T>, order: SortOrder) -> Ordering {
    match (lhs, rhs) {
        (Some(lhs), Some(rhs)) => order.direction.apply(lhs.cmp(&rhs)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn lowercase_key(text: &str) -> Option<String> {
    Some(text.to_lowercase())
}

// Unrated books count as 0
fn rating_key(rating: Option<Rating>) -> Option<u8> {
    Some(rating.map_or(0, Rating::value))
}

#[must_use]
pub fn cmp_entities(lhs: &Entity, rhs: &Entity, order: SortOrder) -> Ordering {
    match order.field {
        SortField::Title => cmp_defined_first(
            lowercase_key(&lhs.body.title),
            lowercase_key(&rhs.body.title),
            order,
        ),
        SortField::Author => cmp_defined_first(
            lowercase_key(&lhs.body.author),
            lowercase_key(&rhs.body.author),
            order,
        ),
        SortField::CreatedAt => cmp_defined_first(
            Some(lhs.hdr.created_at),
            Some(rhs.hdr.created_at),
            order,
        ),
        SortField::Rating => cmp_defined_first(
            rating_key(lhs.body.rating),
            rating_key(rhs.body.rating),
            order,
        ),
    }
}

/// Select and order books according to the search parameters.
///
/// The relative order of books with equal sort keys is preserved.
#[must_use]
pub fn filter_and_sort<'a>(
    entities: impl IntoIterator<Item = &'a Entity>,
    params: &Params,
) -> Vec<&'a Entity> {
    let lowercase_phrase = params.lowercase_phrase();
    let mut selected: Vec<_> = entities
        .into_iter()
        .filter(|entity| {
            lowercase_phrase
                .as_deref()
                .is_none_or(|phrase| matches_phrase(&entity.body, phrase))
        })
        .filter(|entity| matches_filter(&entity.body, &params.filter))
        .collect();
    // Vec::sort_by() is stable
    selected.sort_by(|lhs, rhs| cmp_entities(lhs, rhs, params.ordering));
    selected
}

/// Slice out the current page.
///
/// Pages beyond the end are empty.
#[must_use]
pub fn paginate<'a, T>(items: &'a [T], pagination: &Pagination) -> &'a [T] {
    &items[pagination.range(items.len())]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    pub entities: Vec<Entity>,
    pub page_info: PageInfo,
}

pub fn search<Repo>(repo: &Repo, params: &Params, pagination: &Pagination) -> Result<SearchResults>
where
    Repo: BookRepo + ?Sized,
{
    let timed = Instant::now();
    let all = repo.load_all_book_entities()?;
    let selected = filter_and_sort(&all, params);
    let page_info = pagination.page_info(selected.len());
    let entities: Vec<_> = paginate(&selected, pagination)
        .iter()
        .copied()
        .cloned()
        .collect();
    log::debug!(
        "Search returned {num_entities} of {total_items} books and took {elapsed_ms} ms",
        num_entities = entities.len(),
        total_items = page_info.total_items,
        elapsed_ms = (timed.elapsed().as_micros() / 1000) as f64,
    );
    Ok(SearchResults {
        entities,
        page_info,
    })
}

#[cfg(test)]
mod tests;
