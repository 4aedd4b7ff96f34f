// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::num::NonZeroUsize;

use bookshelf_core::book::{BookId, EntityHeader, ReadingStatus};
use bookshelf_core_api::{book::search::SortOrder, sorting::SortDirection};

use super::*;

fn entity(id: u64, title: &str, author: &str) -> Entity {
    Entity::new(
        EntityHeader::initial(
            BookId::new(id),
            UtcDateTimeMs::from_unix_timestamp_millis(id as i64 * 1_000),
        ),
        Book {
            title: title.into(),
            author: author.into(),
            ..Default::default()
        },
    )
}

fn with_status(mut entity: Entity, status: ReadingStatus) -> Entity {
    entity.body.status = status;
    entity
}

fn with_genre(mut entity: Entity, genre: &str) -> Entity {
    entity.body.genre = Some(genre.into());
    entity
}

fn with_rating(mut entity: Entity, rating: u8) -> Entity {
    entity.body.rating = Some(Rating::new(rating));
    entity
}

fn ids(selected: &[&Entity]) -> Vec<u64> {
    selected.iter().map(|entity| entity.hdr.id.to_inner()).collect()
}

fn ordered_by(field: SortField, direction: SortDirection) -> Params {
    Params {
        ordering: SortOrder { field, direction },
        ..Default::default()
    }
}

fn library() -> Vec<Entity> {
    vec![
        with_rating(with_genre(entity(1, "The Hobbit", "J.R.R. Tolkien"), "Fantasy"), 5),
        with_genre(entity(2, "Dune", "Frank Herbert"), "Science Fiction"),
        with_rating(with_genre(entity(3, "Neuromancer", "William Gibson"), "Science Fiction"), 3),
        with_rating(entity(4, "emma", "Jane Austen"), 4),
    ]
}

#[test]
fn filter_by_status() {
    let books = vec![
        with_status(entity(1, "A", "X"), ReadingStatus::ToRead),
        with_status(entity(2, "B", "Y"), ReadingStatus::Reading),
        with_status(entity(3, "C", "Z"), ReadingStatus::Completed),
    ];
    let params = Params {
        filter: Filter {
            status: Some(ReadingStatus::Reading),
            ..Default::default()
        },
        ..Default::default()
    };
    assert_eq!(vec![2], ids(&filter_and_sort(&books, &params)));
}

#[test]
fn search_title_author_and_genre_ignoring_case() {
    let books = library();
    let search = |phrase: &str| {
        let params = Params {
            phrase: phrase.into(),
            ..ordered_by(SortField::CreatedAt, SortDirection::Ascending)
        };
        ids(&filter_and_sort(&books, &params))
    };
    assert_eq!(vec![1], search("hobbit"));
    assert_eq!(vec![1], search("TOLKIEN"));
    assert_eq!(vec![2, 3], search("science"));
    assert!(search("nothing").is_empty());
    // Blank phrases are ignored
    assert_eq!(vec![1, 2, 3, 4], search("   "));
}

#[test]
fn search_is_idempotent() {
    let books = library();
    let params = Params {
        phrase: "an".into(),
        ..Default::default()
    };
    let once: Vec<Entity> = filter_and_sort(&books, &params)
        .into_iter()
        .cloned()
        .collect();
    let twice = filter_and_sort(&once, &params);
    assert_eq!(ids(&once.iter().collect::<Vec<_>>()), ids(&twice));
}

#[test]
fn genre_filter_is_exact_and_case_sensitive() {
    let books = library();
    let params = |genre: &str| Params {
        filter: Filter {
            genre: Some(genre.into()),
            ..Default::default()
        },
        ..ordered_by(SortField::CreatedAt, SortDirection::Ascending)
    };
    assert_eq!(vec![2, 3], ids(&filter_and_sort(&books, &params("Science Fiction"))));
    assert!(filter_and_sort(&books, &params("science fiction")).is_empty());
    assert!(filter_and_sort(&books, &params("Science")).is_empty());
}

#[test]
fn rating_filter_excludes_unrated() {
    let books = library();
    let params = Params {
        filter: Filter {
            min_rating: Some(Rating::new(4)),
            ..Default::default()
        },
        ..ordered_by(SortField::CreatedAt, SortDirection::Ascending)
    };
    assert_eq!(vec![1, 4], ids(&filter_and_sort(&books, &params)));
}

#[test]
fn filters_are_combined() {
    let books = library();
    let params = Params {
        phrase: "o".into(),
        filter: Filter {
            genre: Some("Science Fiction".into()),
            min_rating: Some(Rating::new(1)),
            ..Default::default()
        },
        ..Default::default()
    };
    assert_eq!(vec![3], ids(&filter_and_sort(&books, &params)));
}

#[test]
fn default_order_is_newest_first() {
    let books = library();
    assert_eq!(
        vec![4, 3, 2, 1],
        ids(&filter_and_sort(&books, &Params::default()))
    );
}

#[test]
fn sort_by_title_ignoring_case() {
    let books = library();
    assert_eq!(
        vec![2, 4, 3, 1],
        ids(&filter_and_sort(
            &books,
            &ordered_by(SortField::Title, SortDirection::Ascending)
        ))
    );
    assert_eq!(
        vec![1, 3, 4, 2],
        ids(&filter_and_sort(
            &books,
            &ordered_by(SortField::Title, SortDirection::Descending)
        ))
    );
}

#[test]
fn sort_by_author() {
    let books = library();
    assert_eq!(
        vec![2, 1, 4, 3],
        ids(&filter_and_sort(
            &books,
            &ordered_by(SortField::Author, SortDirection::Ascending)
        ))
    );
}

#[test]
fn sort_by_rating_treats_unrated_as_zero() {
    let books = library();
    assert_eq!(
        vec![2, 3, 4, 1],
        ids(&filter_and_sort(
            &books,
            &ordered_by(SortField::Rating, SortDirection::Ascending)
        ))
    );
    assert_eq!(
        vec![1, 4, 3, 2],
        ids(&filter_and_sort(
            &books,
            &ordered_by(SortField::Rating, SortDirection::Descending)
        ))
    );
}

#[test]
fn sorting_is_stable() {
    let books = vec![
        with_rating(entity(1, "A", "X"), 3),
        with_rating(entity(2, "B", "X"), 3),
        with_rating(entity(3, "C", "X"), 3),
    ];
    assert_eq!(
        vec![1, 2, 3],
        ids(&filter_and_sort(
            &books,
            &ordered_by(SortField::Rating, SortDirection::Descending)
        ))
    );
}

#[test]
fn undefined_keys_sort_last_in_both_directions() {
    let order = |direction| SortOrder {
        field: SortField::Title,
        direction,
    };
    for direction in [SortDirection::Ascending, SortDirection::Descending] {
        assert_eq!(
            Ordering::Less,
            cmp_defined_first(Some(1), None, order(direction))
        );
        assert_eq!(
            Ordering::Greater,
            cmp_defined_first(None, Some(1), order(direction))
        );
    }
}

#[test]
fn pages_concatenate_to_full_sequence() {
    let books: Vec<_> = (1..=25)
        .map(|id| entity(id, &format!("Book {id}"), "Author"))
        .collect();
    let selected = filter_and_sort(&books, &Params::default());
    let page_size = NonZeroUsize::new(12).unwrap();
    let total_pages = Pagination::first_page(page_size).total_pages(selected.len());
    assert_eq!(3, total_pages);
    let concatenated: Vec<_> = (1..=total_pages)
        .flat_map(|page| {
            paginate(&selected, &Pagination { page, page_size })
                .iter()
                .copied()
        })
        .collect();
    assert_eq!(ids(&selected), ids(&concatenated));
    assert_eq!(
        1,
        paginate(&selected, &Pagination { page: 3, page_size }).len()
    );
}

#[test]
fn search_repository() {
    use bookshelf_repo::book::EntityRepo as _;
    use bookshelf_storage_inmemory::Database;

    let mut db = Database::default();
    for entity in library() {
        db.insert_book_entity(&entity).unwrap();
    }
    let results = search(
        &db,
        &Params {
            phrase: "science".into(),
            ..Default::default()
        },
        &Pagination::first_page(NonZeroUsize::new(1).unwrap()),
    )
    .unwrap();
    assert_eq!(1, results.entities.len());
    assert_eq!(BookId::new(3), results.entities[0].hdr.id);
    assert_eq!(2, results.page_info.total_items);
    assert_eq!(2, results.page_info.total_pages);
    assert!(results.page_info.has_next);
}
