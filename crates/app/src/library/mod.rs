// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::num::NonZeroUsize;

use bookshelf_backend_embedded::book as backend;
use bookshelf_core::{
    book::{Book, BookId, Entity, Rating, ReadingStatus},
    user::UserId,
};
use bookshelf_core_api::{
    DEFAULT_PAGE_SIZE, FIRST_PAGE, PageInfo, PageNumber, Pagination,
    book::search::{Filter, Params, SortField, SortOrder},
    sorting::SortDirection,
};
use bookshelf_usecases::book::{
    Changes,
    search::{filter_and_sort, paginate},
    stats::{self, StatusCounts},
};
use discro::Subscriber;

use crate::{Environment, LoadingScope, LoadingState, Observable, ObservableRef};

pub mod tasklet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    books: Vec<Entity>,
    params: Params,
    page: PageNumber,
    page_size: NonZeroUsize,
    actor: Option<UserId>,
    is_loading: bool,
    error: Option<String>,
}

impl Default for State {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl State {
    #[must_use]
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            books: Vec::new(),
            params: Default::default(),
            page: FIRST_PAGE,
            page_size,
            actor: None,
            is_loading: false,
            error: None,
        }
    }

    /// All books in insertion order.
    #[must_use]
    pub fn books(&self) -> &[Entity] {
        &self.books
    }

    #[must_use]
    pub const fn params(&self) -> &Params {
        &self.params
    }

    #[must_use]
    pub const fn current_page(&self) -> PageNumber {
        self.page
    }

    #[must_use]
    pub const fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// The signed-in user.
    #[must_use]
    pub const fn actor(&self) -> Option<UserId> {
        self.actor
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub const fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            page_size: self.page_size,
        }
    }

    /// All books matching the current parameters in sort order.
    #[must_use]
    pub fn filtered_books(&self) -> Vec<&Entity> {
        filter_and_sort(&self.books, &self.params)
    }

    /// The current page of [`Self::filtered_books()`].
    #[must_use]
    pub fn paginated_books(&self) -> Vec<&Entity> {
        paginate(&self.filtered_books(), &self.pagination()).to_vec()
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.pagination()
            .total_pages(self.filtered_books().len())
    }

    #[must_use]
    pub fn page_info(&self) -> PageInfo {
        self.pagination().page_info(self.filtered_books().len())
    }

    #[must_use]
    pub fn book_by_id(&self, id: BookId) -> Option<&Entity> {
        self.books.iter().find(|entity| entity.hdr.id == id)
    }

    #[must_use]
    pub fn books_by_status(&self) -> StatusCounts {
        stats::count_by_status(&self.books)
    }

    #[must_use]
    pub fn average_rating(&self) -> f64 {
        stats::average_rating(&self.books)
    }

    #[must_use]
    pub fn genres(&self) -> Vec<String> {
        stats::genres(&self.books)
    }

    fn reset_page(&mut self) {
        self.page = FIRST_PAGE;
    }

    pub fn set_search_phrase(&mut self, phrase: String) -> bool {
        if self.params.phrase == phrase {
            return false;
        }
        self.params.phrase = phrase;
        self.reset_page();
        log::debug!("Search phrase updated: {phrase:?}", phrase = self.params.phrase);
        true
    }

    pub fn set_status_filter(&mut self, status: Option<ReadingStatus>) -> bool {
        if self.params.filter.status == status {
            return false;
        }
        self.params.filter.status = status;
        self.reset_page();
        log::debug!("Status filter updated: {status:?}");
        true
    }

    pub fn set_genre_filter(&mut self, genre: Option<String>) -> bool {
        if self.params.filter.genre == genre {
            return false;
        }
        log::debug!("Genre filter updated: {genre:?}");
        self.params.filter.genre = genre;
        self.reset_page();
        true
    }

    pub fn set_min_rating_filter(&mut self, min_rating: Option<Rating>) -> bool {
        if self.params.filter.min_rating == min_rating {
            return false;
        }
        self.params.filter.min_rating = min_rating;
        self.reset_page();
        log::debug!("Rating filter updated: {min_rating:?}");
        true
    }

    /// Changing the order keeps the current page.
    pub fn set_sort_order(&mut self, field: SortField, direction: SortDirection) -> bool {
        let ordering = SortOrder { field, direction };
        if self.params.ordering == ordering {
            return false;
        }
        self.params.ordering = ordering;
        log::debug!("Sort order updated: {ordering:?}");
        true
    }

    /// Select a page.
    ///
    /// Pages outside of the available range are rejected.
    pub fn set_page(&mut self, page: PageNumber) -> bool {
        if self.page == page {
            return false;
        }
        let total_items = self.filtered_books().len();
        if !self.pagination().is_page_in_range(page, total_items) {
            log::debug!(
                "Page {page} out of range [{FIRST_PAGE}, {total_pages}]",
                total_pages = self.pagination().total_pages(total_items)
            );
            return false;
        }
        self.page = page;
        true
    }

    /// Reset the search phrase and all filters.
    pub fn clear_filters(&mut self) -> bool {
        if self.params.phrase.is_empty()
            && self.params.filter == Filter::default()
            && self.page == FIRST_PAGE
        {
            return false;
        }
        self.params.phrase.clear();
        self.params.filter = Filter::default();
        self.reset_page();
        true
    }

    pub fn clear_error(&mut self) -> bool {
        self.error.take().is_some()
    }

    pub fn set_actor(&mut self, actor: Option<UserId>) -> bool {
        if self.actor == actor {
            return false;
        }
        log::debug!("Actor updated: {actor:?}");
        self.actor = actor;
        true
    }

    fn begin_request(&mut self) -> bool {
        self.error.take().is_some()
    }

    fn request_failed(&mut self, err: &bookshelf_backend_embedded::Error) -> bool {
        log::warn!("Request failed: {err}");
        self.error = Some(err.to_string());
        true
    }

    fn books_fetched(&mut self, books: &[Entity]) -> bool {
        if self.books == books {
            return false;
        }
        self.books = books.to_vec();
        true
    }

    fn book_created(&mut self, entity: Entity) -> bool {
        debug_assert!(self.book_by_id(entity.hdr.id).is_none());
        self.books.push(entity);
        true
    }

    fn book_updated(&mut self, entity: Entity) -> bool {
        let Some(book) = self
            .books
            .iter_mut()
            .find(|book| book.hdr.id == entity.hdr.id)
        else {
            log::warn!("Updated book {id} not found", id = entity.hdr.id);
            self.books.push(entity);
            return true;
        };
        *book = entity;
        true
    }

    fn book_deleted(&mut self, id: BookId) -> bool {
        let len_before = self.books.len();
        self.books.retain(|entity| entity.hdr.id != id);
        self.books.len() < len_before
    }
}

impl LoadingState for State {
    fn is_loading(&self) -> bool {
        self.is_loading
    }

    fn set_loading(&mut self, is_loading: bool) -> bool {
        if self.is_loading == is_loading {
            return false;
        }
        self.is_loading = is_loading;
        true
    }
}

/// Manages the mutable, observable state
#[derive(Debug, Default)]
pub struct ObservableState(Observable<State>);

impl ObservableState {
    #[must_use]
    pub fn new(initial_state: State) -> Self {
        Self(Observable::new(initial_state))
    }

    #[must_use]
    pub fn read(&self) -> ObservableRef<'_, State> {
        self.0.read()
    }

    #[must_use]
    pub fn subscribe_changed(&self) -> Subscriber<State> {
        self.0.subscribe_changed()
    }

    #[allow(clippy::must_use_candidate)]
    pub fn set_search_phrase(&self, phrase: impl Into<String>) -> bool {
        let phrase = phrase.into();
        self.0.modify(|state| state.set_search_phrase(phrase))
    }

    #[allow(clippy::must_use_candidate)]
    pub fn set_status_filter(&self, status: Option<ReadingStatus>) -> bool {
        self.0.modify(|state| state.set_status_filter(status))
    }

    #[allow(clippy::must_use_candidate)]
    pub fn set_genre_filter(&self, genre: Option<String>) -> bool {
        self.0.modify(|state| state.set_genre_filter(genre))
    }

    #[allow(clippy::must_use_candidate)]
    pub fn set_min_rating_filter(&self, min_rating: Option<Rating>) -> bool {
        self.0.modify(|state| state.set_min_rating_filter(min_rating))
    }

    #[allow(clippy::must_use_candidate)]
    pub fn set_sort_order(&self, field: SortField, direction: SortDirection) -> bool {
        self.0.modify(|state| state.set_sort_order(field, direction))
    }

    #[allow(clippy::must_use_candidate)]
    pub fn set_page(&self, page: PageNumber) -> bool {
        self.0.modify(|state| state.set_page(page))
    }

    #[allow(clippy::must_use_candidate)]
    pub fn clear_filters(&self) -> bool {
        self.0.modify(State::clear_filters)
    }

    #[allow(clippy::must_use_candidate)]
    pub fn clear_error(&self) -> bool {
        self.0.modify(State::clear_error)
    }

    #[allow(clippy::must_use_candidate)]
    pub fn set_actor(&self, actor: Option<UserId>) -> bool {
        self.0.modify(|state| state.set_actor(actor))
    }

    fn finish_request<T>(
        &self,
        result: bookshelf_backend_embedded::Result<T>,
        on_success: impl FnOnce(&mut State, &T) -> bool,
    ) -> bookshelf_backend_embedded::Result<T> {
        match result {
            Ok(value) => {
                self.0.modify(|state| on_success(state, &value));
                Ok(value)
            }
            Err(err) => {
                self.0.modify(|state| state.request_failed(&err));
                Err(err)
            }
        }
    }

    /// Replace all books with those from the backend.
    pub async fn fetch_books(&self, env: &Environment) -> bookshelf_backend_embedded::Result<()> {
        let _loading = LoadingScope::enter(&self.0);
        self.0.modify(State::begin_request);
        let result = backend::load_all(env.db_gatekeeper()).await;
        self.finish_request(result, |state, books| state.books_fetched(books))?;
        Ok(())
    }

    /// Add a new book owned by the signed-in user.
    pub async fn create_book(
        &self,
        env: &Environment,
        new_book: Book,
    ) -> bookshelf_backend_embedded::Result<Entity> {
        let _loading = LoadingScope::enter(&self.0);
        self.0.modify(State::begin_request);
        let actor = self.read().actor;
        let result = backend::create(env.db_gatekeeper(), actor, new_book).await;
        self.finish_request(result, |state, entity| state.book_created(entity.clone()))
    }

    pub async fn update_book(
        &self,
        env: &Environment,
        id: BookId,
        changes: Changes,
    ) -> bookshelf_backend_embedded::Result<Entity> {
        let _loading = LoadingScope::enter(&self.0);
        self.0.modify(State::begin_request);
        let actor = self.read().actor;
        let result = backend::update(env.db_gatekeeper(), actor, id, changes).await;
        self.finish_request(result, |state, entity| state.book_updated(entity.clone()))
    }

    /// Returns the deleted book.
    pub async fn delete_book(
        &self,
        env: &Environment,
        id: BookId,
    ) -> bookshelf_backend_embedded::Result<Entity> {
        let _loading = LoadingScope::enter(&self.0);
        self.0.modify(State::begin_request);
        let actor = self.read().actor;
        let result = backend::purge(env.db_gatekeeper(), actor, id).await;
        self.finish_request(result, |state, _| state.book_deleted(id))
    }
}
