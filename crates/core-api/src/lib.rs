// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{num::NonZeroUsize, ops::Range};

use serde::{Deserialize, Serialize};

pub mod book;
pub mod sorting;

/// 1-based page number.
pub type PageNumber = usize;

pub const FIRST_PAGE: PageNumber = 1;

pub const DEFAULT_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(12).expect("non-zero");

/// Page-based pagination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: PageNumber,
    pub page_size: NonZeroUsize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::first_page(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    #[must_use]
    pub const fn first_page(page_size: NonZeroUsize) -> Self {
        Self {
            page: FIRST_PAGE,
            page_size,
        }
    }

    /// Number of pages needed for `total_items`.
    ///
    /// No items result in no pages.
    #[must_use]
    pub const fn total_pages(&self, total_items: usize) -> usize {
        total_items.div_ceil(self.page_size.get())
    }

    #[must_use]
    pub const fn is_page_in_range(&self, page: PageNumber, total_items: usize) -> bool {
        page >= FIRST_PAGE && page <= self.total_pages(total_items)
    }

    /// The index range of the current page, clamped to `total_items`.
    #[must_use]
    pub fn range(&self, total_items: usize) -> Range<usize> {
        let page_size = self.page_size.get();
        let start = self
            .page
            .saturating_sub(FIRST_PAGE)
            .saturating_mul(page_size)
            .min(total_items);
        let end = start.saturating_add(page_size).min(total_items);
        start..end
    }

    #[must_use]
    pub fn page_info(&self, total_items: usize) -> PageInfo {
        let total_pages = self.total_pages(total_items);
        PageInfo {
            current_page: self.page,
            total_pages,
            total_items,
            items_per_page: self.page_size,
            has_next: self.page < total_pages,
            has_previous: self.page > FIRST_PAGE,
        }
    }
}

/// Summary of a paginated result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub current_page: PageNumber,
    pub total_pages: usize,
    pub total_items: usize,
    pub items_per_page: NonZeroUsize,
    pub has_next: bool,
    pub has_previous: bool,
}
