//! Pagination primitives for the marketplace view collections.

use serde::{Deserialize, Serialize};

use crate::market::PurchaseRecord;

/// The four independently paginated marketplace views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CollectionKind {
    /// Assets the session user holds a share of.
    Owned,
    /// The user's own active listings.
    Selling,
    /// Listings available for purchase.
    Market,
    /// Completed purchase history.
    History,
}

/// Page window over a locally held item set.
///
/// The full set is replaced wholesale on refresh and the page index resets to
/// the first page, so a mutating action can never leave the user on a stale
/// page. Item order is exactly the order of the most recent fetch; the pager
/// never re-sorts.
#[derive(Debug, Clone)]
pub struct Pager<T> {
    items: Vec<T>,
    page_size: usize,
    /// Zero-based page index.
    page: usize,
}

impl<T> Pager<T> {
    pub fn new(page_size: usize) -> Self {
        Pager {
            items: Vec::new(),
            page_size: page_size.max(1),
            page: 0,
        }
    }

    /// Replaces the full item set and resets to the first page.
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
        self.page = 0;
    }

    /// The current page window. Past the end of the set this is an empty
    /// slice, never an error.
    pub fn page(&self) -> &[T] {
        let start = self.page.saturating_mul(self.page_size);
        if start >= self.items.len() {
            return &[];
        }
        let end = (start + self.page_size).min(self.items.len());
        &self.items[start..end]
    }

    pub fn current_page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.page_size)
    }

    /// Advances one page; a no-op at the last page.
    pub fn next_page(&mut self) {
        if self.page + 1 < self.total_pages() {
            self.page += 1;
        }
    }

    /// Steps back one page; a no-op at the first page.
    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Page state for the purchase-history collection.
///
/// Unlike [`Pager`], the full set is not held locally: the server returns one
/// page at a time together with the total record count, and the page index is
/// one-based to match the external API.
#[derive(Debug, Clone)]
pub struct HistoryPager {
    rows: Vec<PurchaseRecord>,
    page_size: u64,
    /// One-based page number.
    page_num: u64,
    total: u64,
}

impl HistoryPager {
    pub fn new(page_size: u64) -> Self {
        HistoryPager {
            rows: Vec::new(),
            page_size: page_size.max(1),
            page_num: 1,
            total: 0,
        }
    }

    /// Stores a freshly fetched page and the server-reported total count.
    pub fn replace(&mut self, rows: Vec<PurchaseRecord>, total: u64) {
        self.rows = rows;
        self.total = total;
    }

    /// Rows of the currently held page, most recent first (server order).
    pub fn rows(&self) -> &[PurchaseRecord] {
        &self.rows
    }

    pub fn page_num(&self) -> u64 {
        self.page_num
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(self.page_size)
    }

    /// Moves to a one-based page number; out-of-range requests are a no-op.
    /// Returns whether the page changed (the caller refetches when it did).
    pub fn set_page(&mut self, page_num: u64) -> bool {
        if page_num < 1 || page_num > self.total_pages() || page_num == self.page_num {
            return false;
        }
        self.page_num = page_num;
        true
    }
}
